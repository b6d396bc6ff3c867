pub mod export;
pub mod staff;
