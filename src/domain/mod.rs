pub mod query;
pub mod staff;
