use std::sync::Arc;

use crate::domain::staff::StaffStore;

pub struct AppState {
    pub staff_store: Arc<dyn StaffStore>,
}
