use crate::store::HabitStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<HabitStore>>,
}

impl AppState {
    pub fn new(store: HabitStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
