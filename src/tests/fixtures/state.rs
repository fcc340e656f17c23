use std::sync::Arc;

use crate::modules::fleet::adapters::outbound::fleet_store_in_memory::InMemoryFleetStore;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    AppState::in_memory()
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryFleetStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store))
}
