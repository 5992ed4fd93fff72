use std::sync::Arc;

use hogar_service::HogarService;
use hogar_storage::store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<HogarService>,
}
impl AppState {
	/// Boots the in-process record source with the development fixture set;
	/// nothing survives a restart.
	pub fn new(config: hogar_config::Config) -> Self {
		let store = Arc::new(MemoryStore::seeded());
		let service = HogarService::new(config, store);

		Self { service: Arc::new(service) }
	}
}
