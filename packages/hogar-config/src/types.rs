use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub latency: Latency,
	pub search: Search,
	pub listing: ListingRules,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

/// Simulated network delays, in milliseconds, applied per operation class.
/// Zero disables the delay; tests run with everything at zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Latency {
	pub list_ms: u64,
	pub search_ms: u64,
	pub mutate_ms: u64,
}
impl Default for Latency {
	fn default() -> Self {
		Self { list_ms: 0, search_ms: 0, mutate_ms: 0 }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Search {
	pub listing_page_size: u32,
	pub default_page_size: u32,
	pub max_page_size: u32,
	pub default_sort: String,
	pub default_direction: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingRules {
	pub publication_window_days: i64,
	pub min_price: i64,
	pub max_price: i64,
	pub max_rooms: u32,
	pub max_baths: u32,
	pub max_images: u32,
}
