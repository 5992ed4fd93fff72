use time::{
	Date,
	macros::{date, datetime},
};

use hogar_config::{Config, Latency, ListingRules, Search, Service};
use hogar_storage::{
	models::{Category, Listing, Location, PublicationStatus},
	store::MemoryStore,
};

/// The day the seeded catalog is built around: exactly 11 of the 15 seeded
/// listings are publicly eligible on this date.
pub fn fixture_today() -> Date {
	date!(2024 - 06 - 22)
}

pub fn seeded_store() -> MemoryStore {
	MemoryStore::seeded()
}

/// A config with simulated latency disabled, so tests never sleep.
pub fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		latency: Latency { list_ms: 0, search_ms: 0, mutate_ms: 0 },
		search: Search {
			listing_page_size: 12,
			default_page_size: 10,
			max_page_size: 100,
			default_sort: "date".to_string(),
			default_direction: "desc".to_string(),
		},
		listing: ListingRules {
			publication_window_days: 30,
			min_price: 100_000,
			max_price: 50_000_000_000,
			max_rooms: 20,
			max_baths: 15,
			max_images: 10,
		},
	}
}

/// A publicly eligible listing on [`fixture_today`], ready to be reshaped by
/// individual tests through its public fields.
pub fn listing(id: &str) -> Listing {
	let timestamp = datetime!(2024-06-18 08:00:00 UTC);

	Listing {
		id: id.to_string(),
		name: format!("Listing {id}"),
		description: "A listing used as a test fixture.".to_string(),
		category: category("category-1", "House"),
		rooms: 3,
		baths: 2,
		price: 500_000_000,
		location: location("location-1", "Bogotá", "Cundinamarca"),
		active_from: date!(2024 - 06 - 25),
		status: PublicationStatus::Published,
		published_at: timestamp,
		seller_id: "seller-1".to_string(),
		area: Some(120),
		image_urls: Vec::new(),
		created_at: timestamp,
		updated_at: timestamp,
	}
}

pub fn category(id: &str, name: &str) -> Category {
	let timestamp = datetime!(2024-01-01 00:00:00 UTC);

	Category {
		id: id.to_string(),
		name: name.to_string(),
		description: format!("{name} fixtures"),
		created_at: timestamp,
		updated_at: timestamp,
	}
}

pub fn location(id: &str, city: &str, department: &str) -> Location {
	let timestamp = datetime!(2024-01-15 10:00:00 UTC);

	Location {
		id: id.to_string(),
		city: city.to_string(),
		department: department.to_string(),
		city_description: format!("{city} test fixture"),
		department_description: format!("{department} test fixture"),
		created_at: timestamp,
		updated_at: timestamp,
	}
}
