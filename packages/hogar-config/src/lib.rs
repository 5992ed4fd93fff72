mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Latency, ListingRules, Search, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.search.listing_page_size == 0 {
		return Err(Error::Validation {
			message: "search.listing_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.search.default_page_size == 0 {
		return Err(Error::Validation {
			message: "search.default_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.search.max_page_size < cfg.search.listing_page_size
		|| cfg.search.max_page_size < cfg.search.default_page_size
	{
		return Err(Error::Validation {
			message: "search.max_page_size must be at least as large as both default page sizes."
				.to_string(),
		});
	}
	if !matches!(cfg.search.default_sort.as_str(), "price" | "date" | "location") {
		return Err(Error::Validation {
			message: "search.default_sort must be one of price, date, or location.".to_string(),
		});
	}
	if !matches!(cfg.search.default_direction.as_str(), "asc" | "desc") {
		return Err(Error::Validation {
			message: "search.default_direction must be one of asc or desc.".to_string(),
		});
	}
	if cfg.listing.publication_window_days <= 0 {
		return Err(Error::Validation {
			message: "listing.publication_window_days must be greater than zero.".to_string(),
		});
	}
	if cfg.listing.min_price <= 0 {
		return Err(Error::Validation {
			message: "listing.min_price must be greater than zero.".to_string(),
		});
	}
	if cfg.listing.min_price >= cfg.listing.max_price {
		return Err(Error::Validation {
			message: "listing.min_price must be less than listing.max_price.".to_string(),
		});
	}
	if cfg.listing.max_rooms == 0 {
		return Err(Error::Validation {
			message: "listing.max_rooms must be greater than zero.".to_string(),
		});
	}
	if cfg.listing.max_baths == 0 {
		return Err(Error::Validation {
			message: "listing.max_baths must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.search.default_sort = cfg.search.default_sort.trim().to_ascii_lowercase();
	cfg.search.default_direction = cfg.search.default_direction.trim().to_ascii_lowercase();
}
