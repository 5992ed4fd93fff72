use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use hogar_domain::text;
use hogar_storage::models::Listing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
	Price,
	Date,
	Location,
}
impl SortKey {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"price" => Some(Self::Price),
			"date" => Some(Self::Date),
			"location" => Some(Self::Location),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	Asc,
	Desc,
}
impl SortDirection {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"asc" => Some(Self::Asc),
			"desc" => Some(Self::Desc),
			_ => None,
		}
	}

	pub fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Self::Asc => ordering,
			Self::Desc => ordering.reverse(),
		}
	}
}

/// The two-record ordering for a sort key. Price and date compare
/// numerically (date on the publication timestamp, not active-from); location
/// compares city names case- and accent-insensitively.
pub fn compare(key: SortKey, direction: SortDirection, a: &Listing, b: &Listing) -> Ordering {
	let ordering = match key {
		SortKey::Price => a.price.cmp(&b.price),
		SortKey::Date => a.published_at.cmp(&b.published_at),
		SortKey::Location => text::cmp_fold(&a.location.city, &b.location.city),
	};

	direction.apply(ordering)
}
