use serde::{Deserialize, Serialize};
use time::Date;

use hogar_domain::text;
use hogar_storage::models::{Listing, PublicationStatus};

/// The active filter set. Absent fields impose no constraint; a present
/// numeric zero still applies — presence decides, the value is compared
/// as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilters {
	#[serde(default)]
	pub category_id: Option<String>,
	#[serde(default)]
	pub location: Option<String>,
	#[serde(default)]
	pub min_rooms: Option<u32>,
	#[serde(default)]
	pub min_baths: Option<u32>,
	#[serde(default)]
	pub min_price: Option<i64>,
	#[serde(default)]
	pub max_price: Option<i64>,
}

impl ListingFilters {
	/// Blank text filters are treated as absent; numeric filters are kept
	/// verbatim, including zero.
	pub fn normalized(&self) -> Self {
		let mut filters = self.clone();

		filters.category_id = filters.category_id.filter(|id| !id.trim().is_empty());
		filters.location = filters.location.filter(|text| !text.trim().is_empty());

		filters
	}

	/// All active predicates must hold (logical AND).
	pub fn matches(&self, listing: &Listing) -> bool {
		if let Some(category_id) = &self.category_id
			&& listing.category.id != *category_id
		{
			return false;
		}
		if let Some(location) = &self.location
			&& !text::contains_fold(&listing.location.city, location)
			&& !text::contains_fold(&listing.location.department, location)
		{
			return false;
		}
		if let Some(min_rooms) = self.min_rooms
			&& listing.rooms < min_rooms
		{
			return false;
		}
		if let Some(min_baths) = self.min_baths
			&& listing.baths < min_baths
		{
			return false;
		}
		if let Some(min_price) = self.min_price
			&& listing.price < min_price
		{
			return false;
		}
		if let Some(max_price) = self.max_price
			&& listing.price > max_price
		{
			return false;
		}

		true
	}
}

/// The mandatory pre-filter gate: public search sees a listing only while it
/// is published and its active-from date has not yet passed.
pub fn publicly_eligible(listing: &Listing, today: Date) -> bool {
	listing.status == PublicationStatus::Published && listing.active_from >= today
}
