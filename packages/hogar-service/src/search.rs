pub mod filter;
pub mod order;

use serde::{Deserialize, Serialize};
use time::Date;

use hogar_storage::models::Listing;

use crate::{
	HogarService, ServiceResult,
	pagination::{self, Pagination},
};

pub use filter::ListingFilters;
pub use order::{SortDirection, SortKey};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchListingsRequest {
	#[serde(default)]
	pub filters: ListingFilters,
	#[serde(default)]
	pub sort_key: Option<SortKey>,
	#[serde(default)]
	pub direction: Option<SortDirection>,
	#[serde(default)]
	pub page: Option<u32>,
	#[serde(default)]
	pub limit: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchListingsResponse {
	pub items: Vec<Listing>,
	pub pagination: Pagination,
}

impl HogarService {
	/// Public listing search: the eligibility gate and the active predicates
	/// run against a snapshot of the full collection, then the window is cut.
	pub async fn search_listings(
		&self,
		req: SearchListingsRequest,
	) -> ServiceResult<SearchListingsResponse> {
		self.simulate_latency(self.cfg.latency.search_ms).await;

		let page = req.page.unwrap_or(1);
		let limit = req.limit.unwrap_or(self.cfg.search.listing_page_size);

		pagination::validate_window(page, limit, self.cfg.search.max_page_size)?;

		let direction = req.direction.unwrap_or(SortDirection::Desc);

		Ok(run_query(
			self.store.listings(),
			&req.filters,
			req.sort_key,
			direction,
			page,
			limit,
			self.today(),
		))
	}
}

/// The fixed-order pipeline: eligibility gate, predicates, sort, count, slice.
/// Operates on an owned snapshot; the backing collection is never touched.
pub fn run_query(
	records: Vec<Listing>,
	filters: &ListingFilters,
	sort_key: Option<SortKey>,
	direction: SortDirection,
	page: u32,
	limit: u32,
	today: Date,
) -> SearchListingsResponse {
	let filters = filters.normalized();
	let mut matched: Vec<Listing> = records
		.into_iter()
		.filter(|listing| filter::publicly_eligible(listing, today) && filters.matches(listing))
		.collect();

	if let Some(key) = sort_key {
		// sort_by is stable, so equal records keep their prior relative order.
		matched.sort_by(|a, b| order::compare(key, direction, a, b));
	}

	let (items, pagination) = pagination::paginate(matched, page, limit);

	SearchListingsResponse { items, pagination }
}
