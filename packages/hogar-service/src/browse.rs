use std::sync::Arc;

use hogar_storage::models::{Listing, Location};

use crate::{
	HogarService,
	locations::{SearchLocationsRequest, SearchLocationsResponse},
	pagination::Pagination,
	search::{ListingFilters, SearchListingsRequest, SortDirection, SortKey},
};

/// The view a browser exposes to the UI after each resolved query.
#[derive(Clone, Debug)]
pub struct BrowseSnapshot<T> {
	pub items: Vec<T>,
	pub pagination: Pagination,
	pub loading: bool,
	pub error: Option<String>,
}
impl<T> BrowseSnapshot<T> {
	fn initial(limit: u32) -> Self {
		Self { items: Vec::new(), pagination: Pagination::empty(limit), loading: true, error: None }
	}

	fn cleared(limit: u32) -> Self {
		Self { items: Vec::new(), pagination: Pagination::empty(limit), loading: false, error: None }
	}
}

/// Client-side adapter over the public listing search. Owns the current
/// filter/sort/page state and the last resolved snapshot.
///
/// Results carry no request identity: every resolved call overwrites the
/// snapshot wholesale, so when refreshes overlap through a shared handle the
/// last one to resolve wins, even if it was issued first.
pub struct ListingBrowser {
	service: Arc<HogarService>,
	filters: ListingFilters,
	sort_key: Option<SortKey>,
	direction: Option<SortDirection>,
	page: u32,
	limit: u32,
	snapshot: BrowseSnapshot<Listing>,
}

impl ListingBrowser {
	pub fn new(service: Arc<HogarService>) -> Self {
		let limit = service.cfg.search.listing_page_size;
		let sort_key = SortKey::parse(&service.cfg.search.default_sort);
		let direction = SortDirection::parse(&service.cfg.search.default_direction);

		Self {
			service,
			filters: ListingFilters::default(),
			sort_key,
			direction,
			page: 1,
			limit,
			snapshot: BrowseSnapshot::initial(limit),
		}
	}

	pub fn filters(&self) -> &ListingFilters {
		&self.filters
	}

	pub fn page(&self) -> u32 {
		self.page
	}

	pub fn snapshot(&self) -> &BrowseSnapshot<Listing> {
		&self.snapshot
	}

	/// New filter criteria invalidate the old page position.
	pub fn set_filters(&mut self, filters: ListingFilters) {
		self.filters = filters;
		self.page = 1;
	}

	/// Changing page keeps the filters untouched.
	pub fn set_page(&mut self, page: u32) {
		self.page = page;
	}

	pub fn set_sort(&mut self, sort_key: Option<SortKey>, direction: Option<SortDirection>) {
		self.sort_key = sort_key;
		self.direction = direction;
		self.page = 1;
	}

	/// Re-runs the query with the current parameters and replaces the stored
	/// snapshot. On failure the item list is cleared and the message kept.
	pub async fn refresh(&mut self) {
		self.snapshot.loading = true;
		self.snapshot.error = None;

		let req = SearchListingsRequest {
			filters: self.filters.clone(),
			sort_key: self.sort_key,
			direction: self.direction,
			page: Some(self.page),
			limit: Some(self.limit),
		};

		match self.service.search_listings(req).await {
			Ok(response) =>
				self.snapshot = BrowseSnapshot {
					items: response.items,
					pagination: response.pagination,
					loading: false,
					error: None,
				},
			Err(err) => {
				let mut snapshot = BrowseSnapshot::cleared(self.limit);

				snapshot.error = Some(err.to_string());
				self.snapshot = snapshot;
			},
		}
	}
}

/// Client-side adapter over location search, with an explicit query per call
/// and a reset to the empty view.
pub struct LocationBrowser {
	service: Arc<HogarService>,
	search_query: Option<String>,
	snapshot: BrowseSnapshot<Location>,
}

impl LocationBrowser {
	pub fn new(service: Arc<HogarService>) -> Self {
		let limit = service.cfg.search.default_page_size;

		Self { service, search_query: None, snapshot: BrowseSnapshot::cleared(limit) }
	}

	pub fn search_query(&self) -> Option<&str> {
		self.search_query.as_deref()
	}

	pub fn snapshot(&self) -> &BrowseSnapshot<Location> {
		&self.snapshot
	}

	pub async fn search(&mut self, req: SearchLocationsRequest) {
		self.snapshot.loading = true;
		self.snapshot.error = None;

		match self.service.search_locations(req).await {
			Ok(SearchLocationsResponse { items, pagination, search_query }) => {
				self.snapshot =
					BrowseSnapshot { items, pagination, loading: false, error: None };
				self.search_query = search_query;
			},
			Err(err) => {
				let mut snapshot =
					BrowseSnapshot::cleared(self.service.cfg.search.default_page_size);

				snapshot.error = Some(err.to_string());
				self.snapshot = snapshot;
			},
		}
	}

	pub fn clear(&mut self) {
		self.snapshot = BrowseSnapshot::cleared(self.service.cfg.search.default_page_size);
		self.search_query = None;
	}
}
