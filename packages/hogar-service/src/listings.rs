use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use hogar_domain::schemas::{self, ListingInput};
use hogar_storage::models::{Listing, PublicationStatus, UserRole};

use crate::{
	HogarService, ServiceError, ServiceResult, next_id,
	pagination::{self, Pagination},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateListingRequest {
	pub actor_id: String,
	pub name: String,
	pub description: String,
	pub category_id: String,
	pub location_id: String,
	pub rooms: u32,
	pub baths: u32,
	pub price: i64,
	#[serde(default)]
	pub area: Option<u32>,
	#[serde(default)]
	pub image_urls: Vec<String>,
	#[serde(with = "hogar_storage::time_serde::date")]
	pub active_from: Date,
	pub status: PublicationStatus,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListListingsRequest {
	#[serde(default)]
	pub page: Option<u32>,
	#[serde(default)]
	pub limit: Option<u32>,
	#[serde(default)]
	pub seller_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListListingsResponse {
	pub items: Vec<Listing>,
	pub pagination: Pagination,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteListingRequest {
	pub actor_id: String,
	pub listing_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateListingStatusRequest {
	pub actor_id: String,
	pub listing_id: String,
	pub status: PublicationStatus,
}

impl HogarService {
	pub async fn create_listing(&self, req: CreateListingRequest) -> ServiceResult<Listing> {
		self.simulate_latency(self.cfg.latency.mutate_ms).await;

		let seller = self.require_role(&req.actor_id, UserRole::Seller)?;
		let input = ListingInput {
			name: req.name,
			description: req.description,
			category_id: req.category_id,
			location_id: req.location_id,
			rooms: req.rooms,
			baths: req.baths,
			price: req.price,
			area: req.area,
			image_urls: req.image_urls,
			active_from: req.active_from,
		};

		schemas::listing_schema(&self.cfg.listing, self.today()).validate(&input)?;

		let category =
			self.store.find_category(input.category_id.trim()).ok_or_else(|| {
				ServiceError::NotFound { message: "Category not found.".to_string() }
			})?;
		let location =
			self.store.find_location(input.location_id.trim()).ok_or_else(|| {
				ServiceError::NotFound { message: "Location not found.".to_string() }
			})?;
		let now = OffsetDateTime::now_utc();
		let listing = Listing {
			id: next_id("listing"),
			name: input.name.trim().to_string(),
			description: input.description.trim().to_string(),
			category,
			rooms: input.rooms,
			baths: input.baths,
			price: input.price,
			location,
			active_from: input.active_from,
			status: req.status,
			published_at: now,
			seller_id: seller.id,
			area: input.area,
			image_urls: input.image_urls,
			created_at: now,
			updated_at: now,
		};

		self.store.insert_listing(listing.clone())?;

		tracing::info!(listing_id = %listing.id, seller_id = %listing.seller_id, "Listing created.");

		Ok(listing)
	}

	/// Back-office listing view: no eligibility gate, optional seller filter.
	pub async fn list_listings(
		&self,
		req: ListListingsRequest,
	) -> ServiceResult<ListListingsResponse> {
		self.simulate_latency(self.cfg.latency.list_ms).await;

		let page = req.page.unwrap_or(1);
		let limit = req.limit.unwrap_or(self.cfg.search.default_page_size);

		pagination::validate_window(page, limit, self.cfg.search.max_page_size)?;

		let seller_id = req.seller_id.filter(|id| !id.trim().is_empty());
		let listings: Vec<Listing> = self
			.store
			.listings()
			.into_iter()
			.filter(|listing| {
				seller_id.as_deref().is_none_or(|seller_id| listing.seller_id == seller_id)
			})
			.collect();
		let (items, pagination) = pagination::paginate(listings, page, limit);

		Ok(ListListingsResponse { items, pagination })
	}

	pub async fn delete_listing(&self, req: DeleteListingRequest) -> ServiceResult<()> {
		self.simulate_latency(self.cfg.latency.mutate_ms).await;

		let seller = self.require_role(&req.actor_id, UserRole::Seller)?;
		let removed = self.store.remove_listing_owned(&req.listing_id, &seller.id)?;

		tracing::info!(listing_id = %removed.id, seller_id = %seller.id, "Listing deleted.");

		Ok(())
	}

	pub async fn update_listing_status(
		&self,
		req: UpdateListingStatusRequest,
	) -> ServiceResult<Listing> {
		self.simulate_latency(self.cfg.latency.mutate_ms).await;

		let seller = self.require_role(&req.actor_id, UserRole::Seller)?;
		let now = OffsetDateTime::now_utc();

		Ok(self.store.set_listing_status(&req.listing_id, &seller.id, req.status, now)?)
	}
}
