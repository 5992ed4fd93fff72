use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use hogar_domain::{schemas, schemas::LocationInput, text};
use hogar_storage::models::{Location, UserRole};

use crate::{
	HogarService, ServiceError, ServiceResult, next_id,
	pagination::{self, Pagination},
	search::SortDirection,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSortKey {
	City,
	Department,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchLocationsRequest {
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default)]
	pub order_by: Option<LocationSortKey>,
	#[serde(default)]
	pub direction: Option<SortDirection>,
	#[serde(default)]
	pub page: Option<u32>,
	#[serde(default)]
	pub limit: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchLocationsResponse {
	pub items: Vec<Location>,
	pub pagination: Pagination,
	#[serde(default, rename = "searchQuery", skip_serializing_if = "Option::is_none")]
	pub search_query: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateLocationRequest {
	pub actor_id: String,
	pub city: String,
	pub department: String,
	pub city_description: String,
	pub department_description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateLocationRequest {
	pub actor_id: String,
	pub location_id: String,
	pub city: String,
	pub department: String,
	pub city_description: String,
	pub department_description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteLocationRequest {
	pub actor_id: String,
	pub location_id: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListLocationsRequest {
	#[serde(default)]
	pub page: Option<u32>,
	#[serde(default)]
	pub limit: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListLocationsResponse {
	pub items: Vec<Location>,
	pub pagination: Pagination,
}

impl HogarService {
	/// Location search: trimmed query, case- and accent-insensitive substring
	/// over city OR department, always sorted (city ascending by default).
	/// The trimmed query is echoed back; an empty query matches everything
	/// and echoes nothing.
	pub async fn search_locations(
		&self,
		req: SearchLocationsRequest,
	) -> ServiceResult<SearchLocationsResponse> {
		self.simulate_latency(self.cfg.latency.search_ms).await;

		let page = req.page.unwrap_or(1);
		let limit = req.limit.unwrap_or(self.cfg.search.default_page_size);

		pagination::validate_window(page, limit, self.cfg.search.max_page_size)?;

		let query = req.query.unwrap_or_default();
		let trimmed = query.trim();
		let mut matched: Vec<Location> = self
			.store
			.locations()
			.into_iter()
			.filter(|location| {
				trimmed.is_empty()
					|| text::contains_fold(&location.city, trimmed)
					|| text::contains_fold(&location.department, trimmed)
			})
			.collect();
		let key = req.order_by.unwrap_or(LocationSortKey::City);
		let direction = req.direction.unwrap_or(SortDirection::Asc);

		matched.sort_by(|a, b| compare(key, direction, a, b));

		let (items, pagination) = pagination::paginate(matched, page, limit);

		Ok(SearchLocationsResponse {
			items,
			pagination,
			search_query: (!trimmed.is_empty()).then(|| trimmed.to_string()),
		})
	}

	pub async fn list_locations(
		&self,
		req: ListLocationsRequest,
	) -> ServiceResult<ListLocationsResponse> {
		self.simulate_latency(self.cfg.latency.list_ms).await;

		let page = req.page.unwrap_or(1);
		let limit = req.limit.unwrap_or(self.cfg.search.default_page_size);

		pagination::validate_window(page, limit, self.cfg.search.max_page_size)?;

		let (items, pagination) = pagination::paginate(self.store.locations(), page, limit);

		Ok(ListLocationsResponse { items, pagination })
	}

	pub async fn get_location(&self, id: &str) -> ServiceResult<Location> {
		self.simulate_latency(self.cfg.latency.list_ms).await;

		self.store.find_location(id).ok_or_else(|| ServiceError::NotFound {
			message: "Location not found.".to_string(),
		})
	}

	pub async fn create_location(&self, req: CreateLocationRequest) -> ServiceResult<Location> {
		self.simulate_latency(self.cfg.latency.mutate_ms).await;
		self.require_role(&req.actor_id, UserRole::Admin)?;

		let input = LocationInput {
			city: req.city,
			department: req.department,
			city_description: req.city_description,
			department_description: req.department_description,
		};

		schemas::location_schema().validate(&input)?;

		let now = OffsetDateTime::now_utc();
		let location = Location {
			id: next_id("location"),
			city: input.city.trim().to_string(),
			department: input.department.trim().to_string(),
			city_description: input.city_description.trim().to_string(),
			department_description: input.department_description.trim().to_string(),
			created_at: now,
			updated_at: now,
		};

		self.store.insert_location(location.clone())?;

		tracing::info!(location_id = %location.id, "Location created.");

		Ok(location)
	}

	pub async fn update_location(&self, req: UpdateLocationRequest) -> ServiceResult<Location> {
		self.simulate_latency(self.cfg.latency.mutate_ms).await;
		self.require_role(&req.actor_id, UserRole::Admin)?;

		let input = LocationInput {
			city: req.city,
			department: req.department,
			city_description: req.city_description,
			department_description: req.department_description,
		};

		schemas::location_schema().validate(&input)?;

		let existing =
			self.store.find_location(&req.location_id).ok_or_else(|| ServiceError::NotFound {
				message: "Location not found.".to_string(),
			})?;
		let updated = Location {
			id: existing.id,
			city: input.city.trim().to_string(),
			department: input.department.trim().to_string(),
			city_description: input.city_description.trim().to_string(),
			department_description: input.department_description.trim().to_string(),
			created_at: existing.created_at,
			updated_at: OffsetDateTime::now_utc(),
		};

		Ok(self.store.update_location(updated)?)
	}

	pub async fn delete_location(&self, req: DeleteLocationRequest) -> ServiceResult<()> {
		self.simulate_latency(self.cfg.latency.mutate_ms).await;
		self.require_role(&req.actor_id, UserRole::Admin)?;
		self.store.remove_location(&req.location_id)?;

		tracing::info!(location_id = %req.location_id, "Location deleted.");

		Ok(())
	}
}

fn compare(key: LocationSortKey, direction: SortDirection, a: &Location, b: &Location) -> Ordering {
	let ordering = match key {
		LocationSortKey::City => text::cmp_fold(&a.city, &b.city),
		LocationSortKey::Department => text::cmp_fold(&a.department, &b.department),
	};

	direction.apply(ordering)
}
