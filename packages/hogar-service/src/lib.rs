pub mod browse;
pub mod categories;
pub mod listings;
pub mod locations;
pub mod pagination;
pub mod search;
pub mod sellers;

use std::{sync::Arc, time::Duration};

use time::{Date, OffsetDateTime};

use hogar_config::Config;
use hogar_domain::forms::FieldError;
use hogar_storage::{
	models::{User, UserRole},
	store::MemoryStore,
};

pub use browse::{BrowseSnapshot, ListingBrowser, LocationBrowser};
pub use categories::{CreateCategoryRequest, DeleteCategoryRequest};
pub use listings::{
	CreateListingRequest, DeleteListingRequest, ListListingsRequest, ListListingsResponse,
	UpdateListingStatusRequest,
};
pub use locations::{
	CreateLocationRequest, DeleteLocationRequest, ListLocationsRequest, ListLocationsResponse,
	LocationSortKey, SearchLocationsRequest, SearchLocationsResponse, UpdateLocationRequest,
};
pub use pagination::Pagination;
pub use search::{
	ListingFilters, SearchListingsRequest, SearchListingsResponse, SortDirection, SortKey,
};
pub use sellers::{CreateSellerRequest, DeleteUserRequest, ListSellersRequest, ListSellersResponse};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String },
	Validation { errors: Vec<FieldError> },
	NotFound { message: String },
	Conflict { message: String },
	Forbidden { message: String },
}

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message } => write!(f, "Invalid request: {message}"),
			Self::Validation { errors } => {
				write!(f, "Validation error:")?;

				for error in errors {
					write!(f, " {}: {}", error.field, error.message)?;
				}

				Ok(())
			},
			Self::NotFound { message } => write!(f, "{message}"),
			Self::Conflict { message } => write!(f, "{message}"),
			Self::Forbidden { message } => write!(f, "{message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<hogar_storage::Error> for ServiceError {
	fn from(err: hogar_storage::Error) -> Self {
		match err {
			hogar_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			hogar_storage::Error::NotFound(message) => Self::NotFound { message },
			hogar_storage::Error::Conflict(message) => Self::Conflict { message },
		}
	}
}

impl From<Vec<FieldError>> for ServiceError {
	fn from(errors: Vec<FieldError>) -> Self {
		Self::Validation { errors }
	}
}

pub struct HogarService {
	pub cfg: Config,
	pub store: Arc<MemoryStore>,
	fixed_today: Option<Date>,
}

impl HogarService {
	pub fn new(cfg: Config, store: Arc<MemoryStore>) -> Self {
		Self { cfg, store, fixed_today: None }
	}

	/// Pins "today" for deterministic tests; production uses the wall clock.
	pub fn with_today(mut self, today: Date) -> Self {
		self.fixed_today = Some(today);

		self
	}

	pub(crate) fn today(&self) -> Date {
		self.fixed_today.unwrap_or_else(|| OffsetDateTime::now_utc().date())
	}

	pub(crate) async fn simulate_latency(&self, ms: u64) {
		if ms > 0 {
			tokio::time::sleep(Duration::from_millis(ms)).await;
		}
	}

	pub(crate) fn require_role(&self, actor_id: &str, role: UserRole) -> ServiceResult<User> {
		let actor_id = actor_id.trim();

		if actor_id.is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "actor_id is required.".to_string(),
			});
		}

		let user = self.store.find_user(actor_id).ok_or_else(|| ServiceError::NotFound {
			message: "Acting user not found.".to_string(),
		})?;

		if user.role != role {
			return Err(ServiceError::Forbidden {
				message: "The acting user does not have the required role.".to_string(),
			});
		}

		Ok(user)
	}
}

pub(crate) fn next_id(prefix: &str) -> String {
	format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}
