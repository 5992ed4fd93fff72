use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use hogar_domain::schemas::{self, SellerInput};
use hogar_storage::models::{User, UserRole};

use crate::{
	HogarService, ServiceError, ServiceResult, next_id,
	pagination::{self, Pagination},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateSellerRequest {
	pub actor_id: String,
	pub first_name: String,
	pub last_name: String,
	pub document_id: String,
	pub phone: String,
	#[serde(with = "hogar_storage::time_serde::date")]
	pub birth_date: Date,
	pub email: String,
	pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListSellersRequest {
	#[serde(default)]
	pub page: Option<u32>,
	#[serde(default)]
	pub limit: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListSellersResponse {
	pub items: Vec<User>,
	pub pagination: Pagination,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteUserRequest {
	pub actor_id: String,
	pub user_id: String,
}

impl HogarService {
	pub async fn create_seller(&self, req: CreateSellerRequest) -> ServiceResult<User> {
		self.simulate_latency(self.cfg.latency.mutate_ms).await;
		self.require_role(&req.actor_id, UserRole::Admin)?;

		let input = SellerInput {
			first_name: req.first_name,
			last_name: req.last_name,
			document_id: req.document_id,
			phone: req.phone,
			birth_date: req.birth_date,
			email: req.email,
			password: req.password,
		};

		schemas::seller_schema(self.today()).validate(&input)?;

		let now = OffsetDateTime::now_utc();
		let user = User {
			id: next_id("seller"),
			first_name: input.first_name.trim().to_string(),
			last_name: input.last_name.trim().to_string(),
			document_id: input.document_id.trim().to_string(),
			phone: input.phone.trim().to_string(),
			birth_date: input.birth_date,
			email: input.email.trim().to_string(),
			role: UserRole::Seller,
			password_hash: blake3::hash(input.password.as_bytes()).to_hex().to_string(),
			created_at: now,
			updated_at: now,
		};

		self.store.insert_user(user.clone())?;

		tracing::info!(user_id = %user.id, "Seller account created.");

		Ok(user)
	}

	pub async fn list_sellers(&self, req: ListSellersRequest) -> ServiceResult<ListSellersResponse> {
		self.simulate_latency(self.cfg.latency.list_ms).await;

		let page = req.page.unwrap_or(1);
		let limit = req.limit.unwrap_or(self.cfg.search.default_page_size);

		pagination::validate_window(page, limit, self.cfg.search.max_page_size)?;

		let sellers: Vec<User> = self
			.store
			.users()
			.into_iter()
			.filter(|user| user.role == UserRole::Seller)
			.collect();
		let (items, pagination) = pagination::paginate(sellers, page, limit);

		Ok(ListSellersResponse { items, pagination })
	}

	pub async fn delete_user(&self, req: DeleteUserRequest) -> ServiceResult<()> {
		self.simulate_latency(self.cfg.latency.mutate_ms).await;
		self.require_role(&req.actor_id, UserRole::Admin)?;

		let user = self.store.find_user(&req.user_id).ok_or_else(|| ServiceError::NotFound {
			message: "User not found.".to_string(),
		})?;

		if user.role == UserRole::Admin {
			return Err(ServiceError::Forbidden {
				message: "An administrator account cannot be deleted.".to_string(),
			});
		}

		self.store.remove_user(&user.id)?;

		tracing::info!(user_id = %user.id, "User deleted.");

		Ok(())
	}
}
