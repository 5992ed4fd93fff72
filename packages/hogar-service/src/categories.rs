use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use hogar_domain::schemas::{self, CategoryInput};
use hogar_storage::models::{Category, UserRole};

use crate::{HogarService, ServiceResult, next_id};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
	pub actor_id: String,
	pub name: String,
	pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteCategoryRequest {
	pub actor_id: String,
	pub category_id: String,
}

impl HogarService {
	pub async fn create_category(&self, req: CreateCategoryRequest) -> ServiceResult<Category> {
		self.simulate_latency(self.cfg.latency.mutate_ms).await;
		self.require_role(&req.actor_id, UserRole::Admin)?;

		let input = CategoryInput { name: req.name, description: req.description };

		schemas::category_schema().validate(&input)?;

		let now = OffsetDateTime::now_utc();
		let category = Category {
			id: next_id("category"),
			name: input.name.trim().to_string(),
			description: input.description.trim().to_string(),
			created_at: now,
			updated_at: now,
		};

		self.store.insert_category(category.clone())?;

		tracing::info!(category_id = %category.id, "Category created.");

		Ok(category)
	}

	/// The category list is small; it is returned whole for pickers.
	pub async fn list_categories(&self) -> ServiceResult<Vec<Category>> {
		self.simulate_latency(self.cfg.latency.list_ms).await;

		Ok(self.store.categories())
	}

	pub async fn delete_category(&self, req: DeleteCategoryRequest) -> ServiceResult<()> {
		self.simulate_latency(self.cfg.latency.mutate_ms).await;
		self.require_role(&req.actor_id, UserRole::Admin)?;
		self.store.remove_category(&req.category_id)?;

		tracing::info!(category_id = %req.category_id, "Category deleted.");

		Ok(())
	}
}
