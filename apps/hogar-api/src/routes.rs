use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use hogar_service::{
	CreateCategoryRequest, CreateListingRequest, CreateLocationRequest, CreateSellerRequest,
	DeleteCategoryRequest, DeleteListingRequest, DeleteLocationRequest, DeleteUserRequest,
	ListListingsRequest, ListListingsResponse, ListLocationsRequest, ListLocationsResponse,
	ListSellersRequest, ListSellersResponse, SearchListingsRequest, SearchListingsResponse,
	SearchLocationsRequest, SearchLocationsResponse, ServiceError, UpdateListingStatusRequest,
	UpdateLocationRequest,
};
use hogar_storage::models::{Category, Listing, Location, User};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/listings", get(list_listings).post(create_listing))
		.route("/v1/listings/search", post(search_listings))
		.route("/v1/listings/delete", post(delete_listing))
		.route("/v1/listings/status", post(update_listing_status))
		.route("/v1/locations", get(list_locations).post(create_location))
		.route("/v1/locations/search", post(search_locations))
		.route("/v1/locations/update", post(update_location))
		.route("/v1/locations/delete", post(delete_location))
		.route("/v1/locations/{id}", get(get_location))
		.route("/v1/categories", get(list_categories).post(create_category))
		.route("/v1/categories/delete", post(delete_category))
		.route("/v1/sellers", get(list_sellers).post(create_seller))
		.route("/v1/users/delete", post(delete_user))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search_listings(
	State(state): State<AppState>,
	Json(payload): Json<SearchListingsRequest>,
) -> Result<Json<SearchListingsResponse>, ApiError> {
	let response = state.service.search_listings(payload).await?;

	Ok(Json(response))
}

async fn list_listings(
	State(state): State<AppState>,
	Query(params): Query<ListListingsRequest>,
) -> Result<Json<ListListingsResponse>, ApiError> {
	let response = state.service.list_listings(params).await?;

	Ok(Json(response))
}

async fn create_listing(
	State(state): State<AppState>,
	Json(payload): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<Listing>), ApiError> {
	let listing = state.service.create_listing(payload).await?;

	Ok((StatusCode::CREATED, Json(listing)))
}

async fn delete_listing(
	State(state): State<AppState>,
	Json(payload): Json<DeleteListingRequest>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_listing(payload).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn update_listing_status(
	State(state): State<AppState>,
	Json(payload): Json<UpdateListingStatusRequest>,
) -> Result<Json<Listing>, ApiError> {
	let listing = state.service.update_listing_status(payload).await?;

	Ok(Json(listing))
}

async fn search_locations(
	State(state): State<AppState>,
	Json(payload): Json<SearchLocationsRequest>,
) -> Result<Json<SearchLocationsResponse>, ApiError> {
	let response = state.service.search_locations(payload).await?;

	Ok(Json(response))
}

async fn list_locations(
	State(state): State<AppState>,
	Query(params): Query<ListLocationsRequest>,
) -> Result<Json<ListLocationsResponse>, ApiError> {
	let response = state.service.list_locations(params).await?;

	Ok(Json(response))
}

async fn get_location(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<Location>, ApiError> {
	let location = state.service.get_location(&id).await?;

	Ok(Json(location))
}

async fn create_location(
	State(state): State<AppState>,
	Json(payload): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<Location>), ApiError> {
	let location = state.service.create_location(payload).await?;

	Ok((StatusCode::CREATED, Json(location)))
}

async fn update_location(
	State(state): State<AppState>,
	Json(payload): Json<UpdateLocationRequest>,
) -> Result<Json<Location>, ApiError> {
	let location = state.service.update_location(payload).await?;

	Ok(Json(location))
}

async fn delete_location(
	State(state): State<AppState>,
	Json(payload): Json<DeleteLocationRequest>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_location(payload).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn list_categories(
	State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
	let categories = state.service.list_categories().await?;

	Ok(Json(categories))
}

async fn create_category(
	State(state): State<AppState>,
	Json(payload): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
	let category = state.service.create_category(payload).await?;

	Ok((StatusCode::CREATED, Json(category)))
}

async fn delete_category(
	State(state): State<AppState>,
	Json(payload): Json<DeleteCategoryRequest>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_category(payload).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn list_sellers(
	State(state): State<AppState>,
	Query(params): Query<ListSellersRequest>,
) -> Result<Json<ListSellersResponse>, ApiError> {
	let response = state.service.list_sellers(params).await?;

	Ok(Json(response))
}

async fn create_seller(
	State(state): State<AppState>,
	Json(payload): Json<CreateSellerRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
	let user = state.service.create_seller(payload).await?;

	Ok((StatusCode::CREATED, Json(user)))
}

async fn delete_user(
	State(state): State<AppState>,
	Json(payload): Json<DeleteUserRequest>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_user(payload).await?;

	Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let message = err.to_string();

		match err {
			ServiceError::InvalidRequest { .. } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", message, None),
			ServiceError::Validation { errors } => {
				let fields = errors.into_iter().map(|error| error.field).collect();

				Self::new(
					StatusCode::UNPROCESSABLE_ENTITY,
					"validation_failed",
					message,
					Some(fields),
				)
			},
			ServiceError::NotFound { .. } =>
				Self::new(StatusCode::NOT_FOUND, "not_found", message, None),
			ServiceError::Conflict { .. } =>
				Self::new(StatusCode::CONFLICT, "conflict", message, None),
			ServiceError::Forbidden { .. } =>
				Self::new(StatusCode::FORBIDDEN, "forbidden", message, None),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody {
			error_code: self.error_code,
			message: self.message,
			fields: self.fields,
		};

		(self.status, Json(body)).into_response()
	}
}
