use std::sync::Arc;

use axum::{
	body::{self, Body},
	http::{Request, StatusCode},
};
use tower::util::ServiceExt;

use hogar_api::{routes, state::AppState};
use hogar_service::HogarService;
use hogar_testkit::{fixture_today, seeded_store, test_config};

fn app_state() -> AppState {
	let service =
		HogarService::new(test_config(), Arc::new(seeded_store())).with_today(fixture_today());

	AppState { service: Arc::new(service) }
}

fn json_request(method: &str, uri: &str, payload: serde_json::Value) -> Request<Body> {
	Request::builder()
		.method(method)
		.uri(uri)
		.header("content-type", "application/json")
		.body(Body::from(payload.to_string()))
		.expect("Failed to build request.")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");

	serde_json::from_slice(&bytes).expect("Failed to parse response.")
}

#[tokio::test]
async fn health_ok() {
	let app = routes::router(app_state());
	let response = app
		.oneshot(Request::builder().uri("/health").body(Body::empty()).expect("Failed to build request."))
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn public_search_returns_the_eligible_page_sorted_by_price() {
	let app = routes::router(app_state());
	let payload = serde_json::json!({
		"sort_key": "price",
		"direction": "asc",
		"page": 1,
		"limit": 12,
	});
	let response = app
		.oneshot(json_request("POST", "/v1/listings/search", payload))
		.await
		.expect("Failed to call search.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = json_body(response).await;

	assert_eq!(json["pagination"]["total"], 11);
	assert_eq!(json["pagination"]["totalPages"], 1);
	assert_eq!(json["items"][0]["id"], "listing-15");
	assert_eq!(json["items"][10]["id"], "listing-12");
	assert_eq!(json["items"][0]["status"], "PUBLISHED");
}

#[tokio::test]
async fn location_search_echoes_the_query_case_insensitively() {
	let app = routes::router(app_state());
	let payload = serde_json::json!({ "query": "CARTAGENA" });
	let response = app
		.oneshot(json_request("POST", "/v1/locations/search", payload))
		.await
		.expect("Failed to call location search.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = json_body(response).await;

	assert_eq!(json["items"][0]["city"], "Cartagena");
	assert_eq!(json["searchQuery"], "CARTAGENA");
}

#[tokio::test]
async fn invalid_seller_input_maps_to_422_with_field_names() {
	let app = routes::router(app_state());
	let payload = serde_json::json!({
		"actor_id": "admin-1",
		"first_name": "Laura",
		"last_name": "Moreno",
		"document_id": "12a",
		"phone": "+573001234999",
		"birth_date": "1994-02-11",
		"email": "laura.moreno@hogar360.com",
		"password": "Segura123",
	});
	let response = app
		.oneshot(json_request("POST", "/v1/sellers", payload))
		.await
		.expect("Failed to call create seller.");

	assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

	let json = json_body(response).await;

	assert_eq!(json["error_code"], "validation_failed");
	assert_eq!(json["fields"][0], "document_id");
}

#[tokio::test]
async fn the_wrong_role_maps_to_403() {
	let app = routes::router(app_state());
	let payload = serde_json::json!({
		"actor_id": "admin-1",
		"name": "Test Bungalow",
		"description": "A newly published property for testing.",
		"category_id": "category-1",
		"location_id": "location-1",
		"rooms": 3,
		"baths": 2,
		"price": 500000000,
		"active_from": "2024-07-01",
		"status": "PUBLISHED",
	});
	let response = app
		.oneshot(json_request("POST", "/v1/listings", payload))
		.await
		.expect("Failed to call create listing.");

	assert_eq!(response.status(), StatusCode::FORBIDDEN);

	let json = json_body(response).await;

	assert_eq!(json["error_code"], "forbidden");
}

#[tokio::test]
async fn a_duplicate_department_maps_to_409() {
	let app = routes::router(app_state());
	let payload = serde_json::json!({
		"actor_id": "admin-1",
		"city": "Soacha",
		"department": "cundinamarca",
		"city_description": "Municipality near Bogotá.",
		"department_description": "Central department of Colombia.",
	});
	let response = app
		.oneshot(json_request("POST", "/v1/locations", payload))
		.await
		.expect("Failed to call create location.");

	assert_eq!(response.status(), StatusCode::CONFLICT);

	let json = json_body(response).await;

	assert_eq!(json["error_code"], "conflict");
}

#[tokio::test]
async fn a_missing_location_maps_to_404() {
	let app = routes::router(app_state());
	let response = app
		.oneshot(
			Request::builder()
				.uri("/v1/locations/location-404")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call get location.");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_listing_is_observed_by_the_next_search() {
	let app = routes::router(app_state());
	let payload = serde_json::json!({ "actor_id": "seller-2", "listing_id": "listing-4" });
	let response = app
		.clone()
		.oneshot(json_request("POST", "/v1/listings/delete", payload))
		.await
		.expect("Failed to call delete listing.");

	assert_eq!(response.status(), StatusCode::NO_CONTENT);

	let response = app
		.oneshot(json_request("POST", "/v1/listings/search", serde_json::json!({})))
		.await
		.expect("Failed to call search.");
	let json = json_body(response).await;

	assert_eq!(json["pagination"]["total"], 10);
}

#[tokio::test]
async fn the_back_office_listing_view_accepts_query_parameters() {
	let app = routes::router(app_state());
	let response = app
		.oneshot(
			Request::builder()
				.uri("/v1/listings?seller_id=seller-3&page=1&limit=10")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call list listings.");

	assert_eq!(response.status(), StatusCode::OK);

	let json = json_body(response).await;

	assert_eq!(json["pagination"]["total"], 4);
}
