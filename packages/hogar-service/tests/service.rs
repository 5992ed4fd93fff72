use std::sync::Arc;

use time::macros::date;

use hogar_service::{
	CreateCategoryRequest, CreateListingRequest, CreateLocationRequest, CreateSellerRequest,
	DeleteCategoryRequest, DeleteListingRequest, DeleteLocationRequest, DeleteUserRequest,
	HogarService, ListListingsRequest, ListSellersRequest, ServiceError, UpdateListingStatusRequest,
	UpdateLocationRequest,
	search::SearchListingsRequest,
};
use hogar_storage::models::{PublicationStatus, UserRole};
use hogar_testkit::{fixture_today, seeded_store, test_config};

fn service() -> HogarService {
	HogarService::new(test_config(), Arc::new(seeded_store())).with_today(fixture_today())
}

fn create_listing_request(actor_id: &str, name: &str) -> CreateListingRequest {
	CreateListingRequest {
		actor_id: actor_id.to_string(),
		name: name.to_string(),
		description: "A newly published property for testing.".to_string(),
		category_id: "category-1".to_string(),
		location_id: "location-1".to_string(),
		rooms: 3,
		baths: 2,
		price: 500_000_000,
		area: Some(140),
		image_urls: Vec::new(),
		active_from: date!(2024 - 07 - 01),
		status: PublicationStatus::Published,
	}
}

fn create_seller_request(actor_id: &str) -> CreateSellerRequest {
	CreateSellerRequest {
		actor_id: actor_id.to_string(),
		first_name: "Laura".to_string(),
		last_name: "Moreno".to_string(),
		document_id: "10203040".to_string(),
		phone: "+573001234999".to_string(),
		birth_date: date!(1994 - 02 - 11),
		email: "laura.moreno@hogar360.com".to_string(),
		password: "Segura123".to_string(),
	}
}

#[tokio::test]
async fn a_seller_can_publish_a_listing() {
	let service = service();
	let listing = service
		.create_listing(create_listing_request("seller-1", "Test Bungalow"))
		.await
		.expect("valid listing");

	assert_eq!(listing.seller_id, "seller-1");
	assert_eq!(listing.category.name, "House");
	assert_eq!(listing.location.city, "Bogotá");
	assert!(service.store.find_listing(&listing.id).is_some());
}

#[tokio::test]
async fn a_new_listing_shows_up_in_the_next_public_search() {
	let service = service();

	service
		.create_listing(create_listing_request("seller-1", "Test Bungalow"))
		.await
		.expect("valid listing");

	let response = service
		.search_listings(SearchListingsRequest::default())
		.await
		.expect("search succeeds");

	assert_eq!(response.pagination.total, 12);
}

#[tokio::test]
async fn an_admin_cannot_publish_a_listing() {
	let service = service();
	let err = service
		.create_listing(create_listing_request("admin-1", "Test Bungalow"))
		.await
		.expect_err("admins do not own listings");

	assert!(matches!(err, ServiceError::Forbidden { .. }));
}

#[tokio::test]
async fn listing_validation_reports_the_broken_fields() {
	let service = service();
	let mut req = create_listing_request("seller-1", "x");

	req.description = "short".to_string();
	req.active_from = date!(2024 - 06 - 01);

	let err = service.create_listing(req).await.expect_err("invalid input");
	let ServiceError::Validation { errors } = err else {
		panic!("expected a validation error");
	};
	let fields: Vec<_> = errors.iter().map(|error| error.field.as_str()).collect();

	assert_eq!(fields, vec!["name", "description", "active_from"]);
}

#[tokio::test]
async fn listing_creation_requires_existing_category_and_location() {
	let service = service();
	let mut req = create_listing_request("seller-1", "Test Bungalow");

	req.category_id = "category-404".to_string();

	assert!(matches!(
		service.create_listing(req).await,
		Err(ServiceError::NotFound { .. })
	));

	let mut req = create_listing_request("seller-1", "Test Bungalow");

	req.location_id = "location-404".to_string();

	assert!(matches!(
		service.create_listing(req).await,
		Err(ServiceError::NotFound { .. })
	));
}

#[tokio::test]
async fn a_seller_cannot_reuse_one_of_their_listing_names() {
	let service = service();
	let err = service
		.create_listing(create_listing_request("seller-1", "luxury house zona rosa"))
		.await
		.expect_err("name already used by seller-1");

	assert!(matches!(err, ServiceError::Conflict { .. }));
}

#[tokio::test]
async fn deleting_a_listing_removes_it_from_the_next_query() {
	let service = service();
	let req = DeleteListingRequest {
		actor_id: "seller-2".to_string(),
		listing_id: "listing-4".to_string(),
	};

	service.delete_listing(req).await.expect("seller-2 owns listing-4");

	let response = service
		.search_listings(SearchListingsRequest::default())
		.await
		.expect("search succeeds");

	assert_eq!(response.pagination.total, 10);
	assert!(!response.items.iter().any(|listing| listing.id == "listing-4"));
}

#[tokio::test]
async fn only_the_owner_can_delete_a_listing() {
	let service = service();
	let req = DeleteListingRequest {
		actor_id: "seller-1".to_string(),
		listing_id: "listing-4".to_string(),
	};
	let err = service.delete_listing(req).await.expect_err("listing-4 belongs to seller-2");

	assert!(matches!(err, ServiceError::NotFound { .. }));
}

#[tokio::test]
async fn pausing_a_listing_hides_it_from_public_search() {
	let service = service();
	let req = UpdateListingStatusRequest {
		actor_id: "seller-2".to_string(),
		listing_id: "listing-4".to_string(),
		status: PublicationStatus::Paused,
	};
	let updated = service.update_listing_status(req).await.expect("owner may pause");

	assert_eq!(updated.status, PublicationStatus::Paused);

	let response = service
		.search_listings(SearchListingsRequest::default())
		.await
		.expect("search succeeds");

	assert_eq!(response.pagination.total, 10);
}

#[tokio::test]
async fn list_listings_filters_by_seller_without_an_eligibility_gate() {
	let service = service();
	let req = ListListingsRequest { seller_id: Some("seller-3".to_string()), ..Default::default() };
	let response = service.list_listings(req).await.expect("list succeeds");

	assert_eq!(response.pagination.total, 4);
	assert!(response.items.iter().any(|listing| listing.id == "listing-3"), "paused is visible");
}

#[tokio::test]
async fn an_admin_manages_locations() {
	let service = service();
	let location = service
		.create_location(CreateLocationRequest {
			actor_id: "admin-1".to_string(),
			city: "Popayán".to_string(),
			department: "Cauca".to_string(),
			city_description: "The white city.".to_string(),
			department_description: "Department in the southwest.".to_string(),
		})
		.await
		.expect("valid location");

	let updated = service
		.update_location(UpdateLocationRequest {
			actor_id: "admin-1".to_string(),
			location_id: location.id.clone(),
			city: "Popayán".to_string(),
			department: "Cauca".to_string(),
			city_description: "The white city of Colombia.".to_string(),
			department_description: "Department in the southwest.".to_string(),
		})
		.await
		.expect("valid update");

	assert_eq!(updated.city_description, "The white city of Colombia.");

	service
		.delete_location(DeleteLocationRequest {
			actor_id: "admin-1".to_string(),
			location_id: location.id.clone(),
		})
		.await
		.expect("location exists");

	assert!(matches!(
		service.get_location(&location.id).await,
		Err(ServiceError::NotFound { .. })
	));
}

#[tokio::test]
async fn location_creation_is_admin_only_and_departments_stay_unique() {
	let service = service();
	let req = CreateLocationRequest {
		actor_id: "seller-1".to_string(),
		city: "Popayán".to_string(),
		department: "Cauca".to_string(),
		city_description: "The white city.".to_string(),
		department_description: "Department in the southwest.".to_string(),
	};

	assert!(matches!(
		service.create_location(req.clone()).await,
		Err(ServiceError::Forbidden { .. })
	));

	let duplicate = CreateLocationRequest {
		actor_id: "admin-1".to_string(),
		department: "antioquia".to_string(),
		..req
	};

	assert!(matches!(
		service.create_location(duplicate).await,
		Err(ServiceError::Conflict { .. })
	));
}

#[tokio::test]
async fn category_names_stay_unique_case_insensitively() {
	let service = service();
	let err = service
		.create_category(CreateCategoryRequest {
			actor_id: "admin-1".to_string(),
			name: "HOUSE".to_string(),
			description: "Duplicate of the seeded category.".to_string(),
		})
		.await
		.expect_err("House already exists");

	assert!(matches!(err, ServiceError::Conflict { .. }));

	let farm = service
		.create_category(CreateCategoryRequest {
			actor_id: "admin-1".to_string(),
			name: "Farm".to_string(),
			description: "Rural properties and estates.".to_string(),
		})
		.await
		.expect("new name is fine");

	assert_eq!(service.list_categories().await.expect("list succeeds").len(), 6);

	service
		.delete_category(DeleteCategoryRequest {
			actor_id: "admin-1".to_string(),
			category_id: farm.id,
		})
		.await
		.expect("category exists");
}

#[tokio::test]
async fn an_admin_registers_a_seller_account() {
	let service = service();
	let user = service
		.create_seller(create_seller_request("admin-1"))
		.await
		.expect("valid seller input");

	assert_eq!(user.role, UserRole::Seller);
	assert!(!user.password_hash.is_empty());

	let value = serde_json::to_value(&user).expect("serializable");

	assert!(value.get("password_hash").is_none(), "the credential never leaves the process");

	let response = service.list_sellers(ListSellersRequest::default()).await.expect("list");

	assert_eq!(response.pagination.total, 9);
}

#[tokio::test]
async fn seller_registration_is_admin_only() {
	let service = service();
	let err = service
		.create_seller(create_seller_request("seller-1"))
		.await
		.expect_err("sellers cannot register sellers");

	assert!(matches!(err, ServiceError::Forbidden { .. }));
}

#[tokio::test]
async fn underage_sellers_are_rejected() {
	let service = service();
	let mut req = create_seller_request("admin-1");

	req.birth_date = date!(2007 - 01 - 01);

	let err = service.create_seller(req).await.expect_err("17 years old on the fixture day");
	let ServiceError::Validation { errors } = err else {
		panic!("expected a validation error");
	};

	assert_eq!(errors[0].field, "birth_date");
}

#[tokio::test]
async fn duplicate_seller_email_is_a_conflict() {
	let service = service();
	let mut req = create_seller_request("admin-1");

	req.email = "CARLOS.RODRIGUEZ@hogar360.com".to_string();

	assert!(matches!(
		service.create_seller(req).await,
		Err(ServiceError::Conflict { .. })
	));
}

#[tokio::test]
async fn the_seller_roster_excludes_the_admin() {
	let service = service();
	let response = service.list_sellers(ListSellersRequest::default()).await.expect("list");

	assert_eq!(response.pagination.total, 8);
	assert!(response.items.iter().all(|user| user.role == UserRole::Seller));
}

#[tokio::test]
async fn administrator_accounts_cannot_be_deleted() {
	let service = service();
	let err = service
		.delete_user(DeleteUserRequest {
			actor_id: "admin-1".to_string(),
			user_id: "admin-1".to_string(),
		})
		.await
		.expect_err("admins are protected");

	assert!(matches!(err, ServiceError::Forbidden { .. }));

	service
		.delete_user(DeleteUserRequest {
			actor_id: "admin-1".to_string(),
			user_id: "seller-8".to_string(),
		})
		.await
		.expect("sellers can be removed");
}

#[tokio::test]
async fn errors_render_as_human_readable_messages() {
	let service = service();
	let mut req = create_seller_request("admin-1");

	req.document_id = "12a".to_string();

	let err = service.create_seller(req).await.expect_err("invalid document");
	let message = err.to_string();

	assert!(message.starts_with("Validation error:"));
	assert!(message.contains("document_id"));
}
