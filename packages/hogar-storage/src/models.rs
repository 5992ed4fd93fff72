use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublicationStatus {
	Published,
	Paused,
	InTransaction,
	Finalized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
	Admin,
	Seller,
	Buyer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
	pub id: String,
	pub name: String,
	pub description: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
	pub id: String,
	pub city: String,
	pub department: String,
	pub city_description: String,
	pub department_description: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
	pub id: String,
	pub name: String,
	pub description: String,
	pub category: Category,
	pub rooms: u32,
	pub baths: u32,
	pub price: i64,
	pub location: Location,
	#[serde(with = "crate::time_serde::date")]
	pub active_from: Date,
	pub status: PublicationStatus,
	#[serde(with = "crate::time_serde")]
	pub published_at: OffsetDateTime,
	pub seller_id: String,
	pub area: Option<u32>,
	pub image_urls: Vec<String>,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub id: String,
	pub first_name: String,
	pub last_name: String,
	pub document_id: String,
	pub phone: String,
	#[serde(with = "crate::time_serde::date")]
	pub birth_date: Date,
	pub email: String,
	pub role: UserRole,
	// Never serialized; seeded accounts carry no usable credential.
	#[serde(skip_serializing, default)]
	pub password_hash: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}
