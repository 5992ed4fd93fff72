use regex::Regex;
use time::{Date, Duration};

use hogar_config::ListingRules;

use crate::forms::{Schema, rule};

pub const LISTING_NAME_MIN: usize = 3;
pub const LISTING_NAME_MAX: usize = 100;
pub const LISTING_DESCRIPTION_MIN: usize = 10;
pub const LISTING_DESCRIPTION_MAX: usize = 500;
pub const MAX_AREA_M2: u32 = 10_000;
pub const LOCATION_NAME_MAX: usize = 50;
pub const LOCATION_DESCRIPTION_MAX: usize = 120;
pub const CATEGORY_NAME_MAX: usize = 50;
pub const CATEGORY_DESCRIPTION_MAX: usize = 90;
pub const PERSON_NAME_MIN: usize = 2;
pub const PERSON_NAME_MAX: usize = 50;
pub const DOCUMENT_MIN: usize = 6;
pub const DOCUMENT_MAX: usize = 15;
pub const PHONE_MIN: usize = 10;
pub const PHONE_MAX: usize = 13;
pub const EMAIL_MAX: usize = 100;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 50;
pub const ADULT_AGE: i32 = 18;

#[derive(Clone, Debug)]
pub struct ListingInput {
	pub name: String,
	pub description: String,
	pub category_id: String,
	pub location_id: String,
	pub rooms: u32,
	pub baths: u32,
	pub price: i64,
	pub area: Option<u32>,
	pub image_urls: Vec<String>,
	pub active_from: Date,
}

#[derive(Clone, Debug)]
pub struct LocationInput {
	pub city: String,
	pub department: String,
	pub city_description: String,
	pub department_description: String,
}

#[derive(Clone, Debug)]
pub struct CategoryInput {
	pub name: String,
	pub description: String,
}

#[derive(Clone, Debug)]
pub struct SellerInput {
	pub first_name: String,
	pub last_name: String,
	pub document_id: String,
	pub phone: String,
	pub birth_date: Date,
	pub email: String,
	pub password: String,
}

pub fn listing_schema(rules: &ListingRules, today: Date) -> Schema<ListingInput> {
	let min_price = rules.min_price;
	let max_price = rules.max_price;
	let max_rooms = rules.max_rooms;
	let max_baths = rules.max_baths;
	let max_images = rules.max_images as usize;
	let window_end = today.saturating_add(Duration::days(rules.publication_window_days));

	Schema::new()
		.field("name", vec![
			rule(format!("The name must be at least {LISTING_NAME_MIN} characters."), |input: &ListingInput| {
				input.name.trim().chars().count() >= LISTING_NAME_MIN
			}),
			rule(format!("The name must not exceed {LISTING_NAME_MAX} characters."), |input: &ListingInput| {
				input.name.trim().chars().count() <= LISTING_NAME_MAX
			}),
			rule("The name contains invalid characters.", |input: &ListingInput| {
				matches_pattern(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ0-9\s\-.,]+$", input.name.trim())
			}),
		])
		.field("description", vec![
			rule(
				format!("The description must be at least {LISTING_DESCRIPTION_MIN} characters."),
				|input: &ListingInput| {
					input.description.trim().chars().count() >= LISTING_DESCRIPTION_MIN
				},
			),
			rule(
				format!("The description must not exceed {LISTING_DESCRIPTION_MAX} characters."),
				|input: &ListingInput| {
					input.description.trim().chars().count() <= LISTING_DESCRIPTION_MAX
				},
			),
		])
		.field("category_id", vec![rule("A category must be selected.", |input: &ListingInput| {
			!input.category_id.trim().is_empty()
		})])
		.field("location_id", vec![rule("A location must be selected.", |input: &ListingInput| {
			!input.location_id.trim().is_empty()
		})])
		.field("rooms", vec![
			rule("The listing must have at least 1 room.", |input: &ListingInput| input.rooms >= 1),
			rule(format!("The listing must not have more than {max_rooms} rooms."), move |input: &ListingInput| {
				input.rooms <= max_rooms
			}),
		])
		.field("baths", vec![
			rule("The listing must have at least 1 bathroom.", |input: &ListingInput| {
				input.baths >= 1
			}),
			rule(
				format!("The listing must not have more than {max_baths} bathrooms."),
				move |input: &ListingInput| input.baths <= max_baths,
			),
		])
		.field("price", vec![
			rule(format!("The minimum price is {min_price}."), move |input: &ListingInput| {
				input.price >= min_price
			}),
			rule(format!("The maximum price is {max_price}."), move |input: &ListingInput| {
				input.price <= max_price
			}),
		])
		.field("area", vec![
			rule("The area must be a positive number.", |input: &ListingInput| {
				input.area.is_none_or(|area| area >= 1)
			}),
			rule(format!("The area must not exceed {MAX_AREA_M2} m²."), |input: &ListingInput| {
				input.area.is_none_or(|area| area <= MAX_AREA_M2)
			}),
		])
		.field("image_urls", vec![
			rule(
				format!("A listing must not carry more than {max_images} images."),
				move |input: &ListingInput| input.image_urls.len() <= max_images,
			),
			rule("Image URLs must be valid http(s) URLs.", |input: &ListingInput| {
				input.image_urls.iter().all(|url| matches_pattern(r"^https?://\S+$", url))
			}),
		])
		.field("active_from", vec![rule(
			"The active-from date must fall between today and the end of the publication window.",
			move |input: &ListingInput| {
				input.active_from >= today && input.active_from <= window_end
			},
		)])
}

pub fn location_schema() -> Schema<LocationInput> {
	Schema::new()
		.field("city", vec![
			rule("The city name is required.", |input: &LocationInput| {
				!input.city.trim().is_empty()
			}),
			rule(
				format!("The city name must not exceed {LOCATION_NAME_MAX} characters."),
				|input: &LocationInput| input.city.trim().chars().count() <= LOCATION_NAME_MAX,
			),
		])
		.field("department", vec![
			rule("The department name is required.", |input: &LocationInput| {
				!input.department.trim().is_empty()
			}),
			rule(
				format!("The department name must not exceed {LOCATION_NAME_MAX} characters."),
				|input: &LocationInput| {
					input.department.trim().chars().count() <= LOCATION_NAME_MAX
				},
			),
		])
		.field("city_description", vec![
			rule("The city description is required.", |input: &LocationInput| {
				!input.city_description.trim().is_empty()
			}),
			rule(
				format!("The city description must not exceed {LOCATION_DESCRIPTION_MAX} characters."),
				|input: &LocationInput| {
					input.city_description.trim().chars().count() <= LOCATION_DESCRIPTION_MAX
				},
			),
		])
		.field("department_description", vec![
			rule("The department description is required.", |input: &LocationInput| {
				!input.department_description.trim().is_empty()
			}),
			rule(
				format!(
					"The department description must not exceed {LOCATION_DESCRIPTION_MAX} characters."
				),
				|input: &LocationInput| {
					input.department_description.trim().chars().count() <= LOCATION_DESCRIPTION_MAX
				},
			),
		])
}

pub fn category_schema() -> Schema<CategoryInput> {
	Schema::new()
		.field("name", vec![
			rule("The name is required.", |input: &CategoryInput| !input.name.trim().is_empty()),
			rule(
				format!("The name must not exceed {CATEGORY_NAME_MAX} characters."),
				|input: &CategoryInput| input.name.trim().chars().count() <= CATEGORY_NAME_MAX,
			),
		])
		.field("description", vec![
			rule("The description is required.", |input: &CategoryInput| {
				!input.description.trim().is_empty()
			}),
			rule(
				format!("The description must not exceed {CATEGORY_DESCRIPTION_MAX} characters."),
				|input: &CategoryInput| {
					input.description.trim().chars().count() <= CATEGORY_DESCRIPTION_MAX
				},
			),
		])
}

pub fn seller_schema(today: Date) -> Schema<SellerInput> {
	Schema::new()
		.field("first_name", vec![
			rule(
				format!("The first name must be at least {PERSON_NAME_MIN} characters."),
				|input: &SellerInput| input.first_name.trim().chars().count() >= PERSON_NAME_MIN,
			),
			rule(
				format!("The first name must not exceed {PERSON_NAME_MAX} characters."),
				|input: &SellerInput| input.first_name.trim().chars().count() <= PERSON_NAME_MAX,
			),
			rule("The first name may only contain letters and spaces.", |input: &SellerInput| {
				matches_pattern(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$", input.first_name.trim())
			}),
		])
		.field("last_name", vec![
			rule(
				format!("The last name must be at least {PERSON_NAME_MIN} characters."),
				|input: &SellerInput| input.last_name.trim().chars().count() >= PERSON_NAME_MIN,
			),
			rule(
				format!("The last name must not exceed {PERSON_NAME_MAX} characters."),
				|input: &SellerInput| input.last_name.trim().chars().count() <= PERSON_NAME_MAX,
			),
			rule("The last name may only contain letters and spaces.", |input: &SellerInput| {
				matches_pattern(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$", input.last_name.trim())
			}),
		])
		.field("document_id", vec![
			rule(
				format!("The identity document must have at least {DOCUMENT_MIN} digits."),
				|input: &SellerInput| input.document_id.trim().chars().count() >= DOCUMENT_MIN,
			),
			rule(
				format!("The identity document must not exceed {DOCUMENT_MAX} digits."),
				|input: &SellerInput| input.document_id.trim().chars().count() <= DOCUMENT_MAX,
			),
			rule("The identity document must be numeric.", |input: &SellerInput| {
				matches_pattern(r"^\d+$", input.document_id.trim())
			}),
		])
		.field("phone", vec![
			rule(
				format!("The phone number must have at least {PHONE_MIN} characters."),
				|input: &SellerInput| input.phone.trim().chars().count() >= PHONE_MIN,
			),
			rule(
				format!("The phone number must not exceed {PHONE_MAX} characters."),
				|input: &SellerInput| input.phone.trim().chars().count() <= PHONE_MAX,
			),
			rule("The phone number format is invalid.", |input: &SellerInput| {
				matches_pattern(r"^(\+\d{1,3})?\d{10}$", input.phone.trim())
			}),
		])
		.field("birth_date", vec![rule(
			format!("The user must be of legal age ({ADULT_AGE} years)."),
			move |input: &SellerInput| age_on(input.birth_date, today) >= ADULT_AGE,
		)])
		.field("email", vec![
			rule("The email address is invalid.", |input: &SellerInput| {
				matches_pattern(r"^[^@\s]+@[^@\s]+\.[^@\s]+$", input.email.trim())
			}),
			rule(
				format!("The email must not exceed {EMAIL_MAX} characters."),
				|input: &SellerInput| input.email.trim().chars().count() <= EMAIL_MAX,
			),
		])
		.field("password", vec![
			rule(
				format!("The password must be at least {PASSWORD_MIN} characters."),
				|input: &SellerInput| input.password.chars().count() >= PASSWORD_MIN,
			),
			rule(
				format!("The password must not exceed {PASSWORD_MAX} characters."),
				|input: &SellerInput| input.password.chars().count() <= PASSWORD_MAX,
			),
			rule(
				"The password must contain at least one lowercase letter, one uppercase letter, and one digit.",
				|input: &SellerInput| {
					input.password.chars().any(|ch| ch.is_ascii_lowercase())
						&& input.password.chars().any(|ch| ch.is_ascii_uppercase())
						&& input.password.chars().any(|ch| ch.is_ascii_digit())
				},
			),
		])
}

/// Calendar-correct age: the year difference, minus one when the birthday has
/// not yet occurred this year.
pub fn age_on(birth: Date, today: Date) -> i32 {
	let mut age = today.year() - birth.year();

	if (today.month() as u8, today.day()) < (birth.month() as u8, birth.day()) {
		age -= 1;
	}

	age
}

fn matches_pattern(pattern: &str, text: &str) -> bool {
	Regex::new(pattern).map(|re| re.is_match(text)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use time::macros::date;

	use super::age_on;

	#[test]
	fn age_counts_completed_years_only() {
		assert_eq!(age_on(date!(1990 - 06 - 15), date!(2024 - 06 - 14)), 33);
		assert_eq!(age_on(date!(1990 - 06 - 15), date!(2024 - 06 - 15)), 34);
		assert_eq!(age_on(date!(2006 - 12 - 31), date!(2024 - 06 - 22)), 17);
	}
}
