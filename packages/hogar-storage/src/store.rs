use std::sync::RwLock;

use time::OffsetDateTime;

use crate::{
	Error, Result,
	models::{Category, Listing, Location, PublicationStatus, User},
};

/// The backing record source: one shared mutable collection per record kind.
/// Reads hand out cloned snapshots; mutations hold the write lock for the
/// duration of the operation. Uniqueness invariants are enforced here, at
/// write time.
#[derive(Default)]
pub struct MemoryStore {
	pub(crate) listings: RwLock<Vec<Listing>>,
	pub(crate) locations: RwLock<Vec<Location>>,
	pub(crate) categories: RwLock<Vec<Category>>,
	pub(crate) users: RwLock<Vec<User>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn seeded() -> Self {
		crate::seed::seeded()
	}

	pub fn listings(&self) -> Vec<Listing> {
		self.listings.read().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn locations(&self) -> Vec<Location> {
		self.locations.read().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn categories(&self) -> Vec<Category> {
		self.categories.read().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn users(&self) -> Vec<User> {
		self.users.read().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn find_listing(&self, id: &str) -> Option<Listing> {
		self.listings
			.read()
			.unwrap_or_else(|err| err.into_inner())
			.iter()
			.find(|listing| listing.id == id)
			.cloned()
	}

	pub fn find_location(&self, id: &str) -> Option<Location> {
		self.locations
			.read()
			.unwrap_or_else(|err| err.into_inner())
			.iter()
			.find(|location| location.id == id)
			.cloned()
	}

	pub fn find_category(&self, id: &str) -> Option<Category> {
		self.categories
			.read()
			.unwrap_or_else(|err| err.into_inner())
			.iter()
			.find(|category| category.id == id)
			.cloned()
	}

	pub fn find_user(&self, id: &str) -> Option<User> {
		self.users
			.read()
			.unwrap_or_else(|err| err.into_inner())
			.iter()
			.find(|user| user.id == id)
			.cloned()
	}

	pub fn insert_listing(&self, listing: Listing) -> Result<()> {
		let mut listings = self.listings.write().unwrap_or_else(|err| err.into_inner());

		if listings.iter().any(|existing| {
			existing.seller_id == listing.seller_id && eq_lower(&existing.name, &listing.name)
		}) {
			return Err(Error::Conflict(
				"This seller already has a published listing with this name.".to_string(),
			));
		}

		listings.push(listing);

		Ok(())
	}

	pub fn remove_listing_owned(&self, id: &str, seller_id: &str) -> Result<Listing> {
		let mut listings = self.listings.write().unwrap_or_else(|err| err.into_inner());
		let index = listings
			.iter()
			.position(|listing| listing.id == id && listing.seller_id == seller_id)
			.ok_or_else(|| {
				Error::NotFound("Listing not found or not owned by this seller.".to_string())
			})?;

		Ok(listings.remove(index))
	}

	pub fn set_listing_status(
		&self,
		id: &str,
		seller_id: &str,
		status: PublicationStatus,
		now: OffsetDateTime,
	) -> Result<Listing> {
		let mut listings = self.listings.write().unwrap_or_else(|err| err.into_inner());
		let listing = listings
			.iter_mut()
			.find(|listing| listing.id == id && listing.seller_id == seller_id)
			.ok_or_else(|| {
				Error::NotFound("Listing not found or not owned by this seller.".to_string())
			})?;

		listing.status = status;
		listing.updated_at = now;

		Ok(listing.clone())
	}

	pub fn insert_location(&self, location: Location) -> Result<()> {
		let mut locations = self.locations.write().unwrap_or_else(|err| err.into_inner());

		if locations.iter().any(|existing| eq_lower(&existing.department, &location.department)) {
			return Err(Error::Conflict(
				"A location with this department already exists.".to_string(),
			));
		}

		locations.push(location);

		Ok(())
	}

	pub fn update_location(&self, updated: Location) -> Result<Location> {
		let mut locations = self.locations.write().unwrap_or_else(|err| err.into_inner());

		if locations.iter().any(|existing| {
			existing.id != updated.id && eq_lower(&existing.department, &updated.department)
		}) {
			return Err(Error::Conflict(
				"A location with this department already exists.".to_string(),
			));
		}

		let slot = locations
			.iter_mut()
			.find(|location| location.id == updated.id)
			.ok_or_else(|| Error::NotFound("Location not found.".to_string()))?;

		*slot = updated.clone();

		Ok(updated)
	}

	pub fn remove_location(&self, id: &str) -> Result<()> {
		let mut locations = self.locations.write().unwrap_or_else(|err| err.into_inner());
		let index = locations
			.iter()
			.position(|location| location.id == id)
			.ok_or_else(|| Error::NotFound("Location not found.".to_string()))?;

		locations.remove(index);

		Ok(())
	}

	pub fn insert_category(&self, category: Category) -> Result<()> {
		let mut categories = self.categories.write().unwrap_or_else(|err| err.into_inner());

		if categories.iter().any(|existing| eq_lower(&existing.name, &category.name)) {
			return Err(Error::Conflict("A category with this name already exists.".to_string()));
		}

		categories.push(category);

		Ok(())
	}

	pub fn remove_category(&self, id: &str) -> Result<()> {
		let mut categories = self.categories.write().unwrap_or_else(|err| err.into_inner());
		let index = categories
			.iter()
			.position(|category| category.id == id)
			.ok_or_else(|| Error::NotFound("Category not found.".to_string()))?;

		categories.remove(index);

		Ok(())
	}

	pub fn insert_user(&self, user: User) -> Result<()> {
		let mut users = self.users.write().unwrap_or_else(|err| err.into_inner());

		if users.iter().any(|existing| eq_lower(&existing.email, &user.email)) {
			return Err(Error::Conflict(
				"A user with this email address already exists.".to_string(),
			));
		}
		if users.iter().any(|existing| existing.document_id == user.document_id) {
			return Err(Error::Conflict(
				"A user with this identity document already exists.".to_string(),
			));
		}

		users.push(user);

		Ok(())
	}

	pub fn remove_user(&self, id: &str) -> Result<()> {
		let mut users = self.users.write().unwrap_or_else(|err| err.into_inner());
		let index = users
			.iter()
			.position(|user| user.id == id)
			.ok_or_else(|| Error::NotFound("User not found.".to_string()))?;

		users.remove(index);

		Ok(())
	}
}

fn eq_lower(a: &str, b: &str) -> bool {
	a.to_lowercase() == b.to_lowercase()
}
