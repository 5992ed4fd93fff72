use serde::{Deserialize, Serialize};

use crate::{ServiceError, ServiceResult};

/// The pagination shape consumed by the UI layer. Field names are part of the
/// wire contract and must stay fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
	pub page: u32,
	pub limit: u32,
	pub total: usize,
	#[serde(rename = "totalPages")]
	pub total_pages: u32,
}
impl Pagination {
	pub fn empty(limit: u32) -> Self {
		Self { page: 1, limit, total: 0, total_pages: 0 }
	}
}

pub(crate) fn validate_window(page: u32, limit: u32, max_limit: u32) -> ServiceResult<()> {
	if page == 0 {
		return Err(ServiceError::InvalidRequest {
			message: "page must be greater than zero.".to_string(),
		});
	}
	if limit == 0 {
		return Err(ServiceError::InvalidRequest {
			message: "limit must be greater than zero.".to_string(),
		});
	}
	if limit > max_limit {
		return Err(ServiceError::InvalidRequest {
			message: format!("limit must not exceed {max_limit}."),
		});
	}

	Ok(())
}

/// Counts first, then slices `[(page-1)*limit, page*limit)`. A page past the
/// end yields an empty page, never an error; `totalPages` is 0 for an empty
/// result set.
pub(crate) fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> (Vec<T>, Pagination) {
	let total = items.len();
	let total_pages =
		if total == 0 { 0 } else { total.div_ceil(limit as usize) as u32 };
	let start = (page as usize - 1).saturating_mul(limit as usize);
	let page_items = items.into_iter().skip(start).take(limit as usize).collect();

	(page_items, Pagination { page, limit, total, total_pages })
}

#[cfg(test)]
mod tests {
	use super::{paginate, validate_window};

	#[test]
	fn slices_the_requested_window() {
		let (items, pagination) = paginate((1..=25).collect::<Vec<_>>(), 2, 10);

		assert_eq!(items, (11..=20).collect::<Vec<_>>());
		assert_eq!(pagination.total, 25);
		assert_eq!(pagination.total_pages, 3);
	}

	#[test]
	fn page_past_the_end_is_empty_not_an_error() {
		let (items, pagination) = paginate(vec![1, 2, 3], 5, 10);

		assert!(items.is_empty());
		assert_eq!(pagination.page, 5);
		assert_eq!(pagination.total, 3);
		assert_eq!(pagination.total_pages, 1);
	}

	#[test]
	fn empty_input_has_zero_total_pages() {
		let (items, pagination) = paginate(Vec::<i32>::new(), 1, 10);

		assert!(items.is_empty());
		assert_eq!(pagination.total_pages, 0);
	}

	#[test]
	fn concatenated_pages_reproduce_the_sequence() {
		let source: Vec<_> = (1..=23).collect();
		let mut collected = Vec::new();

		for page in 1..=3 {
			let (items, pagination) = paginate(source.clone(), page, 9);

			assert!(items.len() <= pagination.limit as usize);
			collected.extend(items);
		}

		assert_eq!(collected, source);
	}

	#[test]
	fn rejects_zero_page_zero_limit_and_oversized_limit() {
		assert!(validate_window(0, 10, 100).is_err());
		assert!(validate_window(1, 0, 100).is_err());
		assert!(validate_window(1, 101, 100).is_err());
		assert!(validate_window(1, 100, 100).is_ok());
	}

	#[test]
	fn serializes_with_the_fixed_field_names() {
		let (_, pagination) = paginate(vec![1, 2, 3], 1, 2);
		let value = serde_json::to_value(pagination).expect("serializable");

		assert_eq!(value["page"], 1);
		assert_eq!(value["limit"], 2);
		assert_eq!(value["total"], 3);
		assert_eq!(value["totalPages"], 2);
	}
}
