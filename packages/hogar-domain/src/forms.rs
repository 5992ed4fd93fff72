use serde::Serialize;

/// One failed field constraint, surfaced to the caller as data rather than an
/// exception. `field` names the offending input field, `message` is the
/// human-readable reason.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
	pub field: String,
	pub message: String,
}

type Check<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A single predicate + message pair attached to a field.
pub struct FieldRule<T> {
	message: String,
	check: Check<T>,
}

pub fn rule<T>(
	message: impl Into<String>,
	check: impl Fn(&T) -> bool + Send + Sync + 'static,
) -> FieldRule<T> {
	FieldRule { message: message.into(), check: Box::new(check) }
}

/// An ordered set of named field constraints over an input value.
///
/// Rules run per field in declaration order; the first failing rule of a field
/// produces that field's error and the remaining rules of the same field are
/// skipped. All fields are always evaluated, so a caller sees every broken
/// field at once.
pub struct Schema<T> {
	fields: Vec<(&'static str, Vec<FieldRule<T>>)>,
}
impl<T> Schema<T> {
	pub fn new() -> Self {
		Self { fields: Vec::new() }
	}

	pub fn field(mut self, name: &'static str, rules: Vec<FieldRule<T>>) -> Self {
		self.fields.push((name, rules));

		self
	}

	pub fn validate(&self, value: &T) -> Result<(), Vec<FieldError>> {
		let mut errors = Vec::new();

		for (name, rules) in &self.fields {
			for rule in rules {
				if (rule.check)(value) {
					continue;
				}

				errors.push(FieldError {
					field: (*name).to_string(),
					message: rule.message.clone(),
				});

				break;
			}
		}

		if errors.is_empty() { Ok(()) } else { Err(errors) }
	}
}

impl<T> Default for Schema<T> {
	fn default() -> Self {
		Self::new()
	}
}
