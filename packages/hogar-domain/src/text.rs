use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Lowercases and strips diacritics so "Bogotá" compares equal to "bogota".
pub fn fold(text: &str) -> String {
	text.nfd().filter(|ch| !is_combining_mark(*ch)).flat_map(char::to_lowercase).collect()
}

/// Case- and accent-insensitive substring match.
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
	fold(haystack).contains(&fold(needle))
}

/// Case- and accent-insensitive ordering; accented and plain forms collate together.
pub fn cmp_fold(a: &str, b: &str) -> Ordering {
	fold(a).cmp(&fold(b))
}

/// Case-insensitive equality without accent folding. Write-time uniqueness
/// checks treat "Bolívar" and "Bolivar" as distinct names.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
	a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use super::{cmp_fold, contains_fold, eq_ignore_case, fold};

	#[test]
	fn fold_strips_accents_and_case() {
		assert_eq!(fold("Bogotá"), "bogota");
		assert_eq!(fold("MEDELLÍN"), "medellin");
		assert_eq!(fold("Chía"), "chia");
	}

	#[test]
	fn fold_is_total_on_plain_ascii() {
		assert_eq!(fold("plain text 123"), "plain text 123");
		assert_eq!(fold(""), "");
	}

	#[test]
	fn contains_fold_matches_across_accents() {
		assert!(contains_fold("Bogotá", "bogota"));
		assert!(contains_fold("Valle del Cauca", "CAUCA"));
		assert!(!contains_fold("Cali", "cartagena"));
	}

	#[test]
	fn cmp_fold_collates_accented_with_plain() {
		assert_eq!(cmp_fold("Bogotá", "bogota"), Ordering::Equal);
		assert_eq!(cmp_fold("Armenia", "Bogotá"), Ordering::Less);
		assert_eq!(cmp_fold("pereira", "Cali"), Ordering::Greater);
	}

	#[test]
	fn eq_ignore_case_keeps_accents_distinct() {
		assert!(eq_ignore_case("BOLÍVAR", "bolívar"));
		assert!(!eq_ignore_case("Bolívar", "Bolivar"));
	}
}
