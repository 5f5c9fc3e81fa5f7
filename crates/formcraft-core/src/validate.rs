//! The validation engine: pure, total, side-effect-free
//!
//! `validate` collects every applicable error for a field/value pair, in rule
//! order: required check, file accept filter, then type-specific structural
//! checks. Callers that only display one message take the first element;
//! programmatic consumers keep the whole list.

use crate::field::{Field, FieldType};
use crate::refdata;
use crate::value::{FormValue, PhoneValue};
use regex::Regex;
use std::sync::LazyLock;

// Single-@, domain-with-dot email shape. Deliberately simple: the goal is
// catching obvious typos, not RFC 5322 conformance.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validate a candidate value against a field's schema.
///
/// Returns the ordered list of error messages; an empty list means the value
/// is acceptable. Never panics and never treats a validation failure as an
/// error value — failures are ordinary data.
///
/// # Examples
///
/// ```
/// use formcraft_core::{Field, FieldType, FormValue, validate};
///
/// let field = Field::new("f", FieldType::Email).required();
///
/// assert!(!validate(&field, &FormValue::Text(String::new())).is_empty());
/// assert!(validate(&field, &FormValue::Text("a@b.com".to_string())).is_empty());
/// ```
pub fn validate(field: &Field, value: &FormValue) -> Vec<String> {
	let mut errors = Vec::new();

	if field.required {
		check_required(field, value, &mut errors);
	}
	check_file_accept(field, value, &mut errors);
	check_structural(field, value, &mut errors);

	errors
}

/// Rule 1: type-aware required check.
fn check_required(field: &Field, value: &FormValue, errors: &mut Vec<String>) {
	match &field.field_type {
		FieldType::Checkbox => {
			if value.as_entries().is_none_or(<[String]>::is_empty) {
				errors.push("This field is required".to_string());
			}
		}
		FieldType::Select if field.is_multi_select() => {
			if value.as_entries().is_none_or(<[String]>::is_empty) {
				errors.push("This field is required".to_string());
			}
		}
		FieldType::File => {
			if value.as_file().is_none() {
				errors.push("Please select a file".to_string());
			}
		}
		FieldType::Location => {
			// report the first missing cascade level only
			let location = match value {
				FormValue::Location(location) => Some(location),
				_ => None,
			};
			let missing = match location {
				Some(location) if location.country.is_none() => "Please select a country",
				Some(location) if location.state.is_none() => "Please select a state",
				Some(location) if location.city.is_none() => "Please select a city",
				Some(_) => return,
				None => "Please select a country",
			};
			errors.push(missing.to_string());
		}
		FieldType::Phone => {
			let phone = match value {
				FormValue::Phone(phone) => Some(phone),
				_ => None,
			};
			match phone {
				Some(phone) if phone.country.as_deref().is_none_or(str::is_empty) => {
					errors.push("Please select a country code".to_string());
				}
				Some(phone) if phone.number.trim().is_empty() => {
					errors.push("Please enter a phone number".to_string());
				}
				Some(_) => {}
				None => errors.push("Please select a country code".to_string()),
			}
		}
		_ => {
			if value.as_text().is_none_or(|text| text.trim().is_empty()) {
				errors.push("This field is required".to_string());
			}
		}
	}
}

/// Rule 2: file-type filter against the comma-separated accept list.
fn check_file_accept(field: &Field, value: &FormValue, errors: &mut Vec<String>) {
	if field.field_type != FieldType::File {
		return;
	}
	let Some(handle) = value.as_file() else {
		return;
	};
	let Some(accept) = field
		.validation
		.as_ref()
		.and_then(|rules| rules.accept.as_deref())
		.filter(|accept| !accept.trim().is_empty())
	else {
		return;
	};

	let file_name = handle.name.to_lowercase();
	let accepted = accept.split(',').map(str::trim).any(|token| {
		if let Some(extension) = token.strip_prefix('.') {
			// dot token: case-insensitive filename suffix
			file_name.ends_with(&format!(".{}", extension.to_lowercase()))
		} else if token.contains('*') {
			// wildcard MIME: match the prefix before the slash
			match token.split('/').next() {
				Some(base) => handle.content_type.starts_with(&format!("{base}/")),
				None => false,
			}
		} else {
			handle.content_type == token
		}
	});

	if !accepted {
		errors.push(format!("File type not allowed. Accepted types: {accept}"));
	}
}

/// Rule 3: type-specific structural checks.
///
/// String-valued types are only checked once the value is non-blank (rule 1
/// handles emptiness); phone is checked whenever a number was entered.
fn check_structural(field: &Field, value: &FormValue, errors: &mut Vec<String>) {
	if field.field_type == FieldType::Phone {
		if let FormValue::Phone(phone) = value {
			check_phone_digits(field, phone, errors);
		}
		return;
	}

	let Some(text) = value.as_text().map(str::trim).filter(|text| !text.is_empty()) else {
		return;
	};

	match &field.field_type {
		FieldType::Email => {
			if !EMAIL_REGEX.is_match(text) {
				errors.push("Please enter a valid email address".to_string());
			}
		}
		FieldType::Number => {
			match text.parse::<f64>() {
				Ok(number) if number.is_finite() => {
					let rules = field.validation.as_ref();
					if let Some(min) = rules.and_then(|rules| rules.min)
						&& number < min
					{
						errors.push(format!("Value must be at least {min}"));
					}
					if let Some(max) = rules.and_then(|rules| rules.max)
						&& number > max
					{
						errors.push(format!("Value must be at most {max}"));
					}
				}
				_ => errors.push("Please enter a valid number".to_string()),
			}
		}
		FieldType::Text | FieldType::Textarea => {
			// invalid patterns are skipped (and logged) inside compiled_pattern
			if let Some(regex) = field
				.validation
				.as_ref()
				.and_then(|rules| rules.compiled_pattern())
				&& !regex.is_match(text)
			{
				errors.push("Value does not match the required pattern".to_string());
			}
		}
		_ => {}
	}
}

/// Phone digit-count check: strip non-digits, then compare against the
/// explicit `minLength`/`maxLength` bounds or the country's canonical length.
fn check_phone_digits(field: &Field, phone: &PhoneValue, errors: &mut Vec<String>) {
	if phone.number.trim().is_empty() {
		// emptiness is rule 1's concern
		return;
	}
	let digits = phone.number.chars().filter(char::is_ascii_digit).count();
	let rules = field.validation.as_ref();
	let explicit_min = rules.and_then(|rules| rules.min_length);
	let explicit_max = rules.and_then(|rules| rules.max_length);
	let country = phone
		.country
		.as_deref()
		.and_then(refdata::phone_country);

	let (min, max) = match (explicit_min, explicit_max) {
		(None, None) => match country {
			Some(country) => (Some(country.digits), Some(country.digits)),
			None => return,
		},
		bounds => bounds,
	};

	let in_range = min.is_none_or(|min| digits >= min) && max.is_none_or(|max| digits <= max);
	if in_range {
		return;
	}

	match (min, max) {
		(Some(min), Some(max)) if min == max => {
			let message = match country {
				Some(country) => format!(
					"Phone number must be exactly {min} digits for {}",
					country.label
				),
				None => format!("Phone number must be exactly {min} digits"),
			};
			errors.push(message);
		}
		(Some(min), Some(max)) => {
			errors.push(format!("Phone number must be between {min} and {max} digits"));
		}
		(Some(min), None) => {
			errors.push(format!("Phone number must be at least {min} digits"));
		}
		(None, Some(max)) => {
			errors.push(format!("Phone number must be at most {max} digits"));
		}
		(None, None) => {}
	}
}
