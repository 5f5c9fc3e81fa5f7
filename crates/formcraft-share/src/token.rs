//! Share token codec
//!
//! A share token is the whole form definition serialized to JSON,
//! percent-encoded, then packed into URL-safe base64 without padding. The
//! token carries everything a public form page needs to render; there is no
//! server-side lookup behind it.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use formcraft_core::Field;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Percent-encode everything except the characters JavaScript's
// encodeURIComponent leaves alone, so tokens stay interchangeable with ones
// minted by the web client.
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Errors raised while decoding a share token.
#[derive(Debug, Error)]
pub enum TokenError {
	#[error("invalid base64: {0}")]
	Base64(#[from] base64::DecodeError),
	#[error("token is not valid UTF-8")]
	Utf8(#[from] std::str::Utf8Error),
	#[error("invalid form payload: {0}")]
	Payload(#[from] serde_json::Error),
}

/// Everything a shared form carries: display metadata plus the field list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SharePayload {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub fields: Vec<Field>,
}

impl SharePayload {
	pub fn new(fields: Vec<Field>) -> Self {
		Self { title: None, description: None, fields }
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

/// Encode a payload into a URL-safe share token.
///
/// # Examples
///
/// ```
/// use formcraft_share::{SharePayload, encode, decode};
///
/// let payload = SharePayload::new(vec![]).with_title("Survey");
/// let token = encode(&payload).unwrap();
/// assert_eq!(decode(&token).unwrap(), payload);
/// ```
pub fn encode(payload: &SharePayload) -> Result<String, TokenError> {
	let json = serde_json::to_string(payload)?;
	let escaped = utf8_percent_encode(&json, COMPONENT_SET).to_string();
	Ok(URL_SAFE_NO_PAD.encode(escaped.as_bytes()))
}

/// Decode a share token back into a payload.
///
/// Fails on malformed base64, broken percent-escapes, or JSON that does not
/// describe a form. Unrecognized field type strings are NOT an error; they
/// decode as passthrough types so newer builders stay readable.
pub fn decode(token: &str) -> Result<SharePayload, TokenError> {
	let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
	let escaped = std::str::from_utf8(&bytes)?;
	let json = percent_decode_str(escaped).decode_utf8()?;
	Ok(serde_json::from_str(&json)?)
}

/// Decode a token, logging and swallowing failures.
///
/// Public pages use this: a corrupt or truncated link renders a "form not
/// found" state rather than an error page.
pub fn decode_or_none(token: &str) -> Option<SharePayload> {
	match decode(token) {
		Ok(payload) => Some(payload),
		Err(error) => {
			tracing::error!(%error, "failed to decode share token");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use formcraft_core::{FieldType, FormModel, ValidationRules};
	use proptest::collection::vec;
	use proptest::option;
	use proptest::prelude::*;
	use rstest::rstest;

	fn sample_payload() -> SharePayload {
		let mut form = FormModel::new();
		form.add_field(FieldType::Text);
		form.add_field(FieldType::Select);
		SharePayload::new(form.fields().to_vec())
			.with_title("Feedback")
			.with_description("Tell us what you think")
	}

	#[rstest]
	fn test_round_trip_preserves_payload() {
		// Arrange
		let payload = sample_payload();

		// Act
		let token = encode(&payload).unwrap();
		let decoded = decode(&token).unwrap();

		// Assert
		assert_eq!(decoded, payload);
	}

	#[rstest]
	fn test_token_is_url_safe() {
		// Arrange: unicode + regex metacharacters force escaping
		let mut form = FormModel::new();
		let field = form.add_field(FieldType::Text);
		form.update_field(
			&field.id,
			formcraft_core::FieldPatch::new()
				.label("名前 / name?")
				.validation(ValidationRules::new().with_pattern("^[a-z&=+ ]+$")),
		)
		.unwrap();
		let payload = SharePayload::new(form.fields().to_vec());

		// Act
		let token = encode(&payload).unwrap();

		// Assert
		assert!(
			token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
			"token contains non-URL-safe characters: {token}"
		);
		assert_eq!(decode(&token).unwrap(), payload);
	}

	#[rstest]
	#[case("not base64 at all!!")]
	#[case("////")]
	#[case("aGVsbG8")] // valid base64, not a form payload
	fn test_decode_or_none_swallows_garbage(#[case] token: &str) {
		// Act & Assert
		assert!(decode_or_none(token).is_none());
	}

	#[rstest]
	fn test_unknown_field_type_survives_decoding() {
		// Arrange: a token minted by a builder with a field type we never heard of
		let json = r#"{"fields":[{"id":"f1","type":"rating","label":"Rate us","required":false}]}"#;
		let escaped = utf8_percent_encode(json, COMPONENT_SET).to_string();
		let token = URL_SAFE_NO_PAD.encode(escaped.as_bytes());

		// Act
		let payload = decode(&token).unwrap();

		// Assert
		assert_eq!(
			payload.fields[0].field_type,
			FieldType::Unknown("rating".to_string())
		);
	}

	fn field_type_strategy() -> impl Strategy<Value = FieldType> {
		prop_oneof![
			Just(FieldType::Text),
			Just(FieldType::Email),
			Just(FieldType::Phone),
			Just(FieldType::Number),
			Just(FieldType::Textarea),
			Just(FieldType::Select),
			Just(FieldType::Checkbox),
			Just(FieldType::Radio),
			Just(FieldType::File),
			Just(FieldType::Datetime),
			Just(FieldType::Location),
		]
	}

	fn rules_strategy() -> impl Strategy<Value = ValidationRules> {
		(
			option::of(0.0f64..50.0),
			option::of(50.0f64..100.0),
			any::<bool>(),
			option::of("[a-z\\[\\]+*]{1,8}"),
		)
			.prop_map(|(min, max, multiple, pattern)| {
				let mut rules = ValidationRules::new();
				rules.min = min;
				rules.max = max;
				if multiple {
					rules.multiple = Some(true);
				}
				if let Some(pattern) = pattern {
					rules.set_pattern(pattern);
				}
				rules
			})
	}

	// Arbitrary field lists that satisfy the schema invariants: unique ids,
	// options present and non-empty exactly for options-bearing types.
	fn fields_strategy() -> impl Strategy<Value = Vec<formcraft_core::Field>> {
		vec(
			(
				field_type_strategy(),
				"[A-Za-z0-9 /?&=名]{0,12}",
				any::<bool>(),
				0usize..3,
				option::of(rules_strategy()),
			),
			0..6,
		)
		.prop_map(|specs| {
			specs
				.into_iter()
				.enumerate()
				.map(|(index, (field_type, label, required, extra_options, rules))| {
					let mut field =
						formcraft_core::Field::new(format!("field-{index}"), field_type)
							.with_label(label);
					if required {
						field = field.required();
					}
					if let Some(rules) = rules {
						field = field.with_validation(rules);
					}
					if let Some(options) = field.options.as_mut() {
						for n in 0..extra_options {
							options.push(format!("Choice {n}"));
						}
					}
					field
				})
				.collect()
		})
	}

	proptest! {
		#[test]
		fn prop_title_round_trips(title in "\\PC*") {
			let payload = SharePayload::new(vec![]).with_title(title.as_str());

			let token = encode(&payload).unwrap();

			prop_assert_eq!(decode(&token).unwrap(), payload);
		}

		#[test]
		fn prop_any_field_list_round_trips(
			fields in fields_strategy(),
			title in proptest::option::of("[ -~]{0,16}"),
		) {
			let mut payload = SharePayload::new(fields);
			payload.title = title;

			let token = encode(&payload).unwrap();

			prop_assert_eq!(decode(&token).unwrap(), payload);
		}
	}
}

