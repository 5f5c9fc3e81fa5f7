//! Field schema: the data contract for a single form field

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Closed enumeration of the field types the builder palette offers.
///
/// Serializes to the lowercase tag the share-token and export formats use
/// (`"text"`, `"datetime"`, ...). A token produced by a newer builder may
/// carry a type string outside this set; such fields deserialize as
/// [`FieldType::Unknown`] and degrade to a generic input instead of failing
/// the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
	Text,
	Email,
	Phone,
	Number,
	Textarea,
	Select,
	Checkbox,
	Radio,
	File,
	Datetime,
	Location,
	#[serde(untagged)]
	Unknown(String),
}

/// The palette of addable field types, in display order.
pub const PALETTE: [FieldType; 11] = [
	FieldType::Text,
	FieldType::Email,
	FieldType::Phone,
	FieldType::Number,
	FieldType::Textarea,
	FieldType::Select,
	FieldType::Checkbox,
	FieldType::Radio,
	FieldType::File,
	FieldType::Datetime,
	FieldType::Location,
];

impl FieldType {
	/// Whether this type carries a finite list of choices.
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_core::FieldType;
	///
	/// assert!(FieldType::Select.needs_options());
	/// assert!(FieldType::Checkbox.needs_options());
	/// assert!(!FieldType::Text.needs_options());
	/// ```
	pub fn needs_options(&self) -> bool {
		matches!(self, Self::Select | Self::Checkbox | Self::Radio)
	}

	/// The lowercase tag used in serialized fields and generated code.
	pub fn name(&self) -> &str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Phone => "phone",
			Self::Number => "number",
			Self::Textarea => "textarea",
			Self::Select => "select",
			Self::Checkbox => "checkbox",
			Self::Radio => "radio",
			Self::File => "file",
			Self::Datetime => "datetime",
			Self::Location => "location",
			Self::Unknown(name) => name,
		}
	}

	/// The type-derived default label: the tag with its first letter
	/// upper-cased, followed by `" Field"`.
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_core::FieldType;
	///
	/// assert_eq!(FieldType::Text.default_label(), "Text Field");
	/// assert_eq!(FieldType::Datetime.default_label(), "Datetime Field");
	/// ```
	pub fn default_label(&self) -> String {
		let name = self.name();
		let mut chars = name.chars();
		match chars.next() {
			Some(first) => format!("{}{} Field", first.to_uppercase(), chars.as_str()),
			None => "Field".to_string(),
		}
	}
}

impl std::fmt::Display for FieldType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Per-field validation configuration. Absent keys mean "no constraint".
///
/// `pattern` is stored as source text plus a precomputed validity flag;
/// a compiled regex is never part of persisted or exported state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRules {
	/// Inclusive numeric/date lower bound.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,
	/// Inclusive numeric/date upper bound.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max: Option<f64>,
	/// Regex source for text/textarea fields.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pattern: Option<String>,
	/// Whether `pattern` currently compiles; recomputed on every pattern edit.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pattern_valid: Option<bool>,
	/// Multi-select for `select`, multi-file for `file`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub multiple: Option<bool>,
	/// Comma-separated MIME types / dot-extensions for `file`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub accept: Option<String>,
	/// Phone digit-count lower bound.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_length: Option<usize>,
	/// Phone digit-count upper bound.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_length: Option<usize>,
}

impl ValidationRules {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the pattern source and recompute its validity flag.
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_core::ValidationRules;
	///
	/// let rules = ValidationRules::new().with_pattern("^[A-Za-z]+$");
	/// assert_eq!(rules.pattern_valid, Some(true));
	///
	/// let rules = ValidationRules::new().with_pattern("([unclosed");
	/// assert_eq!(rules.pattern_valid, Some(false));
	/// ```
	pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
		self.set_pattern(pattern.into());
		self
	}

	pub fn set_pattern(&mut self, pattern: String) {
		let trimmed = pattern.trim();
		self.pattern_valid = if trimmed.is_empty() {
			None
		} else {
			Some(Regex::new(trimmed).is_ok())
		};
		self.pattern = Some(pattern);
	}

	pub fn with_min(mut self, min: f64) -> Self {
		self.min = Some(min);
		self
	}

	pub fn with_max(mut self, max: f64) -> Self {
		self.max = Some(max);
		self
	}

	pub fn with_multiple(mut self, multiple: bool) -> Self {
		self.multiple = Some(multiple);
		self
	}

	pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
		self.accept = Some(accept.into());
		self
	}

	pub fn with_length_bounds(mut self, min: usize, max: usize) -> Self {
		self.min_length = Some(min);
		self.max_length = Some(max);
		self
	}

	pub fn is_multiple(&self) -> bool {
		self.multiple.unwrap_or(false)
	}

	/// Compile the configured pattern, if any.
	///
	/// Returns `None` for an absent, blank, or malformed pattern. A malformed
	/// pattern is a deliberate leniency: it is logged and skipped, never
	/// surfaced as a user-facing validation error.
	pub fn compiled_pattern(&self) -> Option<Regex> {
		let source = self.pattern.as_deref()?.trim();
		if source.is_empty() {
			return None;
		}
		match Regex::new(source) {
			Ok(regex) => Some(regex),
			Err(err) => {
				tracing::warn!(pattern = source, %err, "ignoring invalid regex pattern");
				None
			}
		}
	}
}

/// The control a renderer should draw for a field.
///
/// This is the renderer contract's half of the type dispatch: the validator
/// and this mapping must stay in sync, so both match exhaustively on
/// [`FieldType`]. Types outside the closed set map to [`Control::Unknown`],
/// which renders a visible generic fallback rather than faulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
	TextInput,
	EmailInput,
	PhoneInput,
	NumberInput,
	TextArea,
	SelectSingle,
	SelectMultiple,
	CheckboxGroup,
	RadioGroup,
	FileInput,
	DateTimeInput,
	LocationCascade,
	Unknown,
}

/// One configurable input unit in a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
	/// Unique within a form model, immutable once created.
	pub id: String,
	#[serde(rename = "type")]
	pub field_type: FieldType,
	pub label: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub placeholder: Option<String>,
	#[serde(default)]
	pub required: bool,
	/// Present and non-empty exactly when `field_type.needs_options()`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub validation: Option<ValidationRules>,
}

impl Field {
	/// Create a field with the type-derived default label and no constraints.
	///
	/// Options-bearing types are seeded with the three default options, so a
	/// freshly created field always satisfies the options invariant.
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_core::{Field, FieldType};
	///
	/// let field = Field::new("field-1", FieldType::Select);
	/// assert_eq!(field.label, "Select Field");
	/// assert_eq!(
	/// 	field.options.as_deref(),
	/// 	Some(["Option 1", "Option 2", "Option 3"].map(String::from).as_slice()),
	/// );
	///
	/// let field = Field::new("field-2", FieldType::Text);
	/// assert!(field.options.is_none());
	/// ```
	pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
		let options = field_type.needs_options().then(default_options);
		Self {
			id: id.into(),
			label: field_type.default_label(),
			field_type,
			placeholder: None,
			required: false,
			options,
			validation: None,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_options(mut self, options: Vec<String>) -> Self {
		self.options = Some(options);
		self
	}

	pub fn with_validation(mut self, validation: ValidationRules) -> Self {
		self.validation = Some(validation);
		self
	}

	/// Whether the field is a multi-valued select.
	pub fn is_multi_select(&self) -> bool {
		self.field_type == FieldType::Select
			&& self.validation.as_ref().is_some_and(ValidationRules::is_multiple)
	}

	/// The control this field asks a renderer to draw.
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_core::{Control, Field, FieldType, ValidationRules};
	///
	/// let field = Field::new("f", FieldType::Select)
	/// 	.with_validation(ValidationRules::new().with_multiple(true));
	/// assert_eq!(field.control(), Control::SelectMultiple);
	/// ```
	pub fn control(&self) -> Control {
		match &self.field_type {
			FieldType::Text => Control::TextInput,
			FieldType::Email => Control::EmailInput,
			FieldType::Phone => Control::PhoneInput,
			FieldType::Number => Control::NumberInput,
			FieldType::Textarea => Control::TextArea,
			FieldType::Select => {
				if self.is_multi_select() {
					Control::SelectMultiple
				} else {
					Control::SelectSingle
				}
			}
			FieldType::Checkbox => Control::CheckboxGroup,
			FieldType::Radio => Control::RadioGroup,
			FieldType::File => Control::FileInput,
			FieldType::Datetime => Control::DateTimeInput,
			FieldType::Location => Control::LocationCascade,
			FieldType::Unknown(_) => Control::Unknown,
		}
	}

	/// The non-blank options a renderer or exporter should offer.
	pub fn visible_options(&self) -> Vec<&str> {
		self.options
			.as_deref()
			.unwrap_or_default()
			.iter()
			.map(String::as_str)
			.filter(|option| !option.trim().is_empty())
			.collect()
	}
}

/// The three options seeded onto a freshly created options-bearing field.
pub fn default_options() -> Vec<String> {
	vec![
		"Option 1".to_string(),
		"Option 2".to_string(),
		"Option 3".to_string(),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldType::Text, "text")]
	#[case(FieldType::Email, "email")]
	#[case(FieldType::Datetime, "datetime")]
	#[case(FieldType::Location, "location")]
	fn test_field_type_serializes_to_lowercase_tag(#[case] field_type: FieldType, #[case] tag: &str) {
		// Act
		let json = serde_json::to_value(&field_type).unwrap();

		// Assert
		assert_eq!(json, serde_json::json!(tag));
	}

	#[rstest]
	fn test_unknown_field_type_round_trips() {
		// Arrange
		let json = serde_json::json!("rating");

		// Act
		let field_type: FieldType = serde_json::from_value(json.clone()).unwrap();

		// Assert
		assert_eq!(field_type, FieldType::Unknown("rating".to_string()));
		assert_eq!(serde_json::to_value(&field_type).unwrap(), json);
	}

	#[rstest]
	fn test_unknown_field_type_maps_to_fallback_control() {
		// Arrange
		let field = Field::new("f", FieldType::Unknown("rating".to_string()));

		// Act & Assert
		assert_eq!(field.control(), Control::Unknown);
	}

	#[rstest]
	fn test_set_pattern_recomputes_validity() {
		// Arrange
		let mut rules = ValidationRules::new().with_pattern("^[a-z]+$");
		assert_eq!(rules.pattern_valid, Some(true));

		// Act
		rules.set_pattern("([broken".to_string());

		// Assert
		assert_eq!(rules.pattern_valid, Some(false));
		assert!(rules.compiled_pattern().is_none());
	}

	#[rstest]
	fn test_blank_pattern_has_no_validity_flag() {
		// Arrange & Act
		let rules = ValidationRules::new().with_pattern("   ");

		// Assert
		assert_eq!(rules.pattern_valid, None);
		assert!(rules.compiled_pattern().is_none());
	}

	#[rstest]
	fn test_validation_rules_serialize_as_camel_case() {
		// Arrange
		let rules = ValidationRules::new().with_length_bounds(7, 10);

		// Act
		let json = serde_json::to_value(&rules).unwrap();

		// Assert
		assert_eq!(json, serde_json::json!({ "minLength": 7, "maxLength": 10 }));
	}

	#[rstest]
	fn test_field_serializes_type_tag_and_skips_absent_keys() {
		// Arrange
		let field = Field::new("field-1", FieldType::Text);

		// Act
		let json = serde_json::to_value(&field).unwrap();

		// Assert
		assert_eq!(
			json,
			serde_json::json!({
				"id": "field-1",
				"type": "text",
				"label": "Text Field",
				"required": false,
			})
		);
	}

	#[rstest]
	fn test_visible_options_filters_blank_entries() {
		// Arrange
		let field = Field::new("f", FieldType::Select).with_options(vec![
			"A".to_string(),
			"  ".to_string(),
			String::new(),
			"B".to_string(),
		]);

		// Act & Assert
		assert_eq!(field.visible_options(), vec!["A", "B"]);
	}
}
