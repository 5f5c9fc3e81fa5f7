//! Runtime values bound to fields during preview and submission

use crate::field::{Field, FieldType};
use serde::{Deserialize, Serialize};

/// Opaque handle for an uploaded file.
///
/// Carries exactly what the accept-filter needs: the filename (for
/// dot-extension matching) and the MIME type (for exact and wildcard
/// matching). File contents never pass through the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
	pub name: String,
	#[serde(rename = "type")]
	pub content_type: String,
}

impl FileHandle {
	pub fn new(name: impl Into<String>, content_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			content_type: content_type.into(),
		}
	}
}

/// A phone value: country code plus the locally formatted number.
///
/// Switching country preserves the entered number; only the location cascade
/// clears downstream levels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhoneValue {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	pub number: String,
}

/// A location value: forward-cascading country → state → city selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationValue {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
}

impl LocationValue {
	/// Select a country, resetting state and city.
	pub fn select_country(&mut self, country: impl Into<String>) {
		self.country = Some(country.into());
		self.state = None;
		self.city = None;
	}

	/// Select a state, resetting city.
	pub fn select_state(&mut self, state: impl Into<String>) {
		self.state = Some(state.into());
		self.city = None;
	}

	pub fn select_city(&mut self, city: impl Into<String>) {
		self.city = Some(city.into());
	}
}

/// The run-time value that can be bound to a field.
///
/// Serializes in the shapes submission records use: a bare string, an array
/// of strings, `null`/an object for files, and structured objects for phone
/// and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
	/// Scalar for text, email, number, textarea, datetime, single select,
	/// and radio.
	Text(String),
	/// Set-as-array for checkbox groups and multi-selects.
	Entries(Vec<String>),
	/// Phone object; listed before `Location` so `{country, number}`
	/// deserializes as a phone.
	Phone(PhoneValue),
	/// File handle, or `None` when nothing was chosen.
	File(Option<FileHandle>),
	/// Location cascade object.
	Location(LocationValue),
}

impl FormValue {
	/// The type-appropriate empty value for an unset field.
	///
	/// This is the one canonical default derivation, shared by model
	/// initialization, the exporters, and the public submission flow.
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_core::{Field, FieldType, FormValue};
	///
	/// let checkbox = Field::new("f", FieldType::Checkbox);
	/// assert_eq!(FormValue::default_for(&checkbox), FormValue::Entries(vec![]));
	///
	/// let file = Field::new("f", FieldType::File);
	/// assert_eq!(FormValue::default_for(&file), FormValue::File(None));
	/// ```
	pub fn default_for(field: &Field) -> Self {
		match &field.field_type {
			FieldType::Checkbox => Self::Entries(Vec::new()),
			FieldType::Select if field.is_multi_select() => Self::Entries(Vec::new()),
			FieldType::File => Self::File(None),
			FieldType::Location => Self::Location(LocationValue::default()),
			FieldType::Phone => Self::Phone(PhoneValue::default()),
			FieldType::Text
			| FieldType::Email
			| FieldType::Number
			| FieldType::Textarea
			| FieldType::Select
			| FieldType::Radio
			| FieldType::Datetime
			| FieldType::Unknown(_) => Self::Text(String::new()),
		}
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	pub fn as_entries(&self) -> Option<&[String]> {
		match self {
			Self::Entries(entries) => Some(entries),
			_ => None,
		}
	}

	pub fn as_file(&self) -> Option<&FileHandle> {
		match self {
			Self::File(handle) => handle.as_ref(),
			_ => None,
		}
	}
}
