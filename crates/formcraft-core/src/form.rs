//! Form model: the ordered field list a builder session owns

use crate::field::{Field, FieldType, ValidationRules, default_options};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("no field with id `{0}`")]
	UnknownField(String),
	#[error("move from {from} to {to} is out of range for {len} fields")]
	IndexOutOfRange { from: usize, to: usize, len: usize },
	#[error("field `{0}` must keep at least one option")]
	OptionsRequired(String),
	#[error("field `{0}` does not carry options")]
	OptionsNotSupported(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// A partial update merged into one field.
///
/// Unset members leave the field untouched; the model applies a type change
/// before anything else so option seeding/clearing sees the final type.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
	pub field_type: Option<FieldType>,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub required: Option<bool>,
	pub options: Option<Vec<String>>,
	pub validation: Option<ValidationRules>,
}

impl FieldPatch {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn field_type(mut self, field_type: FieldType) -> Self {
		self.field_type = Some(field_type);
		self
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn required(mut self, required: bool) -> Self {
		self.required = Some(required);
		self
	}

	pub fn options(mut self, options: Vec<String>) -> Self {
		self.options = Some(options);
		self
	}

	pub fn validation(mut self, validation: ValidationRules) -> Self {
		self.validation = Some(validation);
		self
	}
}

/// The ordered collection of fields a session is building.
///
/// Order is significant: it defines render and submission order. The model
/// owns field identity and enforces the schema invariants (pairwise-unique
/// ids; options present and non-empty exactly for options-bearing types)
/// after every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
	title: Option<String>,
	description: Option<String>,
	fields: Vec<Field>,
}

impl FormModel {
	/// Create an empty model.
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_core::FormModel;
	///
	/// let form = FormModel::new();
	/// assert!(form.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Rebuild a model from an existing field list, e.g. a decoded share
	/// payload. Fields keep their ids; no invariant re-checking happens here
	/// beyond what deserialization guarantees.
	pub fn from_fields(fields: Vec<Field>) -> Self {
		Self {
			title: None,
			description: None,
			fields,
		}
	}

	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = Some(title.into());
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	pub fn set_description(&mut self, description: impl Into<String>) {
		self.description = Some(description.into());
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn get_field(&self, id: &str) -> Option<&Field> {
		self.fields.iter().find(|field| field.id == id)
	}

	/// Append a new field of the given type and return it.
	///
	/// The field gets a fresh unique id, the type-derived default label,
	/// `required = false`, and three seeded options when the type carries
	/// options. The returned clone is what a builder UI selects.
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_core::{FieldType, FormModel};
	///
	/// let mut form = FormModel::new();
	/// let field = form.add_field(FieldType::Radio);
	/// assert_eq!(field.label, "Radio Field");
	/// assert_eq!(field.options.as_ref().map(Vec::len), Some(3));
	/// assert_eq!(form.len(), 1);
	/// ```
	pub fn add_field(&mut self, field_type: FieldType) -> Field {
		let field = Field::new(new_field_id(), field_type);
		self.fields.push(field.clone());
		field
	}

	/// Merge a partial update into the field with the given id.
	///
	/// A type change away from an options-bearing type clears `options`; a
	/// change into one seeds the three defaults when none exist. Patched
	/// validation recomputes the pattern validity flag.
	pub fn update_field(&mut self, id: &str, patch: FieldPatch) -> FormResult<()> {
		let field = self
			.fields
			.iter_mut()
			.find(|field| field.id == id)
			.ok_or_else(|| FormError::UnknownField(id.to_string()))?;

		if let Some(field_type) = patch.field_type {
			if field_type.needs_options() {
				if field.options.is_none() {
					field.options = Some(default_options());
				}
			} else {
				field.options = None;
			}
			field.field_type = field_type;
		}
		if let Some(label) = patch.label {
			field.label = label;
		}
		if let Some(placeholder) = patch.placeholder {
			field.placeholder = Some(placeholder);
		}
		if let Some(required) = patch.required {
			field.required = required;
		}
		if let Some(options) = patch.options {
			if !field.field_type.needs_options() {
				return Err(FormError::OptionsNotSupported(field.id.clone()));
			}
			if options.is_empty() {
				return Err(FormError::OptionsRequired(field.id.clone()));
			}
			field.options = Some(options);
		}
		if let Some(mut validation) = patch.validation {
			if let Some(pattern) = validation.pattern.take() {
				validation.set_pattern(pattern);
			}
			field.validation = Some(validation);
		}
		Ok(())
	}

	/// Remove the field with the given id, returning it. Absent ids are a
	/// no-op returning `None`, so deletion is idempotent.
	pub fn delete_field(&mut self, id: &str) -> Option<Field> {
		let pos = self.fields.iter().position(|field| field.id == id)?;
		Some(self.fields.remove(pos))
	}

	/// Move the field at `from` so it ends up at index `to` (splice
	/// semantics: remove, then reinsert into the remaining sequence).
	///
	/// Out-of-range indices are a reported error, never a silent clamp.
	///
	/// # Examples
	///
	/// ```
	/// use formcraft_core::{FieldType, FormModel};
	///
	/// let mut form = FormModel::new();
	/// for _ in 0..4 {
	/// 	form.add_field(FieldType::Text);
	/// }
	/// let first = form.fields()[0].id.clone();
	///
	/// form.move_field(0, 2).unwrap();
	/// assert_eq!(form.fields()[2].id, first);
	/// assert!(form.move_field(0, 4).is_err());
	/// ```
	pub fn move_field(&mut self, from: usize, to: usize) -> FormResult<()> {
		let len = self.fields.len();
		if from >= len || to >= len {
			return Err(FormError::IndexOutOfRange { from, to, len });
		}
		let field = self.fields.remove(from);
		self.fields.insert(to, field);
		Ok(())
	}

	/// Append an option to an options-bearing field.
	pub fn add_option(&mut self, id: &str, option: impl Into<String>) -> FormResult<()> {
		let field = self.options_field_mut(id)?;
		field
			.options
			.get_or_insert_with(Vec::new)
			.push(option.into());
		Ok(())
	}

	/// Replace the option at `index`.
	pub fn update_option(&mut self, id: &str, index: usize, option: impl Into<String>) -> FormResult<()> {
		let field = self.options_field_mut(id)?;
		let len = field.options.as_ref().map_or(0, Vec::len);
		match field.options.as_mut().and_then(|options| options.get_mut(index)) {
			Some(slot) => {
				*slot = option.into();
				Ok(())
			}
			None => Err(FormError::IndexOutOfRange {
				from: index,
				to: index,
				len,
			}),
		}
	}

	/// Remove the option at `index`. Removing the last remaining option is
	/// refused: an options-bearing field must keep at least one.
	pub fn remove_option(&mut self, id: &str, index: usize) -> FormResult<()> {
		let field = self.options_field_mut(id)?;
		let options = field.options.get_or_insert_with(Vec::new);
		if index >= options.len() {
			return Err(FormError::IndexOutOfRange {
				from: index,
				to: index,
				len: options.len(),
			});
		}
		if options.len() == 1 {
			return Err(FormError::OptionsRequired(field.id.clone()));
		}
		options.remove(index);
		Ok(())
	}

	fn options_field_mut(&mut self, id: &str) -> FormResult<&mut Field> {
		let field = self
			.fields
			.iter_mut()
			.find(|field| field.id == id)
			.ok_or_else(|| FormError::UnknownField(id.to_string()))?;
		if !field.field_type.needs_options() {
			return Err(FormError::OptionsNotSupported(field.id.clone()));
		}
		Ok(field)
	}
}

/// Fresh collision-free field id.
fn new_field_id() -> String {
	format!("field-{}", Uuid::new_v4().simple())
}
