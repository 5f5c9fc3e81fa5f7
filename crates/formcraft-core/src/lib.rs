//! Core model for building and filling out dynamic forms.
//!
//! A form is an ordered list of [`Field`]s, each carrying a [`FieldType`],
//! display metadata, and optional [`ValidationRules`]. [`FormModel`] owns the
//! list and provides the only supported mutation surface (add, update, move,
//! delete, option edits). [`validate`] checks a candidate [`FormValue`]
//! against a field and returns plain error strings.
//!
//! # Examples
//!
//! ```
//! use formcraft_core::{FieldPatch, FieldType, FormModel, FormValue, validate};
//!
//! let mut form = FormModel::new();
//! form.set_title("Contact Us");
//! let field = form.add_field(FieldType::Email);
//! form.update_field(&field.id, FieldPatch::new().required(true))?;
//!
//! let errors = validate(form.get_field(&field.id).unwrap(), &FormValue::Text("".into()));
//! assert_eq!(errors, vec!["This field is required"]);
//! # Ok::<(), formcraft_core::FormError>(())
//! ```

pub mod field;
pub mod form;
pub mod refdata;
pub mod validate;
pub mod value;

pub use field::{Control, Field, FieldType, PALETTE, ValidationRules, default_options};
pub use form::{FieldPatch, FormError, FormModel, FormResult};
pub use refdata::{DEFAULT_PHONE_COUNTRY, LOCATIONS, PHONE_COUNTRIES, PhoneCountry};
pub use validate::validate;
pub use value::{FileHandle, FormValue, LocationValue, PhoneValue};
