//! # formcraft
//!
//! The core of a visual form builder: compose a form from typed fields,
//! validate submitted values, export the result as JSON Schema or generated
//! component source, and share the whole form as a self-contained URL token.
//!
//! The view layer (drag-and-drop, styling, page routing) lives outside this
//! workspace; everything here is the logic it calls into.
//!
//! ## Crates
//!
//! - [`core`] — field schema, form model, validation engine, reference data
//! - [`share`] — share tokens, public links, submission storage
//! - [`export`] — JSON Schema, default values, generated component source
//!
//! ## Quick start
//!
//! ```
//! use formcraft::{FieldPatch, FieldType, FormModel, FormValue, validate};
//!
//! let mut form = FormModel::new();
//! let email = form.add_field(FieldType::Email);
//! form.update_field(&email.id, FieldPatch::new().required(true))?;
//!
//! let field = form.get_field(&email.id).unwrap();
//! assert!(validate(field, &FormValue::Text("a@b.com".into())).is_empty());
//!
//! let token = formcraft::share::encode(&formcraft::share::SharePayload::new(
//! 	form.fields().to_vec(),
//! ))
//! .unwrap();
//! assert!(!token.is_empty());
//! # Ok::<(), formcraft::FormError>(())
//! ```

pub mod core {
	pub use formcraft_core::*;
}

pub mod share {
	pub use formcraft_share::*;
}

pub mod export {
	pub use formcraft_export::*;
}

pub use formcraft_core::{
	Control, Field, FieldPatch, FieldType, FormError, FormModel, FormResult, FormValue,
	PALETTE, ValidationRules, validate,
};
pub use formcraft_export::{default_values, json_schema, react_component};
pub use formcraft_share::{SharePayload, decode, decode_or_none, encode, share_url};
