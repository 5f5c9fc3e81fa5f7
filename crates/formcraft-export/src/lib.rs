//! Export surfaces for formcraft forms.
//!
//! Three textual artifacts, each a pure function of the form model: a JSON
//! Schema description, a default-values object, and generated form component
//! source. All exports are total; a form that the builder can represent can
//! always be exported.
//!
//! # Examples
//!
//! ```
//! use formcraft_core::{FieldType, FormModel};
//! use formcraft_export::{json_schema, react_component};
//!
//! let mut form = FormModel::new();
//! form.add_field(FieldType::Text);
//!
//! let schema = json_schema(&form);
//! assert_eq!(schema["type"], "object");
//! assert!(react_component(&form).contains("export function GeneratedForm()"));
//! ```

pub mod codegen;
pub mod schema;

pub use codegen::react_component;
pub use schema::{default_values, field_config_json, json_schema, json_schema_text};
