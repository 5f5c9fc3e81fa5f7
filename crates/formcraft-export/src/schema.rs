//! Schema and default-value exports
//!
//! Every export here is a total, pure function of the form model. Nothing in
//! a form can make an export fail; questionable inputs (an invalid regex
//! pattern) degrade to an omitted key with a log line.

use formcraft_core::{FieldType, FormModel, FormValue};
use serde_json::{Map, Value, json};

/// The type-appropriate empty value for every field, keyed by field id.
///
/// This is the object a submission's value set starts from.
///
/// # Examples
///
/// ```
/// use formcraft_core::{FieldType, FormModel};
/// use formcraft_export::default_values;
///
/// let mut form = FormModel::new();
/// let checkbox = form.add_field(FieldType::Checkbox);
///
/// let defaults = default_values(&form);
/// assert_eq!(defaults[&checkbox.id], serde_json::json!([]));
/// ```
pub fn default_values(form: &FormModel) -> Value {
	let map: Map<String, Value> = form
		.fields()
		.iter()
		.map(|field| {
			let default = serde_json::to_value(FormValue::default_for(field))
				.unwrap_or(Value::Null);
			(field.id.clone(), default)
		})
		.collect();
	Value::Object(map)
}

/// Describe the form as a JSON-Schema-like object.
///
/// Property shape follows the field type: `number` maps to a numeric schema,
/// checkbox groups and multi-selects map to unique string arrays, everything
/// else maps to a string schema with an `enum` when the field has options.
pub fn json_schema(form: &FormModel) -> Value {
	let mut properties = Map::new();
	for field in form.fields() {
		properties.insert(field.id.clone(), property_schema(field));
	}
	let required: Vec<Value> = form
		.fields()
		.iter()
		.filter(|field| field.required)
		.map(|field| Value::String(field.id.clone()))
		.collect();

	json!({
		"title": "Generated Form",
		"type": "object",
		"properties": properties,
		"required": required,
	})
}

fn property_schema(field: &formcraft_core::Field) -> Value {
	let multi_entry = field.field_type == FieldType::Checkbox || field.is_multi_select();

	let mut schema = if field.field_type == FieldType::Number {
		json!({ "type": "number", "title": field.label })
	} else if multi_entry {
		let mut items = json!({ "type": "string" });
		if let Some(options) = &field.options {
			items["enum"] = json!(options);
		}
		json!({
			"type": "array",
			"title": field.label,
			"items": items,
			"uniqueItems": true,
		})
	} else {
		let mut schema = json!({ "type": "string", "title": field.label });
		if let Some(options) = &field.options {
			schema["enum"] = json!(options);
		}
		schema
	};

	if let Some(placeholder) = &field.placeholder {
		schema["description"] = json!(placeholder);
	}
	if let Some(rules) = &field.validation {
		if let Some(min) = rules.min {
			schema["minimum"] = json!(min);
		}
		if let Some(max) = rules.max {
			schema["maximum"] = json!(max);
		}
		// compiled_pattern logs and yields None for malformed patterns
		if rules.compiled_pattern().is_some()
			&& let Some(pattern) = rules.pattern.as_deref()
		{
			schema["pattern"] = json!(pattern.trim());
		}
	}

	schema
}

/// Pretty-printed JSON Schema text, ready for the clipboard.
pub fn json_schema_text(form: &FormModel) -> String {
	serde_json::to_string_pretty(&json_schema(form)).unwrap_or_else(|_| "{}".to_string())
}

/// The raw field list as pretty-printed JSON.
pub fn field_config_json(form: &FormModel) -> String {
	serde_json::to_string_pretty(form.fields()).unwrap_or_else(|_| "[]".to_string())
}
