//! Generated form component source
//!
//! Emits a standalone React + TanStack Form component mirroring the current
//! field list. The text is an export convenience: it is never compiled or
//! executed here, but the type-to-control mapping must agree with the
//! validator's contract, so the emitter dispatches on [`Control`] rather than
//! re-inspecting field types.

use formcraft_core::{Control, Field, FormModel};
use std::fmt::Write;

const IMPORTS: &str = r#"import { useForm } from "@tanstack/react-form"
import { Button } from "@/components/ui/button"
import { Input } from "@/components/ui/input"
import { Label } from "@/components/ui/label"
import { Textarea } from "@/components/ui/textarea"
import { Select, SelectContent, SelectItem, SelectTrigger, SelectValue } from "@/components/ui/select"
import { Checkbox } from "@/components/ui/checkbox"
import { RadioGroup, RadioGroupItem } from "@/components/ui/radio-group"
"#;

/// Emit the source text of a form component for the current field list.
pub fn react_component(form: &FormModel) -> String {
	let mut source = String::new();
	source.push_str(IMPORTS);
	source.push_str("\nexport function GeneratedForm() {\n");
	source.push_str("  const form = useForm({\n    defaultValues: {\n");

	let defaults: Vec<String> = form
		.fields()
		.iter()
		.map(|field| {
			let empty = match field.control() {
				Control::CheckboxGroup | Control::SelectMultiple => "[]",
				_ => "\"\"",
			};
			format!("      {}: {empty}", field.id)
		})
		.collect();
	source.push_str(&defaults.join(",\n"));
	source.push_str("\n    },\n");
	source.push_str("    onSubmit: async ({ value }) => {\n");
	source.push_str("      console.log(\"Form submitted:\", value)\n");
	source.push_str("    },\n  })\n\n");
	source.push_str(
		"  return (\n    <form onSubmit={(e) => { e.preventDefault(); form.handleSubmit() }}>\n",
	);

	let blocks: Vec<String> = form
		.fields()
		.iter()
		.map(|field| {
			format!(
				"      <form.Field name=\"{id}\">\n        {{(fieldApi) => (\n          <div className=\"space-y-2\">\n            {code}\n          </div>\n        )}}\n      </form.Field>",
				id = field.id,
				code = field_code(field),
			)
		})
		.collect();
	source.push_str(&blocks.join("\n\n"));

	source.push_str("\n\n      <Button type=\"submit\">Submit</Button>\n    </form>\n  )\n}\n");
	source
}

fn field_code(field: &Field) -> String {
	let label = format!(
		"<Label>{}{}</Label>",
		field.label,
		if field.required { " *" } else { "" }
	);
	let placeholder = field.placeholder.as_deref().unwrap_or("");

	match field.control() {
		Control::TextInput | Control::EmailInput => format!(
			"{label}\n            <Input\n              type=\"{kind}\"\n              placeholder=\"{placeholder}\"\n              value={{fieldApi.state.value}}\n              onChange={{(e) => fieldApi.handleChange(e.target.value)}}\n            />",
			kind = field.field_type,
		),
		Control::NumberInput => {
			let mut attrs = String::new();
			if let Some(rules) = &field.validation {
				if let Some(min) = rules.min {
					let _ = write!(attrs, "\n              min={{{min}}}");
				}
				if let Some(max) = rules.max {
					let _ = write!(attrs, "\n              max={{{max}}}");
				}
			}
			format!(
				"{label}\n            <Input\n              type=\"number\"\n              placeholder=\"{placeholder}\"\n              value={{fieldApi.state.value}}\n              onChange={{(e) => fieldApi.handleChange(e.target.value)}}{attrs}\n            />"
			)
		}
		Control::TextArea => format!(
			"{label}\n            <Textarea\n              placeholder=\"{placeholder}\"\n              value={{fieldApi.state.value}}\n              onChange={{(e) => fieldApi.handleChange(e.target.value)}}\n            />"
		),
		Control::SelectSingle => {
			let items: Vec<String> = field
				.visible_options()
				.iter()
				.map(|option| {
					format!(
						"                <SelectItem value=\"{option}\">{option}</SelectItem>"
					)
				})
				.collect();
			format!(
				"{label}\n            <Select value={{fieldApi.state.value}} onValueChange={{fieldApi.handleChange}}>\n              <SelectTrigger>\n                <SelectValue placeholder=\"{hint}\" />\n              </SelectTrigger>\n              <SelectContent>\n{items}\n              </SelectContent>\n            </Select>",
				hint = field.placeholder.as_deref().unwrap_or("Select an option"),
				items = items.join("\n"),
			)
		}
		Control::SelectMultiple => {
			let rows: Vec<String> = field
				.visible_options()
				.iter()
				.enumerate()
				.map(|(index, option)| checkbox_row(&field.id, index, option))
				.collect();
			format!(
				"{label}\n            <div className=\"space-y-2\">\n{rows}\n            </div>",
				rows = rows.join("\n"),
			)
		}
		Control::CheckboxGroup => {
			let rows: Vec<String> = field
				.options
				.as_deref()
				.unwrap_or_default()
				.iter()
				.enumerate()
				.map(|(index, option)| checkbox_row(&field.id, index, option))
				.collect();
			format!(
				"{label}\n            <div className=\"space-y-2\">\n{rows}\n            </div>",
				rows = rows.join("\n"),
			)
		}
		Control::RadioGroup => {
			let rows: Vec<String> = field
				.options
				.as_deref()
				.unwrap_or_default()
				.iter()
				.enumerate()
				.map(|(index, option)| {
					format!(
						"              <div className=\"flex items-center space-x-2\">\n                <RadioGroupItem value=\"{option}\" id=\"{id}-{index}\" />\n                <Label htmlFor=\"{id}-{index}\">{option}</Label>\n              </div>",
						id = field.id,
					)
				})
				.collect();
			format!(
				"{label}\n            <RadioGroup value={{fieldApi.state.value}} onValueChange={{fieldApi.handleChange}}>\n{rows}\n            </RadioGroup>",
				rows = rows.join("\n"),
			)
		}
		// phone, file, datetime, location, and unknown types fall back to a
		// plain text input, matching the renderer's unknown-control fallback
		Control::PhoneInput
		| Control::FileInput
		| Control::DateTimeInput
		| Control::LocationCascade
		| Control::Unknown => format!(
			"{label}\n            <Input value={{fieldApi.state.value}} onChange={{(e) => fieldApi.handleChange(e.target.value)}} />"
		),
	}
}

fn checkbox_row(field_id: &str, index: usize, option: &str) -> String {
	format!(
		"              <div className=\"flex items-center space-x-2\">\n                <Checkbox\n                  id=\"{field_id}-{index}\"\n                  checked={{Array.isArray(fieldApi.state.value) ? fieldApi.state.value.includes(\"{option}\") : false}}\n                  onCheckedChange={{(checked) => {{\n                    const current = Array.isArray(fieldApi.state.value) ? fieldApi.state.value : []\n                    if (checked) {{\n                      fieldApi.handleChange([...current, \"{option}\"])\n                    }} else {{\n                      fieldApi.handleChange(current.filter(v => v !== \"{option}\"))\n                    }}\n                  }}}}\n                />\n                <Label htmlFor=\"{field_id}-{index}\" className=\"text-sm\">{option}</Label>\n              </div>"
	)
}
