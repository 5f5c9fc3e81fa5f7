//! Builder flow tests
//!
//! End-to-end exercises of the form model: adding, editing, reordering and
//! deleting fields, then validating submitted values against the result.

use formcraft_core::{
	FieldPatch, FieldType, FormModel, FormValue, PALETTE, PhoneValue, ValidationRules, validate,
};
use proptest::prelude::*;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
fn test_build_edit_and_validate_a_contact_form() {
	let mut form = FormModel::new();
	form.set_title("Contact Us");

	let name = form.add_field(FieldType::Text);
	let email = form.add_field(FieldType::Email);
	let topic = form.add_field(FieldType::Select);

	form.update_field(&name.id, FieldPatch::new().label("Full name").required(true))
		.unwrap();
	form.update_field(&email.id, FieldPatch::new().required(true))
		.unwrap();
	form.update_field(
		&topic.id,
		FieldPatch::new().options(vec!["Sales".to_string(), "Support".to_string()]),
	)
	.unwrap();

	assert_eq!(form.len(), 3);
	assert_eq!(form.get_field(&name.id).unwrap().label, "Full name");
	assert_eq!(
		form.get_field(&topic.id).unwrap().options.as_deref(),
		Some(["Sales".to_string(), "Support".to_string()].as_slice())
	);

	// a blank submission fails on both required fields
	let name_field = form.get_field(&name.id).unwrap();
	let email_field = form.get_field(&email.id).unwrap();
	assert_eq!(
		validate(name_field, &FormValue::Text(String::new())),
		vec!["This field is required"]
	);
	assert_eq!(
		validate(email_field, &FormValue::Text("not-an-email".to_string())),
		vec!["Please enter a valid email address"]
	);
	assert!(validate(email_field, &FormValue::Text("a@b.com".to_string())).is_empty());
}

#[rstest]
fn test_every_palette_type_can_be_added() {
	let mut form = FormModel::new();

	for field_type in PALETTE {
		form.add_field(field_type);
	}

	assert_eq!(form.len(), PALETTE.len());
	let ids: HashSet<_> = form.fields().iter().map(|field| field.id.clone()).collect();
	assert_eq!(ids.len(), PALETTE.len());
}

#[rstest]
fn test_reorder_then_delete_leaves_remaining_order_intact() {
	let mut form = FormModel::new();
	let a = form.add_field(FieldType::Text);
	let b = form.add_field(FieldType::Email);
	let c = form.add_field(FieldType::Number);
	let d = form.add_field(FieldType::Textarea);

	form.move_field(0, 2).unwrap();
	let order: Vec<_> = form.fields().iter().map(|field| field.id.as_str()).collect();
	assert_eq!(order, vec![b.id.as_str(), c.id.as_str(), a.id.as_str(), d.id.as_str()]);

	let removed = form.delete_field(&c.id);
	assert_eq!(removed.map(|field| field.id), Some(c.id.clone()));
	let order: Vec<_> = form.fields().iter().map(|field| field.id.as_str()).collect();
	assert_eq!(order, vec![b.id.as_str(), a.id.as_str(), d.id.as_str()]);
}

#[rstest]
fn test_type_change_round_trip_restores_defaults() {
	let mut form = FormModel::new();
	let field = form.add_field(FieldType::Select);

	form.update_option(&field.id, 0, "Custom").unwrap();
	form.update_field(&field.id, FieldPatch::new().field_type(FieldType::Text))
		.unwrap();
	assert!(form.get_field(&field.id).unwrap().options.is_none());

	// going back to select reseeds the stock options, not the edited ones
	form.update_field(&field.id, FieldPatch::new().field_type(FieldType::Select))
		.unwrap();
	assert_eq!(
		form.get_field(&field.id).unwrap().options.as_deref(),
		Some(
			["Option 1".to_string(), "Option 2".to_string(), "Option 3".to_string()].as_slice()
		)
	);
}

#[rstest]
fn test_default_values_match_control_shape() {
	let mut form = FormModel::new();
	let checkbox = form.add_field(FieldType::Checkbox);
	let file = form.add_field(FieldType::File);
	let text = form.add_field(FieldType::Text);

	assert_eq!(FormValue::default_for(&checkbox), FormValue::Entries(vec![]));
	assert_eq!(FormValue::default_for(&file), FormValue::File(None));
	assert_eq!(FormValue::default_for(&text), FormValue::Text(String::new()));
}

#[rstest]
fn test_phone_field_with_explicit_bounds() {
	let mut form = FormModel::new();
	let phone = form.add_field(FieldType::Phone);
	form.update_field(
		&phone.id,
		FieldPatch::new().validation(ValidationRules::new().with_length_bounds(8, 12)),
	)
	.unwrap();

	let field = form.get_field(&phone.id).unwrap();
	let value = FormValue::Phone(PhoneValue {
		country: Some("US".to_string()),
		number: "1234".to_string(),
	});
	assert_eq!(
		validate(field, &value),
		vec!["Phone number must be between 8 and 12 digits"]
	);
}

proptest! {
	#[test]
	fn prop_added_field_ids_are_unique(count in 1usize..40) {
		let mut form = FormModel::new();
		for _ in 0..count {
			form.add_field(FieldType::Text);
		}

		let ids: HashSet<_> = form.fields().iter().map(|field| field.id.clone()).collect();
		prop_assert_eq!(ids.len(), count);
	}

	#[test]
	fn prop_move_field_preserves_the_field_set(len in 2usize..10, from in 0usize..10, to in 0usize..10) {
		let mut form = FormModel::new();
		for _ in 0..len {
			form.add_field(FieldType::Text);
		}
		let before: HashSet<_> = form.fields().iter().map(|field| field.id.clone()).collect();

		let result = form.move_field(from, to);

		prop_assert_eq!(result.is_ok(), from < len && to < len);
		let after: HashSet<_> = form.fields().iter().map(|field| field.id.clone()).collect();
		prop_assert_eq!(before, after);
	}
}
