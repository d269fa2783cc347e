//! Derived-view tests over fixture schemas.
//!
//! These exercise the public projection surface the way a page container
//! does after resolution: columns for the table, default sort for the
//! sprunje query, permission gates for the action buttons, and a blank
//! record for the create form.

mod common;

use common::load_fixture;
use crud6_client::models::{
    CrudOperation, ModelSchema, SortDirection, blank_record_or_minimal, validate_record,
};
use crud6_client::{AllowAll, has_permission};
use serde_json::json;

fn groups_schema() -> ModelSchema {
    serde_json::from_value(load_fixture("schema/groups.json")["schema"].clone()).unwrap()
}

fn users_schema() -> ModelSchema {
    serde_json::from_value(load_fixture("schema/users.json")["schema"].clone()).unwrap()
}

#[test]
fn test_list_columns_follow_schema_order() {
    let schema = groups_schema();
    let names: Vec<&str> = schema.list_columns().iter().map(|(n, _)| *n).collect();
    // "icon" is listable: false.
    assert_eq!(names, ["id", "name", "slug", "description", "created_at"]);
}

#[test]
fn test_list_columns_carry_width_hints() {
    let schema = groups_schema();
    let columns = schema.list_columns();
    let (name, id_spec) = columns[0];
    assert_eq!(name, "id");
    assert_eq!(id_spec.width, Some(80));
}

#[test]
fn test_default_sort_from_schema() {
    let schema = groups_schema();
    let sort = schema.default_sort_spec();
    assert_eq!(sort.field, "name");
    assert_eq!(sort.direction, SortDirection::Asc);
}

#[test]
fn test_blank_record_for_create_form() {
    let schema = users_schema();
    let record = blank_record_or_minimal(Some(&schema));

    assert_eq!(record["id"], json!(0));
    assert_eq!(record["user_name"], json!(""));
    assert_eq!(record["email"], json!(""));
    // Schema declares a default for flag_enabled.
    assert_eq!(record["flag_enabled"], json!(true));
    assert_eq!(record["password"], json!(""));
}

#[test]
fn test_permission_gates_over_fixture_schema() {
    let schema = groups_schema();

    for operation in [
        CrudOperation::Read,
        CrudOperation::Create,
        CrudOperation::Update,
        CrudOperation::Delete,
    ] {
        assert!(has_permission(Some(&schema), operation, &AllowAll));
    }

    let granted = |slug: &str| slug == "uri_groups";
    assert!(has_permission(Some(&schema), CrudOperation::Read, &granted));
    assert!(!has_permission(
        Some(&schema),
        CrudOperation::Delete,
        &granted
    ));
}

#[test]
fn test_validation_over_fixture_schema() {
    let schema = groups_schema();

    let good: crud6_client::RecordInstance = serde_json::from_value(json!({
        "name": "Editors",
        "slug": "editors",
        "description": "Content editors"
    }))
    .unwrap();
    assert!(validate_record(&schema, &good).is_empty());

    let bad: crud6_client::RecordInstance = serde_json::from_value(json!({
        "name": "E",
        "slug": "Not Valid"
    }))
    .unwrap();
    let failures = validate_record(&schema, &bad);
    assert_eq!(failures.len(), 2);
}
