//! Permission gating against an external authorization check.
//!
//! The schema names a permission slug per operation; whether the current
//! user holds that slug is the host application's business. The host
//! supplies an [`AccessCheck`] predicate; everything here is default-deny.

use tracing::trace;

use crate::models::{CrudOperation, ModelSchema};

/// External authorization predicate.
///
/// Implemented by the host application (session store, ACL service, …).
/// Any `Fn(&str) -> bool` closure qualifies.
pub trait AccessCheck {
    /// Whether the current user holds the given permission slug.
    fn check_access(&self, slug: &str) -> bool;
}

impl<F> AccessCheck for F
where
    F: Fn(&str) -> bool,
{
    fn check_access(&self, slug: &str) -> bool {
        self(slug)
    }
}

/// Predicate that grants everything. Useful for tests and trusted tooling.
pub struct AllowAll;

impl AccessCheck for AllowAll {
    fn check_access(&self, _slug: &str) -> bool {
        true
    }
}

/// Predicate that denies everything.
pub struct DenyAll;

impl AccessCheck for DenyAll {
    fn check_access(&self, _slug: &str) -> bool {
        false
    }
}

/// Whether `schema` grants `operation` under the given predicate.
///
/// Default-deny: returns false when the schema is absent, when it declares
/// no slug for the operation, or when the predicate denies the slug.
/// Absence of a permission entry is never "implicitly allowed".
pub fn has_permission(
    schema: Option<&ModelSchema>,
    operation: CrudOperation,
    access: &dyn AccessCheck,
) -> bool {
    let Some(schema) = schema else {
        return false;
    };
    match schema.permission_slug(operation) {
        Some(slug) => access.check_access(slug),
        None => {
            trace!(%operation, "no permission slug declared; denying");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema_with_read_only() -> ModelSchema {
        serde_json::from_value(json!({
            "model": "groups",
            "permissions": {"read": "uri_groups"},
            "fields": {"id": {"type": "integer"}}
        }))
        .unwrap()
    }

    #[test]
    fn test_granted_when_predicate_allows_declared_slug() {
        let schema = schema_with_read_only();
        assert!(has_permission(Some(&schema), CrudOperation::Read, &AllowAll));
    }

    #[test]
    fn test_denied_without_schema() {
        assert!(!has_permission(None, CrudOperation::Read, &AllowAll));
    }

    #[test]
    fn test_denied_when_operation_slug_missing() {
        // No delete entry: denied even though the predicate allows all.
        let schema = schema_with_read_only();
        assert!(!has_permission(
            Some(&schema),
            CrudOperation::Delete,
            &AllowAll
        ));
    }

    #[test]
    fn test_denied_when_predicate_denies() {
        let schema = schema_with_read_only();
        assert!(!has_permission(Some(&schema), CrudOperation::Read, &DenyAll));
    }

    #[test]
    fn test_closure_predicate() {
        let schema = schema_with_read_only();
        let granted = |slug: &str| slug == "uri_groups";
        assert!(has_permission(Some(&schema), CrudOperation::Read, &granted));

        let denied = |slug: &str| slug == "something_else";
        assert!(!has_permission(Some(&schema), CrudOperation::Read, &denied));
    }
}
