//! Declarative record schemas.
//!
//! A [`ModelSchema`] lists the fields of one persisted record type together
//! with their constraints. Schemas are collected into a [`SchemaRegistry`]
//! which is handed to the persistence layer at start-up; nothing is discovered
//! implicitly.

mod field;
mod registry;

pub use field::{FieldKind, FieldSchema};
pub use registry::SchemaRegistry;

use crate::domain::errors::{DomainError, DomainResult};

/// Shape of one record type: its table and the fields stored in it.
///
/// Every model gets an implicit auto-increment `id` primary key, which is not
/// listed in `fields`.
#[derive(Debug, PartialEq, Eq)]
pub struct ModelSchema {
    pub table: &'static str,
    pub fields: &'static [FieldSchema],
}

impl ModelSchema {
    pub const PRIMARY_KEY: &'static str = "id";

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Column names in declaration order, primary key first.
    pub fn columns(&self) -> Vec<&'static str> {
        std::iter::once(Self::PRIMARY_KEY)
            .chain(self.fields.iter().map(|field| field.name))
            .collect()
    }

    pub fn validate_field(&self, name: &str, value: &str) -> DomainResult<()> {
        let field = self.field(name).ok_or_else(|| {
            DomainError::Validation(format!("{}: unknown field {name}", self.table))
        })?;
        field.validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NOTES: ModelSchema = ModelSchema {
        table: "notes",
        fields: &[FieldSchema::char("label", 3), FieldSchema::text("content", 10)],
    };

    #[test]
    fn columns_start_with_primary_key() {
        assert_eq!(NOTES.columns(), vec!["id", "label", "content"]);
    }

    #[test]
    fn validate_field_uses_declared_limit() {
        assert!(NOTES.validate_field("label", "abc").is_ok());
        let err = NOTES.validate_field("label", "abcd").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn validate_field_rejects_unknown_field() {
        let err = NOTES.validate_field("missing", "x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: notes: unknown field missing"
        );
    }
}
