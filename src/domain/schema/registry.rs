use super::ModelSchema;
use crate::domain::errors::{DomainError, DomainResult};

/// Explicit list of schemas the persistence layer should manage.
#[derive(Debug, Default, Clone)]
pub struct SchemaRegistry {
    schemas: Vec<&'static ModelSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, schema: &'static ModelSchema) -> DomainResult<Self> {
        if self.get(schema.table).is_some() {
            return Err(DomainError::Validation(format!(
                "schema for table {} is already registered",
                schema.table
            )));
        }
        self.schemas.push(schema);
        Ok(self)
    }

    pub fn get(&self, table: &str) -> Option<&'static ModelSchema> {
        self.schemas
            .iter()
            .copied()
            .find(|schema| schema.table == table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ModelSchema> + '_ {
        self.schemas.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::FieldSchema;

    static FIRST: ModelSchema = ModelSchema {
        table: "first",
        fields: &[FieldSchema::char("name", 10)],
    };

    static SECOND: ModelSchema = ModelSchema {
        table: "second",
        fields: &[FieldSchema::text("notes", 100)],
    };

    #[test]
    fn registers_in_order() {
        let registry = SchemaRegistry::new()
            .register(&FIRST)
            .and_then(|r| r.register(&SECOND))
            .unwrap();
        let tables: Vec<_> = registry.iter().map(|s| s.table).collect();
        assert_eq!(tables, vec!["first", "second"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("second"), Some(&SECOND));
    }

    #[test]
    fn duplicate_table_is_rejected() {
        let err = SchemaRegistry::new()
            .register(&FIRST)
            .and_then(|r| r.register(&FIRST))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn empty_registry() {
        let registry = SchemaRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("first").is_none());
    }
}
