//! DDL rendering for registered model schemas.

use crate::domain::schema::{FieldKind, FieldSchema, ModelSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    Postgres,
    Sqlite,
}

impl SqlDialect {
    /// Pick the dialect from a connection URL scheme.
    pub fn from_url(database_url: &str) -> Option<Self> {
        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else if database_url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else {
            None
        }
    }
}

/// Name of the length check constraint generated for `field`.
pub fn length_constraint_name(schema: &ModelSchema, field: &FieldSchema) -> String {
    format!("{}_{}_length_chk", schema.table, field.name)
}

pub fn create_table_sql(schema: &ModelSchema, dialect: SqlDialect) -> String {
    let primary_key = match dialect {
        SqlDialect::Postgres => format!("{} BIGSERIAL PRIMARY KEY", ModelSchema::PRIMARY_KEY),
        SqlDialect::Sqlite => format!(
            "{} INTEGER PRIMARY KEY AUTOINCREMENT",
            ModelSchema::PRIMARY_KEY
        ),
    };

    let columns = std::iter::once(primary_key)
        .chain(
            schema
                .fields
                .iter()
                .map(|field| column_sql(schema, field, dialect)),
        )
        .collect::<Vec<_>>()
        .join(", ");

    format!("CREATE TABLE IF NOT EXISTS {} ({columns})", schema.table)
}

fn column_sql(schema: &ModelSchema, field: &FieldSchema, dialect: SqlDialect) -> String {
    let name = field.name;
    match (dialect, field.kind) {
        (SqlDialect::Postgres, FieldKind::Char { max_length }) => {
            format!("{name} VARCHAR({max_length}) NOT NULL")
        }
        (SqlDialect::Postgres, FieldKind::Text { max_length }) => format!(
            "{name} TEXT NOT NULL CONSTRAINT {} CHECK (char_length({name}) <= {max_length})",
            length_constraint_name(schema, field)
        ),
        // SQLite has no enforced VARCHAR length, so both kinds get a check.
        (SqlDialect::Sqlite, FieldKind::Char { max_length } | FieldKind::Text { max_length }) => {
            format!(
                "{name} TEXT NOT NULL CONSTRAINT {} CHECK (length({name}) <= {max_length})",
                length_constraint_name(schema, field)
            )
        }
    }
}
