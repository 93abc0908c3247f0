use crate::domain::schema::{FieldSchema, ModelSchema};

pub const TITLE_MAX_LENGTH: usize = 200;
pub const BODY_MAX_LENGTH: usize = 1000;

pub const TITLE_FIELD: FieldSchema = FieldSchema::char("title", TITLE_MAX_LENGTH);
pub const BODY_FIELD: FieldSchema = FieldSchema::text("body", BODY_MAX_LENGTH);

pub static ARTICLE_SCHEMA: ModelSchema = ModelSchema {
    table: "articles",
    fields: &[TITLE_FIELD, BODY_FIELD],
};
