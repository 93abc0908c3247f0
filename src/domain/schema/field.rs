use crate::domain::errors::{DomainError, DomainResult};

/// Storage kind of a text field.
///
/// `Char` maps to a bounded character column, `Text` to an unbounded text
/// column whose limit is enforced by a check constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Char { max_length: usize },
    Text { max_length: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSchema {
    pub const fn char(name: &'static str, max_length: usize) -> Self {
        Self {
            name,
            kind: FieldKind::Char { max_length },
        }
    }

    pub const fn text(name: &'static str, max_length: usize) -> Self {
        Self {
            name,
            kind: FieldKind::Text { max_length },
        }
    }

    pub const fn max_length(&self) -> usize {
        match self.kind {
            FieldKind::Char { max_length } | FieldKind::Text { max_length } => max_length,
        }
    }

    /// Check `value` against the declared maximum length, counted in characters.
    pub fn validate(&self, value: &str) -> DomainResult<()> {
        let max = self.max_length();
        let length = value.chars().count();
        if length > max {
            return Err(DomainError::Validation(format!(
                "{}: ensure this value has at most {max} characters (it has {length})",
                self.name
            )));
        }
        Ok(())
    }
}
