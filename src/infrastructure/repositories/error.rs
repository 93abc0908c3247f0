use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// PostgreSQL: string_data_right_truncation, raised for over-long VARCHAR values.
const PG_VALUE_TOO_LONG: &str = "22001";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            if matches!(db_err.kind(), ErrorKind::CheckViolation) {
                let detail = db_err
                    .constraint()
                    .map(str::to_owned)
                    .unwrap_or_else(|| db_err.message().to_string());
                return DomainError::Validation(format!("check constraint violated: {detail}"));
            }

            if db_err.code().as_deref() == Some(PG_VALUE_TOO_LONG) {
                return DomainError::Validation(db_err.message().to_string());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound(_)
        ));
    }

    #[test]
    fn pool_errors_are_persistence_failures() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
    }
}
