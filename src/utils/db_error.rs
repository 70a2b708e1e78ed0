//! Classification of PostgreSQL driver errors into [`StoreError`].

use crate::domain::repositories::StoreError;

/// Name of the unique constraint on `short_links.code`.
pub const CODE_UNIQUE_CONSTRAINT: &str = "short_links_code_key";

/// Returns true if `e` is a unique violation (SQLSTATE 23505) on the code constraint.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(CODE_UNIQUE_CONSTRAINT))
}

/// Maps any driver error that is not a duplicate code.
pub fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}
