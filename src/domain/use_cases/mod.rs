pub mod contact;
pub mod projects;

use uuid::Uuid;

use crate::errors::{AppError, FieldError};

/// Path ids arrive as strings; a malformed id is a client error, not a 500.
pub(crate) fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| {
        AppError::ValidationError(vec![FieldError {
            field: "id".to_string(),
            message: "must be a valid UUID".to_string(),
        }])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(parse_id("not-a-uuid").is_err());
        assert!(parse_id(&Uuid::new_v4().to_string()).is_ok());
    }
}
