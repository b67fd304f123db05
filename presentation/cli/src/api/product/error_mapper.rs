use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

pub const EXIT_INTERNAL: u8 = 1;
pub const EXIT_VALIDATION: u8 = 2;
pub const EXIT_NOT_FOUND: u8 = 3;

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> ErrorResponse {
        let (exit_code, name) = if self.is_validation() {
            (EXIT_VALIDATION, "ValidationError")
        } else {
            match &self {
                ProductError::NotFound => (EXIT_NOT_FOUND, "NotFound"),
                ProductError::Repository(_) => (EXIT_INTERNAL, "PersistenceError"),
                _ => (EXIT_INTERNAL, "InternalError"),
            }
        };

        ErrorResponse {
            name: name.to_string(),
            message: self.to_string(),
            description: describe(&self).to_string(),
            exit_code,
        }
    }
}

fn describe(error: &ProductError) -> &'static str {
    match error {
        ProductError::NameEmpty => "Product name is required",
        ProductError::CategoryEmpty => "Category is required",
        ProductError::NegativePrice => "Price must not be negative",
        ProductError::InvalidPrice => "Price must be a finite number",
        ProductError::NegativeQuantity => "Quantity must not be negative",
        ProductError::QuantityOutOfRange => "Quantity is too large",
        ProductError::NotFound => "No product has that id",
        ProductError::IdsExhausted => "No more product ids are available",
        ProductError::Repository(_) => "The change could not be saved",
    }
}
