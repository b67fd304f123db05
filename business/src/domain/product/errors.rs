#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.negative_quantity")]
    NegativeQuantity,
    #[error("product.quantity_out_of_range")]
    QuantityOutOfRange,
    #[error("product.not_found")]
    NotFound,
    #[error("product.ids_exhausted")]
    IdsExhausted,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// True for the errors raised while checking user input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::NameEmpty
                | ProductError::CategoryEmpty
                | ProductError::NegativePrice
                | ProductError::InvalidPrice
                | ProductError::NegativeQuantity
                | ProductError::QuantityOutOfRange
        )
    }
}
