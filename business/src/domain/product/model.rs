use super::errors::ProductError;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

/// Unvalidated form input for creating or editing a product.
#[derive(Debug, Clone)]
pub struct NewProductProps {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

impl NewProductProps {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }
}

impl Product {
    /// Validates `props` and builds a product carrying `id`.
    ///
    /// Name and category are stored trimmed.
    pub fn new(id: ProductId, props: NewProductProps) -> Result<Self, ProductError> {
        let name = props.name.trim();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let category = props.category.trim();
        if category.is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        if props.price.is_nan() || props.price.is_infinite() {
            return Err(ProductError::InvalidPrice);
        }
        if props.price < 0.0 {
            return Err(ProductError::NegativePrice);
        }

        if props.quantity < 0 {
            return Err(ProductError::NegativeQuantity);
        }
        let quantity =
            u32::try_from(props.quantity).map_err(|_| ProductError::QuantityOutOfRange)?;

        Ok(Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            // -0.0 passes the sign check; store it as 0.0
            price: props.price.abs(),
            quantity,
        })
    }

    /// Stock value of this line: `price * quantity`.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Case-insensitive substring match on name or category.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}
