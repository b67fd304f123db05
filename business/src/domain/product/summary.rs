use super::model::Product;

/// Quantity at or below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 3;

/// Dashboard figures for the whole inventory.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InventorySummary {
    pub total_count: usize,
    pub total_value: f64,
    pub low_stock_count: usize,
}

/// Returns true if the product is at or below the low-stock threshold.
pub fn is_low_stock(product: &Product) -> bool {
    product.quantity <= LOW_STOCK_THRESHOLD
}

impl InventorySummary {
    pub fn from_products<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .fold(InventorySummary::default(), |mut summary, product| {
                summary.total_count += 1;
                summary.total_value += product.stock_value();
                if is_low_stock(product) {
                    summary.low_stock_count += 1;
                }
                summary
            })
    }
}
