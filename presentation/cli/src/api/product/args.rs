use clap::Args;

use business::domain::product::model::NewProductProps;
use business::domain::product::value_objects::SortKey;

/// Product form fields.
#[derive(Args, Debug, Clone)]
pub struct ProductArgs {
    /// Product name (cannot be empty)
    #[arg(long)]
    pub name: String,
    /// Category (cannot be empty)
    #[arg(long)]
    pub category: String,
    /// Unit price
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,
    /// Units in stock
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
}

impl From<ProductArgs> for NewProductProps {
    fn from(args: ProductArgs) -> Self {
        NewProductProps::new(args.name, args.category, args.price, args.quantity)
    }
}

/// Table controls.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only show products whose name or category contains this text
    #[arg(long, short, default_value = "")]
    pub search: String,
    /// Column to order by: none, name, category, price or quantity
    #[arg(long, short = 'o', default_value = "none")]
    pub sort: SortKey,
}
