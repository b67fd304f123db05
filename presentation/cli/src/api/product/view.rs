use business::domain::product::model::Product;
use business::domain::product::summary::{InventorySummary, is_low_stock};

use crate::api::currency::format_currency;

pub const EMPTY_STATE: &str = "No products to show.";
const LOW_STOCK_MARK: &str = " (low)";

const HEADERS: [&str; 5] = ["ID", "Name", "Category", "Price", "Quantity"];
/// Columns rendered right-aligned.
const NUMERIC: [bool; 5] = [true, false, false, true, true];

/// Renders products as a fixed-width text table.
pub fn render_table(products: &[&Product], currency: &str) -> String {
    if products.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let rows: Vec<[String; 5]> = products
        .iter()
        .map(|product| {
            let mut quantity = product.quantity.to_string();
            if is_low_stock(product) {
                quantity.push_str(LOW_STOCK_MARK);
            }
            [
                product.id.to_string(),
                product.name.clone(),
                product.category.clone(),
                format_currency(product.price, currency),
                quantity,
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(str::to_string);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(&header, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(rows.iter().map(|row| render_row(row, &widths)));
    lines.join("\n")
}

fn render_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .zip(NUMERIC)
        .map(|((cell, width), numeric)| {
            if numeric {
                format!("{:>width$}", cell, width = *width)
            } else {
                format!("{:<width$}", cell, width = *width)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// One-line dashboard under the table.
pub fn render_summary(summary: &InventorySummary, currency: &str) -> String {
    format!(
        "Products: {} | Stock value: {} | Low stock: {}",
        summary.total_count,
        format_currency(summary.total_value, currency),
        summary.low_stock_count
    )
}

pub fn render_product(product: &Product, currency: &str) -> String {
    let low = if is_low_stock(product) { LOW_STOCK_MARK } else { "" };
    format!(
        "#{} {}\n  Category: {}\n  Price:    {}\n  Quantity: {}{}\n  Value:    {}",
        product.id,
        product.name,
        product.category,
        format_currency(product.price, currency),
        product.quantity,
        low,
        format_currency(product.stock_value(), currency)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::NewProductProps;
    use business::domain::product::value_objects::ProductId;

    fn product(id: u64, name: &str, category: &str, price: f64, quantity: i64) -> Product {
        Product::new(
            ProductId::new(id),
            NewProductProps::new(name, category, price, quantity),
        )
        .unwrap()
    }

    #[test]
    fn should_show_empty_state_when_no_products() {
        assert_eq!(render_table(&[], "MWK"), EMPTY_STATE);
    }

    #[test]
    fn should_render_header_separator_and_rows() {
        let tilapia = product(1, "Tilapia", "Fish", 2500.0, 5);
        let catfish = product(2, "Catfish", "Fish", 1800.0, 2);

        let table = render_table(&[&tilapia, &catfish], "MWK");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ID | Name    | Category |     Price | Quantity");
        assert!(lines[1].starts_with("---+-"));
        assert_eq!(lines[2], " 1 | Tilapia | Fish     | MWK 2,500 |        5");
        assert_eq!(lines[3], " 2 | Catfish | Fish     | MWK 1,800 |  2 (low)");
    }

    #[test]
    fn should_render_summary_line() {
        let summary = InventorySummary {
            total_count: 2,
            total_value: 16100.0,
            low_stock_count: 1,
        };

        assert_eq!(
            render_summary(&summary, "MWK"),
            "Products: 2 | Stock value: MWK 16,100 | Low stock: 1"
        );
    }

    #[test]
    fn should_render_product_details() {
        let catfish = product(2, "Catfish", "Fish", 1800.0, 2);

        let details = render_product(&catfish, "MWK");

        assert!(details.starts_with("#2 Catfish"));
        assert!(details.contains("Quantity: 2 (low)"));
        assert!(details.contains("Value:    MWK 3,600"));
    }
}
