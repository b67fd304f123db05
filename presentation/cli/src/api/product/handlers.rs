use business::domain::product::errors::ProductError;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::args::{ListArgs, ProductArgs};
use super::view::{render_product, render_summary, render_table};
use crate::config::display_config::DisplayConfig;

/// Renders the table (filtered and ordered by `list`) followed by the dashboard.
pub fn list_products(
    repository: &ProductRepository,
    list: &ListArgs,
    display: &DisplayConfig,
) -> String {
    let products = repository.query(&list.search, list.sort);
    format!(
        "{}\n\n{}",
        render_table(&products, &display.currency),
        render_summary(&repository.aggregate(), &display.currency)
    )
}

pub fn add_product(
    repository: &mut ProductRepository,
    args: ProductArgs,
    display: &DisplayConfig,
) -> Result<String, ProductError> {
    let product = repository.add(args.into())?;
    Ok(with_notice(
        format!("Added {} (#{})", product.name, product.id),
        repository,
        display,
    ))
}

pub fn update_product(
    repository: &mut ProductRepository,
    id: ProductId,
    args: ProductArgs,
    display: &DisplayConfig,
) -> Result<String, ProductError> {
    let product = repository.update(id, args.into())?;
    Ok(with_notice(
        format!("Updated {} (#{})", product.name, product.id),
        repository,
        display,
    ))
}

pub fn remove_product(
    repository: &mut ProductRepository,
    id: ProductId,
    display: &DisplayConfig,
) -> Result<String, ProductError> {
    let name = repository.get(id)?.name.clone();
    repository.remove(id)?;
    Ok(with_notice(
        format!("Removed {} (#{})", name, id),
        repository,
        display,
    ))
}

pub fn show_product(
    repository: &ProductRepository,
    id: ProductId,
    display: &DisplayConfig,
) -> Result<String, ProductError> {
    let product = repository.get(id)?;
    Ok(render_product(product, &display.currency))
}

pub fn summarize(repository: &ProductRepository, display: &DisplayConfig) -> String {
    render_summary(&repository.aggregate(), &display.currency)
}

/// Callers re-query after every mutation; the notice stands in for a toast.
fn with_notice(notice: String, repository: &ProductRepository, display: &DisplayConfig) -> String {
    format!(
        "{}\n\n{}",
        notice,
        list_products(repository, &ListArgs::default(), display)
    )
}
