use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::model::Product;
use super::value_objects::SortKey;

/// Orders two strings the way a table header sort is expected to.
///
/// Letters are compared first with accents and case removed, so "Éclair"
/// sorts among the E words. Remaining ties are settled by accents
/// (unaccented first) and then by case (lowercase first).
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| case_tiebreak(a, b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.nfd().zip(b.nfd()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.nfd().count().cmp(&b.nfd().count())
}

/// Compares two products by `key`. Equal keys fall back to ascending id.
pub fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    let primary = match key {
        SortKey::None => Ordering::Equal,
        SortKey::Name => collate(&a.name, &b.name),
        SortKey::Category => collate(&a.category, &b.category),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
    };

    primary.then_with(|| a.id.cmp(&b.id))
}

/// Returns a new, ordered view over `products`.
pub fn sorted<'a, I>(products: I, key: SortKey) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut view: Vec<&Product> = products.into_iter().collect();
    view.sort_by(|a, b| compare(a, b, key));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::ProductId;

    fn product(id: u64, name: &str, category: &str, price: f64, quantity: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            price,
            quantity,
        }
    }

    fn ids(view: &[&Product]) -> Vec<u64> {
        view.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn should_collate_case_insensitively() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn should_put_lowercase_first_when_only_case_differs() {
        assert_eq!(collate("fish", "Fish"), Ordering::Less);
        assert_eq!(collate("Fish", "fish"), Ordering::Greater);
        assert_eq!(collate("Fish", "Fish"), Ordering::Equal);
    }

    #[test]
    fn should_collate_accented_letters_with_their_base_letter() {
        assert_eq!(collate("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(collate("Éclair", "Apple"), Ordering::Greater);
        assert_eq!(collate("Ñame", "Nuts"), Ordering::Less);
    }

    #[test]
    fn should_put_unaccented_first_when_only_accents_differ() {
        assert_eq!(collate("eclair", "éclair"), Ordering::Less);
        assert_eq!(collate("éclair", "Eclair"), Ordering::Greater);
        assert_eq!(collate("Éclair", "Éclair"), Ordering::Equal);
    }

    #[test]
    fn should_treat_composed_and_decomposed_forms_alike() {
        assert_eq!(collate("Caf\u{e9}", "Cafe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn should_order_prefix_before_longer_string() {
        assert_eq!(collate("Cat", "Catfish"), Ordering::Less);
    }

    #[test]
    fn should_sort_by_name() {
        let products = vec![
            product(1, "Tilapia", "Fish", 2500.0, 5),
            product(2, "beans", "Legumes", 1200.0, 8),
            product(3, "Catfish", "Fish", 1800.0, 2),
        ];

        let view = sorted(&products, SortKey::Name);

        assert_eq!(ids(&view), vec![2, 3, 1]);
    }

    #[test]
    fn should_sort_by_price_numerically() {
        let products = vec![
            product(1, "A", "X", 100.0, 1),
            product(2, "B", "X", 20.0, 1),
            product(3, "C", "X", 3.5, 1),
        ];

        let view = sorted(&products, SortKey::Price);

        assert_eq!(ids(&view), vec![3, 2, 1]);
    }

    #[test]
    fn should_break_ties_by_id() {
        let products = vec![
            product(5, "A", "Fish", 1.0, 4),
            product(2, "B", "Fish", 1.0, 4),
            product(9, "C", "Fish", 1.0, 1),
        ];

        let view = sorted(&products, SortKey::Quantity);
        assert_eq!(ids(&view), vec![9, 2, 5]);

        let view = sorted(&products, SortKey::Category);
        assert_eq!(ids(&view), vec![2, 5, 9]);
    }

    #[test]
    fn should_order_by_id_when_key_is_none() {
        let products = vec![
            product(3, "A", "X", 1.0, 1),
            product(1, "B", "X", 1.0, 1),
            product(2, "C", "X", 1.0, 1),
        ];

        let view = sorted(&products, SortKey::None);

        assert_eq!(ids(&view), vec![1, 2, 3]);
    }
}
