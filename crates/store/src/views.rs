//! Pure derived views over the in-memory product list: statistics,
//! filtering, and pagination. No I/O; deterministic for a given input.

use serde::Serialize;
use shared::domain::model::{Product, StockStatus};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring match over name, SKU, and category name.
    pub search: String,
    pub category: Option<Uuid>,
    pub status: Option<StockStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductStats {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

/// All active predicates must pass; there are no OR semantics.
pub fn matches_filter(product: &Product, filter: &ProductFilter) -> bool {
    if !filter.search.is_empty() {
        let needle = filter.search.to_lowercase();
        let in_name = product.name.to_lowercase().contains(&needle);
        let in_sku = product.sku.to_lowercase().contains(&needle);
        let in_category = product
            .category_name
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(&needle));
        if !(in_name || in_sku || in_category) {
            return false;
        }
    }

    if let Some(category) = filter.category
        && product.category_id != Some(category)
    {
        return false;
    }

    if let Some(status) = filter.status
        && product.status != status
    {
        return false;
    }

    true
}

pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| matches_filter(p, filter)).collect()
}

/// Slices one 1-based page out of an already-filtered list. An
/// out-of-range page yields an empty slice rather than wrapping.
pub fn paginate<'a>(items: &[&'a Product], page: usize, per_page: usize) -> Vec<&'a Product> {
    if per_page == 0 || page == 0 {
        return Vec::new();
    }
    items
        .iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .copied()
        .collect()
}

pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Counts by status band. Medium sits inside the In Stock bucket so the
/// three counted states partition the whole list.
pub fn product_stats(products: &[Product]) -> ProductStats {
    let mut stats = ProductStats {
        total: products.len(),
        in_stock: 0,
        low_stock: 0,
        out_of_stock: 0,
    };
    for product in products {
        match product.status {
            StockStatus::InStock | StockStatus::Medium => stats.in_stock += 1,
            StockStatus::LowStock => stats.low_stock += 1,
            StockStatus::OutOfStock => stats.out_of_stock += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(name: &str, sku: &str, available: i64, threshold: i64) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            sku: sku.to_string(),
            category_id: None,
            category_name: None,
            total_quantity: available,
            available_quantity: available,
            checked_out_quantity: 0,
            low_stock_threshold: threshold,
            status: StockStatus::derive(available, threshold),
            image_url: None,
            created_on: None,
            updated_on: None,
        }
    }

    #[test]
    fn search_is_case_insensitive_over_name_sku_and_category() {
        let mut p = product("Dell Latitude", "LAP-01", 20, 3);
        p.category_name = Some("Laptops".into());

        for needle in ["dell", "lap-01", "laptops"] {
            let filter = ProductFilter {
                search: needle.into(),
                ..Default::default()
            };
            assert!(matches_filter(&p, &filter), "needle {needle:?} should match");
        }

        let filter = ProductFilter {
            search: "monitor".into(),
            ..Default::default()
        };
        assert!(!matches_filter(&p, &filter));
    }

    #[test]
    fn category_and_status_filters_are_conjunctive() {
        let category = Uuid::new_v4();
        let mut p = product("Cable", "CAB-1", 0, 2);
        p.category_id = Some(category);

        let filter = ProductFilter {
            search: "cable".into(),
            category: Some(category),
            status: Some(StockStatus::OutOfStock),
        };
        assert!(matches_filter(&p, &filter));

        let wrong_status = ProductFilter {
            status: Some(StockStatus::InStock),
            ..filter.clone()
        };
        assert!(!matches_filter(&p, &wrong_status));
    }

    #[test]
    fn twenty_five_products_at_ten_per_page_gives_three_pages() {
        let products: Vec<Product> = (0..25)
            .map(|i| product(&format!("p{i}"), &format!("sku{i}"), 10, 1))
            .collect();
        let refs: Vec<&Product> = products.iter().collect();

        assert_eq!(total_pages(refs.len(), 10), 3);
        assert_eq!(paginate(&refs, 1, 10).len(), 10);
        assert_eq!(paginate(&refs, 3, 10).len(), 5);
        assert_eq!(paginate(&refs, 4, 10).len(), 0);
    }

    #[test]
    fn stats_scenarios_from_threshold_bands() {
        let products = vec![
            product("a", "1", 0, 5),  // out of stock
            product("b", "2", 3, 5),  // low stock
            product("c", "3", 8, 5),  // medium, counted as in stock
            product("d", "4", 50, 5), // in stock
        ];
        let stats = product_stats(&products);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.in_stock, 2);
    }

    prop_compose! {
        fn arb_product()(
            available in 0i64..200,
            threshold in 0i64..40,
            name in "[a-z]{1,8}",
            sku in "[A-Z]{2}-[0-9]{1,4}",
        ) -> Product {
            product(&name, &sku, available, threshold)
        }
    }

    proptest! {
        #[test]
        fn stats_partition_the_list(products in prop::collection::vec(arb_product(), 0..80)) {
            let stats = product_stats(&products);
            prop_assert_eq!(stats.total, products.len());
            prop_assert_eq!(stats.in_stock + stats.low_stock + stats.out_of_stock, stats.total);
        }

        #[test]
        fn filtered_results_match_every_predicate(
            products in prop::collection::vec(arb_product(), 0..60),
            search in "[a-z]{0,3}",
        ) {
            let filter = ProductFilter { search, ..Default::default() };
            let kept = filter_products(&products, &filter);
            for p in &kept {
                prop_assert!(matches_filter(p, &filter));
            }
            // Everything excluded fails at least one predicate.
            let kept_ids: Vec<Uuid> = kept.iter().map(|p| p.id).collect();
            for p in &products {
                if !kept_ids.contains(&p.id) {
                    prop_assert!(!matches_filter(p, &filter));
                }
            }
        }

        #[test]
        fn derived_views_are_idempotent(products in prop::collection::vec(arb_product(), 0..40)) {
            let filter = ProductFilter::default();
            prop_assert_eq!(product_stats(&products), product_stats(&products));
            let a: Vec<Uuid> = filter_products(&products, &filter).iter().map(|p| p.id).collect();
            let b: Vec<Uuid> = filter_products(&products, &filter).iter().map(|p| p.id).collect();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn pagination_boundary(
            total in 0usize..200,
            per_page in 1usize..25,
        ) {
            let products: Vec<Product> = (0..total)
                .map(|i| product(&format!("p{i}"), &format!("s{i}"), 10, 1))
                .collect();
            let refs: Vec<&Product> = products.iter().collect();

            let pages = total_pages(total, per_page);
            prop_assert_eq!(pages, total.div_ceil(per_page));

            if pages > 0 {
                let expected_last = if total % per_page == 0 { per_page } else { total % per_page };
                prop_assert_eq!(paginate(&refs, pages, per_page).len(), expected_last);
            }
            prop_assert_eq!(paginate(&refs, pages + 1, per_page).len(), 0);
        }
    }
}
