//! Property tests for the catalog and cart engines.

use carryon_commerce::prelude::*;
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["carry-on", "checked", "duffel", LUGGAGE_SETS_CATEGORY];
const SIZES: &[&str] = &["S", "M", "L"];
const COLORS: &[&str] = &["black", "grey", "red"];

fn arb_product() -> impl Strategy<Value = Product> {
    (
        "[A-Z][a-z]{2,8}",
        1i64..200_000,
        prop::sample::select(CATEGORIES),
        prop::sample::select(SIZES),
        prop::sample::select(COLORS),
        any::<bool>(),
        0u32..=50,
        0u32..1_000,
    )
        .prop_map(|(name, cents, category, size, color, sale, rating, popularity)| {
            let mut p = Product::new(name, Money::new(cents), category);
            p.size = size.to_string();
            p.color = color.to_string();
            p.sales_status = sale;
            p.rating = f64::from(rating) / 10.0;
            p.popularity = f64::from(popularity);
            p
        })
}

fn arb_filters() -> impl Strategy<Value = FilterState> {
    (
        prop::option::of(prop::sample::select(SIZES)),
        prop::option::of(prop::sample::select(COLORS)),
        prop::option::of(prop::sample::select(CATEGORIES)),
        any::<bool>(),
    )
        .prop_map(|(size, color, category, sales_only)| {
            FilterState::new()
                .with_size(size)
                .with_color(color)
                .with_category(category)
                .with_sales_only(sales_only)
        })
}

fn arb_sort() -> impl Strategy<Value = Option<SortKey>> {
    prop::option::of(prop::sample::select(SortKey::ALL.to_vec()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn filtered_catalog_has_no_sets(
        products in prop::collection::vec(arb_product(), 0..40),
        filters in arb_filters(),
    ) {
        let shown = filter_catalog(&products, &filters);
        prop_assert!(shown.iter().all(|p| !p.is_luggage_set()));
        prop_assert!(shown.iter().all(|p| filters.matches(p)));
    }

    #[test]
    fn sort_is_a_permutation(
        products in prop::collection::vec(arb_product(), 0..40),
        key in arb_sort(),
    ) {
        let sorted = sort_catalog(&products, key);
        prop_assert_eq!(sorted.len(), products.len());

        let mut before: Vec<String> = products.iter().map(|p| format!("{p:?}")).collect();
        let mut after: Vec<String> = sorted.iter().map(|p| format!("{p:?}")).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);

        if let Some(key) = key {
            for pair in sorted.windows(2) {
                prop_assert!(key.compare(&pair[0], &pair[1]) != std::cmp::Ordering::Greater);
            }
        }
    }

    #[test]
    fn pages_cover_the_list_exactly_once(
        len in 0usize..60,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let pages = len.div_ceil(PAGE_SIZE);

        let mut seen = Vec::new();
        for page in 1..=pages {
            let chunk = paginate(&items, page);
            prop_assert!(!chunk.is_empty());
            prop_assert!(chunk.len() <= PAGE_SIZE);
            seen.extend_from_slice(chunk);
        }
        prop_assert_eq!(seen, items.clone());
        prop_assert!(paginate(&items, pages + 1).is_empty());
    }

    #[test]
    fn session_page_is_always_reachable(
        products in prop::collection::vec(arb_product(), 0..40),
        jumps in prop::collection::vec(0usize..10, 1..8),
    ) {
        let mut session = BrowseSession::new();
        for page in jumps {
            session = session.apply(BrowseEvent::GoToPage(page), &products);
            let view = session.view(&products);
            prop_assert!(session.page >= 1);
            if view.pagination.total > 0 {
                prop_assert!(!view.is_empty());
            }
        }
    }

    #[test]
    fn add_then_remove_all_leaves_nothing(
        product in arb_product(),
        times in 1u32..20,
    ) {
        let mut cart = Cart::new();
        for _ in 0..times {
            cart.add(&product);
        }
        prop_assert_eq!(cart.unique_item_count(), 1);
        prop_assert_eq!(cart.item_count(), u64::from(times));

        let key = product.variant_key();
        prop_assert_eq!(cart.remove_all_matching(&key), 1);
        prop_assert_eq!(cart.remove_all_matching(&key), 0);
        prop_assert!(cart.is_empty());
    }

    #[test]
    fn decrement_undoes_add(
        products in prop::collection::vec(arb_product(), 1..10),
        extra in arb_product(),
    ) {
        let mut cart = Cart::new();
        for p in &products {
            cart.add(p);
        }
        let before = cart.clone();

        cart.add(&extra);
        prop_assert!(cart.decrement_or_remove(&extra.variant_key()));
        prop_assert_eq!(cart, before);
    }

    #[test]
    fn summary_adds_up(
        products in prop::collection::vec(arb_product(), 0..10),
    ) {
        let mut cart = Cart::new();
        for p in &products {
            cart.add(p);
        }
        let summary = cart.summary();
        prop_assert_eq!(summary.shipping, Money::from_units(30));
        prop_assert_eq!(
            summary.discount.is_some(),
            summary.subtotal >= Money::from_units(3000)
        );
        prop_assert_eq!(summary.total, summary.subtotal - summary.savings() + summary.shipping);
        prop_assert_eq!(CartBadge::for_entries(cart.entries()) == CartBadge::Hidden, cart.is_empty());
    }
}
