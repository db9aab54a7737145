//! Catalog grid, luggage sets and home page.

use anyhow::Result;
use carryon_commerce::cart::CartBadge;
use carryon_commerce::catalog::{NEW_ARRIVALS_BLOCK, SELECTED_PRODUCTS_BLOCK};
use carryon_commerce::search::{BrowseEvent, BrowseSession, SortKey};

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub async fn run_catalog(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await;
    let products = catalog.products();

    let sort = match args.sort.as_deref() {
        Some(value) => SortKey::parse_optional(value)?,
        None => None,
    };
    let events = [
        BrowseEvent::SetSize(args.size),
        BrowseEvent::SetColor(args.color),
        BrowseEvent::SetCategory(args.category),
        BrowseEvent::SetSalesOnly(args.sale),
        BrowseEvent::SetSort(sort),
        BrowseEvent::GoToPage(args.page),
    ];
    let session = events
        .into_iter()
        .fold(BrowseSession::new(), |session, event| session.apply(event, products));

    if session.page != args.page {
        ctx.output
            .debug(&format!("Page {} is out of range, showing page {}", args.page, session.page));
    }

    let page = session.view(products);
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "session": session,
            "page": page,
        }));
        return Ok(());
    }

    let title = match session.sort {
        Some(key) => format!("Luggage, {}", key.display_name().to_lowercase()),
        None => "Luggage".to_string(),
    };
    ctx.output.header(&title);
    if page.is_empty() {
        ctx.output.info("No products match these filters.");
    } else {
        ctx.output.product_table(page.items.iter().copied());
    }
    ctx.output.pagination(&page.pagination);
    show_badge(ctx)?;
    Ok(())
}

/// Run the sets command.
pub async fn run_sets(ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await;
    let sets = catalog.luggage_sets();

    if ctx.output.is_json() {
        ctx.output.json(&sets);
        return Ok(());
    }

    ctx.output.header("Best luggage sets");
    if sets.is_empty() {
        ctx.output.info("No luggage sets available.");
    } else {
        ctx.output.product_table(sets.iter().copied());
    }
    Ok(())
}

/// Run the home command.
pub async fn run_home(ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await;
    let shelves = [
        (SELECTED_PRODUCTS_BLOCK, catalog.in_block(SELECTED_PRODUCTS_BLOCK)),
        (NEW_ARRIVALS_BLOCK, catalog.in_block(NEW_ARRIVALS_BLOCK)),
    ];

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "selectedProducts": shelves[0].1,
            "newArrivals": shelves[1].1,
        }));
        return Ok(());
    }

    for (title, products) in &shelves {
        ctx.output.header(title);
        if products.is_empty() {
            ctx.output.info("Nothing here yet.");
        } else {
            ctx.output.product_table(products.iter().copied());
        }
    }
    show_badge(ctx)?;
    Ok(())
}

pub(crate) fn show_badge(ctx: &Context) -> Result<()> {
    let cart = ctx.cart()?.load();
    ctx.output.badge(CartBadge::for_entries(cart.entries()));
    Ok(())
}
