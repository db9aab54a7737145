//! Product search and detail view.

use anyhow::Result;
use carryon_commerce::catalog::Product;
use carryon_commerce::CommerceError;

use super::{find_variant, SearchArgs, ShowArgs};
use crate::context::Context;

/// Run the search command.
pub async fn run_search(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await;

    let Some(product) = catalog.search_by_name(&args.name) else {
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::Value::Null);
            return Ok(());
        }
        return Err(CommerceError::ProductNotFound(args.name.trim().to_string()).into());
    };

    ctx.selection()?.select(product)?;
    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.success(&format!("Found {}", product.name));
    print_details(product, ctx);
    Ok(())
}

/// Run the show command.
pub async fn run_show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await;
    let selection = ctx.selection()?;

    let product = match args.name.as_deref() {
        Some(name) => {
            let product = find_variant(&catalog, name, &args.variant)?.clone();
            selection.select(&product)?;
            product
        }
        None => match selection.selected() {
            Some(product) => product,
            None => {
                ctx.output.info("No product selected yet. Try `carryon show <name>`.");
                return Ok(());
            }
        },
    };

    let count = args
        .recommendations
        .unwrap_or(ctx.config.catalog.recommendations);
    let mut rng = rand::thread_rng();
    let recommendations: Vec<&Product> = catalog
        .recommendations(count.saturating_add(1), &mut rng)
        .into_iter()
        .filter(|p| !p.is_same_variant(&product))
        .take(count)
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "recommendations": recommendations,
        }));
        return Ok(());
    }

    print_details(&product, ctx);
    if !recommendations.is_empty() {
        ctx.output.header("You may also like");
        ctx.output.product_table(recommendations);
    }
    Ok(())
}

fn print_details(product: &Product, ctx: &Context) {
    ctx.output.header(&product.name);
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Size", &product.size);
    ctx.output.kv("Color", &product.color);
    ctx.output.kv(
        "Rating",
        &format!("{} ({:.1})", product.star_rating_display(), product.rating),
    );
    if product.sales_status {
        ctx.output.kv("Status", "On sale");
    }
    if !product.image_url.is_empty() {
        ctx.output.kv("Image", &product.image_url);
    }
}
