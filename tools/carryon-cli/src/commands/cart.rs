//! Cart commands.

use anyhow::{bail, Result};
use carryon_commerce::cart::{Cart, CartBadge, CartRepository};
use carryon_commerce::catalog::VariantKey;
use carryon_commerce::CommerceError;
use carryon_storage::DirStore;
use dialoguer::Confirm;

use super::{find_variant, CartArgs, CartCommand, VariantArgs};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.cart()?;
    match args.command.unwrap_or(CartCommand::List) {
        CartCommand::List => list(&repo.load(), ctx),
        CartCommand::Add {
            name,
            variant,
            quantity,
        } => add(&repo, &name, &variant, quantity, ctx).await,
        CartCommand::Remove { name, variant } => {
            let key = entry_key(&repo.load(), &name, &variant)?;
            let cart = repo.decrement_or_remove(&key)?;
            ctx.output.success(&format!("Removed one {key}"));
            list(&cart, ctx)
        }
        CartCommand::Delete { name, variant } => {
            let key = entry_key(&repo.load(), &name, &variant)?;
            let cart = repo.remove_all_matching(&key)?;
            ctx.output.success(&format!("Deleted {key} from the cart"));
            list(&cart, ctx)
        }
        CartCommand::Clear { yes } => clear(&repo, yes, ctx),
        CartCommand::Checkout => checkout(&repo, ctx),
    }
}

async fn add(
    repo: &CartRepository<DirStore>,
    name: &str,
    variant: &VariantArgs,
    quantity: u32,
    ctx: &Context,
) -> Result<()> {
    let catalog = ctx.load_catalog().await;
    let product = find_variant(&catalog, name, variant)?;
    let cart = repo.add_quantity(product, quantity)?;

    ctx.output.success(&format!(
        "Added {} × {} to the cart",
        quantity,
        product.variant_key()
    ));
    list(&cart, ctx)
}

/// Pick the cart entry `name` refers to.
///
/// Size and color may be left out when only one entry has that name.
fn entry_key(cart: &Cart, name: &str, variant: &VariantArgs) -> Result<VariantKey> {
    let candidates: Vec<VariantKey> = cart
        .find_by_name(name)
        .into_iter()
        .filter(|e| variant.accepts(&e.product.size, &e.product.color))
        .map(|e| e.variant_key())
        .collect();

    match candidates.as_slice() {
        [] => Err(CommerceError::ItemNotInCart(name.trim().to_string()).into()),
        [key] => Ok(key.clone()),
        keys => {
            let options: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
            bail!(
                "{} matches several cart entries ({}); pass --size or --color",
                name.trim(),
                options.join(", ")
            )
        }
    }
}

fn list(cart: &Cart, ctx: &Context) -> Result<()> {
    let summary = cart.summary();
    let badge = CartBadge::for_entries(cart.entries());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "entries": cart.entries(),
            "summary": summary,
            "badge": badge,
        }));
        return Ok(());
    }

    ctx.output.header("Your cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    for entry in cart.entries() {
        let quantity = entry.quantity.to_string();
        let unit = entry.product.price.display();
        let line = entry.line_total().display();
        ctx.output.table_row(
            &[&entry.variant_key().to_string(), &quantity, &unit, &line],
            &[36, 4, 9, 10],
        );
    }
    ctx.output.info("");
    ctx.output.summary(&summary);
    ctx.output.badge(badge);
    Ok(())
}

fn clear(repo: &CartRepository<DirStore>, yes: bool, ctx: &Context) -> Result<()> {
    if repo.load().is_empty() {
        ctx.output.info("Your cart is already empty.");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt("Remove everything from the cart?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    repo.clear_cart()?;
    ctx.output.success("Cart cleared");
    Ok(())
}

fn checkout(repo: &CartRepository<DirStore>, ctx: &Context) -> Result<()> {
    let receipt = repo.checkout()?;

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    ctx.output.header("Order placed");
    ctx.output.kv(
        "Placed at",
        &receipt.placed_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    for entry in &receipt.entries {
        ctx.output
            .list_item(&format!("{} × {}", entry.quantity, entry.variant_key()));
    }
    ctx.output.summary(&receipt.summary);
    ctx.output.success("Thank you for your order!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carryon_commerce::catalog::Product;
    use carryon_commerce::Money;

    fn duffel(size: &str) -> Product {
        let mut p = Product::new("Nomad Duffel", Money::from_units(119), "duffel");
        p.size = size.to_string();
        p.color = "olive".to_string();
        p
    }

    #[test]
    fn test_entry_key() {
        let mut cart = Cart::new();
        cart.add(&duffel("M"));

        let key = entry_key(&cart, "nomad duffel", &VariantArgs::default()).unwrap();
        assert_eq!(key, duffel("M").variant_key());

        cart.add(&duffel("L"));
        assert!(entry_key(&cart, "Nomad Duffel", &VariantArgs::default()).is_err());

        let large = VariantArgs {
            size: Some("L".to_string()),
            color: None,
        };
        assert_eq!(
            entry_key(&cart, "Nomad Duffel", &large).unwrap(),
            duffel("L").variant_key()
        );

        let err = entry_key(&cart, "Trolley", &VariantArgs::default()).unwrap_err();
        assert!(err.to_string().contains("Item not in cart"));
    }
}
