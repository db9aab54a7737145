//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;
pub mod forms;
pub mod product;

use anyhow::Result;
use carryon_commerce::catalog::{Catalog, Product};
use carryon_commerce::CommerceError;
use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only this size (e.g. S, M, L).
    #[arg(long)]
    pub size: Option<String>,

    /// Only this color.
    #[arg(long)]
    pub color: Option<String>,

    /// Only this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Only products on sale.
    #[arg(long)]
    pub sale: bool,

    /// Sort order: price-low, price-high, popularity, rating.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Page to show (1-based).
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Exact product name (case-insensitive).
    pub name: String,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product to open. Without a name, shows the last opened product.
    pub name: Option<String>,

    #[command(flatten)]
    pub variant: VariantArgs,

    /// Number of recommendations to list.
    #[arg(short, long)]
    pub recommendations: Option<usize>,
}

/// Narrows a product name down to one variant.
#[derive(Args, Clone, Default)]
pub struct VariantArgs {
    /// Variant size.
    #[arg(long)]
    pub size: Option<String>,

    /// Variant color.
    #[arg(long)]
    pub color: Option<String>,
}

impl VariantArgs {
    fn accepts(&self, size: &str, color: &str) -> bool {
        self.size.as_deref().map_or(true, |s| s.eq_ignore_ascii_case(size))
            && self.color.as_deref().map_or(true, |c| c.eq_ignore_ascii_case(color))
    }
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart and its total.
    List,
    /// Add a product to the cart.
    Add {
        /// Product name.
        name: String,

        #[command(flatten)]
        variant: VariantArgs,

        /// Units to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Take one unit of a product out of the cart.
    Remove {
        /// Product name.
        name: String,

        #[command(flatten)]
        variant: VariantArgs,
    },
    /// Delete a product from the cart entirely.
    Delete {
        /// Product name.
        name: String,

        #[command(flatten)]
        variant: VariantArgs,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Place the order and empty the cart.
    Checkout,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub message: String,
}

/// Arguments for the review command.
#[derive(Args)]
pub struct ReviewArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub review: String,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub password: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Find the catalog product named `name`, narrowed by `variant`.
///
/// Without size or color this is the plain name search and returns the
/// first match.
pub fn find_variant<'a>(
    catalog: &'a Catalog,
    name: &str,
    variant: &VariantArgs,
) -> Result<&'a Product> {
    let named = catalog.search_by_name(name);
    let found = if variant.size.is_none() && variant.color.is_none() {
        named
    } else {
        named.and_then(|first| {
            catalog
                .products()
                .iter()
                .filter(|p| p.name == first.name)
                .find(|p| variant.accepts(&p.size, &p.color))
        })
    };
    found.ok_or_else(|| CommerceError::ProductNotFound(name.trim().to_string()).into())
}
