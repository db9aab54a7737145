//! Carryon CLI - Command line storefront for the Carryon luggage shop.
//!
//! Commands:
//! - `carryon catalog` - Browse luggage with filters, sorting and pages
//! - `carryon sets` - List luggage sets
//! - `carryon home` - Show the home page shelves
//! - `carryon search` - Find a product by name
//! - `carryon show` - Show a product with recommendations
//! - `carryon cart` - Manage the cart and check out
//! - `carryon contact` / `review` / `login` - Submit forms
//! - `carryon config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CartArgs, CatalogArgs, ConfigArgs, ContactArgs, LoginArgs, ReviewArgs, SearchArgs, ShowArgs,
};

/// Carryon CLI - Browse luggage and manage your cart
#[derive(Parser)]
#[command(name = "carryon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Catalog(CatalogArgs),

    /// List luggage sets
    Sets,

    /// Show the home page shelves
    Home,

    /// Find a product by its exact name
    Search(SearchArgs),

    /// Show a product and recommendations
    Show(ShowArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Send a message to the shop
    Contact(ContactArgs),

    /// Review a product
    Review(ReviewArgs),

    /// Sign in
    Login(LoginArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::browse::run_catalog(args, &ctx).await,
        Commands::Sets => commands::browse::run_sets(&ctx).await,
        Commands::Home => commands::browse::run_home(&ctx).await,
        Commands::Search(args) => commands::product::run_search(args, &ctx).await,
        Commands::Show(args) => commands::product::run_show(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Contact(args) => commands::forms::run_contact(args, &ctx).await,
        Commands::Review(args) => commands::forms::run_review(args, &ctx).await,
        Commands::Login(args) => commands::forms::run_login(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
