//! Output formatting for the CLI.

use carryon_commerce::cart::{CartBadge, CartSummary};
use carryon_commerce::catalog::Product;
use carryon_commerce::search::Pagination;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};

/// Column widths for product tables: name, size, color, price, rating.
const PRODUCT_COLUMNS: [usize; 5] = [26, 4, 6, 9, 5];

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stderr(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a table of products with a header row.
    pub fn product_table<'a>(&self, products: impl IntoIterator<Item = &'a Product>) {
        if self.json {
            return;
        }
        println!(
            "  {}",
            style(format_columns(&["Name", "Size", "Color", "Price", "Stars"])).dim()
        );
        for product in products {
            let mut name = product.name.clone();
            if product.sales_status {
                name.push_str(" (sale)");
            }
            let price = product.price.display();
            let stars = product.star_rating_display();
            self.table_row(
                &[&name, &product.size, &product.color, &price, &stars],
                &PRODUCT_COLUMNS,
            );
        }
    }

    /// Print the pagination line under a catalog page.
    pub fn pagination(&self, pagination: &Pagination) {
        if self.json {
            return;
        }
        println!(
            "\n  Showing {} of {}",
            pagination.visible_range(),
            pagination.total
        );
        let pages = pagination.page_numbers(7);
        if pages.is_empty() {
            return;
        }
        let links: Vec<String> = pages
            .iter()
            .map(|&page| {
                if page == pagination.page {
                    style(format!("[{page}]")).bold().to_string()
                } else {
                    page.to_string()
                }
            })
            .collect();
        println!("  Pages: {}", links.join(" "));
    }

    /// Print a cart price breakdown.
    pub fn summary(&self, summary: &CartSummary) {
        self.kv("Subtotal", &summary.subtotal.display());
        self.kv("Shipping", &summary.shipping.display());
        if let Some(discount) = summary.discount {
            self.kv("Discount", &style(format!("-{}", discount.display())).green().to_string());
        }
        self.kv("Total", &style(summary.total.display()).bold().to_string());
    }

    /// Print the cart badge.
    pub fn badge(&self, badge: CartBadge) {
        if let CartBadge::Visible(count) = badge {
            self.info(&format!("Cart: {}", style(count).cyan().bold()));
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json || !self.term.is_term() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
        {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn format_columns(cols: &[&str]) -> String {
    cols.iter()
        .zip(PRODUCT_COLUMNS.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}
