use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use avaku::gui::render_page;
use avaku::{
    AvatarStack, CatalogItemFactory, Category, Element, Inventory, ItemNode, RenderConfig,
};

#[derive(Parser)]
#[command(name = "avaku")]
#[command(about = "Render a user's avatar inventory and equipped layers as HTML")]
struct Cli {
    /// JSON item catalog
    catalog: PathBuf,

    /// User whose items are shown
    user: String,

    /// Categories to browse, in order (default: all)
    #[arg(short, long, value_delimiter = ',')]
    categories: Vec<Category>,

    /// Equip the first item of each browsed category
    #[arg(long)]
    equip: bool,

    /// Render config file (overrides AVAKU_CONFIG and the default location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean HTML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = RenderConfig::resolve(cli.config.as_deref()).context("Failed to load render config")?;
    let catalog = CatalogItemFactory::load(&cli.catalog)
        .with_context(|| format!("Failed to load catalog {}", cli.catalog.display()))?;

    let categories = if cli.categories.is_empty() {
        Category::ALL.to_vec()
    } else {
        cli.categories
    };

    let mut inventory = Inventory::with_config(Rc::new(catalog), config)?;
    for &category in &categories {
        inventory.get_items(&cli.user, category)?;
    }

    let mut avatar = AvatarStack::new();
    if cli.equip {
        for &category in &categories {
            if let Some(item) = inventory.items(category).iter().flatten().next() {
                avatar.equip(item);
            }
        }
    }

    let mut equipped = Element::new("equipped");
    inventory.print_equipped(&mut equipped, &avatar, &mut |items: &[ItemNode]| {
        tracing::info!("Equipped panel has {} item controls", items.len());
    })?;

    let mut browser = Element::new("inventory");
    inventory
        .print_html(&mut browser, categories)
        .context("Failed to render inventory")?;

    let page = render_page(&format!("{}'s inventory", cli.user), &equipped, &browser);

    match cli.output {
        Some(path) => {
            fs::write(&path, page).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Inventory page written to {}", path.display());
        }
        None => print!("{}", page),
    }

    Ok(())
}
