//! `larder stores` command - Stores near a location

use console::style;
use miette::Result;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::{
    escape_csv, escape_md, load_catalog, load_config, load_store_finder, open_home, stars,
    truncate_str,
};
use crate::cli::output::{effective_format, print_json, print_yaml};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::Store;
use crate::providers::{RecipeProvider, StoreFinder, DEFAULT_LOCATION};

#[derive(clap::Args, Debug)]
pub struct StoresArgs {
    /// Where to search (defaults to `location` in config.yaml)
    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Flag stores carrying this recipe's ingredients
    #[arg(long, short = 'r', conflicts_with = "from_list")]
    pub recipe: Option<String>,

    /// Flag stores carrying the unchecked shopping list items
    #[arg(long)]
    pub from_list: bool,
}

#[derive(Tabled)]
struct StoreRow {
    #[tabled(rename = "STORE")]
    name: String,
    #[tabled(rename = "TYPE")]
    store_type: String,
    #[tabled(rename = "RATING")]
    rating: String,
    #[tabled(rename = "DIST")]
    distance: String,
    #[tabled(rename = "HOURS")]
    hours: String,
    #[tabled(rename = "HAS ALL")]
    has_ingredients: String,
}

impl From<&Store> for StoreRow {
    fn from(store: &Store) -> Self {
        Self {
            name: truncate_str(&store.name, 28),
            store_type: store.store_type.to_string(),
            rating: format!("{} ({})", stars(f32::from(store.rating)), store.reviews),
            distance: format!("{:.1} mi", store.distance_miles),
            hours: store.hours.clone(),
            has_ingredients: if store.has_ingredients { "✓" } else { "" }.to_string(),
        }
    }
}

/// Run the stores command
pub fn run(args: StoresArgs, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let config = load_config(&home)?;
    let finder = load_store_finder(&config)?;

    let needed: Vec<String> = if let Some(id) = &args.recipe {
        load_catalog(&config)?.ingredients_for(id)
    } else if args.from_list {
        let list = home.shopping_list();
        list.unchecked().map(|item| item.name.clone()).collect()
    } else {
        Vec::new()
    };

    let location = args
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .or_else(|| config.location());
    tracing::debug!(?location, needed = needed.len(), "finding stores");

    let stores = finder.find_stores(location, &needed);

    match effective_format(global.format, true) {
        OutputFormat::Json => print_json(&stores),
        OutputFormat::Yaml => print_yaml(&stores),
        OutputFormat::Id => {
            for store in &stores {
                println!("{}", store.id);
            }
            Ok(())
        }
        OutputFormat::Csv => {
            println!("id,name,type,address,rating,distance_miles,has_ingredients");
            for s in &stores {
                println!(
                    "{},{},{},{},{},{:.1},{}",
                    s.id,
                    escape_csv(&s.name),
                    s.store_type,
                    escape_csv(&s.address),
                    s.rating,
                    s.distance_miles,
                    s.has_ingredients
                );
            }
            Ok(())
        }
        OutputFormat::Md => {
            println!("| Store | Type | Rating | Distance | Has all |");
            println!("|---|---|---|---|---|");
            for s in &stores {
                println!(
                    "| {} | {} | {} | {:.1} mi | {} |",
                    escape_md(&s.name),
                    s.store_type,
                    s.rating,
                    s.distance_miles,
                    if s.has_ingredients { "yes" } else { "" }
                );
            }
            Ok(())
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            println!(
                "Stores near {}",
                style(location.unwrap_or(DEFAULT_LOCATION)).cyan()
            );
            let rows: Vec<StoreRow> = stores.iter().map(StoreRow::from).collect();
            let mut table = Table::new(rows);
            table.with(Style::psql());
            println!("{}", table);

            if !needed.is_empty() && !stores.iter().any(|s| s.has_ingredients) {
                println!();
                println!(
                    "{} No single store carries all {} ingredients",
                    style("!").yellow(),
                    needed.len()
                );
            }
            Ok(())
        }
    }
}
