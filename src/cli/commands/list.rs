//! `larder list` command - Shopping list management

use clap::Subcommand;
use console::style;
use miette::{bail, IntoDiagnostic, Result};
use std::io::IsTerminal;

use crate::cli::filters::ItemFilter;
use crate::cli::helpers::{
    escape_csv, escape_md, format_short_id_str, load_catalog, load_config, open_home, plural,
};
use crate::cli::output::{effective_format, print_json, print_yaml};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{ShoppingError, ShoppingItem, ShoppingList, Storage};
use crate::providers::RecipeProvider;

#[derive(Subcommand, Debug)]
pub enum ListCommands {
    /// Show items on the list
    Show(ShowArgs),

    /// Add items (names already on the list are skipped, ignoring case)
    Add(AddArgs),

    /// Remove an item
    Remove(ItemArgs),

    /// Check or uncheck an item
    Toggle(ItemArgs),

    /// Remove every item
    Clear(ClearArgs),

    /// Remove checked items
    ClearCompleted,

    /// Add a recipe's ingredients
    FromRecipe(FromRecipeArgs),
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Which items to show
    #[arg(long, value_enum, default_value = "all")]
    pub filter: ItemFilter,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Item names
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Category for the new items (e.g. produce, dairy)
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ItemArgs {
    /// Item id, position (@1, @2, ...), or name
    pub item: String,
}

#[derive(clap::Args, Debug)]
pub struct ClearArgs {
    /// Skip confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct FromRecipeArgs {
    /// Recipe id
    pub recipe: String,

    /// Category for the new items
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

/// Run the list command
pub fn run(cmd: ListCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ListCommands::Show(args) => run_show(args, global),
        ListCommands::Add(args) => run_add(args, global),
        ListCommands::Remove(args) => run_remove(args, global),
        ListCommands::Toggle(args) => run_toggle(args, global),
        ListCommands::Clear(args) => run_clear(args, global),
        ListCommands::ClearCompleted => run_clear_completed(global),
        ListCommands::FromRecipe(args) => run_from_recipe(args, global),
    }
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let list = home.shopping_list();

    // Positions refer to the full list so they can be passed back as @N
    let rows: Vec<(usize, &ShoppingItem)> = list
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| (idx + 1, item))
        .filter(|(_, item)| args.filter.matches(item))
        .collect();

    if args.count {
        println!("{}", rows.len());
        return Ok(());
    }

    match effective_format(global.format, true) {
        OutputFormat::Tsv | OutputFormat::Auto => print_sections(&list, &rows),
        format => print_items(format, &rows)?,
    }

    Ok(())
}

/// Machine-readable views of `(position, item)` rows
fn print_items(format: OutputFormat, rows: &[(usize, &ShoppingItem)]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let items: Vec<&ShoppingItem> = rows.iter().map(|(_, item)| *item).collect();
            print_json(&items)?;
        }
        OutputFormat::Yaml => {
            let items: Vec<&ShoppingItem> = rows.iter().map(|(_, item)| *item).collect();
            print_yaml(&items)?;
        }
        OutputFormat::Csv => {
            println!("id,name,checked,category,added_at");
            for (_, item) in rows {
                println!(
                    "{},{},{},{},{}",
                    item.id,
                    escape_csv(&item.name),
                    item.checked,
                    escape_csv(item.category.as_deref().unwrap_or("")),
                    item.added_at.to_rfc3339()
                );
            }
        }
        OutputFormat::Md => {
            println!("| # | Item | Done | Category |");
            println!("|---|---|---|---|");
            for (pos, item) in rows {
                println!(
                    "| @{} | {} | {} | {} |",
                    pos,
                    escape_md(&item.name),
                    if item.checked { "x" } else { " " },
                    escape_md(item.category.as_deref().unwrap_or(""))
                );
            }
        }
        OutputFormat::Id => {
            for (_, item) in rows {
                println!("{}", item.id);
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => {}
    }
    Ok(())
}

fn print_sections<S: Storage>(list: &ShoppingList<S>, rows: &[(usize, &ShoppingItem)]) {
    if list.is_empty() {
        println!("Your shopping list is empty.");
        println!();
        println!(
            "Add items with {} or import a recipe with {}",
            style("larder list add <name>").yellow(),
            style("larder list from-recipe <id>").yellow()
        );
        return;
    }
    if rows.is_empty() {
        println!("No matching items.");
        return;
    }

    let to_buy: Vec<&(usize, &ShoppingItem)> = rows.iter().filter(|(_, i)| !i.checked).collect();
    let in_cart: Vec<&(usize, &ShoppingItem)> = rows.iter().filter(|(_, i)| i.checked).collect();

    if !to_buy.is_empty() {
        println!("{}", style(format!("TO BUY ({})", to_buy.len())).bold());
        for (pos, item) in to_buy {
            println!(
                "  {:<5} [ ] {:<30} {}",
                style(format!("@{}", pos)).cyan(),
                item.name,
                style(item.category.as_deref().unwrap_or("")).dim()
            );
        }
    }

    if !in_cart.is_empty() {
        if rows.iter().any(|(_, i)| !i.checked) {
            println!();
        }
        println!("{}", style(format!("IN CART ({})", in_cart.len())).bold());
        for (pos, item) in in_cart {
            println!(
                "  {:<5} [x] {:<30} {}",
                style(format!("@{}", pos)).cyan(),
                style(&item.name).dim(),
                style(item.category.as_deref().unwrap_or("")).dim()
            );
        }
    }
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let mut list = home.shopping_list();

    for name in &args.names {
        match list.add(name, args.category.as_deref()) {
            Ok(Some(id)) => println!(
                "{} Added {} ({})",
                style("✓").green(),
                style(name.trim()).cyan(),
                format_short_id_str(id.as_str())
            ),
            Ok(None) => println!(
                "{} {} is already on the list",
                style("•").dim(),
                style(name.trim()).cyan()
            ),
            Err(ShoppingError::EmptyName) => {
                eprintln!("{} Skipping empty item name", style("!").yellow());
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }

    Ok(())
}

fn run_remove(args: ItemArgs, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let mut list = home.shopping_list();

    let Some(item) = list.resolve(&args.item).cloned() else {
        eprintln!(
            "{} No item matching '{}' on the list",
            style("!").yellow(),
            args.item
        );
        return Ok(());
    };

    list.remove(&item.id).into_diagnostic()?;
    println!("{} Removed {}", style("✓").green(), style(&item.name).cyan());
    Ok(())
}

fn run_toggle(args: ItemArgs, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let mut list = home.shopping_list();

    let Some(item) = list.resolve(&args.item).cloned() else {
        eprintln!(
            "{} No item matching '{}' on the list",
            style("!").yellow(),
            args.item
        );
        return Ok(());
    };

    match list.toggle(&item.id).into_diagnostic()? {
        Some(true) => println!("{} Checked {}", style("✓").green(), style(&item.name).cyan()),
        Some(false) => println!("{} Unchecked {}", style("○").dim(), style(&item.name).cyan()),
        None => {}
    }
    Ok(())
}

fn run_clear(args: ClearArgs, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let mut list = home.shopping_list();

    if list.is_empty() {
        println!("Shopping list is already empty.");
        return Ok(());
    }

    if !args.yes {
        if !std::io::stdin().is_terminal() {
            bail!("Refusing to clear the list without confirmation; pass --yes");
        }
        let confirmed = dialoguer::Confirm::with_theme(&dialoguer::theme::ColorfulTheme::default())
            .with_prompt(format!("Remove all {}?", plural(list.len(), "item")))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = list.clear().into_diagnostic()?;
    println!("{} Cleared {}", style("✓").green(), plural(removed, "item"));
    Ok(())
}

fn run_clear_completed(global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let mut list = home.shopping_list();

    let removed = list.clear_completed().into_diagnostic()?;
    if removed == 0 {
        println!("No completed items to remove.");
    } else {
        println!(
            "{} Removed {} ({} left)",
            style("✓").green(),
            plural(removed, "completed item"),
            list.len()
        );
    }
    Ok(())
}

fn run_from_recipe(args: FromRecipeArgs, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let config = load_config(&home)?;
    let catalog = load_catalog(&config)?;

    let recipe = catalog.recipe(&args.recipe);
    let ingredients = catalog.ingredients_for(&args.recipe);
    if recipe.is_none() {
        eprintln!(
            "{} Recipe '{}' not found; adding pantry staples instead",
            style("!").yellow(),
            args.recipe
        );
    }

    let mut list = home.shopping_list();
    let added = list
        .add_all(&ingredients, args.category.as_deref())
        .into_diagnostic()?;

    if !matches!(global.format, OutputFormat::Auto | OutputFormat::Tsv) {
        // Same shapes as `list show`, limited to the items just added
        let rows: Vec<(usize, &ShoppingItem)> = list
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| added.contains(&item.id))
            .map(|(idx, item)| (idx + 1, item))
            .collect();
        return print_items(global.format, &rows);
    }

    let skipped = ingredients.len() - added.len();
    let source = recipe
        .map(|r| r.title)
        .unwrap_or_else(|| "pantry staples".to_string());
    println!(
        "{} Added {} from {}",
        style("✓").green(),
        plural(added.len(), "item"),
        style(source).cyan()
    );
    if skipped > 0 {
        println!(
            "  {} already on the list",
            plural(skipped, "ingredient")
        );
    }
    Ok(())
}
