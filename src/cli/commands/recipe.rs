//! `larder recipe` command - Recipe search and details

use clap::Subcommand;
use console::style;
use miette::Result;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::filters::CategoryFilter;
use crate::cli::helpers::{
    escape_csv, escape_md, load_catalog, load_config, open_home, plural, stars, truncate_str,
};
use crate::cli::output::{effective_format, print_json, print_yaml};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{DietaryMatch, DietaryPreferences};
use crate::entities::Recipe;
use crate::providers::{RecipeProvider, TRENDING_LIMIT};

/// Related recipes shown under a recipe
const RELATED_LIMIT: usize = 3;

#[derive(Subcommand, Debug)]
pub enum RecipeCommands {
    /// Search recipes by title or ingredient
    Search(SearchArgs),

    /// Show a recipe with dietary notes and shopping list status
    Show(ShowArgs),

    /// Recipes trending right now
    Trending(TrendingArgs),
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Text to look for (omit to list everything)
    pub query: Option<String>,

    /// Restrict to one category
    #[arg(long, short = 'c', value_enum, default_value = "all")]
    pub category: CategoryFilter,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct TrendingArgs {
    /// Number of recipes to show
    #[arg(long, short = 'n', default_value_t = TRENDING_LIMIT)]
    pub limit: usize,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Recipe id
    pub id: String,
}

#[derive(Tabled)]
struct RecipeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "TIME")]
    time: String,
    #[tabled(rename = "RATING")]
    rating: String,
    #[tabled(rename = "DIET")]
    diet: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeDetail<'a> {
    #[serde(flatten)]
    recipe: &'a Recipe,
    dietary_match: Option<DietaryMatch>,
    on_shopping_list: Vec<&'a str>,
    related: Vec<&'a str>,
}

/// Run the recipe command
pub fn run(cmd: RecipeCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        RecipeCommands::Search(args) => run_search(args, global),
        RecipeCommands::Show(args) => run_show(args, global),
        RecipeCommands::Trending(args) => run_trending(args, global),
    }
}

/// Short verdict for a table cell
fn diet_cell(result: Option<&DietaryMatch>) -> String {
    match result {
        None => "-".to_string(),
        Some(m) if m.matches.is_empty() && m.conflicts.is_empty() => "-".to_string(),
        Some(m) if m.is_compatible() => "✓ fits".to_string(),
        Some(m) => format!("✗ {}", m.conflict_tags().join(", ")),
    }
}

fn run_search(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let config = load_config(&home)?;
    let catalog = load_catalog(&config)?;
    let prefs = *home.profile().dietary_preferences();

    let query = args.query.as_deref().unwrap_or("");
    let mut results = catalog.search(query, args.category.category());
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    let empty = if query.is_empty() {
        "No recipes found.".to_string()
    } else {
        format!("No recipes found for '{}'.", style(query).yellow())
    };
    print_results(&results, &prefs, global, &empty)
}

fn run_trending(args: TrendingArgs, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let config = load_config(&home)?;
    let catalog = load_catalog(&config)?;
    let prefs = *home.profile().dietary_preferences();

    let results = catalog.trending(args.limit);
    if matches!(global.format, OutputFormat::Auto | OutputFormat::Tsv) && !results.is_empty() {
        println!("{}", style("Trending now").bold());
    }
    print_results(&results, &prefs, global, "Nothing is trending right now.")
}

/// Render a recipe list in the selected format
fn print_results(
    results: &[Recipe],
    prefs: &DietaryPreferences,
    global: &GlobalOpts,
    empty: &str,
) -> Result<()> {
    match effective_format(global.format, true) {
        OutputFormat::Json => return print_json(results),
        OutputFormat::Yaml => return print_yaml(results),
        OutputFormat::Id => {
            for recipe in results {
                println!("{}", recipe.id);
            }
            return Ok(());
        }
        OutputFormat::Csv => {
            println!("id,title,category,prep_time,rating");
            for r in results {
                println!(
                    "{},{},{},{},{:.1}",
                    r.id,
                    escape_csv(&r.title),
                    r.category,
                    r.prep_time,
                    r.rating
                );
            }
            return Ok(());
        }
        OutputFormat::Md => {
            println!("| ID | Title | Category | Time | Rating |");
            println!("|---|---|---|---|---|");
            for r in results {
                println!(
                    "| {} | {} | {} | {} min | {:.1} |",
                    r.id,
                    escape_md(&r.title),
                    r.category,
                    r.prep_time,
                    r.rating
                );
            }
            return Ok(());
        }
        OutputFormat::Tsv | OutputFormat::Auto => {}
    }

    if results.is_empty() {
        println!("{}", empty);
        return Ok(());
    }

    let rows: Vec<RecipeRow> = results
        .iter()
        .map(|r| RecipeRow {
            id: r.id.clone(),
            title: truncate_str(&r.title, 32),
            category: r.category.to_string(),
            time: format!("{} min", r.prep_time),
            rating: format!("{:.1}", r.rating),
            diet: diet_cell(r.dietary_match(prefs).as_ref()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    println!("{}", table);
    println!();
    println!(
        "{} found. Use {} for details.",
        plural(results.len(), "recipe"),
        style("larder recipe show <id>").cyan()
    );
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let config = load_config(&home)?;
    let catalog = load_catalog(&config)?;

    let Some(recipe) = catalog.recipe(&args.id) else {
        println!("No recipe with id '{}'.", style(&args.id).yellow());
        return Ok(());
    };

    let prefs: DietaryPreferences = *home.profile().dietary_preferences();
    let dietary = recipe.dietary_match(&prefs);
    let list = home.shopping_list();
    let related = catalog.related(&recipe, RELATED_LIMIT);

    let on_list: Vec<&str> = recipe
        .ingredients
        .iter()
        .filter(|i| list.contains_name(i))
        .map(|i| i.as_str())
        .collect();

    match global.format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let detail = RecipeDetail {
                recipe: &recipe,
                dietary_match: dietary,
                on_shopping_list: on_list,
                related: related.iter().map(|r| r.id.as_str()).collect(),
            };
            if global.format == OutputFormat::Json {
                print_json(&detail)
            } else {
                print_yaml(&detail)
            }
        }
        OutputFormat::Id => {
            println!("{}", recipe.id);
            Ok(())
        }
        OutputFormat::Csv => {
            // One row per ingredient, with the recipe columns repeated
            println!("id,title,ingredient,on_list,diet");
            let diet = diet_cell(dietary.as_ref());
            for ingredient in &recipe.ingredients {
                println!(
                    "{},{},{},{},{}",
                    recipe.id,
                    escape_csv(&recipe.title),
                    escape_csv(ingredient),
                    on_list.contains(&ingredient.as_str()),
                    escape_csv(&diet)
                );
            }
            Ok(())
        }
        OutputFormat::Md => {
            print_recipe_md(&recipe, dietary.as_ref(), &on_list, &related);
            Ok(())
        }
        OutputFormat::Auto | OutputFormat::Tsv => {
            print_recipe(&recipe, dietary.as_ref(), &on_list, &related);
            Ok(())
        }
    }
}

fn print_recipe_md(
    recipe: &Recipe,
    dietary: Option<&DietaryMatch>,
    on_list: &[&str],
    related: &[Recipe],
) {
    println!("# {}", recipe.title);
    println!();
    println!(
        "*{}* | {} min | rating {:.1} | diet: {}",
        recipe.category,
        recipe.prep_time,
        recipe.rating,
        diet_cell(dietary)
    );
    println!();
    println!("## Ingredients");
    println!();
    for ingredient in &recipe.ingredients {
        let mark = if on_list.contains(&ingredient.as_str()) { "x" } else { " " };
        println!("- [{}] {}", mark, ingredient);
    }
    if !recipe.instructions.is_empty() {
        println!();
        println!("## Instructions");
        println!();
        for (n, step) in recipe.instructions.iter().enumerate() {
            println!("{}. {}", n + 1, step);
        }
    }
    if !related.is_empty() {
        println!();
        println!("## Related");
        println!();
        for r in related {
            println!("- {} ({})", r.title, r.id);
        }
    }
}

fn print_recipe(
    recipe: &Recipe,
    dietary: Option<&DietaryMatch>,
    on_list: &[&str],
    related: &[Recipe],
) {
    println!("{}", style(&recipe.title).bold());
    println!(
        "{}  {} min  {} {:.1}",
        style(recipe.category).cyan(),
        recipe.prep_time,
        stars(recipe.rating),
        recipe.rating
    );

    if let Some(tags) = recipe.dietary_tags.as_ref().filter(|t| !t.is_empty()) {
        println!("{} {}", style("Tags:").dim(), tags.join(", "));
    }

    if let Some(m) = dietary {
        if !m.matches.is_empty() {
            println!(
                "{} {}",
                style("✓ Matches your diet:").green(),
                m.match_tags().join(", ")
            );
        }
        if !m.conflicts.is_empty() {
            println!(
                "{} {}",
                style("✗ Not tagged for:").red(),
                m.conflict_tags().join(", ")
            );
        }
    }

    println!();
    println!("{}", style("Ingredients").bold());
    for ingredient in &recipe.ingredients {
        let mark = if on_list.contains(&ingredient.as_str()) {
            style("[x]").green()
        } else {
            style("[ ]").dim()
        };
        println!("  {} {}", mark, ingredient);
    }

    if !recipe.instructions.is_empty() {
        println!();
        println!("{}", style("Instructions").bold());
        for (n, step) in recipe.instructions.iter().enumerate() {
            println!("  {}. {}", n + 1, step);
        }
    }

    if let Some(n) = &recipe.nutritional_info {
        println!();
        println!("{}", style("Nutrition (per serving)").bold());
        println!(
            "  {} kcal  protein {}g  carbs {}g  fat {}g  fiber {}g",
            n.calories, n.protein, n.carbs, n.fat, n.fiber
        );
    }

    if !related.is_empty() {
        println!();
        println!("{}", style("Related").bold());
        for r in related {
            println!("  {:<4} {}", style(&r.id).cyan(), r.title);
        }
    }

    println!();
    println!(
        "Add the ingredients with {}",
        style(format!("larder list from-recipe {}", recipe.id)).yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DietaryPreference;

    fn tagged(tags: &[&str]) -> Recipe {
        let mut recipe = crate::providers::FixtureCatalog::embedded()
            .unwrap()
            .recipe("1")
            .unwrap();
        recipe.dietary_tags = Some(tags.iter().map(|t| t.to_string()).collect());
        recipe
    }

    #[test]
    fn test_diet_cell() {
        let vegan = DietaryPreferences::from_active([DietaryPreference::Vegan]);
        let none = DietaryPreferences::default();

        assert_eq!(diet_cell(None), "-");
        assert_eq!(diet_cell(tagged(&["vegan"]).dietary_match(&none).as_ref()), "-");
        assert_eq!(diet_cell(tagged(&["vegan"]).dietary_match(&vegan).as_ref()), "✓ fits");
        assert_eq!(
            diet_cell(tagged(&["vegetarian"]).dietary_match(&vegan).as_ref()),
            "✗ vegan"
        );
    }

    #[test]
    fn test_trending_limit_defaults_to_three() {
        use clap::Parser;

        let cli = crate::cli::Cli::try_parse_from(["larder", "recipe", "trending"]).unwrap();
        match cli.command {
            crate::cli::Commands::Recipe(RecipeCommands::Trending(args)) => {
                assert_eq!(args.limit, TRENDING_LIMIT)
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
