//! `larder scan` command - Identify ingredients and suggest recipes

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{load_catalog, load_config, open_home, plural};
use crate::cli::output::{print_json, print_yaml};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::providers::{suggest, IngredientRecognizer, RandomRecognizer, Suggestion};

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Seed for a repeatable scan
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suggest recipes using the identified ingredients
    #[arg(long, short = 's')]
    pub suggest: bool,

    /// Add the identified ingredients to the shopping list
    #[arg(long)]
    pub add: bool,
}

#[derive(serde::Serialize)]
struct ScanResult<'a> {
    ingredients: &'a [String],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<SuggestionRow<'a>>,
}

#[derive(serde::Serialize)]
struct SuggestionRow<'a> {
    id: &'a str,
    title: &'a str,
    matched: &'a [String],
}

/// Run the scan command
pub fn run(args: ScanArgs, global: &GlobalOpts) -> Result<()> {
    let ingredients = match args.seed {
        Some(seed) => RandomRecognizer::seeded(seed).identify(),
        None => RandomRecognizer::from_thread_rng().identify(),
    };
    tracing::info!(count = ingredients.len(), "identified ingredients");

    let home = open_home(global)?;
    let catalog = if args.suggest {
        Some(load_catalog(&load_config(&home)?)?)
    } else {
        None
    };
    let suggestions: Vec<Suggestion<'_>> = catalog
        .as_ref()
        .map(|c| suggest(c.recipes(), &ingredients))
        .unwrap_or_default();

    if args.add {
        let mut list = home.shopping_list();
        let added = list.add_all(&ingredients, None).into_diagnostic()?;
        tracing::info!(added = added.len(), "added scanned ingredients");
        if !matches!(global.format, OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Id) {
            println!(
                "{} Added {} to the shopping list",
                style("✓").green(),
                plural(added.len(), "item")
            );
        }
    }

    match global.format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let result = ScanResult {
                ingredients: &ingredients,
                suggestions: suggestions
                    .iter()
                    .map(|s| SuggestionRow {
                        id: &s.recipe.id,
                        title: &s.recipe.title,
                        matched: &s.matched,
                    })
                    .collect(),
            };
            if global.format == OutputFormat::Json {
                print_json(&result)
            } else {
                print_yaml(&result)
            }
        }
        OutputFormat::Id => {
            for ingredient in &ingredients {
                println!("{}", ingredient);
            }
            Ok(())
        }
        _ => {
            print_scan(&ingredients, args.suggest.then_some(suggestions.as_slice()));
            Ok(())
        }
    }
}

fn print_scan(ingredients: &[String], suggestions: Option<&[Suggestion<'_>]>) {
    println!(
        "{}",
        style(format!("Identified {}", plural(ingredients.len(), "ingredient"))).bold()
    );
    for ingredient in ingredients {
        println!("  • {}", ingredient);
    }

    let Some(suggestions) = suggestions else {
        return;
    };

    println!();
    if suggestions.is_empty() {
        println!("No recipes use these ingredients.");
        return;
    }

    println!("{}", style("Suggested recipes").bold());
    for s in suggestions {
        if s.matched.is_empty() {
            println!("  {:<4} {}", style(&s.recipe.id).cyan(), s.recipe.title);
        } else {
            println!(
                "  {:<4} {} {}",
                style(&s.recipe.id).cyan(),
                s.recipe.title,
                style(format!("(uses {})", s.matched.join(", "))).dim()
            );
        }
    }
}
