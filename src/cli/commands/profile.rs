//! `larder profile` command - Dietary preferences, calorie goal, allergies

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::open_home;
use crate::cli::output::{print_json, print_yaml};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{DietaryPreference, DietaryPreferences, UserProfile};

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the profile
    Show,

    /// Replace dietary preferences; flags not given are turned off
    Diet(DietArgs),

    /// Set the daily calorie goal
    Calories(CaloriesArgs),

    /// Replace the allergy list (no arguments clears it)
    Allergies(AllergiesArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct DietArgs {
    #[arg(long)]
    pub vegetarian: bool,

    #[arg(long)]
    pub vegan: bool,

    #[arg(long)]
    pub gluten_free: bool,

    #[arg(long)]
    pub dairy_free: bool,

    #[arg(long)]
    pub keto: bool,

    #[arg(long)]
    pub paleo: bool,

    #[arg(long)]
    pub low_carb: bool,

    #[arg(long)]
    pub low_fat: bool,
}

impl DietArgs {
    pub fn preferences(&self) -> DietaryPreferences {
        DietaryPreferences {
            vegetarian: self.vegetarian,
            vegan: self.vegan,
            gluten_free: self.gluten_free,
            dairy_free: self.dairy_free,
            keto: self.keto,
            paleo: self.paleo,
            low_carb: self.low_carb,
            low_fat: self.low_fat,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct CaloriesArgs {
    /// Daily calories
    #[arg(value_parser = clap::value_parser!(u32).range(500..=10000))]
    pub goal: u32,
}

#[derive(clap::Args, Debug)]
pub struct AllergiesArgs {
    /// Allergens (e.g. peanuts shellfish)
    pub allergies: Vec<String>,
}

/// Run the profile command
pub fn run(cmd: ProfileCommands, global: &GlobalOpts) -> Result<()> {
    let home = open_home(global)?;
    let mut store = home.profile();

    match cmd {
        ProfileCommands::Show => return show(store.profile(), global),
        ProfileCommands::Diet(args) => {
            let prefs = args.preferences();
            store.update_dietary_preferences(prefs).into_diagnostic()?;

            let active: Vec<&str> = prefs.active().map(|p| p.label()).collect();
            if active.is_empty() {
                println!("{} Cleared dietary preferences", style("✓").green());
            } else {
                println!(
                    "{} Dietary preferences: {}",
                    style("✓").green(),
                    style(active.join(", ")).cyan()
                );
            }
        }
        ProfileCommands::Calories(args) => {
            store.update_calorie_goal(args.goal).into_diagnostic()?;
            println!(
                "{} Calorie goal set to {} kcal",
                style("✓").green(),
                style(args.goal).cyan()
            );
        }
        ProfileCommands::Allergies(args) => {
            store.update_allergies(&args.allergies).into_diagnostic()?;
            let allergies = &store.profile().allergies;
            if allergies.is_empty() {
                println!("{} Cleared allergies", style("✓").green());
            } else {
                println!(
                    "{} Allergies: {}",
                    style("✓").green(),
                    style(allergies.join(", ")).cyan()
                );
            }
        }
    }

    Ok(())
}

fn show(profile: &UserProfile, global: &GlobalOpts) -> Result<()> {
    match global.format {
        OutputFormat::Json => print_json(profile),
        OutputFormat::Yaml => print_yaml(profile),
        _ => {
            println!("{}", style("Dietary preferences").bold());
            for pref in DietaryPreference::all() {
                let mark = if profile.dietary_preferences.is_set(*pref) {
                    style("[x]").green()
                } else {
                    style("[ ]").dim()
                };
                println!("  {} {}", mark, pref.label());
            }
            println!();
            println!(
                "{} {} kcal",
                style("Calorie goal:").bold(),
                profile.calorie_goal
            );
            let allergies = if profile.allergies.is_empty() {
                "none".to_string()
            } else {
                profile.allergies.join(", ")
            };
            println!("{} {}", style("Allergies:").bold(), allergies);
            Ok(())
        }
    }
}
