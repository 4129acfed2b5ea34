use std::time::Duration;

use clap::Parser;
use insightchef_api::client::{CLIENT_TIMEOUT, RecipeApiClient};
use insightchef_core::domain::recipe::{DietaryTag, Recipe, RecipeSource};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Ask a running InsightChef API for recipe ideas.
#[derive(Debug, Parser)]
#[command(name = "insightchef", about = "Recipe ideas from the ingredients you have")]
struct Cli {
    /// Ingredients on hand, e.g. "chicken, rice, broccoli".
    ingredients: String,

    #[arg(long, env = "INSIGHTCHEF_API_URL", default_value = "http://localhost:3001")]
    api_url: String,

    /// Maximum cooking time in minutes.
    #[arg(long, default_value_t = 30)]
    cooking_time: u32,

    /// Comma separated dietary preferences (Vegetarian, Vegan, Gluten-Free,
    /// Dairy-Free, Keto, Low-Carb).
    #[arg(long, value_delimiter = ',')]
    dietary: Vec<String>,

    #[arg(long, default_value_t = CLIENT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Print the recipes as JSON.
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn print_recipe(index: usize, recipe: &Recipe) {
    println!("{}. {}", index + 1, recipe.name);
    let cuisine = if recipe.cuisine.is_empty() {
        String::new()
    } else {
        format!(" | {}", recipe.cuisine)
    };
    println!(
        "   {:?} | prep {} min | cook {} min{}",
        recipe.difficulty, recipe.prep_time, recipe.cook_time, cuisine
    );

    if !recipe.ingredients.is_empty() {
        println!("   Ingredients:");
        for ingredient in &recipe.ingredients {
            println!("     - {}", ingredient);
        }
    }
    if !recipe.instructions.is_empty() {
        println!("   Instructions:");
        for (step, instruction) in recipe.instructions.iter().enumerate() {
            println!("     {}. {}", step + 1, instruction);
        }
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let dietary = cli
        .dietary
        .iter()
        .filter_map(|tag| match tag.trim().parse::<DietaryTag>() {
            Ok(tag) => Some(tag),
            Err(()) => {
                tracing::warn!("Ignoring unknown dietary preference {:?}", tag);
                None
            }
        })
        .collect::<Vec<DietaryTag>>();

    let client =
        RecipeApiClient::new(cli.api_url).with_timeout(Duration::from_secs(cli.timeout_secs));

    let suggestions = match client
        .generate_recipes(&cli.ingredients, cli.cooking_time, &dietary)
        .await
    {
        Ok(suggestions) => suggestions,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.source == RecipeSource::Sample {
        println!("Showing sample recipes. Live generation is not configured on the server.\n");
    }
    for (index, recipe) in suggestions.recipes.iter().enumerate() {
        print_recipe(index, recipe);
    }

    Ok(())
}
