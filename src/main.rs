use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use std::error::Error;

use recipe_forge::card::{render_html, render_text};
use recipe_forge::{
    enhance, Difficulty, Enhancement, GenerationRequest, GeneratorConfig, RecipeGenerator,
    ShoppingList,
};

#[derive(Parser)]
#[command(name = "recipe-forge")]
#[command(about = "Generate recipes from a short description", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one recipe
    Generate {
        /// What you want to cook
        prompt: String,

        #[arg(long)]
        cuisine: Option<String>,

        /// easy, medium or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,

        #[arg(long)]
        servings: Option<u32>,

        /// Dietary label; repeat for several
        #[arg(long = "dietary")]
        dietary: Vec<String>,

        /// Fit prep and cook time into this many minutes
        #[arg(long)]
        max_minutes: Option<u32>,

        /// Seed for reproducible fallback picks
        #[arg(long)]
        seed: Option<u64>,

        /// make-healthier, dietary-adapt, ingredient-substitute or
        /// cooking-tips; repeat to apply several in order
        #[arg(long = "enhance")]
        enhancements: Vec<Enhancement>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the templates in the catalog
    Templates,

    /// Generate a recipe per prompt and print a combined shopping list
    ShoppingList {
        #[arg(required = true)]
        prompts: Vec<String>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = GeneratorConfig::load()?;
    debug!("{:#?}", config);

    match cli.command {
        Commands::Generate {
            prompt,
            cuisine,
            difficulty,
            servings,
            dietary,
            max_minutes,
            seed,
            enhancements,
            format,
        } => {
            config.seed = seed.or(config.seed);
            let generator = RecipeGenerator::with_config(config)?;
            let request = GenerationRequest {
                prompt_text: prompt,
                cuisine,
                difficulty,
                servings,
                dietary_tags: dietary,
                max_total_minutes: max_minutes,
            };
            let recipe = enhancements
                .into_iter()
                .fold(generator.generate_with_default_rng(&request)?, |recipe, e| {
                    enhance(&recipe, e)
                });

            match format {
                OutputFormat::Text => print!("{}", render_text(&recipe)),
                OutputFormat::Html => print!("{}", render_html(&recipe)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recipe)?),
            }
        }

        Commands::Templates => {
            let generator = RecipeGenerator::with_config(config)?;
            for template in generator.catalog().templates() {
                println!(
                    "{:<24} {:<40} {:>3}m",
                    template.id,
                    template.title,
                    template.total_time_minutes()
                );
            }
        }

        Commands::ShoppingList { prompts, seed } => {
            config.seed = seed.or(config.seed);
            let generator = RecipeGenerator::with_config(config)?;

            let mut recipes = Vec::with_capacity(prompts.len());
            for prompt in prompts {
                recipes.push(generator.generate_with_default_rng(&GenerationRequest::new(prompt))?);
            }

            let ids: Vec<String> = (1..=recipes.len()).map(|n| format!("recipe{}", n)).collect();
            let list = ShoppingList::from_recipes(
                ids.iter().map(String::as_str).zip(recipes.iter()),
            );
            println!("{}", list.to_text());
        }
    }

    Ok(())
}
