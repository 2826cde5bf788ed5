use clap::{Parser, Subcommand};
use log::debug;

use recipe_steps::{get_recipe_from_url, ParserConfig, Recipe, RecipeError, StepParser};

#[derive(Parser, Debug)]
#[command(name = "recipe-steps", version, about = "Walk through a recipe step by step")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a recipe from a supported site
    Fetch {
        url: String,
        /// Print the parsed recipe as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse ingredients and instructions given on the command line
    Parse {
        #[arg(long)]
        title: Option<String>,
        /// Ingredient line, e.g. "2 cups flour" (repeatable)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        /// Instruction text (repeatable, in order)
        #[arg(short = 's', long = "instruction", required = true)]
        instructions: Vec<String>,
        #[arg(long)]
        json: bool,
    },
}

fn print_walkthrough(recipe: &Recipe) {
    println!("{}", recipe.title);
    for (key, value) in &recipe.other {
        println!("  {}: {}", key, value);
    }

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  • {}", ingredient);
    }

    for (i, step) in recipe.steps.iter().enumerate() {
        println!("\nStep {}: {}", i + 1, step.text);
        let used: Vec<String> = step.ingredients.iter().map(|i| i.to_string()).collect();
        let lines = [
            ("methods", step.methods.clone()),
            ("uses", used),
            ("tools", step.tools.clone()),
            ("time", step.times.clone()),
            ("temperature", step.temps.clone()),
        ];
        for (label, values) in lines {
            if !values.is_empty() {
                println!("  {}: {}", label, values.join(", "));
            }
        }
        let left: Vec<String> = step.state.remaining.iter().map(|i| i.to_string()).collect();
        let left = if left.is_empty() {
            "nothing".to_string()
        } else {
            left.join(", ")
        };
        println!("  left: {}", left);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ParserConfig::load()?;
    debug!("{:?}", config);

    let (recipe, json) = match cli.command {
        Command::Fetch { url, json } => (get_recipe_from_url(&url, &config)?, json),
        Command::Parse {
            title,
            ingredients,
            instructions,
            json,
        } => {
            let parser = StepParser::from_config(&config);
            let ingredients = ingredients
                .iter()
                .map(|line| {
                    let ingredient = parser.parse_ingredient(line);
                    if ingredient.name.is_none() {
                        return Err(RecipeError::ParseError(format!(
                            "no food word in ingredient {:?}",
                            line
                        )));
                    }
                    Ok(ingredient)
                })
                .collect::<Result<Vec<_>, _>>()?;
            let recipe =
                parser.build_recipe(title.unwrap_or_default(), ingredients, &instructions);
            (recipe, json)
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
    } else {
        print_walkthrough(&recipe);
    }

    Ok(())
}
