use anyhow::bail;
use clap::{Parser, Subcommand};
use client::{
    FoodsApi, HttpApi, RecipeBook, Submitted,
    render::{render_food, render_foods},
};
use reqwest::StatusCode;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(
        long,
        env = "RECIPES_API_URL",
        default_value = "http://localhost:3001"
    )]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every saved recipe
    List,

    /// Show one recipe
    Show { id: String },

    /// Case-insensitive search by name; no name lists everything
    Search { name: Option<String> },

    /// Save a new recipe, ingredients comma separated
    Add { name: String, recipe: String },

    /// Overwrite a saved recipe
    Edit {
        id: String,
        name: String,
        recipe: String,
    },

    Delete { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let mut book = RecipeBook::new(HttpApi::new(&args.base_url)?);

    match args.command {
        Command::List => book.mount().await?,
        Command::Show { id } => {
            match book.api().get(&id).await {
                Ok(food) => print!("{}", render_food(&food)),
                Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
                    bail!("No recipe with id {id}")
                }
                Err(e) => return Err(e.into()),
            }

            return Ok(());
        }
        Command::Search { name } => {
            book.search_query = name.unwrap_or_default();
            book.search().await?;
        }
        Command::Add { name, recipe } => {
            book.mount().await?;
            book.form_name = name;
            book.form_recipe = recipe;

            if book.submit().await? == Submitted::Skipped {
                bail!("Both a name and a recipe are required");
            }
        }
        Command::Edit { id, name, recipe } => {
            book.mount().await?;

            if !book.edit(&id) {
                bail!("No recipe with id {id}");
            }

            book.form_name = name;
            book.form_recipe = recipe;

            if book.submit().await? == Submitted::Skipped {
                bail!("Both a name and a recipe are required");
            }
        }
        Command::Delete { id } => {
            book.mount().await?;
            book.delete(&id).await?;
        }
    }

    print!("{}", render_foods(book.foods(), book.editing()));

    Ok(())
}
