use super::render::{print_full_recipes, print_messages, print_recipe_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use recipebook::api::{ConfigAction, RecipeApi};
use recipebook::config::RecipeBookConfig;
use recipebook::error::{RecipeError, Result};
use recipebook::model::{NewRecipe, RecipePatch};
use recipebook::store::fs_backend::FsSlots;
use recipebook::store::RecipeStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RECIPEBOOK_LOG";

struct AppContext {
    api: RecipeApi<FsSlots>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { selectors }) => handle_view(&ctx, selectors),
        Some(Commands::Add {
            title,
            ingredients,
            preparation,
        }) => handle_add(&mut ctx, title.join(" "), ingredients, preparation),
        Some(Commands::Edit {
            selector,
            title,
            ingredients,
            preparation,
        }) => handle_edit(
            &mut ctx,
            &selector,
            RecipePatch {
                title,
                ingredients,
                preparation,
            },
        ),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, selectors),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let config = RecipeBookConfig::load(&data_dir)?;
    let store = RecipeStore::open_with_key(FsSlots::new(data_dir.clone()), config.slot_key)
        .with_pretty(config.pretty);

    Ok(AppContext {
        api: RecipeApi::new(store, data_dir),
    })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "recipebook", "recipebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RecipeError::Api("Could not determine a data directory; pass --data-dir".to_string())
        })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_recipes()?;
    print_recipe_list(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_recipes(&selectors)?;
    print_full_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    ingredients: Option<String>,
    preparation: Option<String>,
) -> Result<()> {
    let result = ctx.api.add_recipe(NewRecipe {
        title,
        ingredients,
        preparation,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: &str, patch: RecipePatch) -> Result<()> {
    let result = ctx.api.edit_recipe(selector, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_recipes(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.slot_path();
    if let Some(path) = &result.slot_path {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        for key in RecipeBookConfig::KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
