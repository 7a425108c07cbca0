use cardfile::api::CardsApi;
use cardfile::config::{cards_dir_from_env, project_dirs, CardsConfig};
use cardfile::error::{CardError, Result};
use cardfile::logging::{effective_level, init_logging, LOG_ENV};
use cardfile::store::fs::FileStore;
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

mod args;
mod render;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CardsApi<FileStore>,
    cards_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::New { content }) => handle_new(&ctx, content),
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Edit { id, content }) => handle_edit(&ctx, &id, content),
        Some(Commands::Delete { id }) => handle_delete(&ctx, &id),
        Some(Commands::Path { id }) => handle_path(&ctx, id),
        None => handle_list(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dirs = project_dirs();
    let loaded = match &dirs {
        Some(dirs) => CardsConfig::load(dirs.config_dir()),
        None => Ok(CardsConfig::default()),
    };

    // Start logging before reporting a bad config, with whatever level is known.
    let configured_level = loaded.as_ref().ok().and_then(|c| c.log_level.clone());
    let env_level = std::env::var(LOG_ENV).ok();
    let level = effective_level(
        cli.verbose,
        env_level.as_deref(),
        configured_level.as_deref(),
    );
    init_logging(&level).map_err(CardError::Config)?;
    let config = loaded.inspect_err(|e| log::error!("could not load config.json: {}", e))?;

    let cards_dir = config.resolve_cards_dir(
        cli.dir.clone(),
        cards_dir_from_env(),
        dirs.as_ref().map(|d| d.data_dir()),
    )?;
    log::debug!("cards directory: {}", cards_dir.display());

    Ok(AppContext {
        api: CardsApi::new(FileStore::new(cards_dir.clone())),
        cards_dir,
    })
}

/// Content from the argument, or all of stdin for `-` / no argument.
fn read_content(arg: Option<String>) -> Result<String> {
    match arg {
        Some(content) if content != "-" => Ok(content),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(CardError::Io)?;
            Ok(buf)
        }
    }
}

fn handle_new(ctx: &AppContext, content: Option<String>) -> Result<()> {
    let content = read_content(content)?;
    let result = ctx.api.create_card(content)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_cards()?;
    if json {
        render::print_cards_json(&result.listed_cards)?;
    } else {
        render::print_cards(&result.listed_cards);
    }
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.read_card(id)?;
    for card in &result.listed_cards {
        render::print_full_card(card);
    }
    Ok(())
}

fn handle_edit(ctx: &AppContext, id: &str, content: Option<String>) -> Result<()> {
    let content = read_content(content)?;
    let result = ctx.api.update_card(id, content)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_card(id)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext, id: Option<String>) -> Result<()> {
    match id {
        Some(id) => {
            let result = ctx.api.card_path(&id)?;
            for path in &result.card_paths {
                println!("{}", path.display());
            }
        }
        None => println!("{}", ctx.cards_dir.display()),
    }
    Ok(())
}
