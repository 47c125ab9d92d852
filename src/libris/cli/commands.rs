use super::menu::Menu;
use super::print::{write_books, write_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use libris::api::LibrisApi;
use libris::config::{resolve_data_file, LibrisConfig, DATA_FILE_ENV, DATA_FILE_KEY};
use libris::error::{LibrisError, Result};
use libris::store::fs::FileStore;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Overrides the platform config directory (used by tests).
const CONFIG_DIR_ENV: &str = "LIBRIS_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Config does not need the catalog.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir()?, key.as_deref(), value.as_deref());
    }

    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
        }) => handle_add(&mut api, title, author, year),
        Some(Commands::Remove { id }) => handle_remove(&mut api, &id),
        Some(Commands::List) => handle_list(&api),
        Some(Commands::Search { keyword }) => handle_search(&api, &keyword),
        Some(Commands::Status { id, status }) => handle_status(&mut api, &id, &status),
        Some(Commands::Menu) | None => handle_menu(&mut api),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "libris", "libris")
        .ok_or_else(|| LibrisError::Config("Could not determine config dir".to_string()))
}

fn config_dir() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(project_dirs()?.config_dir().to_path_buf()),
    }
}

fn data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

fn init_api(cli: &Cli) -> Result<LibrisApi<FileStore>> {
    let env = std::env::var_os(DATA_FILE_ENV);
    let path = resolve_data_file(
        cli.file.as_deref(),
        env.as_deref(),
        || LibrisConfig::load(config_dir()?),
        data_dir,
    )?;
    let store = FileStore::new(path);
    log::info!("using catalog {}", store.path().display());
    LibrisApi::open(store)
}

fn handle_add(
    api: &mut LibrisApi<FileStore>,
    title: String,
    author: String,
    year: String,
) -> Result<()> {
    let result = api.add_book(title, author, year)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_remove(api: &mut LibrisApi<FileStore>, id: &str) -> Result<()> {
    let result = api.remove_book(id)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_list(api: &LibrisApi<FileStore>) -> Result<()> {
    let result = api.list_books()?;
    write_books(&mut io::stdout().lock(), &result.listed_books)?;
    Ok(())
}

fn handle_search(api: &LibrisApi<FileStore>, keyword: &str) -> Result<()> {
    let result = api.search_books(keyword)?;
    write_books(&mut io::stdout().lock(), &result.listed_books)?;
    Ok(())
}

fn handle_status(api: &mut LibrisApi<FileStore>, id: &str, status: &str) -> Result<()> {
    let result = api.change_status(id, status)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_menu(api: &mut LibrisApi<FileStore>) -> Result<()> {
    let interactive = Term::stdout().is_term();
    let stdin = io::stdin();
    Menu::new(api, stdin.lock(), io::stdout())
        .with_clear_screen(interactive)
        .run()
}

fn handle_config(config_dir: &Path, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut config = LibrisConfig::load(config_dir)?;
    let mut out = io::stdout().lock();
    match (key, value) {
        (None, _) => {
            let shown = config.get(DATA_FILE_KEY)?.unwrap_or_default();
            writeln!(out, "{} = {}", DATA_FILE_KEY, shown)?;
        }
        (Some(key), None) => {
            let shown = config.get(key)?.unwrap_or_default();
            writeln!(out, "{} = {}", key, shown)?;
        }
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(config_dir)?;
            writeln!(out, "{} = {}", key, value)?;
        }
    }
    Ok(())
}
