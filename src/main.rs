// Copyright 2023 Remi Bernotavicius

use clap::Parser;
use clap::Subcommand;
use diesel::prelude::OptionalExtension as _;
use meal_planner_db::database;
use std::path::PathBuf;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
type Result<T> = std::result::Result<T, Error>;

#[derive(Parser, Debug)]
struct Args {
    /// Use this database file instead of the one in the user data directory.
    #[arg(long)]
    database: Option<PathBuf>,
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the planner tables and seed the planner state row.
    Init,
    /// Show the planner mode and recipe-list offset.
    Status,
    /// List every previously planned recipe.
    History,
    /// Forget all previously planned recipes.
    ClearHistory,
}

/// This is where the database lives on-disk. On Linux it should be like:
/// `~/.local/share/meal_planner/`
fn data_path() -> Result<PathBuf> {
    let dirs = directories::BaseDirs::new().expect("failed to get user home directory");
    let path = dirs.data_dir().join("meal_planner");
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

fn init(conn: &mut database::Connection) -> Result<()> {
    if database::query::is_initialized(conn)? {
        log::info!("database already initialized");
    } else {
        database::query::initialize_planner_state(conn)?;
        log::info!("planner state seeded with defaults");
    }
    Ok(())
}

fn status(conn: &mut database::Connection) -> Result<()> {
    match database::query::planner_state(conn).optional()? {
        Some(state) => {
            println!("mode: {}", state.mode);
            println!("offset: {}", state.offset);
        }
        None => println!("database not initialized, run `init` first"),
    }
    Ok(())
}

fn history(conn: &mut database::Connection) -> Result<()> {
    for recipe in database::query::get_previous_recipes(conn)? {
        println!("{}", recipe.name);
    }
    Ok(())
}

fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    let args = Args::parse();
    let path = match args.database {
        Some(path) => path,
        None => data_path()?.join("data.sqlite"),
    };
    let mut conn = database::establish_connection(path)?;
    match args.commands {
        Commands::Init => init(&mut conn)?,
        Commands::Status => status(&mut conn)?,
        Commands::History => history(&mut conn)?,
        Commands::ClearHistory => database::query::clear_previous_recipes(&mut conn)?,
    }
    Ok(())
}
