//! Tutorial catalog CLI.
//!
//! Builds the registry from `tutorials.toml` (or the built-in catalog) and
//! answers the lookups the rendering layer performs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tutorials::core::error::RegistryError;
use tutorials::exit_codes;
use tutorials::io::init::{CONFIG_FILE, CatalogPaths, InitOptions, init_catalog};
use tutorials::load::{LoadOptions, load_registry};
use tutorials::logging;

const CLIENT_ONLY_HINT: &str = "no diff bindings registered; they load only with --client \
     or execution_context = \"client\"";

#[derive(Parser)]
#[command(name = "tutorials", version, about = "Tutorial catalog registry")]
struct Cli {
    /// Config file; missing means defaults and the built-in catalog.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Load in the client context (registers diff bindings).
    #[arg(long, global = true)]
    client: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the `--config` file, the catalog schema and a seeded catalog
    /// next to it.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Build the registry and report whether the catalog is valid.
    Validate,
    /// List tutorials in registration order.
    List,
    /// Print a tutorial as JSON.
    Show { id: String },
    /// Print a step with its navigation position as JSON.
    Step { id: String, slug: String },
    /// Print the diff binding of a tutorial as JSON.
    Diff { id: String },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = LoadOptions { client: cli.client };
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Validate => cmd_validate(&cli.config, &options),
        Command::List => cmd_list(&cli.config, &options),
        Command::Show { id } => cmd_show(&cli.config, &options, &id),
        Command::Step { id, slug } => cmd_step(&cli.config, &options, &id, &slug),
        Command::Diff { id } => cmd_diff(&cli.config, &options, &id),
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<RegistryError>() {
        Some(RegistryError::NotFound(_)) => exit_codes::NOT_FOUND,
        _ => exit_codes::INVALID,
    }
}

fn cmd_init(config: &Path, force: bool) -> Result<()> {
    let paths = CatalogPaths::for_config(config);
    init_catalog(&paths, &InitOptions { force })?;
    println!("init: wrote {}", paths.config_path.display());
    Ok(())
}

fn cmd_validate(config: &Path, options: &LoadOptions) -> Result<()> {
    let registry = load_registry(config, options)?;
    println!(
        "ok: tutorials={} diff_bindings={}",
        registry.len(),
        registry.diff_bindings().count()
    );
    Ok(())
}

fn cmd_list(config: &Path, options: &LoadOptions) -> Result<()> {
    let registry = load_registry(config, options)?;
    for tutorial in registry.tutorials() {
        println!("{}\t{}\t{}", tutorial.id, tutorial.steps.len(), tutorial.title);
    }
    Ok(())
}

fn cmd_show(config: &Path, options: &LoadOptions, id: &str) -> Result<()> {
    let registry = load_registry(config, options)?;
    print_json(registry.get_tutorial(id)?)
}

fn cmd_step(config: &Path, options: &LoadOptions, id: &str, slug: &str) -> Result<()> {
    let registry = load_registry(config, options)?;
    print_json(&registry.step_navigation(id, slug)?)
}

fn cmd_diff(config: &Path, options: &LoadOptions, id: &str) -> Result<()> {
    let registry = load_registry(config, options)?;
    match registry.diff_binding(id) {
        Ok(binding) => print_json(binding),
        Err(err) if registry.diff_bindings().next().is_none() => {
            Err(anyhow::Error::from(err).context(CLIENT_ONLY_HINT))
        }
        Err(err) => Err(err.into()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{}", payload);
    Ok(())
}
