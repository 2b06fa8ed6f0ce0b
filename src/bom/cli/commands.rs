use super::print::{print_assembly, print_catalog, print_config, print_messages};
use super::setup::{Cli, Commands};
use bom::api::{BomApi, CmdResult, ConfigAction};
use bom::config::BomConfig;
use bom::error::Result;
use bom::part_spec::PartSpec;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the platform config directory, mainly for tests.
const HOME_ENV: &str = "BOM_HOME";

struct AppContext {
    api: BomApi,
    config: BomConfig,
    show_catalog: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Demo => handle_demo(&mut ctx),
        Commands::Build { label, parts } => handle_build(&mut ctx, label, parts),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "bom=debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .format_timestamp(None)
    .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = std::env::var_os(HOME_ENV)
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "bom", "bom").map(|d| d.config_dir().to_path_buf())
        })
        .unwrap_or_else(|| PathBuf::from(".bom"));

    let api = BomApi::new(config_dir);
    let config = api.load_config()?;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }
    let show_catalog = cli.catalog || config.show_catalog;

    Ok(AppContext {
        api,
        config,
        show_catalog,
    })
}

fn handle_demo(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.demo()?;
    print_build(ctx, &result)
}

fn handle_build(ctx: &mut AppContext, label: Option<String>, parts: Vec<String>) -> Result<()> {
    let label = label.unwrap_or_else(|| ctx.config.default_label.clone());
    let specs = parse_parts(&parts)?;
    let result = ctx.api.build(&label, &specs)?;
    print_build(ctx, &result)
}

fn print_build(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    print_assembly(&result.lines, result.total_cost);
    if ctx.show_catalog {
        let listed = ctx.api.catalog()?;
        print_catalog(&listed.catalog);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_parts(strs: &[String]) -> Result<Vec<PartSpec>> {
    strs.iter().map(|s| s.parse()).collect()
}
