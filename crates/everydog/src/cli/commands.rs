//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Owns an async runtime (a current-thread tokio runtime, used once)
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration, pick a catalog source, run the fetch
//! 3. **Dispatch**: Turn the command into API events
//! 4. **Output Formatting**: Text via `render`, or JSON via serde

use super::browse;
use super::render;
use super::setup::{Cli, Commands, FilterArgs, OutputFormat};
use clap::Parser;
use everydogapp::api::{CatalogApi, Snapshot};
use everydogapp::catalog::file::FileSource;
use everydogapp::catalog::http::HttpSource;
use everydogapp::catalog::{fetch_event, CatalogEvent, CatalogSource, CatalogStatus};
use everydogapp::config::ViewerConfig;
use everydogapp::error::{EverydogError, Result};
use everydogapp::facets::{Facet, FacetOption};
use serde::Serialize;
use std::io::{self, IsTerminal};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: CatalogApi,
    config: ViewerConfig,
    output: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        // Naked everydog: list everything
        None => handle_list(&mut ctx, FilterArgs::default()),
        Some(Commands::List { filters }) => handle_list(&mut ctx, filters),
        Some(Commands::Groups) => handle_options(&ctx, Facet::BreedGroup),
        Some(Commands::Origins) => handle_options(&ctx, Facet::Origin),
        Some(Commands::Show { selector, filters }) => {
            handle_show(&mut ctx, &selector.join(" "), filters)
        }
        Some(Commands::Browse) => handle_browse(&mut ctx),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the default `warn` level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = ViewerConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }

    let source: Box<dyn CatalogSource> = match &cli.source {
        Some(path) => Box::new(FileSource::new(path.clone())),
        None => Box::new(HttpSource::from_config(&config)?),
    };

    let mut api = CatalogApi::new();
    api.deliver(fetch_catalog(source.as_ref())?);

    Ok(AppContext {
        api,
        config,
        output: cli.output,
    })
}

/// Run the one-shot fetch to completion.
fn fetch_catalog(source: &dyn CatalogSource) -> Result<CatalogEvent> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    info!(source = %source.describe(), "fetching catalog");
    let event = runtime.block_on(fetch_event(source));
    debug!(loaded = matches!(event, CatalogEvent::Loaded(_)), "fetch finished");
    Ok(event)
}

/// One-shot commands have nothing to show without a catalog.
fn require_catalog(snapshot: &Snapshot) -> Result<()> {
    match &snapshot.status {
        CatalogStatus::Unavailable { reason } => Err(EverydogError::Unavailable(reason.clone())),
        _ => Ok(()),
    }
}

fn apply_filter_args(api: &mut CatalogApi, filters: FilterArgs) -> Snapshot {
    api.set_breed_group_selection(filters.group.map(FacetOption::new));
    api.set_origin_selection(filters.origin.map(FacetOption::new))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filters: FilterArgs) -> Result<()> {
    let snapshot = apply_filter_args(&mut ctx.api, filters);
    require_catalog(&snapshot)?;

    match ctx.output {
        OutputFormat::Text => print!("{}", render::render_list_view(&snapshot)),
        OutputFormat::Json => print_json(&snapshot.filtered_breeds)?,
    }
    Ok(())
}

fn handle_options(ctx: &AppContext, facet: Facet) -> Result<()> {
    let snapshot = ctx.api.snapshot();
    require_catalog(&snapshot)?;

    let options = snapshot.options(facet);
    match ctx.output {
        OutputFormat::Text => print!(
            "{}",
            render::render_options(facet, options, snapshot.selections.get(facet))
        ),
        OutputFormat::Json => print_json(options)?,
    }
    Ok(())
}

fn handle_show(ctx: &mut AppContext, selector: &str, filters: FilterArgs) -> Result<()> {
    require_catalog(&apply_filter_args(&mut ctx.api, filters))?;

    let snapshot = ctx.api.open_detail_by(selector)?;
    let Some(record) = &snapshot.selected_dog else {
        return Err(EverydogError::BreedNotFound(selector.to_string()));
    };

    match ctx.output {
        OutputFormat::Text => print!(
            "{}{}{}",
            render::render_detail(record, &ctx.config.image_base_url),
            render::render_status(&snapshot),
            render::render_messages(&snapshot.messages)
        ),
        OutputFormat::Json => {
            let mut value = serde_json::to_value(record)?;
            if let Some(url) = record.image_url(&ctx.config.image_base_url) {
                value["image_url"] = serde_json::Value::String(url);
            }
            print_json(&value)?
        }
    }
    Ok(())
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    browse::run_session(
        &mut ctx.api,
        &ctx.config.image_base_url,
        ctx.output,
        prompt,
        stdin.lock(),
        &mut stdout,
    )
}
