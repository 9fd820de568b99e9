//! # CLI Layer
//!
//! This module is **one possible UI client** for valor. It is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build `ValorContext` with API, scope, and configuration
//! 3. **API Dispatch**: Call the appropriate `ValorApi` method
//! 4. **Output Formatting**: Fill a page's regions from the `CmdResult` and print it
//! 5. **Error Handling**: Hand errors back to `main`, which prints the error panel
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and print

use super::browse;
use super::render::{
    render_config, render_detail, render_listing, render_messages, render_vocabulary,
    RenderOptions,
};
use super::setup::{print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands};
use super::surface::{Region, Surface, TerminalPage};
use clap::Parser;
use console::Term;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use valor::api::ConfigAction;
use valor::error::Result;
use valor::filter::{Category, FilterCriteria};
use valor::init::{initialize, ValorContext};
use valor::store::DataSource;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    init_tracing(cli.verbose);

    if let Some(Commands::Help { command }) = &cli.command {
        match command {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global, cli.data.as_deref());

    match cli.command {
        Some(Commands::List {
            search,
            war,
            state,
            award,
            no_count,
        }) => {
            let mut criteria = FilterCriteria::new();
            if let Some(term) = search {
                criteria.set_search(term);
            }
            criteria.set(Category::War, war);
            criteria.set(Category::State, state);
            criteria.set(Category::Award, award);
            handle_list(&ctx, &criteria, no_count)
        }
        Some(Commands::Browse) => browse::run(&ctx.api, &ctx.config),
        Some(Commands::Filters) => handle_filters(&ctx),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Help { .. }) => Ok(()),
        None => handle_list(&ctx, &FilterCriteria::new(), false),
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise warnings only, or debug with `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "valor=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Shows a loading line on stderr while `load` runs, when stderr is a terminal.
fn with_loading<T>(location: &str, load: impl FnOnce() -> T) -> T {
    let term = Term::stderr();
    let interactive = std::io::stderr().is_terminal();
    if interactive {
        let _ = term.write_str(&format!("Loading records from {}…", location));
    }
    let out = load();
    if interactive {
        let _ = term.clear_line();
    }
    out
}

fn handle_list(ctx: &ValorContext, criteria: &FilterCriteria, no_count: bool) -> Result<()> {
    let location = ctx.api.source().location();
    let result = with_loading(&location, || ctx.api.list(criteria))?;

    let opts = RenderOptions::detect();
    let mut page = TerminalPage::listing(ctx.config.show_count && !no_count);
    render_listing(&mut page, &result, &ctx.config.images(), opts);
    print!("{}", page.render());
    Ok(())
}

fn handle_view(ctx: &ValorContext, id: &str) -> Result<()> {
    let location = ctx.api.source().location();
    let result = with_loading(&location, || ctx.api.view(id))?;

    let opts = RenderOptions::detect();
    let mut page = TerminalPage::detail();
    if let Some(detail) = &result.detail {
        page.show_state(Region::Detail, render_detail(detail, opts));
    }
    page.write(Region::Messages, render_messages(&result.messages, opts));
    print!("{}", page.render());
    Ok(())
}

fn handle_filters(ctx: &ValorContext) -> Result<()> {
    let location = ctx.api.source().location();
    let result = with_loading(&location, || ctx.api.filters())?;

    let opts = RenderOptions::detect();
    if let Some(vocabulary) = &result.vocabulary {
        print!("{}", render_vocabulary(vocabulary, opts));
        println!();
    }
    print!("{}", render_messages(&result.messages, opts));
    Ok(())
}

fn handle_config(ctx: &ValorContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    let opts = RenderOptions::detect();
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, opts));
            println!();
        }
    }
    print!("{}", render_messages(&result.messages, opts));
    Ok(())
}
