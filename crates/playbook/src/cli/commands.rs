//! # CLI Layer
//!
//! This module is **one possible UI client** for playbookapp, the build tooling side
//! of a playbook site. It is the only place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Handlers call the API, print what comes back, and return. Errors bubble up to
//! `main`, which prints them and exits with status 1.

use super::render::{
    render_document, render_lines, render_messages, render_nav, render_results,
};
use super::setup::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use playbookapp::api::PlaybookApi;
use playbookapp::commands::CmdResult;
use playbookapp::init::initialize;
use playbookapp::render::render_section;
use playbookapp::store::ContentStore;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let ctx = initialize(&cwd, cli.content.clone())?;
    debug!(site = %ctx.site_dir.display(), config = ?ctx.config, "context ready");
    let api = &ctx.api;

    match cli.command {
        Commands::Collections => handle_collections(api),
        Commands::Sections { collection, nav } => handle_sections(api, &collection, nav),
        Commands::Paths { json } => handle_paths(api, json),
        Commands::Show {
            collection,
            section,
            html,
        } => handle_show(api, &collection, &section, html),
        Commands::Search { query, json } => handle_search(api, &query.join(" "), json),
        Commands::Check => handle_check(api),
        Commands::Build { out } => handle_build(api, &cwd.join(out)),
    }
}

/// Logs go to stderr so stdout stays clean for `--json` and piping.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}

fn handle_collections<S: ContentStore>(api: &PlaybookApi<S>) -> Result<()> {
    let result = api.collections()?;
    print!("{}", render_lines(&result.collections));
    print_messages(&result);
    Ok(())
}

fn handle_sections<S: ContentStore>(api: &PlaybookApi<S>, collection: &str, nav: bool) -> Result<()> {
    let result = if nav {
        let result = api.navigation(collection)?;
        print!("{}", render_nav(&result.nav));
        result
    } else {
        let result = api.sections(collection)?;
        print!("{}", render_lines(&result.sections));
        result
    };
    print_messages(&result);
    Ok(())
}

fn handle_paths<S: ContentStore>(api: &PlaybookApi<S>, json: bool) -> Result<()> {
    let result = api.static_paths()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.paths)?);
        return Ok(());
    }
    print!("{}", render_lines(&result.paths));
    print_messages(&result);
    Ok(())
}

fn handle_show<S: ContentStore>(
    api: &PlaybookApi<S>,
    collection: &str,
    section: &str,
    html: bool,
) -> Result<()> {
    let doc = api
        .show_section(collection, section)?
        .document
        .context("show returned no document")?;
    if html {
        print!("{}", render_section(&doc));
    } else {
        print!("{}", render_document(&doc));
    }
    Ok(())
}

fn handle_search<S: ContentStore>(api: &PlaybookApi<S>, query: &str, json: bool) -> Result<()> {
    let result = api.search(query);
    if json {
        println!("{}", serde_json::to_string_pretty(&result.results)?);
        return Ok(());
    }
    print!("{}", render_results(&result.results));
    print_messages(&result);
    Ok(())
}

fn handle_check<S: ContentStore>(api: &PlaybookApi<S>) -> Result<()> {
    let result = api.check_index()?;
    print_messages(&result);
    Ok(())
}

fn handle_build<S: ContentStore>(api: &PlaybookApi<S>, out: &Path) -> Result<()> {
    let result = api.build_site(out)?;
    debug!(files = result.written.len(), "build finished");
    print_messages(&result);
    Ok(())
}
