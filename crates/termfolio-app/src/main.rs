//! termfolio terminal entry point.
//!
//! Runs the portfolio as an interactive line-oriented terminal. With
//! `--serve` it instead runs the site API (contact form and blog) over HTTP.
//! End a line with a tab to list completions; Ctrl-D quits.

mod app_state;
mod commands;
mod navigator;
mod render;
mod session;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use app_state::AppState;
use render::{Palette, play_banner};
use session::run_session;
use termfolio_net::{Router, SimulatedMailer, SiteServer};
use termfolio_theme::FileStorage;
use termfolio_types::config::SiteConfig;

#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about = "Portfolio site as an interactive terminal")]
struct Args {
    /// Configuration file (missing file means defaults)
    #[arg(long, default_value = "termfolio.toml")]
    config: PathBuf,

    /// Serve the contact and blog API instead of starting the terminal
    #[arg(long)]
    serve: bool,

    /// Directory for persisted settings
    #[arg(long)]
    settings_dir: Option<PathBuf>,

    /// Directory holding blog markdown files
    #[arg(long)]
    blog_dir: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = SiteConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(dir) = args.settings_dir {
        config.settings_dir = dir;
    }
    if let Some(dir) = args.blog_dir {
        config.blog_dir = dir;
    }
    if args.no_color {
        colored::control::set_override(false);
    }

    if args.serve {
        return serve(&config);
    }
    run_terminal(config)
}

fn serve(config: &SiteConfig) -> Result<()> {
    let mailer = SimulatedMailer::from_entropy(config.contact_success_rate);
    let router = Router::new(&config.blog_dir, Box::new(mailer));
    let mut server = SiteServer::bind(config.contact_addr.as_str(), router)
        .with_context(|| format!("binding {}", config.contact_addr))?;
    server.serve_forever()?;
    Ok(())
}

fn run_terminal(config: SiteConfig) -> Result<()> {
    log::info!("Starting termfolio as {}@{}", config.prompt_user, config.hostname);
    let storage = FileStorage::new(&config.settings_dir);
    let mut state = AppState::new(config, Box::new(storage));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let animate = stdout.is_terminal();

    let palette = Palette::from_surface(state.theme.surface());
    play_banner(
        &mut stdout,
        &state.config.welcome,
        state.config.typewriter_speed_ms,
        animate,
        &palette,
    )?;

    run_session(&mut state, &mut stdin.lock(), &mut stdout)?;

    log::info!("Session ended");
    Ok(())
}
