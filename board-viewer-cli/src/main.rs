//! Terminal entry point for the board viewer
//!
//! Shows one board page at a time and reads line commands from stdin (`h` lists them).
//! Logs go to stderr; `RUST_LOG` overrides the configured level.

mod command;
mod config;
mod navigator;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use board_viewer_core::types::Route;
use board_viewer_core::{BoardIdentifier, BoardViewModel};
use board_viewer_provider::HttpListingClient;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use command::{Command, HELP};
use config::AppConfig;
use navigator::TerminalNavigator;

#[derive(Parser, Debug)]
#[command(name = "board-viewer")]
#[command(about = "Browse paged board listings in the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// Board token: R (매칭 후기), B (자랑), A (공지사항), I (신고/문의)
    #[arg(long, default_value = "R")]
    board: String,

    /// Page to open first
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Config file (default: <config_dir>/board-viewer/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listing service root, overrides `[api] base_url`
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(base_url) = &args.base_url {
        config.api.base_url.clone_from(base_url);
    }

    init_tracing(&config.logging.level);

    match run(&args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    // stderr keeps the listing on stdout readable
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

async fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let policy = config.fetch_policy()?;
    let view_options = config.view_options();
    let service = HttpListingClient::new(config.api.clone());
    tracing::info!(
        "Listing service at {} (fetch timeout {:?})",
        service.options().base_url,
        policy.timeout()
    );

    let board = BoardIdentifier::parse(&args.board);
    if !board.is_known() {
        tracing::warn!("Unknown board token {board:?}, showing it with default settings");
    }
    let mut vm =
        BoardViewModel::new(board, Arc::new(TerminalNavigator)).with_initial_page(args.page);

    print_navigation_bar();
    let ticket = vm.start();
    vm.drive(ticket, &service, &policy).await;
    print!("{}", render::render(&vm.view(&view_options)));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Event(event) => {
                if vm.dispatch(event, &service, &policy).await {
                    print!("{}", render::render(&vm.view(&view_options)));
                } else {
                    println!("(unchanged)");
                }
            }
            Command::OpenPost(id) => {
                if vm.page().items.iter().any(|post| post.id == id) {
                    vm.open_post(id);
                } else {
                    println!("post {id} is not on this page");
                }
            }
            Command::Write => {
                if !vm.open_write_form() {
                    println!("글쓰기 is not available on this board");
                }
            }
        }
    }

    tracing::info!("Bye");
    Ok(())
}

fn print_navigation_bar() {
    let entries: Vec<String> = Route::navigation_bar()
        .into_iter()
        .map(|(label, route)| format!("{label} ({route})"))
        .collect();
    println!("{}", entries.join("  "));
}
