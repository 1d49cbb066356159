//! Profile Finder entry point.
//!
//! With a username argument the lookup runs headless and the result is printed.
//! Otherwise the WebView window opens (`gui` feature).

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use profile_finder::app::App;
use profile_finder::config::{AppConfig, Cli};
use profile_finder::managers::tab_manager::TabManagerTrait;
use profile_finder::services::theme_engine::ThemeEngineTrait;
use profile_finder::types::view::ActiveTab;
use profile_finder::ui::console::render_text;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut app = match App::new(AppConfig::from(&cli)) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to start");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.toggle_theme {
        let mode = app.theme_engine.toggle_theme();
        println!("Theme: {}", if mode.is_dark() { "dark" } else { "light" });
    }

    match cli.username.as_deref() {
        Some(username) => run_headless(&mut app, username, cli.tab),
        None => run_window(app, cli.toggle_theme),
    }
}

fn run_headless(app: &mut App, username: &str, tab: ActiveTab) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = runtime.block_on(app.controller.perform_lookup(username));
    app.tab_manager.select_tab(tab);
    println!(
        "{}",
        render_text(&app.controller.snapshot(), app.tab_manager.get_active_tab())
    );

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(feature = "gui")]
fn run_window(app: App, _toggled: bool) -> ExitCode {
    profile_finder::ui::webview_app::run(app)
}

#[cfg(not(feature = "gui"))]
fn run_window(_app: App, toggled: bool) -> ExitCode {
    if toggled {
        return ExitCode::SUCCESS;
    }
    use clap::CommandFactory;
    let _ = Cli::command().print_help();
    println!();
    ExitCode::FAILURE
}
