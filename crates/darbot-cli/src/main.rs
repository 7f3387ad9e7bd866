//! Darbot Windows MCP launcher.
//!
//! Usage:
//!   darbot-windows-mcp           # Start the MCP server
//!   darbot-windows-mcp --help    # Show usage
//!
//! All launcher diagnostics go to stderr; stdout belongs to the server's
//! protocol traffic.

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use darbot_core::context::AppContext;
use darbot_core::launch::{self, LaunchError};
use darbot_core::runtime::{self, RuntimeChoice};

#[derive(Parser, Debug)]
#[command(name = "darbot-windows-mcp")]
#[command(about = "Darbot Windows MCP server launcher", long_about = None)]
#[command(after_help = "Run 'darbot-setup' to configure VS Code and Claude Desktop integration.")]
struct Cli {
    /// Unrecognized arguments are accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let _cli = Cli::parse();

    eprintln!("{}", style("Darbot Windows MCP Server").bold().blue());
    eprintln!("{}", style("  Desktop automation for AI agents").dim());
    eprintln!();

    let ctx = AppContext::from_env()?;

    let choice = runtime::detect_runtime().await;
    match choice {
        RuntimeChoice::Uv => eprintln!(
            "{} UV detected - using optimized startup",
            style("✓").green()
        ),
        RuntimeChoice::Python => eprintln!(
            "{} UV not found - using standard Python",
            style("⚠").yellow()
        ),
    }

    let spec = runtime::launch_spec(choice, &ctx);
    tracing::debug!(command = %spec.command, "launching server");
    match launch::supervise(&spec).await {
        Ok(code) => {
            if code != 0 {
                eprintln!("{} MCP server exited with code {code}", style("✗").red());
            }
            std::process::exit(code);
        }
        Err(LaunchError::MissingExecutable { command }) => {
            eprintln!(
                "{} Failed to start MCP server: '{command}' not found",
                style("✗").red()
            );
            eprintln!("  Make sure Python 3.12+ is installed and in PATH");
            eprintln!("  Then run 'darbot-setup' to finish configuration");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{} Failed to start MCP server: {err}", style("✗").red());
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "darbot=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
