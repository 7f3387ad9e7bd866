//! Plain install check: probe requirements, warn, never block.
//!
//! Runs as the package's post-install hook. Version problems are
//! advisory here, unlike the wizard which refuses to continue.

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use darbot_core::requirements::{self, InterpreterStatus};

#[derive(Parser)]
#[command(name = "darbot-install")]
#[command(about = "Darbot Windows MCP install check", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let _cli = Cli::parse();

    println!("{}", style("Installing Darbot Windows MCP...").bold().blue());
    println!("{}", style("  Desktop automation for AI agents").dim());
    println!();

    if !cfg!(windows) {
        println!(
            "{} The desktop automation tools target Windows; other platforms get the launcher only",
            style("⚠").yellow()
        );
    }

    match requirements::probe_interpreter().await {
        InterpreterStatus::Supported(version) => {
            println!("{} Found Python {version}", style("✓").green());
        }
        InterpreterStatus::Unsupported(version) => {
            println!(
                "{} Python {version} found, but 3.12-3.15 is required for the server",
                style("⚠").yellow()
            );
            println!("  Download from: https://www.python.org/downloads/");
        }
        InterpreterStatus::Missing(reason) => {
            println!("{} Python not found: {reason}", style("⚠").yellow());
            println!("  Install Python 3.12+ and ensure it is in your PATH");
            println!("  Download from: https://www.python.org/downloads/");
        }
    }

    println!();
    println!("{}", style("Installation complete!").bold().green());
    println!();
    println!("{}", style("Quick start:").cyan());
    println!("  darbot-setup               # Run the setup wizard");
    println!("  darbot-windows-mcp         # Start the MCP server");
    println!("  darbot-windows-mcp --help  # Show help");

    Ok(())
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
