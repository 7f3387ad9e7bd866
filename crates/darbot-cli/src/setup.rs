//! Darbot setup wizard.
//!
//! Usage:
//!   darbot-setup          # interactive wizard
//!   darbot-setup --yes    # accept defaults without prompting

mod wizard;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use darbot_core::context::AppContext;
use darbot_core::setup::{Preferences, SetupCommand, SetupError};

use crate::wizard::{PrefilledAnswers, WizardFlow};

#[derive(Parser)]
#[command(name = "darbot-setup")]
#[command(about = "Darbot Windows MCP setup wizard", long_about = None)]
struct Cli {
    /// Accept all defaults without prompting (for CI)
    #[arg(short, long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    println!("{}", style("Darbot Windows MCP Setup Wizard").bold().blue());
    println!("{}", style("  Desktop automation for AI agents").dim());
    println!();

    let ctx = AppContext::from_env()?;
    let prefilled = PrefilledAnswers {
        yes: cli.yes,
        ..Default::default()
    };
    let prefs = WizardFlow::new(prefilled).collect()?;

    let cmd = SetupCommand::new(ctx);
    match cmd.execute(&prefs).await {
        Ok(report) => {
            if let Some(version) = &report.interpreter {
                println!("{} Found Python {version}", style("✓").green());
            }
            println!("{} Dependencies installed", style("✓").green());
            if report.editor_configured {
                println!("{} VS Code configured", style("✓").green());
            }
            if report.assistant_configured {
                println!("{} Claude Desktop configured", style("✓").green());
            }
            for warning in &report.warnings {
                println!("{} {warning}", style("⚠").yellow());
            }

            print_next_steps(&prefs);
            Ok(())
        }
        Err(err) => {
            print_failure(&err);
            std::process::exit(1);
        }
    }
}

fn print_next_steps(prefs: &Preferences) {
    println!();
    println!("{}", style("Setup completed successfully!").bold().green());
    println!();
    println!("{}", style("Next steps:").cyan());
    if prefs.configure_editor {
        println!("  • Restart VS Code to pick up the new MCP server");
    }
    if prefs.configure_assistant {
        println!("  • Restart Claude Desktop to pick up the new MCP server");
    }
    println!("  • Run 'darbot-windows-mcp --help' for usage information");
}

fn print_failure(err: &SetupError) {
    println!("{} Setup failed: {err}", style("✗").red());
    match err {
        SetupError::InterpreterMissing(_) => {
            println!("  Install Python 3.12+ and ensure it is in your PATH");
            println!("  Download from: https://www.python.org/downloads/");
        }
        SetupError::InterpreterUnsupported(_) => {
            println!("  Download from: https://www.python.org/downloads/");
        }
        SetupError::DependencyInstall(source) => {
            println!("  {source:#}");
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
