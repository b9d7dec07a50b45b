use std::fs::OpenOptions;
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use finplan_cli::cli::{
    handle_budget_command, handle_goal_command, handle_savings_command, BudgetArgs, GoalArgs,
    SavingsArgs,
};
use finplan_cli::config::{paths::FinplanPaths, settings::Settings};
use finplan_cli::FinplanError;

#[derive(Parser)]
#[command(
    name = "finplan",
    version,
    about = "Terminal personal-finance calculators",
    long_about = "finplan plans savings goals, evaluates monthly budgets and checks \
                  whether a savings target fits your income, from the command line \
                  or an interactive terminal interface."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Plan monthly and weekly savings toward a goal
    Savings(SavingsArgs),

    /// Evaluate a monthly budget
    Budget(BudgetArgs),

    /// Check whether a monthly savings target is viable
    Goal(GoalArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = FinplanPaths::new()?;
    let tui = matches!(cli.command, Some(Commands::Tui));
    init_logging(&cli, &paths, tui)?;

    let settings = Settings::load_or_create(&paths)?;
    let today = Local::now().date_naive();
    let mut stdout = io::stdout().lock();

    let outcome = match cli.command {
        Some(Commands::Tui) => {
            finplan_cli::tui::run_tui(&settings)?;
            Ok(())
        }
        Some(Commands::Savings(args)) => {
            handle_savings_command(&settings, &args, today, &mut stdout)
        }
        Some(Commands::Budget(args)) => handle_budget_command(&settings, &args, &mut stdout),
        Some(Commands::Goal(args)) => handle_goal_command(&settings, &args, &mut stdout),
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            Ok(())
        }
        Some(Commands::Config) => {
            println!("finplan configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency.symbol);
            println!("  Alert duration:   {}s", settings.alert_duration_secs);
            println!("  Nav breakpoint:   {} columns", settings.nav_breakpoint);
            println!("  Initialized:      {}", paths.is_initialized());
            Ok(())
        }
        None => {
            println!("finplan - Terminal personal-finance calculators");
            println!();
            println!("Run 'finplan --help' for usage information.");
            println!("Run 'finplan tui' to launch the interactive interface.");
            Ok(())
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(FinplanError::Validation(err)) => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

/// Priority: RUST_LOG env var > --verbose flag > default (warn)
///
/// The TUI owns the terminal, so its logs go to a file instead of stderr.
fn init_logging(cli: &Cli, paths: &FinplanPaths, tui: bool) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    if tui {
        paths.ensure_directories()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file())?;
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).compact().with_writer(io::stderr))
            .init();
    }

    Ok(())
}
