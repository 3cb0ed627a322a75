//! linux-setup - Main entry point
//!
//! Interactive onboarding for a fresh Linux workstation.

use std::io;

use anyhow::Context;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use linux_setup::cli::Cli;
use linux_setup::{
    CommandRunner, DryRunRunner, Elevation, Onboarding, Prompter, SetupError, SystemRunner,
};

/// Initialize the logger with appropriate settings
fn init_logger() {
    // RUST_LOG overrides the default level
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so prompts on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(io::stderr)
        .init();
}

/// Main application entry point
fn main() {
    // Initialize logging first
    init_logger();
    info!("linux-setup starting up");

    // Children share our process group and get the same SIGINT
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\nInterrupted");
        std::process::exit(130);
    }) {
        warn!("Failed to install Ctrl-C handler: {}", e);
    }

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed: {:?}", cli);

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<SetupError>() {
            Some(setup_err) if setup_err.is_unsupported_distro() => {
                error!("{}", setup_err);
                eprintln!("Your distro is not supported");
            }
            _ => {
                error!("Setup aborted: {:#}", e);
                eprintln!("✗ {:#}", e);
            }
        }
        std::process::exit(1);
    }
}

/// Run the onboarding with the runner selected by `--dry-run`
fn run(cli: &Cli) -> anyhow::Result<()> {
    let home = dirs::home_dir().context("Could not determine the home directory")?;
    let elevation = Elevation::detect();
    debug!("Home directory {}, elevation {:?}", home.display(), elevation);

    let options = cli.setup_options(home, elevation);

    let mut runner: Box<dyn CommandRunner> = if cli.dry_run {
        info!("Dry-run mode: commands will be printed, not executed");
        Box::new(DryRunRunner::new())
    } else {
        Box::new(SystemRunner)
    };

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    let summary = Onboarding::new(options, runner.as_mut(), prompter).run()?;

    println!();
    print!("{}", summary);

    if let Some(path) = &cli.summary {
        summary
            .save(path)
            .with_context(|| format!("Failed to write run summary to {}", path.display()))?;
    }

    Ok(())
}
