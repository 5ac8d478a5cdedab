use barrelgen::{
    cli::{Args, Command},
    error::{BarrelError, ErrorSeverity},
};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    init_logging(&args);

    let command = Command::from_args(args);

    process::exit(run_command(command));
}

/// Diagnostics go to stderr so stdout only carries the report
fn init_logging(args: &Args) {
    let default_filter = if args.verbose {
        "barrelgen=debug"
    } else if args.quiet {
        "barrelgen=error"
    } else {
        "barrelgen=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Run the command and map its outcome to an exit code
fn run_command(command: Command) -> i32 {
    match command.execute() {
        Ok(()) => 0,
        Err(err) => exit_code(&err),
    }
}

fn exit_code(err: &BarrelError) -> i32 {
    eprintln!("Error: {}", err.user_message());

    match err.severity() {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}
