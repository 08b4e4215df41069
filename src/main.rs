use clap::Parser;
use sqlkit::cli::{self, Args, Command};
use sqlkit::config::Settings;
use sqlkit::executor::WriterExecutor;
use tracing::Level;

fn log_level(settings: &Settings, verbose: u8) -> Level {
    match verbose {
        0 => settings.log_level.parse().unwrap_or(Level::WARN),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = Settings::load()
        .unwrap_or_else(|e| {
            eprintln!("Ignoring config: {e}");
            Settings::default()
        })
        .with_overrides(args.format, args.terminator.as_deref(), args.log_level.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level(&settings, args.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    if args.command == Command::Shell {
        return cli::shell::run_shell(&settings);
    }

    let mut executor = WriterExecutor::new(
        std::io::stdout(),
        settings.format,
        settings.terminator.as_str(),
    );

    if let Err(e) = cli::run_command(&args.command, &mut executor) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }

    Ok(())
}
