mod cli;

use portfolio::{
    config,
    gallery::{self, Gallery},
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "portfolio=debug,portfolio_core=debug".to_string()
        } else {
            "portfolio=warn".to_string()
        }
    });

    // Standard output is reserved for the showcase itself
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => show(cli.config.as_deref()),
        Commands::List { json } => list(cli.config.as_deref(), json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("portfolio {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn show(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let report = gallery::run_showcase(&config, &mut stdout.lock(), &mut stderr.lock())?;

    // A failed build has already been reported; the run itself still succeeds.
    tracing::info!(
        "Showcase finished: {} displayed, build failed: {}",
        report.displayed,
        report.build_failed
    );

    Ok(())
}

fn list(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let gallery = Gallery::build(&config.entries())?;

    if json {
        let json_str = serde_json::to_string_pretty(&gallery)?;
        println!("{}", json_str);
    } else {
        println!("Submissions: {}", gallery.len());
        for (i, submission) in gallery.submissions().iter().enumerate() {
            println!(
                "  [{}] {} {} - {}",
                i,
                submission.kind(),
                submission.title(),
                submission.student_name()
            );
        }
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            let entries = config.entries();
            println!("✓ Configuration is valid");
            println!("  Locale: {:?}", config.display.locale);
            match &config.gallery {
                Some(_) => println!("  Gallery entries: {}", entries.len()),
                None => println!("  Gallery entries: {} (demonstration)", entries.len()),
            }
            match Gallery::build(&entries) {
                Ok(gallery) => println!("  Buildable submissions: {}", gallery.len()),
                Err(e) => println!("  Gallery will not build: {}", e),
            }
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Locale: {:?}", config.display.locale);
            println!("  Gallery entries: {} (demonstration)", config.entries().len());
        }
    }

    Ok(())
}
