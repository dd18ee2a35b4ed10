use clap::Parser;
use myna_tools::config::{BuildConfig, Cli, Command};
use myna_tools::utils::{logger, validation::Validate};
use myna_tools::{myna_id, MynaError, Result};
use std::io::BufRead;

fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = run(cli.command) {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Sanitize { input } => sanitize(input),
        Command::Check { config } => {
            let config = load_checked(&config)?;
            println!("✅ Configuration is valid");
            println!(
                "   {} purge pattern(s), {} color(s), {} plugin(s)",
                config.purge.len(),
                config.theme.colors.len(),
                config.plugins.len()
            );
            Ok(())
        }
        Command::Emit { config, output } => {
            let config = load_checked(&config)?;
            let json = config.to_json_string()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &json)?;
                    tracing::info!("Wrote build configuration to {}", path.display());
                    println!("✅ Wrote {}", path.display());
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        Command::Scan { config, base } => {
            let config = load_checked(&config)?;
            let files = config.scan_content(&base)?;
            for file in &files {
                println!("{}", file.display());
            }
            tracing::info!("Matched {} content file(s)", files.len());
            Ok(())
        }
        Command::Init { path } => {
            if path.exists() {
                return Err(MynaError::ConfigError {
                    message: format!("{} already exists, not overwriting", path.display()),
                });
            }
            let config = BuildConfig::default();
            std::fs::write(&path, config.to_toml_string()?)?;
            println!("✅ Wrote default configuration to {}", path.display());
            Ok(())
        }
    }
}

fn sanitize(input: Vec<String>) -> Result<()> {
    if input.is_empty() {
        // No arguments: filter stdin line by line.
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            println!("{}", myna_id(&line?));
        }
    } else {
        for value in &input {
            println!("{}", myna_id(value));
        }
    }
    Ok(())
}

fn load_checked(path: &std::path::Path) -> Result<BuildConfig> {
    tracing::debug!("Loading build configuration from {}", path.display());
    let config = BuildConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}
