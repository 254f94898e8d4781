use clap::Parser;
use std::path::PathBuf;
use tagtrack::application::{
    CheckService, ConfigService, ListTagsService, ScanService, StatsService,
};
use tagtrack::cli::{format_check, format_scan, format_statistics, format_tag_list, Cli, Commands};
use tagtrack::error::TagtrackError;
use tagtrack::infrastructure::TrackerConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<i32, TagtrackError> {
    match cli.command {
        Some(Commands::Scan { path }) => {
            let config = TrackerConfig::load_or_default(&current_dir()?)?;
            let scans = ScanService::new(config).execute(&path)?;
            print!("{}", ensure_newline(format_scan(&scans)));
            Ok(0)
        }
        Some(Commands::Stats { file, name }) => {
            let config = TrackerConfig::load_or_default(&current_dir()?)?;
            let report = StatsService::new(config).execute(&file, &name)?;
            print!("{}", format_statistics(&report));
            Ok(0)
        }
        Some(Commands::Check { path }) => {
            let config = TrackerConfig::load_or_default(&current_dir()?)?;
            let reports = CheckService::new(config).execute(&path)?;
            print!("{}", ensure_newline(format_check(&reports)));
            // imbalance is reported through the exit code as well
            Ok(if reports.is_empty() { 0 } else { 1 })
        }
        Some(Commands::Tags { path }) => {
            let config = TrackerConfig::load_or_default(&current_dir()?)?;
            let literals = ListTagsService::new(config).execute(&path)?;
            print!("{}", ensure_newline(format_tag_list(&literals)));
            Ok(0)
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(current_dir()?);

            if list {
                let config = service.list()?;
                println!("languages = {}", config.languages.join(","));
                println!("auto_close = {}", config.auto_close);
                println!("debounce_ms = {}", config.debounce_ms);
                println!("created = {}", config.created.to_rfc3339());
                Ok(0)
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(0)
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(0)
                }
            } else {
                println!("Usage: tagtrack config [--list | <key> [<value>]]");
                println!("Valid keys: languages, auto_close, debounce_ms, created");
                Ok(0)
            }
        }
        None => {
            println!("tagtrack - Custom marker pair tracker");
            println!("Use --help for usage information");
            Ok(0)
        }
    }
}

fn current_dir() -> Result<PathBuf, TagtrackError> {
    std::env::current_dir().map_err(TagtrackError::Io)
}

fn ensure_newline(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
