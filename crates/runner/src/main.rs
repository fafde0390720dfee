use std::io::Write;
use tsosi_runner::{Command, RunnerConfig, connect, run};

fn print_help() {
    eprintln!(
        r#"TSOSI - reference-data client

USAGE:
    tsosi [OPTIONS] <COMMAND>

COMMANDS:
    init                  Load reference data and report counts
    resolve <id>          Resolve an entity UUID, ROR, Wikidata or custom ID
    infrastructures       List infrastructures in display order
    transfers [entity]    List transfers, optionally of one entity

OPTIONS:
    --config <PATH>       Load configuration from JSON file
    --help                Print this help message

ENVIRONMENT VARIABLES:
    TSOSI_API_ROOT        API root (default: http://localhost:8000/api/)
    TSOSI_STATIC_ROOT     Static data root (default: http://localhost:5173/)
    TSOSI_SHUFFLE_SEED    Seed of the infrastructures order
    RUST_LOG              Log level filter
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {}", arg);
                print_help();
                std::process::exit(1);
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    let command = match Command::parse(&positional) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            std::process::exit(1);
        }
    };

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            RunnerConfig::from_file(&path)?
        }
        None => RunnerConfig::default(),
    }
    .with_env_overrides()?;

    let store = connect(&config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&store, &command, &mut out).await?;
    out.flush()?;
    Ok(())
}
