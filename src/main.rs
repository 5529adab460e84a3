use clap::Parser;
use roster::application::{discover_list, init::init, ConfigService};
use roster::cli::{format_record, format_record_list, parse_id, Cli, Commands, Shell};
use roster::domain::IdStrategy;
use roster::error::RosterError;
use roster::infrastructure::{logging, FileSystemRepository, RosterRepository};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let config_level = FileSystemRepository::discover()
        .ok()
        .and_then(|repo| repo.load_config().ok())
        .and_then(|config| config.log_level);
    logging::init(cli.debug, config_level.as_deref());

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), RosterError> {
    match cli.command {
        Some(Commands::Init { path, id_strategy }) => {
            let strategy = IdStrategy::from_str(&id_strategy).map_err(RosterError::Config)?;
            init(&path, strategy)
        }
        Some(Commands::Add { name }) => {
            let mut list = discover_list()?;
            let record = list.add(&name);
            println!("Added {}", format_record(&record));
            Ok(())
        }
        Some(Commands::List) => {
            let list = discover_list()?;
            println!("{}", format_record_list(list.records()).trim_end());
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let id = parse_id(&id)?;
            let mut list = discover_list()?;
            list.delete(id);
            println!("Deleted ID: {}", id);
            Ok(())
        }
        Some(Commands::Update { id, value }) => {
            let id = parse_id(&id)?;
            let mut list = discover_list()?;
            list.update(id, &value);
            println!("Updated ID: {}  First Name: {}", id, value);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("id_strategy = {}", config.id_strategy);
                println!(
                    "log_level = {}",
                    config.log_level.as_deref().unwrap_or("none")
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: roster config [--list | <key> [<value>]]");
                println!("Valid keys: id_strategy, log_level, created");
                Ok(())
            }
        }
        Some(Commands::Shell) => {
            let list = discover_list()?;
            let mut shell = Shell::new(list);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            shell.run(stdin.lock(), stdout.lock())
        }
        None => {
            println!("roster - persisted list of first names");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
