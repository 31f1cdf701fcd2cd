use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ward_core::{
    constants::DATA_FILE_ENV, data_file_from_env_value, sample_data::sample_record_book,
    CoreConfig, JsonRecordStorage, LogicManager,
};

#[derive(Parser)]
#[command(name = "wardbook")]
#[command(about = "Ward book patient record CLI")]
struct Cli {
    /// Data file to read and write (defaults to $WARD_DATA_FILE, then data/wardbook.json)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every person in the ward book
    List,
    /// Execute a single ward book command, e.g. `run find n/alex`
    Run {
        /// Command word followed by its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Overwrite the data file with the sample ward book
    Seed,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let data_file = cli
        .data_file
        .unwrap_or_else(|| data_file_from_env_value(std::env::var(DATA_FILE_ENV).ok()));
    let cfg = CoreConfig::new(data_file)?;

    match cli.command {
        Some(Commands::List) => match LogicManager::load(&cfg) {
            Ok(logic) => {
                let persons = logic.filtered_person_list();
                if persons.is_empty() {
                    println!("No persons found.");
                } else {
                    for (i, person) in persons.iter().enumerate() {
                        println!("{}. {}", i + 1, person);
                    }
                }
            }
            Err(e) => eprintln!("Error loading ward book: {}", e),
        },
        Some(Commands::Run { words }) => {
            let line = words.join(" ");
            match LogicManager::load(&cfg) {
                Ok(mut logic) => match logic.execute(&line) {
                    Ok(output) => {
                        println!("{}", output.feedback);
                        for (i, person) in logic.filtered_person_list().iter().enumerate() {
                            println!("{}. {}", i + 1, person);
                        }
                    }
                    Err(e) => eprintln!("{}", e),
                },
                Err(e) => eprintln!("Error loading ward book: {}", e),
            }
        }
        Some(Commands::Seed) => {
            let storage = JsonRecordStorage::new(cfg.data_file());
            match storage.save_record_book(&sample_record_book()) {
                Ok(()) => println!("Wrote sample ward book to {}", cfg.data_file().display()),
                Err(e) => eprintln!("Error writing sample ward book: {}", e),
            }
        }
        None => {
            println!("Use 'wardbook --help' for commands");
        }
    }

    Ok(())
}
