use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ward_core::constants::DATA_FILE_ENV;
use ward_core::{CoreConfig, LogicManager, data_file_from_env_value};

const PROMPT: &str = "> ";

/// Main entry point for the interactive ward book
///
/// Reads one command per line from stdin, executes it and prints the feedback followed by
/// the currently displayed persons. Stops on `exit` or end of input.
///
/// # Environment Variables
/// - `WARD_DATA_FILE`: JSON data file (default: "data/wardbook.json")
/// - `RUST_LOG`: log filter; `ward=info` is always added
///
/// # Returns
/// * `Ok(())` - On `exit` or end of input
/// * `Err(anyhow::Error)` - If the ward book cannot be loaded or the terminal fails
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("ward=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cfg = CoreConfig::new(data_file_from_env_value(std::env::var(DATA_FILE_ENV).ok()))?;
    tracing::info!("++ Starting ward book with {}", cfg.data_file().display());

    let mut logic = LogicManager::load(&cfg)?;
    print_persons(&logic);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match logic.execute(&line) {
            Ok(output) => {
                println!("{}", output.feedback);
                if output.exit {
                    break;
                }
                if !output.show_help {
                    print_persons(&logic);
                }
            }
            Err(e) => {
                tracing::debug!("command {:?} failed: {}", line, e);
                println!("{e}");
            }
        }
    }

    Ok(())
}

fn print_persons(logic: &LogicManager) {
    for (i, person) in logic.filtered_person_list().iter().enumerate() {
        println!("{}. {}", i + 1, person);
    }
}
