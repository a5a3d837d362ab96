use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thali::core::config::{CatalogueConfig, DEFAULT_CONFIG_FILE};
use thali::dsl::{execute_line, execute_script, DslOutput};
use thali::engine::CatalogueStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "thali")]
#[command(version)]
#[command(about = "Vegetarian Indian dish catalogue and recommender", long_about = None)]
struct Cli {
    /// Catalogue CSV file (overrides the config file)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start REPL (default)
    Repl,
    /// Run a script file, one command per line
    Run {
        /// Path to the script file
        file: String,
    },
    /// Execute a single command, e.g. `thali exec RECOMMEND meal=Dinner spice=Mild weather=Cold`
    Exec {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Re-quote shell words so the command parser sees each one as a single word.
///
/// Words holding whitespace or a quote character are wrapped in the quote
/// character they do not contain. For `field=value` words only the value is wrapped.
fn join_words(words: &[String]) -> String {
    words
        .iter()
        .map(|w| {
            let needs_quotes = w.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"');
            if !needs_quotes {
                return w.clone();
            }
            let q = if w.contains('"') { '\'' } else { '"' };
            match w.split_once('=') {
                Some((key, value))
                    if !key.is_empty()
                        && !key.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') =>
                {
                    format!("{}={}{}{}", key, q, value, q)
                }
                _ => format!("{}{}{}", q, w, q),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CatalogueConfig::load_from(&cli.config);
    let path = cli.data.unwrap_or(config.storage.path);
    let mut store = CatalogueStore::open(path)?;

    match cli.command {
        Some(Commands::Run { file }) => {
            let content = fs::read_to_string(&file)?;
            match execute_script(&mut store, &content) {
                Ok(outputs) => {
                    for output in outputs {
                        println!("{}", output);
                    }
                }
                Err(e) => {
                    eprintln!("Error executing script: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Exec { json, command }) => {
            let line = join_words(&command);
            match execute_line(&mut store, &line, 1) {
                Ok(output) if json => println!("{}", serde_json::to_string_pretty(&output)?),
                Ok(output) => {
                    if !matches!(output, DslOutput::None) {
                        println!("{}", output);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Repl) | None => {
            println!("Thali v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "{} dishes loaded from {}. Type 'HELP' for commands, 'EXIT' to quit.",
                store.len(),
                store.location()
            );
            let stdin = io::stdin();
            let mut handle = stdin.lock();
            let mut buffer = String::new();
            let mut line_no = 0;

            loop {
                print!("thali>>> ");
                io::stdout().flush()?;
                buffer.clear();
                if handle.read_line(&mut buffer)? == 0 {
                    break;
                }
                line_no += 1;
                let line = buffer.trim();
                if line.eq_ignore_ascii_case("EXIT") {
                    break;
                }
                match execute_line(&mut store, line, line_no) {
                    Ok(output) => {
                        if !matches!(output, DslOutput::None) {
                            println!("{}", output);
                        }
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
        }
    }

    Ok(())
}
