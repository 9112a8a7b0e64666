use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;
use voicecalc::config::{Config, DEFAULT_CONFIG_FILE};
use voicecalc::engine::{self, Calculator};
use voicecalc::format::display_number;
use voicecalc::units;

#[derive(Parser)]
#[command(name = "voicecalc")]
#[command(about = "Natural-language calculator for spoken or typed requests", long_about = None)]
struct Cli {
    /// Configuration file (default: ./voicecalc.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log matcher decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one utterance
    Eval {
        /// Text to interpret (e.g. "what is 25 plus 17")
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List example utterances by category
    Examples {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read utterances from stdin, one per line
    Repl {
        /// Print each result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a value between two units
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Source unit (e.g. "miles", "fahrenheit")
        from: String,

        /// Target unit (e.g. "km", "celsius")
        to: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(cli.verbose, config.log_level.as_deref());

    let calculator = config.calculator();
    let as_json = |flag: bool| flag || config.output.json;

    let outcome = match cli.command {
        Commands::Eval { text, json } => eval_text(&calculator, &text.join(" "), as_json(json)),
        Commands::Examples { json } => print_examples(as_json(json)),
        Commands::Repl { json } => run_repl(&calculator, as_json(json)),
        Commands::Convert { value, from, to } => convert_units(&calculator, value, &from, &to),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Config::load_from_file(path).map_err(|e| {
            let message = format!("Failed to load config '{}': {}", path, e);
            Box::<dyn std::error::Error>::from(message)
        }),
        None if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Config::load_from_file(DEFAULT_CONFIG_FILE)
        }
        None => Ok(Config::empty()),
    }
}

fn init_logging(verbose: bool, level: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if let Some(level) = level {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn eval_text(
    calculator: &Calculator,
    text: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = calculator.process(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if !result.is_error() {
        println!("{}", result);
    }

    match result.error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

fn print_examples(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let groups = engine::example_commands();

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for group in &groups {
        println!("{}:", group.category);
        for example in &group.examples {
            println!("  - {}", example);
        }
    }
    Ok(())
}

fn run_repl(calculator: &Calculator, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();

        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }
        if !text.is_empty() {
            let result = calculator.process(text);
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", result);
            }
        }

        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}

fn convert_units(
    calculator: &Calculator,
    value: f64,
    from: &str,
    to: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let converted = units::convert(value, from, to)?;
    println!(
        "{} {} = {} {}",
        display_number(value),
        from,
        calculator.format().format(converted),
        to
    );
    Ok(())
}
