use clap::{Parser, Subcommand};
use powertower::diagram::{DEFAULT_MAX_CELLS, DiagramTooLarge, try_to_diagram};
use powertower::parser::DEFAULT_MAX_DEPTH;
use powertower::{Notation, ParsingError, Tree};
use std::io::{self, Read};
use std::process;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Convert power towers between bracket, tower and LaTeX notation, or draw them
#[derive(Parser, Debug)]
#[command(name = "powertower")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug output to stderr, repeat for more (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    debug: u8,

    /// Maximum nesting depth accepted when parsing
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, global = true)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an expression from one notation to another
    Convert {
        /// Notation of the input: bracket, tower or latex
        #[arg(short, long)]
        from: Notation,
        /// Notation of the output: bracket, tower or latex
        #[arg(short, long)]
        to: Notation,
        /// Expression to convert (read from stdin if omitted)
        #[arg(allow_hyphen_values = true)]
        expression: Option<String>,
    },
    /// Draw an expression as ASCII diagram
    Diagram {
        /// Notation of the input: bracket, tower or latex
        #[arg(short, long, default_value = "tower")]
        from: Notation,
        /// Maximum number of chars the drawing may consist of
        #[arg(long, default_value_t = DEFAULT_MAX_CELLS)]
        max_cells: usize,
        /// Expression to draw (read from stdin if omitted)
        #[arg(allow_hyphen_values = true)]
        expression: Option<String>,
    },
    /// Convert an expression through every notation and verify the round trips
    Check {
        /// Notation of the input: bracket, tower or latex
        #[arg(short, long, default_value = "tower")]
        from: Notation,
        /// Expression to check (read from stdin if omitted)
        #[arg(allow_hyphen_values = true)]
        expression: Option<String>,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Parsing(#[from] ParsingError),
    #[error(transparent)]
    Diagram(#[from] DiagramTooLarge),
    #[error("Could not read expression from stdin: {0}")]
    Io(#[from] io::Error),
    #[error("Round trip through {notation} changed the expression: {written} parsed back as {reparsed}")]
    RoundTrip {
        notation: Notation,
        written: String,
        reparsed: String,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Convert { from, to, expression } => {
            let tree = parse_input(*from, expression.as_deref(), cli.max_depth)?;
            println!("{}", to.format(&tree));
        }
        Commands::Diagram {
            from,
            max_cells,
            expression,
        } => {
            let tree = parse_input(*from, expression.as_deref(), cli.max_depth)?;
            println!("{}", try_to_diagram(&tree, *max_cells)?);
        }
        Commands::Check { from, expression } => {
            let tree = parse_input(*from, expression.as_deref(), cli.max_depth)?;
            for notation in Notation::ALL {
                let written = notation.format(&tree);
                let reparsed = notation.parse_with_max_depth(&written, cli.max_depth)?;
                if reparsed != tree {
                    return Err(CliError::RoundTrip {
                        notation,
                        written,
                        reparsed: reparsed.to_string(),
                    });
                }
                println!("{notation}: {written}");
            }
            info!(leaves = tree.num_leaves(), height = tree.height(), "All round trips agree");
        }
    }

    Ok(())
}

fn parse_input(notation: Notation, expression: Option<&str>, max_depth: usize) -> Result<Tree, CliError> {
    let input = match expression {
        Some(expression) => expression.to_string(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer.trim_end().to_string()
        }
    };
    debug!(%notation, input = %input, "Parsing input");

    Ok(notation.parse_with_max_depth(&input, max_depth)?)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry().with(fmt_layer.with_filter(filter)).init();
    debug!("Logging initialized at {filter}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_args() {
        let cli = Cli::try_parse_from(["powertower", "convert", "--from", "tower", "--to", "latex", "2^3"]).unwrap();
        match cli.command {
            Commands::Convert { from, to, expression } => {
                assert_eq!(from, Notation::Tower);
                assert_eq!(to, Notation::Latex);
                assert_eq!(expression.as_deref(), Some("2^3"));
            }
            _ => panic!("Expected convert command"),
        }
    }

    #[test]
    fn test_check_reports_parse_errors() {
        let cli = Cli::try_parse_from(["powertower", "check", "--from", "bracket", "((1)(2)(3))"]).unwrap();
        assert!(matches!(run(&cli), Err(CliError::Parsing(_))));
    }

    #[test]
    fn test_diagram_rejects_oversized_drawing() {
        let chain = (1..=20).map(|i| i.to_string()).collect::<Vec<_>>().join("^");
        let cli = Cli::try_parse_from(["powertower", "diagram", chain.as_str()]).unwrap();
        assert!(matches!(run(&cli), Err(CliError::Diagram(_))));

        let cli = Cli::try_parse_from(["powertower", "diagram", "--max-cells", "10", "1^2"]).unwrap();
        assert!(matches!(run(&cli), Err(CliError::Diagram(_))));
    }
}
