//! LitPath citation CLI
//!
//! Renders thesis/dissertation records as formatted citations.
//!
//! Usage: litpath cite records.json --style apa --format html

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use litpath_citation::io::{load_config, load_records};
use litpath_citation::Formatter;
use litpath_core::{CitationResult, CitationStyle, FormatterConfig, SourceRecord, StringOrNumber};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "litpath", version, about = "Render thesis and dissertation citations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render citations for records in a JSON or YAML file
    Cite {
        /// Path to the records file
        records: PathBuf,

        /// Citation style
        #[arg(short, long, value_enum, default_value_t = StyleArg::Apa)]
        style: StyleArg,

        /// Output rendition
        #[arg(short, long, value_enum, default_value_t = Rendition::Plain)]
        format: Rendition,

        /// Render only the record at this position (zero-based)
        #[arg(long)]
        index: Option<usize>,

        /// Output both renditions as JSON
        #[arg(long)]
        json: bool,

        /// Path to a word-list configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List supported citation styles with a sample rendering
    Styles,
    /// Generate JSON schema for source records or the word-list configuration
    #[cfg(feature = "schema")]
    Schema {
        #[arg(value_enum, default_value_t = SchemaTarget::Records)]
        target: SchemaTarget,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum StyleArg {
    Apa,
    Mla,
    Chicago,
    Ieee,
}

impl From<StyleArg> for CitationStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Apa => CitationStyle::Apa,
            StyleArg::Mla => CitationStyle::Mla,
            StyleArg::Chicago => CitationStyle::Chicago,
            StyleArg::Ieee => CitationStyle::Ieee,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Rendition {
    Plain,
    Html,
}

#[cfg(feature = "schema")]
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum SchemaTarget {
    Records,
    Config,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cite {
            records,
            style,
            format,
            index,
            json,
            config,
        } => {
            let config = match config {
                Some(path) => match load_config(&path) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error loading config: {}", e);
                        std::process::exit(1);
                    }
                },
                None => FormatterConfig::default(),
            };

            let mut records = match load_records(&records) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            if let Some(index) = index {
                if index >= records.len() {
                    eprintln!(
                        "Record index {} out of range ({} records)",
                        index,
                        records.len()
                    );
                    std::process::exit(1);
                }
                records = vec![records.swap_remove(index)];
            }

            let formatter = Formatter::with_config(config);
            let results = formatter.cite_all(&records, style.into());

            if json {
                print_json(&results);
            } else {
                for result in &results {
                    match format {
                        Rendition::Plain => println!("{}", result.plain),
                        Rendition::Html => println!("{}", result.html),
                    }
                }
            }
        }
        Commands::Styles => {
            let formatter = Formatter::new();
            let sample = sample_record();
            for style in CitationStyle::ALL {
                let result = formatter.cite(Some(&sample), style);
                println!("{:<8} {}", style, result.plain);
            }
        }
        #[cfg(feature = "schema")]
        Commands::Schema { target } => {
            println!("{}", schema_json(target));
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "litpath", &mut std::io::stdout());
        }
    }
}

fn print_json(results: &[CitationResult]) {
    match serde_json::to_string_pretty(results) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "schema")]
fn schema_json(target: SchemaTarget) -> String {
    let schema = match target {
        SchemaTarget::Records => schemars::schema_for!(SourceRecord),
        SchemaTarget::Config => schemars::schema_for!(FormatterConfig),
    };
    serde_json::to_string_pretty(&schema).unwrap()
}

fn sample_record() -> SourceRecord {
    SourceRecord {
        author: Some("DE LEON JUAN CARLOS".to_string()),
        year: Some(StringOrNumber::from(2022)),
        title: Some("a study of RICE YIELD in the philippines".to_string()),
        school: Some("UNIVERSITY OF THE PHILIPPINES LOS BANOS".to_string()),
        degree: Some("Master of Science".to_string()),
    }
}
