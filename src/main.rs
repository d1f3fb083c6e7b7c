use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use macrofor::composing::{self, Labels};
use macrofor::language::{Document, Encoding, Fragment, GenerationError, LineEnding, Style};
use macrofor::output::{self, Emission};
use macrofor::parsing;
use macrofor::rendering::{self, Terminal};

mod problem;

use problem::*;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("macrofor")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Generate Fortran source code from statement descriptions.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what is being done to stderr."),
        )
        .subcommand(
            Command::new("check")
                .about("Validate the given descriptor without writing anything")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("The TOML file describing the statements to generate."),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate Fortran source from the given descriptor")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write to this file, creating any missing directories. Without it, source is written to stdout."),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .value_parser(value_parser!(Style))
                        .help("Source form to lay out: fixed or free."),
                )
                .arg(
                    Arg::new("line-ending")
                        .long("line-ending")
                        .value_parser(value_parser!(LineEnding))
                        .help("Line ending to use: native, lf, or crlf."),
                )
                .arg(
                    Arg::new("encoding")
                        .long("encoding")
                        .value_parser(value_parser!(Encoding))
                        .help("Character encoding of the output: utf-8, latin1, or ascii."),
                )
                .arg(
                    Arg::new("max-line-length")
                        .long("max-line-length")
                        .value_parser(value_parser!(usize))
                        .help("Column at which statements are continued onto the next line."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("The TOML file describing the statements to generate."),
                ),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose")
        || matches
            .subcommand()
            .map(|(_, submatches)| submatches.get_flag("verbose"))
            .unwrap_or(false);

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let Some(filename) = submatches.get_one::<PathBuf>("filename") else {
                std::process::exit(2);
            };
            info!("Checking file: {}", filename.display());

            let content = read(filename);
            let document = match parsing::parse(&content) {
                Ok(document) => document,
                Err(error) => {
                    eprintln!("{}", full_parsing_error(&error, filename, &content));
                    std::process::exit(1);
                }
            };

            if let Err(error) = assemble(&document) {
                eprintln!("{}", concise_generation_error(&error, filename));
                std::process::exit(1);
            }
        }
        Some(("generate", submatches)) => {
            let Some(filename) = submatches.get_one::<PathBuf>("filename") else {
                std::process::exit(2);
            };
            info!("Generating from file: {}", filename.display());

            let content = read(filename);
            let document = match parsing::parse(&content) {
                Ok(document) => document,
                Err(error) => {
                    eprintln!("{}", concise_parsing_error(&error, filename, &content));
                    std::process::exit(1);
                }
            };

            if let Err(error) = generate(filename, &document, submatches) {
                eprintln!("{}", concise_generation_error(&error, filename));
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: macrofor [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn read(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn assemble(document: &Document) -> Result<Vec<Fragment>, GenerationError> {
    let settings = &document.settings;

    let mut labels = Labels::starting(
        settings
            .first_label
            .unwrap_or(100),
        settings
            .label_step
            .unwrap_or(100),
    )?;

    composing::assemble(&mut labels, &document.statements)
}

/// Settings are layered: built-in defaults, then the descriptor's own
/// [settings] table, then whatever was given on the command line.
fn emission(filename: &Path, document: &Document, submatches: &ArgMatches) -> Emission {
    let settings = &document.settings;
    let defaults = Emission::default();

    let banner = match settings.banner {
        Some(true) => Some(
            filename
                .file_name()
                .map(|name| {
                    name.to_string_lossy()
                        .to_string()
                })
                .unwrap_or_else(|| {
                    filename
                        .display()
                        .to_string()
                }),
        ),
        _ => None,
    };

    Emission {
        style: submatches
            .get_one::<Style>("style")
            .copied()
            .or(settings.style)
            .unwrap_or(defaults.style),
        line_ending: submatches
            .get_one::<LineEnding>("line-ending")
            .copied()
            .or(settings.line_ending)
            .unwrap_or(defaults.line_ending),
        encoding: submatches
            .get_one::<Encoding>("encoding")
            .copied()
            .or(settings.encoding)
            .unwrap_or(defaults.encoding),
        max_line_length: submatches
            .get_one::<usize>("max-line-length")
            .copied()
            .or(settings.max_line_length),
        banner,
    }
}

fn generate(filename: &Path, document: &Document, submatches: &ArgMatches) -> Result<(), GenerationError> {
    let fragments = assemble(document)?;
    let emission = emission(filename, document, submatches);
    debug!(?emission);

    if let Some(output) = submatches.get_one::<PathBuf>("output") {
        return output::emit(output, &fragments, &emission);
    }

    let text = output::render(&fragments, &emission)?;

    let raw_output = submatches.get_flag("raw-control-chars");
    let mut stdout = std::io::stdout().lock();

    let result = if raw_output || std::io::stdout().is_terminal() {
        let highlighted = rendering::render(&Terminal, &text, emission.style);
        stdout.write_all(highlighted.as_bytes())
    } else {
        let bytes = output::encode(&text, emission.encoding)?;
        stdout.write_all(&bytes)
    };

    result.map_err(|error| GenerationError::filesystem("Failed writing", &error, Path::new("<stdout>")))
}
