// File: src/cli.rs
//! Command-line parsing and help output.

use std::fmt;
use std::path::PathBuf;

/// Settings for a generation run, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory holding the Vim documentation (`*.txt` help files).
    pub doc_root: PathBuf,
    /// Directory the dictionaries are written into.
    pub output_dir: PathBuf,
    /// Explicit configuration file, if one was given.
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedArgs {
    Help,
    Run(Options),
}

/// A command line that cannot be turned into run options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    MissingDocRoot,
    NotADirectory(PathBuf),
    UnknownOption(String),
    MissingValue(&'static str),
    UnexpectedArgument(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingDocRoot => write!(f, "missing required <vim_doc_dir> argument"),
            UsageError::NotADirectory(path) => {
                write!(f, "'{}' is not a directory", path.display())
            }
            UsageError::UnknownOption(opt) => write!(f, "unknown option '{}'", opt),
            UsageError::MissingValue(opt) => write!(f, "option '{}' expects a value", opt),
            UsageError::UnexpectedArgument(arg) => write!(f, "unexpected argument '{}'", arg),
        }
    }
}

impl std::error::Error for UsageError {}

/// Parse the arguments following the binary name.
pub fn parse_args(args: &[String]) -> Result<ParsedArgs, UsageError> {
    // Help wins over everything else on the line.
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(ParsedArgs::Help);
    }

    let mut doc_root: Option<PathBuf> = None;
    let mut output_dir: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                let value = args
                    .get(i + 1)
                    .ok_or(UsageError::MissingValue("--output"))?;
                output_dir = Some(value.clone().into());
                i += 1; // Also consumed the value
            }
            "--config" | "-c" => {
                let value = args
                    .get(i + 1)
                    .ok_or(UsageError::MissingValue("--config"))?;
                config_path = Some(value.clone().into());
                i += 1; // Also consumed the value
            }
            arg if arg.starts_with('-') => {
                return Err(UsageError::UnknownOption(arg.to_string()));
            }
            arg => {
                if doc_root.is_none() {
                    doc_root = Some(arg.into());
                } else {
                    return Err(UsageError::UnexpectedArgument(arg.to_string()));
                }
            }
        }
        i += 1;
    }

    let doc_root = doc_root.ok_or(UsageError::MissingDocRoot)?;
    if !doc_root.is_dir() {
        return Err(UsageError::NotADirectory(doc_root));
    }

    Ok(ParsedArgs::Run(Options {
        doc_root,
        output_dir: output_dir.unwrap_or_else(|| PathBuf::from(".")),
        config_path,
    }))
}

/// Print a short usage reminder to stderr, optionally preceded by the
/// rejection reason.
pub fn print_usage(binary_name: &str, error: Option<&str>) {
    if let Some(message) = error {
        eprintln!("Error: {}", message);
        eprintln!();
    }
    eprintln!("USAGE:");
    eprintln!("    {} [OPTIONS] <vim_doc_dir>", binary_name);
    eprintln!();
    eprintln!("Run '{} --help' for more information.", binary_name);
}

pub fn print_help(binary_name: &str) {
    println!(
        "Vimdict v{} - Generates Vim autocompletion dictionaries from documentation",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <vim_doc_dir>", binary_name);
    println!();
    println!("ARGS:");
    println!("    <vim_doc_dir>          Vim documentation directory, e.g. /usr/share/vim/vim91/doc");
    println!();
    println!("OPTIONS:");
    println!("    -o, --output <dir>     Write the dictionaries into <dir> (default: current directory).");
    println!("    -c, --config <file>    Read configuration from <file> instead of the default location.");
    println!("    -h, --help             Show this help message.");
    println!();
    println!("OUTPUT FILES:");
    println!("    builtincmds.dict       One Ex command name per line (':bd[elete]' becomes 'bdelete').");
    println!("    builtinfuncs.dict      One 'function! name(args)' entry per line, from eval.txt.");
    println!();
    println!("CONFIGURATION:");
    println!("    An optional config.toml in the vimdict config directory (or the file given");
    println!("    with --config) may set:");
    println!("    ignore_prefixes        Filename prefixes skipped by the command scan (default: [\"os\", \"tags\"]).");
    println!("    function_doc           Function reference filename (default: \"eval.txt\").");
    println!("    commands_dict          Output filename for command names (default: \"builtincmds.dict\").");
    println!("    functions_dict         Output filename for function entries (default: \"builtinfuncs.dict\").");
    println!();
    println!("EXAMPLES:");
    println!("    {} /usr/share/vim/vim91/doc", binary_name);
    println!("    {} -o ~/.vim/dict /usr/share/vim/vim91/doc", binary_name);
    println!();
    println!("MORE INFO:");
    println!("    Repository: https://codeberg.org/trougnouf/vimdict");
    println!("    License:    GPL-3.0");
}
