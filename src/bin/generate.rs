// Binary entry point for the dictionary generator.
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};
use std::env;
use vimdict::{cli, config, generate};

fn main() {
    let args: Vec<String> = env::args().collect();
    let binary_name = args.first().map(String::as_str).unwrap_or("vimdict");

    let options = match cli::parse_args(args.get(1..).unwrap_or_default()) {
        Ok(cli::ParsedArgs::Help) => {
            cli::print_help(binary_name);
            return;
        }
        Ok(cli::ParsedArgs::Run(options)) => options,
        Err(e) => {
            cli::print_usage(binary_name, Some(&e.to_string()));
            std::process::exit(1);
        }
    };

    // Progress lines go to stderr; stdout stays reserved for help output.
    let _ = TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let cfg = match &options.config_path {
        // An explicitly requested file must exist and parse.
        Some(path) => match config::Config::load_from(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration:\n{}", e);
                std::process::exit(1);
            }
        },
        None => match config::Config::load_default() {
            Ok(c) => c,
            Err(e) => {
                // If the error is NOT a missing config file, it's a syntax or
                // permission error. Report it and exit instead of silently
                // falling back to defaults.
                if !config::Config::is_missing_config_error(&e) {
                    eprintln!("Error loading configuration:\n{}", e);
                    std::process::exit(1);
                }
                config::Config::default()
            }
        },
    };

    if let Err(e) = generate::run(&options.doc_root, &options.output_dir, &cfg) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
