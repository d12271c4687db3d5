//! `rb-structs`: collect stdin lines into a red-black set and summarise them.
//!
//! Usage:
//!   rb-structs <strings|vectors> [--verbose]
//!
//! `strings` prints the distinct lines in byte order. `vectors` reads one JSON
//! array per line and prints the one with the largest norm. The log level is
//! taken from `--verbose` or the `RB_LOG` environment variable.

use std::io::{self, Read, Write};

use log::error;
use rb_structs::cli::{self, Mode, LOG_ENV};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let env = std::env::var(LOG_ENV).ok();
    let level = cli::log_level(verbose, env.as_deref());
    // Only fails if a logger is already installed.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);

    let mode = match args.iter().find(|a| !a.starts_with('-')) {
        Some(m) => m,
        None => {
            eprintln!("Usage: rb-structs <strings|vectors> [--verbose]");
            std::process::exit(2);
        }
    };
    let mode: Mode = match mode.parse() {
        Ok(m) => m,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("{e}");
        std::process::exit(1);
    }

    match cli::run(mode, &input) {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            let written = stdout
                .write_all(out.as_bytes())
                .and_then(|()| if out.ends_with('\n') { Ok(()) } else { stdout.write_all(b"\n") });
            if let Err(e) = written {
                error!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
