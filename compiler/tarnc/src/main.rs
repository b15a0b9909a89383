//! Tarn command-line interface.

use tarn_diagnostic::emitter::ColorMode;
use tarnc::commands::{lex_file, parse_file, run_file, run_repl};

fn main() {
    tarnc::tracing_setup::init_tracing();

    // `--color=<mode>` may appear anywhere; everything else is positional.
    let mut color = ColorMode::Auto;
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::parse(value) else {
                eprintln!("error: invalid color mode '{value}' (expected auto, always, or never)");
                std::process::exit(1);
            };
            color = mode;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        run_repl(color);
        return;
    };

    match command.as_str() {
        "repl" => run_repl(color),
        "run" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: tarn run <file.tarn>");
                std::process::exit(1);
            };
            run_file(path, color);
        }
        "lex" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: tarn lex <file.tarn>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: tarn parse <file.tarn>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-v" => {
            println!("Tarn {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("tarn"))
            {
                run_file(command, color);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Tarn, a small scripting language");
    println!();
    println!("Usage: tarn [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive prompt (default)");
    println!("  run <file.tarn>      Run a Tarn program");
    println!("  lex <file.tarn>      Tokenize and display tokens");
    println!("  parse <file.tarn>    Parse and display statements");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Diagnostic colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging, e.g. RUST_LOG=tarn_eval=debug");
    println!("  TARN_LOG_TREE        Render log spans as an indented tree");
    println!();
    println!("Exit status:");
    println!("  65                   The program has syntax errors");
    println!("  70                   The program stopped at a runtime error");
    println!();
    println!("Examples:");
    println!("  tarn");
    println!("  tarn run main.tarn");
    println!("  tarn main.tarn");
    println!("  tarn parse main.tarn --color=never");
}
