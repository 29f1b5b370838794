//! Jutos CLI
//!
//! Parse, inspect and run Jutos programs.

use jutosc::commands::{eval_inline, lex_file, parse_file, parse_run_args, run_file, RunOptions};

fn main() {
    jutosc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let (options, positional) = run_args(&args[2..]);
            let Some(path) = positional.first() else {
                eprintln!("error: missing file path");
                eprintln!("Usage: jutos run <file.jt> [--max-depth=<n>]");
                std::process::exit(1);
            };
            run_file(path, &options);
        }
        "eval" => {
            let (options, positional) = run_args(&args[2..]);
            if positional.is_empty() {
                eprintln!("Usage: jutos eval <source> [--max-depth=<n>]");
                eprintln!("Example: jutos eval \"print(1 + 2);\"");
                std::process::exit(1);
            }
            eval_inline(&positional.join(" "), &options);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: jutos parse <file.jt>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: jutos lex <file.jt>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("jutos {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a source file, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("jt"))
            {
                let (options, _) = run_args(&args[2..]);
                run_file(command, &options);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn run_args(args: &[String]) -> (RunOptions, Vec<String>) {
    match parse_run_args(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Jutos");
    println!();
    println!("Usage: jutos <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.jt>        Run a Jutos program");
    println!("  eval <source>        Run source text given on the command line");
    println!("  parse <file.jt>      Print the syntax tree as JSON");
    println!("  lex <file.jt>        Print the token stream");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=<n>      Maximum nested function calls (default: 2048)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>    Enable logging, e.g. RUST_LOG=jutos_eval=debug");
    println!("  JUTOS_LOG_TREE=1     Indent log output by span");
    println!();
    println!("Examples:");
    println!("  jutos run main.jt");
    println!("  jutos main.jt --max-depth=10000");
    println!("  jutos eval \"print(1 + 2);\"");
    println!("  jutos parse main.jt > ast.json");
}
