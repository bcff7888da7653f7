//! Phlox CLI
//!
//! Token-stream code-style fixer for PHP.

use std::path::PathBuf;

use phlox::commands::{run_fix, run_tokens, FixOptions};

fn main() {
    phlox::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "fix" | "check" => {
            let mut options = FixOptions {
                check: command == "check",
                ..FixOptions::default()
            };
            let mut paths = Vec::new();

            let mut i = 2;
            while i < args.len() {
                let arg = &args[i];
                if arg == "--check" {
                    options.check = true;
                } else if arg == "--allow-risky" {
                    options.allow_risky = true;
                } else if let Some(path) = arg.strip_prefix("--config=") {
                    options.config_path = Some(PathBuf::from(path));
                } else if arg == "--config" && i + 1 < args.len() {
                    options.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else if arg.starts_with('-') {
                    eprintln!("error: unknown option {arg}");
                    std::process::exit(1);
                } else {
                    paths.push(arg.clone());
                }
                i += 1;
            }

            if paths.is_empty() {
                eprintln!("Usage: phlox {command} <paths...> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --check            Report files that would change, write nothing");
                eprintln!("  --allow-risky      Run rules that can change program behavior");
                eprintln!("  --config <file>    Use this configuration file instead of discovery");
                std::process::exit(1);
            }

            std::process::exit(run_fix(&paths, &options));
        }
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: phlox tokens <file.php>");
                std::process::exit(1);
            }
            std::process::exit(run_tokens(&args[2]));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("error: unknown command {command}");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Phlox - a PHP code-style fixer");
    println!();
    println!("Usage: phlox <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  fix <paths...>     Fix files in place");
    println!("  check <paths...>   Report files that would change (exit 1 if any)");
    println!("  tokens <file>      Dump a file's token stream");
    println!("  help               Show this help");
    println!();
    println!("Configuration is read from the nearest phlox.toml; rules that");
    println!("change program behavior only run with allow_risky or --allow-risky.");
}
