//! Rill interpreter CLI.

use std::path::PathBuf;

use rillc::{init_tracing, run_file, RunOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(2);
    }

    match args[1].as_str() {
        "run" => run_command(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        arg if !arg.starts_with('-') => {
            // Bare `rill <file.rill>` is shorthand for `rill run`.
            run_command(&args[1..]);
        }
        other => {
            eprintln!("error: unknown option `{other}`");
            print_usage();
            std::process::exit(2);
        }
    }
}

fn run_command(args: &[String]) -> ! {
    let mut options = RunOptions::default();
    let mut file_path = None;

    for arg in args {
        if let Some(path) = arg.strip_prefix("--dump-ast=") {
            options.dump_ast = Some(PathBuf::from(path));
        } else if arg == "--quiet" || arg == "-q" {
            options.quiet = true;
        } else if !arg.starts_with('-') && file_path.is_none() {
            file_path = Some(arg.as_str());
        } else {
            eprintln!("error: unexpected argument `{arg}`");
            print_run_usage();
            std::process::exit(2);
        }
    }

    let Some(path) = file_path else {
        eprintln!("error: missing file path");
        print_run_usage();
        std::process::exit(2);
    };

    let status = run_file(path, &options);
    std::process::exit(status.exit_code());
}

fn print_usage() {
    eprintln!("Usage: rill <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file.rill>    Parse and evaluate a program");
    eprintln!("  help               Show this message");
    eprintln!();
    eprintln!("`rill <file.rill>` is accepted as shorthand for `rill run`.");
    eprintln!("Set RILL_LOG (e.g. RILL_LOG=rill_parse=debug) for internal tracing.");
}

fn print_run_usage() {
    eprintln!("Usage: rill run <file.rill> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dump-ast=<path.gv>   Write a Graphviz dump of the parsed tree");
    eprintln!("  -q, --quiet            Suppress diagnostic output");
}
