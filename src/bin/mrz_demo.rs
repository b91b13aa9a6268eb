use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mrzkit::MrzParser;

/// Parse the machine readable zone out of raw text-recognizer output.
#[derive(Parser, Debug)]
#[command(name = "mrz_demo", version, about)]
struct Args {
    /// File holding the recognizer text; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let text = match read_input(&args) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match MrzParser::new().parse_text(&text) {
        Ok(record) => {
            let json = if args.compact {
                serde_json::to_string(&record)
            } else {
                serde_json::to_string_pretty(&record)
            };
            match json {
                Ok(out) => {
                    println!("{}", out);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: failed to serialize record: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_input(args: &Args) -> std::io::Result<String> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
