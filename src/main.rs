use std::env::args_os;
use std::process::ExitCode;

use remove_white_bg::{remove_white_background, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    println!("Processing {}...", arguments.input_file().display());
    match remove_white_background(arguments.input_file(), arguments.output_file()) {
        Ok(_) => {
            println!("Saved to {}", arguments.output_file().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
