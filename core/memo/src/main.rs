use std::process;

use common::error::Error;
use memo::app::{help_lines, usage_line, Runner};
use memo::cli::{parse_args, print_completion, ParseOutcome};
use memo::domain::Command;
use memo::wiring::wire_memo;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                eprintln!("{}", usage_line());
            }
            eprintln!("memo: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    if config.command == Command::Help {
        for line in help_lines() {
            println!("{}", line);
        }
        return Ok(0);
    }
    // -d/--home-dir 指定時は MEMO_HOME を設定し、resolve_dirs() がその配下を使うようにする
    if let Some(ref h) = config.home_dir {
        std::env::set_var("MEMO_HOME", h);
    }
    let mut runner = Runner::new(wire_memo()?);
    runner.run(config)
}
