//! Parse stdin as CSV and print every field of every row
//!
//! Run with: echo 'a,"b,c"' | cargo run --example parser_demo

use csvforge::{parse, CsvConfig};
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    if std::env::args().len() > 1 {
        println!(
            "This program does not take any arguments. \
             It reads stdin until EOF and parses the result as CSV."
        );
        return ExitCode::FAILURE;
    }

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    match parse(&input, &CsvConfig::DEFAULT) {
        Ok(rows) => {
            for row in rows {
                for (index, field) in row.iter().enumerate() {
                    print!("[F{}] {} ", index, field);
                }
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
