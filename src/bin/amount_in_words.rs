//! Print a Rupee amount in words
//!
//! Usage:
//!   cargo run --bin amount_in_words -- 1025.50
//!   cargo run --bin amount_in_words -- 25 100000 10000000

use rust_decimal::Decimal;
use std::process::ExitCode;
use std::str::FromStr;

use passport_fee::words::amount_in_words;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: amount_in_words <amount>...");
        return ExitCode::FAILURE;
    }

    let mut status = ExitCode::SUCCESS;
    for arg in &args {
        let result = Decimal::from_str(arg.trim())
            .map_err(|e| e.to_string())
            .and_then(|amount| amount_in_words(amount).map_err(|e| e.to_string()));
        match result {
            Ok(words) => println!("{}\t{}", arg, words),
            Err(e) => {
                eprintln!("{}\terror: {}", arg, e);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
