//! Minimal CLI for the Playfair engine. Commands are intentionally small and
//! auditable so the cipher steps stay visible; errors go to stderr and exit
//! nonzero.

use std::env;
use std::process;

use playfair_rs::cipher::key_square::KeySquare;
use playfair_rs::config::load_job;
use playfair_rs::decrypt;

fn print_usage() {
    eprintln!("Commands:\n  decrypt <ciphertext> <keyword>\n  decrypt-file <job.json>\n  grid <keyword>");
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "decrypt" => {
            if args.len() != 4 {
                return print_usage();
            }
            match decrypt(&args[2], &args[3]) {
                Ok(plaintext) => println!("{plaintext}"),
                Err(err) => fail(format!("decryption failed: {err}")),
            }
        }
        "decrypt-file" => {
            if args.len() != 3 {
                return print_usage();
            }
            let job = match load_job(&args[2]) {
                Ok(job) => job,
                Err(err) => fail(format!("job load failed: {err}")),
            };
            match decrypt(&job.ciphertext, &job.keyword) {
                Ok(plaintext) => println!("{plaintext}"),
                Err(err) => fail(format!("decryption failed: {err}")),
            }
        }
        "grid" => {
            if args.len() != 3 {
                return print_usage();
            }
            let grid = KeySquare::build(&args[2]);
            match serde_json::to_string_pretty(&grid.rows()) {
                Ok(rendered) => println!("{rendered}"),
                Err(err) => fail(format!("grid rendering failed: {err}")),
            }
        }
        _ => print_usage(),
    }
}
