use std::env;
use std::process;

mod app;
mod cli;
mod regex;

fn main() {
    let args: Vec<String> = env::args().collect();

    let code = match cli::parse_args(&args).and_then(|cfg| app::run(&cfg)) {
        Ok(true) => 0,  // match found
        Ok(false) => 1, // no match
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };
    process::exit(code);
}
