use std::io::{stderr, stdout};

fn main() {
    let code = hilo_cli::run(std::env::args(), &mut stdout(), &mut stderr());
    std::process::exit(code);
}
