use std::io;

fn main() {
    liarsclub_cli::logging::init_logging();
    let code = liarsclub_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
