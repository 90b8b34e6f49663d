use env_logger::Env;
use games::{Console, Options, USAGE};
use log::error;
use std::io;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut rng = options.rng();

    if let Err(e) = console.run(&options, &mut rng) {
        error!("{}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
