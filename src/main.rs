use std::env;

mod cli;
mod terminal;

fn main() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}
