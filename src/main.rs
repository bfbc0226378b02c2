mod cli;
mod layout;
mod logging;
mod runner;
mod util;

fn main() -> anyhow::Result<()> {
    logging::init();
    let _cli = cli::parse();
    runner::run()
}
