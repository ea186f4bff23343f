// src/main.rs

use replicator::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("replicator error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    let logs = logging::init_logging(args.log_level)?;
    run(args, &logs)
}
