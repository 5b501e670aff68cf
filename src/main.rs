use args::Args;
use clap::Parser;
use fs_access::StdFsAccess;
use miette::Result;
use request::Request;
use runner::Runner;
use writer::{FileWriter, Outcome};

mod args;
mod config;
mod error;
mod fs_access;
mod mode;
mod request;
mod runner;
mod utils;
mod writer;

fn main() -> Result<()> {
    let args: Args = Args::parse();
    let env = config::read_runner_env()?;
    init_logging(args.verbose || env.debug());
    let runner = Runner::new(&env);

    if let Err(e) = run(&args, &runner) {
        runner.error(&e.to_string());
        return Err(e);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    let builder = if verbose {
        builder.filter_level(log::LevelFilter::Debug)
    } else {
        builder.filter_level(log::LevelFilter::Info)
    };
    builder.init();
}

fn run(args: &Args, runner: &Runner) -> Result<()> {
    let request = Request::from_args(args)?;
    runner.debug(&format!(
        "Writing {} bytes to {:?} in {} mode",
        request.contents.len(),
        request.path,
        request.mode
    ));

    let outcome = FileWriter::new(Box::new(StdFsAccess)).write(&request)?;
    match outcome {
        Outcome::Preserved { size } => {
            log::info!("Kept existing {:?} ({size} bytes)", request.path)
        }
        Outcome::Written { size } => log::info!("Wrote {:?} ({size} bytes)", request.path),
    }
    runner.set_output("size", &outcome.size().to_string())?;

    Ok(())
}
