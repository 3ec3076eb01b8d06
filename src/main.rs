use martian_robots::{app::App, config::Args, logging, parsing};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::{fs, io};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::setup_logging(args.log_level())?;

    log::info!("Application starting...");

    let input = read_input(&args)?;
    let (world, mut runs) = parsing::parse_input(&input).wrap_err("failed to parse input")?;

    let mut app = App::new(world);
    for line in app.run(&mut runs) {
        println!("{}", line);
    }

    if args.show_world {
        eprint!("{}", app.world());
    }

    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    match args.input_path() {
        Some(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).wrap_err("failed to read stdin"),
    }
}
