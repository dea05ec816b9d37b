//! Dirt Claude Dojo - CLI entry point

use anyhow::Result;
use clap::Parser;
use dojo::{
    cli::{Args, Commands, Config},
    display, telemetry, Dojo,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    telemetry::init_logging(args.verbosity(config.verbosity()?));
    display::set_color(config.display.color_output);

    let root = args.root_dir();
    tracing::debug!(root = %root.display(), "opening dojo");
    let mut dojo = Dojo::open(root, config.session);

    match &args.command {
        Commands::Init => {
            println!("{}", display::init_banner());
            let stdin = std::io::stdin();
            let outcome = dojo.init(&mut stdin.lock(), &mut std::io::stdout())?;
            display::print_lines(&display::render_init(&outcome));
        }
        Commands::Start => {
            let outcome = dojo.start();
            display::print_lines(&display::render_start(&outcome));
        }
        Commands::Learn { topic } => {
            let outcome = dojo.learn(topic);
            display::print_lines(&display::render_learn(&outcome));
        }
    }

    Ok(())
}
