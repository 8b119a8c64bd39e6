use clap::Parser;
use hexmap::cli::{Cli, Commands};
use hexmap::output::Printer;
use miette::Result;
use tracing::Level;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => hexmap::cli::render::run(args, &printer)?,
        Commands::Bounds(args) => hexmap::cli::bounds::run(args)?,
        Commands::Init(args) => hexmap::cli::init::run(args, &printer)?,
        Commands::Completions(args) => hexmap::cli::completions::run(args)?,
    }

    Ok(())
}
