use anyhow::Result;
use clap::Parser;

use crate::cli::App;

mod cli;

fn main() -> Result<()> {
    let app = App::parse();

    let level = match app.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    app.run()
}
