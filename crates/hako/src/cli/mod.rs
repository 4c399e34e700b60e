use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod hash;
pub mod html;

#[derive(Debug, Parser)]
#[command(
    name = "hako",
    version = env!("CARGO_PKG_VERSION"),
    about = "File hashing and HTML image rendering",
    propagate_version = true
)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,

    /// More logging; repeat for more detail.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "hash", about = "Print a file's checksum")]
    Hash(hash::HashArg),
    #[command(name = "html", about = "Render an image file as an HTML document")]
    Html(html::HtmlArg),
}

impl App {
    pub fn run(self) -> Result<()> {
        match self.cmd {
            Commands::Hash(arg) => arg.run(),
            Commands::Html(arg) => arg.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use hako_digest::Algorithm;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        App::command().debug_assert();
    }

    #[test]
    fn hash_defaults() {
        let app = App::try_parse_from(["hako", "hash", "file.bin"]).unwrap();
        match app.cmd {
            Commands::Hash(arg) => {
                assert_eq!(arg.algorithm, Algorithm::Sha256);
                assert_eq!(arg.block_size, hako_digest::DEFAULT_BLOCK_SIZE);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn hash_accepts_every_algorithm_name() {
        for algorithm in Algorithm::ALL {
            let app = App::try_parse_from([
                "hako",
                "hash",
                "file.bin",
                "--algorithm",
                algorithm.name(),
            ])
            .unwrap();
            match app.cmd {
                Commands::Hash(arg) => assert_eq!(arg.algorithm, algorithm),
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected_at_parse_time() {
        assert!(App::try_parse_from(["hako", "hash", "f", "--algorithm", "whirlpool"]).is_err());
    }

    #[test]
    fn html_mode_switch_follows_the_id_flag() {
        let app = App::try_parse_from(["hako", "html", "img.png"]).unwrap();
        match app.cmd {
            Commands::Html(arg) => assert!(arg.id.is_none()),
            other => panic!("unexpected command: {other:?}"),
        }

        let app = App::try_parse_from(["hako", "html", "img.png", "--id", "canvas1"]).unwrap();
        match app.cmd {
            Commands::Html(arg) => assert_eq!(arg.id.as_deref(), Some("canvas1")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
