use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hako_html::{render_canvas_from_file, render_table_from_file};
use tracing::debug;

#[derive(Debug, Args)]
pub struct HtmlArg {
    /// Image file to render.
    pub file: PathBuf,

    /// Canvas id; when set, renders a <canvas> instead of a <table>.
    #[arg(long, value_name = "id")]
    pub id: Option<String>,
}

impl HtmlArg {
    pub fn run(self) -> Result<()> {
        debug!(file = %self.file.display(), canvas = self.id.is_some(), "rendering image");
        let body = match &self.id {
            Some(id) => render_canvas_from_file(&self.file, id),
            None => render_table_from_file(&self.file),
        }
        .with_context(|| format!("failed to render {}", self.file.display()))?;

        println!("<html><head></head><body>");
        println!("{}", body);
        println!("</body></html>");
        Ok(())
    }
}
