// File: crates/perfplot-report/src/run.rs
// Summary: One report run: output directory, sequential figure writing and console progress.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use perfplot_core::{write_image, Figure, RenderOptions};

/// Directory every chart is written to, relative to the working directory.
pub const OUTPUT_DIR: &str = "./charts";

const RULE: &str = "============================================================";

pub struct ReportRun {
    dir: PathBuf,
    opts: RenderOptions,
    written: Vec<PathBuf>,
}

impl ReportRun {
    /// Create the output directory (idempotent) and print the start banner.
    pub fn start(banner: &str, dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory '{}'", dir.display()))?;
        println!();
        println!("{banner} ({})", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
        println!("{RULE}");
        Ok(Self { dir, opts: RenderOptions::default(), written: Vec::new() })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of `file_name` inside the output directory.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Write one built figure and report it. Build errors and write errors
    /// both abort the run.
    pub fn emit(&mut self, name: &str, figure: perfplot_core::Result<Figure>) -> Result<()> {
        let figure = figure.with_context(|| format!("building figure '{name}'"))?;
        let path = write_image(&figure, &self.opts)
            .with_context(|| format!("writing figure '{name}'"))?;
        println!("Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Print the closing summary and return the written paths.
    pub fn finish(self, what: &str) -> Vec<PathBuf> {
        println!("{RULE}");
        println!("All charts generated in {}/", self.dir.display());
        println!("{} {what} charts written", self.written.len());
        self.written
    }
}
