use anyhow::{Context, Result};
use clap::Parser;
use plate_codegen::{Config, WriteOptions};
use std::path::PathBuf;

/// Output directory when `--out` is not given
const DEFAULT_OUT: &str = "src/db";

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Generator config
    #[arg(short, long, default_value = "plate.toml")]
    pub config: PathBuf,

    /// Directory to write the modules to, relative to the working directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Remove the output directory first
    #[arg(long)]
    pub clean: bool,

    /// Skip rustfmt
    #[arg(long)]
    pub no_format: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::from_file(&self.config)
            .with_context(|| format!("failed to load {}", self.config.display()))?;

        let generated = plate_codegen::generate(&config)
            .with_context(|| format!("invalid configuration in {}", self.config.display()))?;

        let out = self.out_dir();
        let options = WriteOptions {
            clean: self.clean,
            format: !self.no_format,
        };

        generated
            .write(&out, &options)
            .with_context(|| format!("failed to write {}", out.display()))?;

        tracing::info!(files = generated.files.len(), out = %out.display(), "done");

        Ok(())
    }

    fn out_dir(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUT))
    }
}
