use crate::Result;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Generated source files, by path relative to the output directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub files: BTreeMap<PathBuf, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Remove the output directory before writing. Never applied to `""` or
    /// `"."`.
    pub clean: bool,

    /// Run `rustfmt` on each file. A formatter failure is logged and the
    /// unformatted text is written.
    pub format: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            clean: false,
            format: true,
        }
    }
}

impl Generated {
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Writes every file below `dir`, creating directories as needed.
    pub fn write(&self, dir: impl AsRef<Path>, options: &WriteOptions) -> Result<()> {
        let dir = dir.as_ref();

        if options.clean && !is_cwd(dir) && dir.exists() {
            tracing::info!(dir = %dir.display(), "cleaning output directory");
            fs::remove_dir_all(dir)?;
        }

        for (path, source) in &self.files {
            let path = dir.join(path);

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let formatted = if options.format {
                rustfmt(&path, source)
            } else {
                None
            };

            tracing::info!(path = %path.display(), "writing");
            fs::write(&path, formatted.as_deref().unwrap_or(source))?;
        }

        Ok(())
    }
}

fn is_cwd(dir: &Path) -> bool {
    dir.as_os_str().is_empty() || dir == Path::new(".")
}

/// Formats `source` with `rustfmt`. Returns `None`, after logging, when the
/// formatter is missing or fails.
fn rustfmt(path: &Path, source: &str) -> Option<String> {
    match run_rustfmt(source) {
        Ok(formatted) => Some(formatted),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "rustfmt failed; writing unformatted source");
            None
        }
    }
}

fn run_rustfmt(source: &str) -> io::Result<String> {
    let mut child = Command::new("rustfmt")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .args(["--emit", "stdout", "--edition", "2021"])
        .spawn()?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| io::Error::other("rustfmt stdin unavailable"))?;
    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("rustfmt stdout unavailable"))?;

    // Write stdin from another thread while stdout is drained here.
    let source = source.to_owned();
    let feeder = std::thread::spawn(move || stdin.write_all(source.as_bytes()));

    let mut formatted = String::new();
    stdout.read_to_string(&mut formatted)?;

    let status = child.wait()?;

    feeder
        .join()
        .map_err(|_| io::Error::other("thread feeding rustfmt panicked"))??;

    match status.code() {
        Some(0) => Ok(formatted),
        Some(code) => Err(io::Error::other(format!("rustfmt exited with {code}"))),
        None => Err(io::Error::other("rustfmt terminated by signal")),
    }
}
