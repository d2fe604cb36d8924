use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::cleaner::HtmlCleaner;
use crate::config::CleanerConfig;
use crate::error::CleanerError;

const OUTPUT_PREFIX: &str = "cleaned_";

/// Clean one file on disk.
#[derive(Clone, Debug)]
pub struct CleanJob {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub in_place: bool,
    pub force: bool,
    pub config: CleanerConfig,
}

impl CleanJob {
    pub fn new(input: impl Into<PathBuf>, config: CleanerConfig) -> Self {
        Self {
            input: input.into(),
            output: None,
            in_place: false,
            force: false,
            config,
        }
    }

    /// The input itself when editing in place, the explicit output if one
    /// was given, otherwise `cleaned_<name>` next to the input.
    pub fn output_path(&self) -> PathBuf {
        if self.in_place {
            return self.input.clone();
        }
        if let Some(output) = &self.output {
            return output.clone();
        }

        let file_name = self
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = self.input.parent().unwrap_or_else(|| Path::new(""));
        dir.join(format!("{OUTPUT_PREFIX}{file_name}"))
    }

    pub fn run(&self) -> Result<CleanReport, CleanerError> {
        let output = self.output_path();

        if !self.input.exists() {
            return Err(CleanerError::InputNotFound(self.input.clone()));
        }
        if output.exists() && !self.force && !self.in_place {
            return Err(CleanerError::OutputExists(output));
        }

        let input_size = fs::metadata(&self.input)?.len();
        let html = fs::read_to_string(&self.input)?;
        debug!("read {} bytes from {}", input_size, self.input.display());

        let cleaned = HtmlCleaner::new(self.config).clean(&html);
        fs::write(&output, cleaned.as_bytes())?;
        let output_size = fs::metadata(&output)?.len();
        info!("cleaned '{}' into '{}'", self.input.display(), output.display());

        Ok(CleanReport {
            input: self.input.clone(),
            output,
            input_size,
            output_size,
            options: self.config.options_applied(),
        })
    }
}

/// Outcome of a [`CleanJob`].
#[derive(Clone, Debug, PartialEq)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_size: u64,
    pub output_size: u64,
    pub options: Vec<&'static str>,
}

impl CleanReport {
    /// Size reduction in percent, `None` for an empty input.
    pub fn reduction(&self) -> Option<f64> {
        if self.input_size == 0 {
            return None;
        }
        Some(100.0 - (self.output_size as f64 / self.input_size as f64 * 100.0))
    }
}

impl fmt::Display for CleanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Successfully cleaned '{}'", self.input.display())?;
        write!(f, "  Saved to '{}'", self.output.display())?;
        if !self.options.is_empty() {
            write!(f, "\n  Options applied: {}", self.options.join(", "))?;
        }
        if let Some(reduction) = self.reduction() {
            write!(
                f,
                "\n\nOriginal size: {:.2} KB\nCleaned size:  {:.2} KB\nSize reduction: {:.2}%",
                self.input_size as f64 / 1024.0,
                self.output_size as f64 / 1024.0,
                reduction
            )?;
        }
        Ok(())
    }
}
