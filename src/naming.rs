//! Output paths for saved plots.
//!
//! Plots land in `<output_root>/<format>/<name>.<format>`. The format
//! directory is created on demand, but only one level deep: a missing
//! `output_root` is an error. When the file already exists the
//! [`NamingPolicy`] decides which name is tried next.

use crate::error::{Result, WaveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    #[serde(alias = "jpg")]
    Jpeg,
    Bmp,
    Svg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Svg => "svg",
        }
    }

    pub fn is_vector(self) -> bool {
        self == OutputFormat::Svg
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "bmp" => Ok(OutputFormat::Bmp),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(WaveError::UnsupportedFormat(format!(
                "unsupported output format '{}' (png, jpg, bmp, svg)",
                other
            ))),
        }
    }
}

/// What to do when the requested file name is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingPolicy {
    /// Bump a single trailing digit, `plot` → `plot_0` → ... → `plot_9` → `plot_9_0`
    #[default]
    Suffix,
    /// `plot` → `plot_0` → `plot_1` → ... without a digit limit
    Counter,
    /// Replace whatever is there
    Overwrite,
}

/// Next name to try under [`NamingPolicy::Suffix`].
pub fn next_suffix_name(name: &str) -> String {
    if let Some((stem, digit)) = single_digit_suffix(name) {
        let index = digit + 1;
        if index >= 10 {
            format!("{}_0", name)
        } else {
            format!("{}_{}", stem, index)
        }
    } else {
        format!("{}_0", name)
    }
}

// `stem_D` with exactly one digit D after the last underscore
fn single_digit_suffix(name: &str) -> Option<(&str, u32)> {
    let mut chars = name.chars().rev();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next()? != '_' {
        return None;
    }
    Some((&name[..name.len() - 2], digit))
}

fn candidate(dir: &Path, name: &str, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}.{}", name, format.extension()))
}

/// Creates `<output_root>/<format>` if needed and returns it.
pub fn ensure_format_dir(output_root: &Path, format: OutputFormat) -> Result<PathBuf> {
    let dir = output_root.join(format.extension());
    if !dir.is_dir() {
        fs::create_dir(&dir)?;
        log::info!("Created output directory {}", dir.display());
    }
    Ok(dir)
}

/// Picks the path a plot named `name` will be written to.
pub fn resolve_output_path(
    output_root: &Path,
    name: &str,
    format: OutputFormat,
    policy: NamingPolicy,
) -> Result<PathBuf> {
    if name.is_empty() {
        return Err(WaveError::MissingParameter("plot file name is empty".to_string()));
    }
    let dir = ensure_format_dir(output_root, format)?;

    let mut path = candidate(&dir, name, format);
    match policy {
        NamingPolicy::Overwrite => {}
        NamingPolicy::Suffix => {
            let mut current = name.to_string();
            while path.exists() {
                current = next_suffix_name(&current);
                log::debug!("{} exists, trying {}", path.display(), current);
                path = candidate(&dir, &current, format);
            }
        }
        NamingPolicy::Counter => {
            let mut index = 0u64;
            while path.exists() {
                let next = format!("{}_{}", name, index);
                log::debug!("{} exists, trying {}", path.display(), next);
                path = candidate(&dir, &next, format);
                index += 1;
            }
        }
    }
    Ok(path)
}
