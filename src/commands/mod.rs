//! CLI command implementations.

pub mod init;
pub mod profiles;
pub mod score;

use std::path::PathBuf;

use crate::cli::FormatArg;
use crate::config::{self, CreditxConfig};
use crate::io::OutputFormat;

/// Load configuration: an explicit `--config` path must exist, the implicit
/// working-directory file is optional.
pub(crate) fn load_config(path: Option<&PathBuf>) -> crate::core::Result<CreditxConfig> {
    match path {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    }
}

/// Resolve the output format: CLI flag, then config default, then terminal.
pub(crate) fn resolve_format(flag: Option<FormatArg>, config: &CreditxConfig) -> OutputFormat {
    if let Some(flag) = flag {
        return flag.into();
    }
    match config
        .output
        .as_ref()
        .and_then(|o| o.default_format.as_deref())
    {
        Some("json") => OutputFormat::Json,
        Some("markdown") => OutputFormat::Markdown,
        Some("terminal") | None => OutputFormat::Terminal,
        Some(other) => {
            eprintln!(
                "Warning: unknown default_format '{}' in config. Using terminal.",
                other
            );
            OutputFormat::Terminal
        }
    }
}
