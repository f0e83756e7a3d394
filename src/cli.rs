use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Human-readable colored output
    Terminal,
    /// Pretty-printed JSON
    Json,
    /// Markdown report
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Terminal => OutputFormat::Terminal,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "creditx")]
#[command(about = "Blend four bureau credit scores into one loan-type weighted score", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the blended score for one applicant
    Score {
        /// CIBIL score
        #[arg(long)]
        cibil: f64,

        /// CRIF Highmark score
        #[arg(long)]
        crif: f64,

        /// Equifax score
        #[arg(long)]
        equifax: f64,

        /// Experian score
        #[arg(long)]
        experian: f64,

        /// Loan product (personal, business, home, car, education)
        #[arg(short, long = "loan-type")]
        loan_type: String,

        /// Output format (defaults to config, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file path (defaults to .creditx.toml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the effective weight profile table
    Profiles {
        /// Output format (defaults to config, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Config file path (defaults to .creditx.toml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Create a .creditx.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
