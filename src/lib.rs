// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Bureau, BureauScores, Error, LoanType, Result, ScoreRating, SCORE_MAX, SCORE_MIN,
};

pub use crate::scoring::{
    builtin_profile, normalized_score, normalized_score_for_tag, Evaluation, ProfileSet,
    WeightProfile,
};

pub use crate::config::{load_config, parse_config, CreditxConfig};

pub use crate::io::{create_writer, OutputFormat, OutputWriter};
