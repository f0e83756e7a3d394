use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::cli::FormatArg;
use crate::core::{BureauScores, LoanType};
use crate::io::create_writer;
use crate::scoring::Evaluation;

/// Arguments for the `score` command.
pub struct ScoreConfig {
    pub cibil: f64,
    pub crif: f64,
    pub equifax: f64,
    pub experian: f64,
    pub loan_type: String,
    pub format: Option<FormatArg>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Compute one blended evaluation and write it in the requested format.
pub fn run(args: ScoreConfig) -> Result<()> {
    let loan_type: LoanType = args.loan_type.parse()?;
    let config = super::load_config(args.config.as_ref())?;
    let profiles = config.to_profile_set();

    let scores = BureauScores::new(args.cibil, args.crif, args.equifax, args.experian);
    if !scores.in_documented_range() {
        log::warn!(
            "one or more scores outside the documented range [{}, {}]",
            crate::core::SCORE_MIN,
            crate::core::SCORE_MAX
        );
    }

    let evaluation = Evaluation::compute(&profiles, scores, loan_type);
    log::info!(
        "blended {} score: {:.1} ({})",
        evaluation.loan_type,
        evaluation.blended_score,
        evaluation.rating
    );

    let format = super::resolve_format(args.format, &config);
    let mut writer = match args.output {
        Some(path) => create_writer(format, fs::File::create(path)?),
        None => create_writer(format, std::io::stdout()),
    };
    writer.write_evaluation(&evaluation)
}
