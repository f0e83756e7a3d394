//! Evaluation writers for the supported output formats.

use colored::*;
use std::io::Write;

use crate::core::{Bureau, ScoreRating};
use crate::scoring::Evaluation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> anyhow::Result<()>;
}

/// Build a writer for the requested format over any `Write` sink.
pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(evaluation)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        writeln!(self.writer, "# Normalized Credit Evaluation")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            evaluation.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Loan type: {}", evaluation.loan_type)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Bureau | Score | Weight |")?;
        writeln!(self.writer, "|--------|-------|--------|")?;
        for bureau in Bureau::ALL {
            writeln!(
                self.writer,
                "| {} | {} | {:.2} |",
                bureau,
                evaluation.scores.get(bureau),
                evaluation.weights.weight(bureau)
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Blended score: {:.1} ({})**",
            evaluation.blended_score, evaluation.rating
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn rating_label(rating: ScoreRating) -> ColoredString {
        match rating {
            ScoreRating::Excellent | ScoreRating::Good => rating.to_string().green(),
            ScoreRating::Fair => rating.to_string().yellow(),
            ScoreRating::Poor => rating.to_string().red(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!("Normalized evaluation ({} loan)", evaluation.loan_type).bold()
        )?;
        for bureau in Bureau::ALL {
            writeln!(
                self.writer,
                "  {:<14} {:>6}  (weight {:.2})",
                bureau,
                evaluation.scores.get(bureau),
                evaluation.weights.weight(bureau)
            )?;
        }
        writeln!(
            self.writer,
            "  {:<14} {:>6.1}  [{}]",
            "Blended".bold(),
            evaluation.blended_score,
            Self::rating_label(evaluation.rating)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BureauScores, LoanType};
    use crate::scoring::ProfileSet;

    fn sample_evaluation() -> Evaluation {
        Evaluation::compute(
            &ProfileSet::builtin(),
            BureauScores::new(765.0, 760.0, 754.0, 742.0),
            LoanType::Personal,
        )
    }

    #[test]
    fn json_writer_emits_valid_json_with_expected_fields() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_evaluation(&sample_evaluation())
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["loan_type"], "personal");
        assert_eq!(json["rating"], "excellent");
        assert!((json["blended_score"].as_f64().unwrap() - 759.5).abs() < 1e-9);
        assert!(json["weights"]["cibil"].as_f64().is_some());
    }

    #[test]
    fn markdown_writer_renders_bureau_table() {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf)
            .write_evaluation(&sample_evaluation())
            .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("# Normalized Credit Evaluation"));
        assert!(out.contains("| CIBIL | 765 | 0.50 |"));
        assert!(out.contains("Blended score: 759.5 (Excellent)"));
    }

    #[test]
    fn terminal_writer_includes_all_bureaus_and_blend() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf)
            .write_evaluation(&sample_evaluation())
            .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("CRIF Highmark"));
        assert!(out.contains("759.5"));
        assert!(out.contains("Excellent"));
    }
}
