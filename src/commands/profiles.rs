use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::FormatArg;
use crate::core::{Bureau, LoanType};
use crate::io::OutputFormat;
use crate::scoring::{ProfileSet, WeightProfile};

/// Arguments for the `profiles` command.
pub struct ProfilesConfig {
    pub format: Option<FormatArg>,
    pub config: Option<PathBuf>,
}

/// One row of the effective weight table.
#[derive(Debug, Serialize)]
struct ProfileRow {
    loan_type: LoanType,
    weights: WeightProfile,
    source: &'static str,
}

fn collect_rows(profiles: &ProfileSet) -> Vec<ProfileRow> {
    LoanType::ALL
        .iter()
        .map(|&loan_type| ProfileRow {
            loan_type,
            weights: profiles.resolve(loan_type),
            source: if profiles.is_overridden(loan_type) {
                "custom"
            } else {
                "built-in"
            },
        })
        .collect()
}

/// Print the effective weight table (built-ins merged with config overrides).
pub fn run(args: ProfilesConfig) -> Result<()> {
    let config = super::load_config(args.config.as_ref())?;
    let profiles = config.to_profile_set();
    let rows = collect_rows(&profiles);

    match super::resolve_format(args.format, &config) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Markdown => {
            println!("| Loan type | CIBIL | CRIF Highmark | Equifax | Experian | Source |");
            println!("|-----------|-------|---------------|---------|----------|--------|");
            for row in &rows {
                println!(
                    "| {} | {:.2} | {:.2} | {:.2} | {:.2} | {} |",
                    row.loan_type,
                    row.weights.cibil,
                    row.weights.crif,
                    row.weights.equifax,
                    row.weights.experian,
                    row.source
                );
            }
        }
        OutputFormat::Terminal => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            let mut header = vec![Cell::new("Loan type")];
            header.extend(Bureau::ALL.iter().map(|b| Cell::new(b.name())));
            header.push(Cell::new("Source"));
            table.set_header(header);
            for row in &rows {
                let mut cells = vec![Cell::new(row.loan_type.tag())];
                cells.extend(
                    Bureau::ALL
                        .iter()
                        .map(|&b| Cell::new(format!("{:.2}", row.weights.weight(b)))),
                );
                cells.push(Cell::new(row.source));
                table.add_row(cells);
            }
            println!("{table}");
        }
    }
    Ok(())
}
