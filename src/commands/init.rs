use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Creditx Configuration

# Override the weight profile for a loan type. Weights are applied in
# bureau order CIBIL, CRIF Highmark, Equifax, Experian and must sum to 1.0.
#
# [profiles.business]
# cibil = 0.25
# crif = 0.45
# equifax = 0.20
# experian = 0.10

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
