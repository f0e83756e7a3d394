//! Configuration loaded from `.creditx.toml`.
//!
//! Custom weight profiles are validated on load; an invalid profile is
//! reported and replaced with the built-in one rather than aborting, and
//! valid profiles are normalized to an exact sum of 1.0.

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, LoanType, Result};
use crate::scoring::{ProfileSet, WeightProfile};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".creditx.toml";

/// Root configuration structure for creditx
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreditxConfig {
    /// Per-loan-type weight profile overrides
    #[serde(default)]
    pub profiles: Option<ProfileOverrides>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Weight profile overrides, one optional entry per loan type
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileOverrides {
    #[serde(default)]
    pub personal: Option<WeightProfile>,
    #[serde(default)]
    pub business: Option<WeightProfile>,
    #[serde(default)]
    pub home: Option<WeightProfile>,
    #[serde(default)]
    pub car: Option<WeightProfile>,
    #[serde(default)]
    pub education: Option<WeightProfile>,
}

impl ProfileOverrides {
    fn get(&self, loan_type: LoanType) -> Option<WeightProfile> {
        match loan_type {
            LoanType::Personal => self.personal,
            LoanType::Business => self.business,
            LoanType::Home => self.home,
            LoanType::Car => self.car,
            LoanType::Education => self.education,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format when --format is not given
    #[serde(default)]
    pub default_format: Option<String>,
}

impl CreditxConfig {
    /// Build the effective profile set: built-ins plus validated overrides.
    ///
    /// Invalid overrides are dropped with a warning so a typo in one profile
    /// does not take the whole tool down; valid ones are normalized to an
    /// exact unit sum.
    pub fn to_profile_set(&self) -> ProfileSet {
        let mut set = ProfileSet::builtin();
        let Some(overrides) = &self.profiles else {
            return set;
        };
        for loan_type in LoanType::ALL {
            if let Some(mut profile) = overrides.get(loan_type) {
                match profile.validate() {
                    Ok(()) => {
                        profile.normalize();
                        set = set.with_override(loan_type, profile);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: invalid weight profile for '{}': {}. Using built-in profile.",
                            loan_type, e
                        );
                    }
                }
            }
        }
        set
    }
}

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<CreditxConfig> {
    toml::from_str::<CreditxConfig>(contents)
        .map_err(|e| Error::Configuration(format!("failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_config_from_path(path: &Path) -> Result<CreditxConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config = parse_config(&contents)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `.creditx.toml` from the working directory if it exists, otherwise
/// fall back to defaults.
pub fn load_config() -> Result<CreditxConfig> {
    let path = Path::new(CONFIG_FILE_NAME);
    if path.exists() {
        load_config_from_path(path)
    } else {
        log::debug!("no {} found, using built-in profiles", CONFIG_FILE_NAME);
        Ok(CreditxConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::builtin_profile;

    #[test]
    fn empty_config_resolves_to_builtins() {
        let config = parse_config("").unwrap();
        let profiles = config.to_profile_set();
        for loan_type in LoanType::ALL {
            assert_eq!(profiles.resolve(loan_type), *builtin_profile(loan_type));
        }
    }

    #[test]
    fn valid_override_replaces_builtin_profile() {
        let toml = r#"
[profiles.business]
cibil = 0.25
crif = 0.45
equifax = 0.20
experian = 0.10
"#;
        let config = parse_config(toml).unwrap();
        let profiles = config.to_profile_set();
        assert!(profiles.is_overridden(LoanType::Business));
        let profile = profiles.resolve(LoanType::Business);
        assert!((profile.crif - 0.45).abs() < 1e-12);
        // Other loan types untouched.
        assert!(!profiles.is_overridden(LoanType::Home));
    }

    #[test]
    fn invalid_override_falls_back_to_builtin() {
        let toml = r#"
[profiles.car]
cibil = 0.9
crif = 0.9
equifax = 0.9
experian = 0.9
"#;
        let config = parse_config(toml).unwrap();
        let profiles = config.to_profile_set();
        assert!(!profiles.is_overridden(LoanType::Car));
        assert_eq!(profiles.resolve(LoanType::Car), *builtin_profile(LoanType::Car));
    }

    #[test]
    fn slightly_off_sum_is_normalized_to_unit() {
        // Within the loader's 1e-3 validation tolerance, then snapped exact.
        let toml = r#"
[profiles.personal]
cibil = 0.5001
crif = 0.2
equifax = 0.2
experian = 0.1
"#;
        let config = parse_config(toml).unwrap();
        let profiles = config.to_profile_set();
        let profile = profiles.resolve(LoanType::Personal);
        assert!((profile.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_toml_is_a_configuration_error() {
        let err = parse_config("profiles = 3").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn output_section_parses_default_format() {
        let toml = r#"
[output]
default_format = "json"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(
            config.output.and_then(|o| o.default_format).as_deref(),
            Some("json")
        );
    }

    #[test]
    fn missing_explicit_config_path_is_an_error() {
        let err = load_config_from_path(Path::new("/nonexistent/creditx.toml")).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
