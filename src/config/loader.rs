//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ProtectionConfig;
use crate::domain::errors::ShroudError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Loads `.env` if present (development convenience)
/// 2. Reads the TOML file
/// 3. Performs environment variable substitution (`${VAR}` syntax)
/// 4. Parses the TOML into [`ProtectionConfig`]
/// 5. Applies environment variable overrides (`SHROUD_*` prefix)
/// 6. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is missing, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<ProtectionConfig> {
    let path = path.as_ref();

    dotenvy::dotenv().ok();

    if !path.exists() {
        return Err(ShroudError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ShroudError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ProtectionConfig = toml::from_str(&contents)
        .map_err(|e| ShroudError::Configuration(format!("Failed to parse TOML: {e}")))?;

    config.apply_env_overrides()?;
    config.validate()?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are skipped so documentation examples don't trigger
/// substitution errors.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(ShroudError::from)?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ShroudError::Configuration(format!(
            "Missing environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}
