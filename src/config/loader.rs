//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::VeloConfig;
use crate::domain::errors::VeloError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file.
///
/// Performs `${VAR}` substitution in the file content, applies `VELO_*`
/// environment overrides, then validates the result.
pub fn load_config(path: impl AsRef<Path>) -> Result<VeloConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VeloError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        VeloError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: VeloConfig = toml::from_str(&contents)
        .map_err(|e| VeloError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config
        .validate()
        .map_err(|e| VeloError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Load configuration from `path` when it exists, otherwise fall back to
/// defaults (with env overrides still applied).
pub fn load_or_default(path: impl AsRef<Path>) -> Result<VeloConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file; using defaults");
        let mut config = VeloConfig::default();
        apply_env_overrides(&mut config)?;
        config.validate().map_err(|e| {
            VeloError::Configuration(format!("Configuration validation failed: {e}"))
        })?;
        Ok(config)
    }
}

/// Substitute `${VAR_NAME}` references with environment values.
///
/// Comment lines are left untouched. Missing variables are an error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
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
        return Err(VeloError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Apply `VELO_*` environment variable overrides
fn apply_env_overrides(config: &mut VeloConfig) -> Result<()> {
    if let Ok(val) = std::env::var("VELO_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("VELO_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val
            .parse()
            .map_err(|_| VeloError::Configuration("Invalid VELO_LOGGING_LOCAL_ENABLED".into()))?;
    }

    if let Ok(val) = std::env::var("VELO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    config
        .anonymization
        .apply_env_overrides()
        .map_err(|e| VeloError::Configuration(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_minimal_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("velo.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[application]\nlog_level = \"debug\"\n\n[anonymization]\nenabled = true\ndry_run = true"
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert!(config.anonymization.dry_run);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load_config("/nonexistent/velo.toml").is_err());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = load_or_default("/nonexistent/velo.toml").unwrap();
        assert_eq!(config.application.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("velo.toml");
        fs::write(&path, "not [valid toml").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_env_substitution_skips_comments() {
        let out = substitute_env_vars("# keep ${UNSET_COMMENT_VAR}\nlog_level = \"info\"\n")
            .unwrap();
        assert!(out.contains("${UNSET_COMMENT_VAR}"));
    }
}
