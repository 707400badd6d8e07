//! Config command implementation.

use crate::cli::{ConfigAction, RulesPreset};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute a config action against the file at `path`.
pub fn execute_config(
    action: ConfigAction,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match action {
        ConfigAction::Init { preset, force } => init_config(path, preset, force, formatter),
        ConfigAction::Show => {
            println!("# {}", path.display());
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Write a default configuration using the chosen rules preset.
fn init_config(path: &Path, preset: RulesPreset, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (pass --force to overwrite)",
            path.display()
        )));
    }

    let config = Config {
        validation: preset.into(),
        ..Config::default()
    };
    config.save(path)?;

    println!(
        "{}",
        formatter.success(&format!("Wrote configuration to {}", path.display()))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("camps").join("config.toml");
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_config(
            ConfigAction::Init {
                preset: RulesPreset::Strict,
                force: false,
            },
            &Config::default(),
            &path,
            &formatter,
        )
        .unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert!(!loaded.validation.allow_unrated);
        assert_eq!(loaded.log_level, "warn");
    }

    #[test]
    fn test_init_keeps_existing_file_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"debug\"\n").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = init_config(&path, RulesPreset::Permissive, false, &formatter);
        assert!(matches!(result, Err(CliError::Config(_))));
        assert_eq!(Config::load(Some(path.as_path())).unwrap().log_level, "debug");

        init_config(&path, RulesPreset::Permissive, true, &formatter).unwrap();
        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded.log_level, "warn");
        assert!(loaded.validation.email_tlds.is_empty());
    }
}
