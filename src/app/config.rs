use crate::app::cli::Cli;
use crate::app::error::AuditError;
use crate::app::models::{Difficulty, RuntimeConfig};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional overrides for the placeholder fields. Nothing here drives the listing.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    output_dir: Option<PathBuf>,
    difficulty: Option<Difficulty>,
    rounds: Option<u32>,
}

fn settings_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(
        home.join(".config")
            .join("permission_auditor")
            .join("settings.toml"),
    )
}

fn load_settings_file(path: &Path) -> Result<SettingsFile, AuditError> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings at {:?}", path))?;

    parse_settings(&content)
}

fn parse_settings(content: &str) -> Result<SettingsFile, AuditError> {
    let settings: SettingsFile = toml::from_str(content)
        .map_err(|e| AuditError::InvalidValue(format!("settings.toml: {}", e)))?;

    if settings.rounds == Some(0) {
        return Err(AuditError::InvalidValue(
            "rounds must be at least 1".to_string(),
        ));
    }

    Ok(settings)
}

fn merge(cli: &Cli, settings: SettingsFile) -> RuntimeConfig {
    let defaults = RuntimeConfig::default();

    RuntimeConfig {
        verbose: cli.verbose,
        dry_run: cli.dry_run,
        debug: cli.debug,
        output_dir: settings.output_dir.unwrap_or(defaults.output_dir),
        difficulty: settings.difficulty.unwrap_or(defaults.difficulty),
        rounds: settings.rounds.unwrap_or(defaults.rounds),
    }
}

pub fn resolve_config(cli: &Cli) -> Result<RuntimeConfig, AuditError> {
    let settings = match settings_path() {
        Some(path) => load_settings_file(&path)?,
        None => SettingsFile::default(),
    };

    let config = merge(cli, settings);
    log::debug!(
        "Config: verbose={} dry_run={} debug={} output_dir={} difficulty={} rounds={}",
        config.verbose,
        config.dry_run,
        config.debug,
        config.output_dir.display(),
        config.difficulty,
        config.rounds
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("permission_auditor").chain(args.iter().copied()))
    }

    #[test]
    fn missing_settings_file_means_defaults() {
        let dir = assert_fs::TempDir::new().unwrap();

        let settings = load_settings_file(&dir.path().join("settings.toml")).unwrap();

        assert_eq!(settings, SettingsFile::default());
        assert_eq!(merge(&cli(&[]), settings), RuntimeConfig::default());
    }

    #[test]
    fn settings_file_overrides_placeholders() {
        let dir = assert_fs::TempDir::new().unwrap();
        let file = dir.child("settings.toml");
        file.write_str("output_dir = \"/tmp/reports\"\ndifficulty = \"hard\"\nrounds = 7\n")
            .unwrap();

        let settings = load_settings_file(file.path()).unwrap();
        let config = merge(&cli(&["--dry-run", "-v"]), settings);

        assert_eq!(
            config,
            RuntimeConfig {
                verbose: true,
                dry_run: true,
                debug: false,
                output_dir: PathBuf::from("/tmp/reports"),
                difficulty: Difficulty::Hard,
                rounds: 7,
            }
        );
    }

    #[test]
    fn partial_settings_keep_remaining_defaults() {
        let config = merge(&cli(&["--debug"]), parse_settings("difficulty = \"easy\"").unwrap());

        assert!(config.debug);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.rounds, 3);
        assert_eq!(config.output_dir, PathBuf::from("./output"));
    }

    #[rstest]
    #[case("rounds = 0")]
    #[case("difficulty = \"impossible\"")]
    #[case("rounds = -2")]
    #[case("extra = { seed = 4 }")]
    #[case("rounds = ")]
    fn bad_settings_are_invalid_values(#[case] content: &str) {
        let err = parse_settings(content).unwrap_err();

        assert!(matches!(err, AuditError::InvalidValue(_)), "{err:?}");
    }
}
