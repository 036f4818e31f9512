#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
use std::{ffi::OsStr, fs};

use clap::Parser;
use hydra::{cli::Cli, config::Config, error::HydraError};
use hydra_commonmark::UnterminatedFence;
use tempfile::TempDir;

#[test]
fn test_load_toml_config() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let path = dir.path().join("hydra.toml");
  fs::write(
    &path,
    "title = \"Design Systems\"\n\n[markdown]\nunterminated_fence = \"error\"\n",
  )
  .expect("Failed to write config");

  let config = Config::from_file(&path).expect("valid config");
  assert_eq!(config.title, "Design Systems");
  assert_eq!(config.markdown.unterminated_fence, UnterminatedFence::Error);
}

#[test]
fn test_load_json_config() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let path = dir.path().join("hydra.json");
  fs::write(&path, r#"{"bind": "0.0.0.0:3000"}"#).expect("Failed to write config");

  let config = Config::from_file(&path).expect("valid config");
  assert_eq!(config.bind, "0.0.0.0:3000");
  assert_eq!(config.title, "Hydra");
}

#[test]
fn test_unsupported_config_format() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let path = dir.path().join("hydra.yaml");
  fs::write(&path, "title: Hydra").expect("Failed to write config");

  assert!(matches!(Config::from_file(&path), Err(HydraError::Config(_))));
}

#[test]
fn test_missing_config_file() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let result = Config::from_file(dir.path().join("missing.toml"));
  assert!(matches!(result, Err(HydraError::Io(_))));
}

#[test]
fn test_cli_overrides_config_file() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let templates = dir.path().join("templates");
  fs::create_dir(&templates).expect("Failed to create template dir");
  let path = dir.path().join("hydra.toml");
  fs::write(&path, "template_dir = \"elsewhere\"\n").expect("Failed to write config");

  let cli = Cli::try_parse_from([
    OsStr::new("hydra"),
    OsStr::new("-c"),
    path.as_os_str(),
    OsStr::new("--template-dir"),
    templates.as_os_str(),
    OsStr::new("render"),
    OsStr::new("colors.md"),
  ])
  .expect("valid arguments");

  let config = Config::load(&cli).expect("config loads");
  assert_eq!(config.template_dir, Some(templates));
}

#[test]
fn test_missing_template_dir_is_rejected() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let missing = dir.path().join("nope");

  let cli = Cli::try_parse_from([
    OsStr::new("hydra"),
    OsStr::new("--template-dir"),
    missing.as_os_str(),
    OsStr::new("render"),
    OsStr::new("colors.md"),
  ])
  .expect("valid arguments");

  assert!(matches!(Config::load(&cli), Err(HydraError::Config(_))));
}

#[test]
fn test_export_templates() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let output = dir.path().join("templates");

  let written =
    Config::export_templates(&output, false).expect("templates export");
  assert_eq!(written.len(), hydra_templates::all_templates().len());
  assert!(output.join("page.html").is_file());
  assert!(output.join("page/navigation.html").is_file());

  fs::write(output.join("page.html"), "custom").expect("Failed to write");
  let written =
    Config::export_templates(&output, false).expect("templates export");
  assert!(written.is_empty());
  assert_eq!(
    fs::read_to_string(output.join("page.html")).expect("readable"),
    "custom"
  );

  Config::export_templates(&output, true).expect("templates export");
  assert_eq!(
    fs::read_to_string(output.join("page.html")).expect("readable"),
    hydra_templates::PAGE_TEMPLATE
  );
}
