// postfmt-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use postfmt_core::config::{merge_config, RenderConfig};
use postfmt_core::{headless_render_string, MAX_WORD_LENGTH};

#[test]
fn test_load_default_config() {
    let config = RenderConfig::load_default().unwrap();
    assert_eq!(config.censored_words(), "");
    assert!(!config.match_whole_words());
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
censored_words: "heck, darn ,drat"
match_whole_words: true
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = RenderConfig::load_from_file(file.path())?;
    assert_eq!(config.censored_words(), "heck, darn ,drat");
    assert!(config.match_whole_words());
    Ok(())
}

#[test]
fn test_load_from_file_partial() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"censored_words: spam\n")?;
    let config = RenderConfig::load_from_file(file.path())?;
    assert_eq!(config.match_whole_words, None);

    let merged = merge_config(RenderConfig::load_default()?, Some(config));
    assert_eq!(merged.censored_words(), "spam");
    assert!(!merged.match_whole_words());
    Ok(())
}

#[test]
fn test_load_from_file_rejects_overlong_word() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "censored_words: \"ok,{}\"", "w".repeat(MAX_WORD_LENGTH + 1))?;
    let err = RenderConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("exceeds maximum allowed"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_malformed_yaml() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"censored_words: [not, a, string\n")?;
    let err = RenderConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_load_from_missing_file() {
    let err = RenderConfig::load_from_file("/definitely/not/here/postfmt.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_merge_no_user_config() -> Result<()> {
    let defaults = RenderConfig::with_words("a,b");
    let merged = merge_config(defaults.clone(), None);
    assert_eq!(merged, defaults);
    Ok(())
}

#[test]
fn test_config_round_trips_through_renderer() -> Result<()> {
    let config = RenderConfig::from_yaml("censored_words: \"drat\"\n")?;
    let html = headless_render_string(&config, "Drat!")?;
    assert_eq!(html.as_str(), "<p>****!</p>");
    Ok(())
}
