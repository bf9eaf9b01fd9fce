use std::fs;

use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_translate_bundled_keys() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["t", "tabs.home", "tabs.documents", "userMenu.logout"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    Home
    Documenti
    Esci
    ");

    Ok(())
}

#[test]
fn test_translate_falls_back_to_key() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["t", "tabs.missing", "tabs", "unknown"])?;

    // Misses are displayed, not failed.
    assert!(output.status.success());
    assert_eq!(stdout(&output), "tabs.missing\ntabs\nunknown\n");

    Ok(())
}

#[test]
fn test_translate_verbose_marks_misses() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["t", "tabs.home", "nope", "--verbose"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Home\nnope (no translation)\n");

    Ok(())
}

#[test]
fn test_translate_from_locales_root() -> Result<()> {
    let test = CliTest::with_file(
        "locales/en.json",
        r#"{ "tabs": { "home": "Home", "documents": "Documents" } }"#,
    )?;
    test.write_file(
        ".kernelrc.json",
        r#"{ "locale": "en", "localesRoot": "locales" }"#,
    )?;

    let output = test.run(&["t", "tabs.documents", "tabs.health"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Documents\ntabs.health\n");

    Ok(())
}

#[test]
fn test_translate_from_subdirectory_uses_config_locales_root() -> Result<()> {
    let test = CliTest::with_file("locales/it.json", r#"{ "tabs": { "home": "Casa" } }"#)?;
    test.write_file(".kernelrc.json", r#"{ "localesRoot": "locales" }"#)?;
    fs::create_dir_all(test.root().join("sub"))?;

    let output = test
        .command()
        .current_dir(test.root().join("sub"))
        .args(["t", "tabs.home"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Casa\n");

    Ok(())
}

#[test]
fn test_keys_with_prefix() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["keys", "--prefix", "tags"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "tags.all\ntags.folder\ntags.toRead\n");

    Ok(())
}

#[test]
fn test_missing_locale_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["t", "tabs.home", "--locale", "fr", "--locales-root", "locales"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(crate::stderr(&output).contains("fr.json"));

    Ok(())
}
