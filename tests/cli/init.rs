use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .kernelrc.json\n");

    let content = test.read_file(".kernelrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["locale"], "it");
    assert!(parsed.get("localesRoot").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".kernelrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .kernelrc.json already exists\n");
    assert_eq!(test.read_file(".kernelrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    let output = test.run(&["check"])?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join(".kernelrc.json").exists());

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".kernelrc.json", r#"{ "locale": "../etc" }"#)?;

    assert_cmd_snapshot!(test.command().arg("tabs"), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid 'locale': "../etc" must be a bare locale name such as "it"
    "#);

    Ok(())
}
