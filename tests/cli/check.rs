use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_bundled_dictionary() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["check"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\u{2713} All 11 configured keys have translations (it)\n"
    );

    Ok(())
}

#[test]
fn test_check_reports_missing_keys() -> Result<()> {
    let test = CliTest::with_file(
        "locales/en.json",
        r#"{
  "tabs": {
    "home": "Home",
    "documents": "Documents",
    "health": "Health",
    "calendar": "Calendar",
    "settings": "Settings"
  },
  "tags": { "all": "All", "toRead": "To read", "folder": "Folder" },
  "userMenu": { "profile": "Profile", "settings": "Settings", "logout": 0 }
}"#,
    )?;

    let output = test.run(&["check", "--locale", "en", "--locales-root", "locales"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "\u{2718} userMenu.logout (user menu 'logout') has no translation\n\
         \n\
         1 of 11 configured keys are missing translations (en)\n"
    );
    assert!(stderr(&output).contains("'userMenu.logout' holds a number"));

    Ok(())
}

#[test]
fn test_check_invalid_locale_file() -> Result<()> {
    let test = CliTest::with_file("locales/it.json", "{ broken")?;
    test.write_file(".kernelrc.json", r#"{ "localesRoot": "locales" }"#)?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse locale file"));

    Ok(())
}
