use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_route_table() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["routes"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    /              -             -> /home
    /home          home          HomePage
    /documenti     documenti     DocumentsPage
    /salute        salute        HealthPage
    /calendario    calendario    CalendarPage
    /impostazioni  impostazioni  SettingsPage
    ");

    Ok(())
}

#[test]
fn test_root_redirects_to_home() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["routes", "/"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "/ -> /home HomePage\n");

    Ok(())
}

#[test]
fn test_unknown_route_fails() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["routes", "/profilo"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "\u{2718} No route matches '/profilo'\n");

    Ok(())
}

#[test]
fn test_tabs() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["tabs"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    home          Home          /home
    documenti     Documenti     /documenti
    salute        Salute        /salute
    calendario    Calendario    /calendario
    impostazioni  Impostazioni  /impostazioni
    ");

    Ok(())
}
