use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stdout};

fn record_ids(output: &str) -> Result<Vec<String>> {
    let records: Value = serde_json::from_str(output)?;
    Ok(records
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default())
}

#[test]
fn test_recent_documents_default_count() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["documents", "--json"])?;

    assert!(output.status.success());
    assert_eq!(record_ids(&stdout(&output))?, vec!["1", "2", "3"]);

    Ok(())
}

#[test]
fn test_recent_documents_overrun_returns_all() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["documents", "-n", "100", "--json"])?;

    assert!(output.status.success());
    assert_eq!(record_ids(&stdout(&output))?.len(), 8);

    Ok(())
}

#[test]
fn test_upcoming_appointments_text() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["appointments", "-n", "1"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "13 Gen 2025 15:30  Visita cardiologica di controllo\n    \
         Nonno Giulio, Ospedale San Raffaele [Cardiologia, Controllo]\n\
         Showing 1 of 6 appointments\n"
    );

    Ok(())
}

#[test]
fn test_appointment_json_fields() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["appointments", "-n", "2", "--json"])?;

    let records: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(records[1]["time"], "08:00");
    assert_eq!(records[1]["user"], "Marco");

    Ok(())
}
