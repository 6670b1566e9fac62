//! Meters command for listing the seeded registry.

use std::io::Write;

use anyhow::Result;
use wmon_core::UsageMonitor;

/// Runs the meters command.
pub fn run<W: Write>(writer: &mut W, monitor: &UsageMonitor, json: bool) -> Result<()> {
    let meters = monitor.meters();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&meters)?)?;
        return Ok(());
    }

    writeln!(writer, "Registered meters:")?;
    for meter in &meters {
        writeln!(
            writer,
            "{:<8}{:<12}{}",
            meter.meter_id(),
            meter.location(),
            meter.owner_name()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn meters_lists_seeded_registry() {
        let monitor = UsageMonitor::default();
        let mut output = Vec::new();
        run(&mut output, &monitor, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output);
    }

    #[test]
    fn json_output_includes_all_meters() {
        let monitor = UsageMonitor::default();
        let mut output = Vec::new();
        run(&mut output, &monitor, true).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_slice(&output).expect("should be valid JSON");
        assert_eq!(parsed.as_array().unwrap().len(), 3);
        assert_eq!(parsed[0]["meter_id"], "WM001");
    }
}
