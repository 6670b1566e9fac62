//! Alerts command for listing or clearing the alert center log.

use std::io::Write;

use anyhow::Result;
use wmon_core::AlertCenter;

/// Runs the alerts command.
pub fn run<W: Write>(writer: &mut W, center: &AlertCenter, clear: bool, json: bool) -> Result<()> {
    if clear {
        center.clear();
        writeln!(writer, "Alert log cleared.")?;
        return Ok(());
    }

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&center.alerts())?)?;
        return Ok(());
    }

    writeln!(writer, "{}", center.format_alerts().trim_end_matches('\n'))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use wmon_core::AlertSequence;

    fn center() -> AlertCenter {
        AlertCenter::new(Arc::new(AlertSequence::new()))
    }

    #[test]
    fn empty_log_prints_placeholder() {
        let mut output = Vec::new();
        run(&mut output, &center(), false, false).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "No abnormal usage alerts currently.\n"
        );
    }

    #[test]
    fn recorded_alerts_print_one_per_line() {
        let center = center();
        center.add_high_usage(Some("WM001"), 250.0, 180.0);
        center.add_low_usage(Some("WM002"), 2.0, 20.0);

        let mut output = Vec::new();
        run(&mut output, &center, false, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Alert[1]: HIGH_USAGE"));
        assert!(lines[1].starts_with("Alert[2]: LOW_USAGE"));
    }

    #[test]
    fn clear_empties_the_log() {
        let center = center();
        center.add_high_usage(Some("WM001"), 250.0, 180.0);

        let mut output = Vec::new();
        run(&mut output, &center, true, false).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Alert log cleared.\n");
        assert!(center.alerts().is_empty());
    }
}
