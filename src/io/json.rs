use std::io::{self, Write};

use super::info::BodyInfo;
use crate::sim::System;

/// Write a run summary (elapsed time plus per-body info) as JSON.
pub fn write_summary<W: Write>(writer: &mut W, system: &System) -> io::Result<()> {
    let days = system.time() / crate::physics::SECONDS_PER_DAY;
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"steps\": {},", system.step_count())?;
    writeln!(writer, "  \"elapsed_days\": {:.2},", days)?;
    writeln!(writer, "  \"bodies\": [")?;

    let count = system.bodies().len();
    for (i, body) in system.bodies().iter().enumerate() {
        let info = BodyInfo::from_body(body);
        let rows = info.rows();
        writeln!(writer, "    {{")?;
        writeln!(writer, "      \"primary\": {},", body.is_primary())?;
        writeln!(writer, "      \"trail_len\": {},", body.trail().map_or(0, |t| t.len()))?;
        for (j, (label, value)) in rows.iter().enumerate() {
            let sep = if j + 1 < rows.len() { "," } else { "" };
            writeln!(writer, "      {}: {}{}", quoted(label), quoted(value), sep)?;
        }
        writeln!(writer, "    }}{}", if i + 1 < count { "," } else { "" })?;
    }

    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// JSON string literal for `text`, with quotes, backslashes and control
/// characters escaped.
fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Write the summary JSON to a file.
pub fn write_summary_file(path: &str, system: &System) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyBuilder;
    use crate::presets;
    use crate::sim::SimConfig;

    #[test]
    fn summary_lists_every_body() {
        let mut system = presets::solar_system(SimConfig::default()).unwrap();
        system.step_multiple(10);

        let mut buf = Vec::new();
        write_summary(&mut buf, &system).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("\"steps\": 10,"));
        assert!(output.contains("\"elapsed_days\": 10.00,"));
        assert!(output.contains("\"Name\": \"Mars\""));
        assert_eq!(output.matches("\"primary\": true").count(), 1);
        assert!(output.contains("\"trail_len\": 10,"));
        assert!(output.trim_end().ends_with('}'));
    }

    #[test]
    fn names_are_escaped_as_json() {
        let sun = BodyBuilder::new("Sun").mass(1.0e30).primary(true).build().unwrap();
        let rock = BodyBuilder::new("Bell\u{7} \"Rock\"\\1")
            .position(1.0e11, 0.0)
            .mass(1.0e20)
            .build()
            .unwrap();
        let system = System::with_bodies(SimConfig::default(), [sun, rock]).unwrap();

        let mut buf = Vec::new();
        write_summary(&mut buf, &system).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains(r#""Name": "Bell\u0007 \"Rock\"\\1""#), "{}", output);
        assert!(!output.contains("\\u{7}"));
    }

    #[test]
    fn control_characters_use_unicode_escapes() {
        assert_eq!(quoted("a\tb\nc"), r#""a\tb\nc""#);
        assert_eq!(quoted("\u{1b}"), r#""\u001b""#);
        assert_eq!(quoted("Ceres"), "\"Ceres\"");
    }
}
