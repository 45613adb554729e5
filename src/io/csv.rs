use std::io::{self, Write};

use crate::body::Body;

/// Write every orbiting body's trail in CSV format.
///
/// Columns: body, index, x_m, y_m (index 0 is the oldest sample).
pub fn write_trails<W: Write>(writer: &mut W, bodies: &[Body]) -> io::Result<()> {
    writeln!(writer, "body,index,x_m,y_m")?;

    for body in bodies {
        let Some(trail) = body.trail() else {
            continue;
        };
        for (i, p) in trail.iter().enumerate() {
            writeln!(writer, "{},{},{:.1},{:.1}", body.name(), i, p.x, p.y)?;
        }
    }

    Ok(())
}

/// Write trails to a CSV file at the given path.
pub fn write_trails_file(path: &str, bodies: &[Body]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trails(&mut file, bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use crate::sim::SimConfig;

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut system = presets::solar_system(SimConfig::default()).unwrap();
        system.step_multiple(3);

        let mut buf = Vec::new();
        write_trails(&mut buf, system.bodies()).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "body,index,x_m,y_m");
        assert_eq!(lines.len(), 1 + 4 * 3); // header + 3 samples per planet
        assert!(lines[1].starts_with("Mercury,0,"));
        assert!(!output.contains("Sun,"));
    }
}
