use crate::body::Body;

// ---------------------------------------------------------------------------
// Human-readable body info (info panel / report rows)
// ---------------------------------------------------------------------------

/// Earth's diameter, km; display radius 16 px corresponds to one Earth.
const EARTH_DIAMETER_KM: f64 = 12_742.0;
const EARTH_DISPLAY_RADIUS: f64 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BodyInfo {
    pub name: String,
    pub mass: String,
    pub diameter: String,
    pub distance: String,
    pub speed: String,
    pub orbital_period: String,
    pub semi_major_axis: String,
}

impl BodyInfo {
    pub fn from_body(body: &Body) -> Self {
        // Display-only estimate from the drawn radius
        let diameter_km =
            2.0 * (body.appearance().radius / EARTH_DISPLAY_RADIUS) * EARTH_DIAMETER_KM;
        let d = body.derived().copied().unwrap_or_default();

        BodyInfo {
            name: body.name().to_string(),
            mass: format!("{:.2e} kg", body.mass()),
            diameter: format!("{} km", group_thousands(diameter_km)),
            distance: format!("{} km", group_thousands(d.distance_to_primary / 1000.0)),
            speed: format!("{:.2} km/s", d.speed / 1000.0),
            orbital_period: format!("{:.2} days", d.orbital_period_days),
            semi_major_axis: format!("{:.2} AU", d.semi_major_axis_au),
        }
    }

    /// Label/value pairs in panel order.
    pub fn rows(&self) -> [(&'static str, &str); 7] {
        [
            ("Name", self.name.as_str()),
            ("Mass", self.mass.as_str()),
            ("Diameter", self.diameter.as_str()),
            ("Distance from primary", self.distance.as_str()),
            ("Velocity", self.speed.as_str()),
            ("Orbital period", self.orbital_period.as_str()),
            ("Semi-major axis", self.semi_major_axis.as_str()),
        ]
    }
}

/// Round to an integer and insert `,` between groups of three digits.
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(rounded.len() + rounded.len() / 3 + 1);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0.0 && out != "0" {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use crate::sim::SimConfig;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.4), "999");
        assert_eq!(group_thousands(12_742.0), "12,742");
        assert_eq!(group_thousands(149_600_000.0), "149,600,000");
        assert_eq!(group_thousands(-1_234.0), "-1,234");
    }

    #[test]
    fn earth_info_rows() {
        let system = presets::solar_system(SimConfig::default()).unwrap();
        let info = BodyInfo::from_body(system.body("Earth").unwrap());
        assert_eq!(info.name, "Earth");
        assert_eq!(info.mass, "5.97e24 kg");
        assert_eq!(info.diameter, "25,484 km");
        assert_eq!(info.distance, "149,600,000 km");
        assert_eq!(info.speed, "29.78 km/s");
        assert_eq!(info.semi_major_axis, "1.00 AU");
        assert_eq!(info.rows()[3].0, "Distance from primary");
    }

    #[test]
    fn primary_info_has_zero_orbit() {
        let system = presets::solar_system(SimConfig::default()).unwrap();
        let info = BodyInfo::from_body(system.primary().unwrap());
        assert_eq!(info.orbital_period, "0.00 days");
    }
}
