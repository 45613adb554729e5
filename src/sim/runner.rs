use super::event::{ApsisDetector, EventDetector, RevolutionDetector, SimEvent};
use super::system::System;

// ---------------------------------------------------------------------------
// Batch run with event detection
// ---------------------------------------------------------------------------

/// A detector bound to one body (by index into the system's body list).
pub struct Watch {
    pub body: usize,
    pub detector: Box<dyn EventDetector>,
}

/// Advance `system` by `steps` steps, running every watch after each step.
/// Returns the events in the order they were observed.
pub fn simulate_with(system: &mut System, steps: usize, watches: &mut [Watch]) -> Vec<SimEvent> {
    let mut events = Vec::new();

    for _ in 0..steps {
        let before: Vec<_> = watches.iter().map(|w| system.snapshot(w.body)).collect();
        system.step();

        for (watch, prev) in watches.iter_mut().zip(before) {
            let (Some(prev), Some(current)) = (prev, system.snapshot(watch.body)) else {
                continue;
            };
            if let Some(kind) = watch.detector.check(&prev, &current) {
                events.push(SimEvent {
                    time: current.time,
                    body: system.bodies()[watch.body].name().to_string(),
                    kind,
                    snapshot: current,
                });
            }
        }
    }

    events
}

/// Revolution and apsis detectors for every orbiting body, centered on the
/// primary. Empty when the system has no primary.
pub fn default_watches(system: &System) -> Vec<Watch> {
    let Some(center) = system.primary().map(|p| *p.position()) else {
        return Vec::new();
    };
    let mut watches = Vec::new();
    for (i, body) in system.bodies().iter().enumerate() {
        if body.is_primary() {
            continue;
        }
        watches.push(Watch { body: i, detector: Box::new(RevolutionDetector::new(center)) });
        watches.push(Watch { body: i, detector: Box::new(ApsisDetector::new(center)) });
    }
    watches
}

/// Run with the default watches.
pub fn simulate(system: &mut System, steps: usize) -> Vec<SimEvent> {
    let mut watches = default_watches(system);
    simulate_with(system, steps, &mut watches)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyBuilder;
    use crate::physics::{AU, SUN_MASS};
    use crate::sim::config::SimConfig;
    use crate::sim::event::EventKind;

    fn sun_earth() -> System {
        let sun = BodyBuilder::new("Sun").mass(SUN_MASS).primary(true).build().unwrap();
        let earth = BodyBuilder::new("Earth")
            .position(-AU, 0.0)
            .velocity(0.0, 29_783.0)
            .mass(5.9742e24)
            .build()
            .unwrap();
        System::with_bodies(SimConfig::default(), [sun, earth]).unwrap()
    }

    #[test]
    fn earth_completes_one_revolution_per_year() {
        let mut system = sun_earth();
        let events = simulate(&mut system, 400);
        let revolutions: Vec<_> = events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::Revolution { .. }))
            .collect();
        assert_eq!(revolutions.len(), 1, "events: {:?}", events);
        let days = revolutions[0].time / 86_400.0;
        assert!(days > 355.0 && days < 375.0, "revolution after {:.0} days", days);
        assert_eq!(revolutions[0].body, "Earth");
    }

    #[test]
    fn no_primary_means_no_watches() {
        let rock = BodyBuilder::new("Rock").mass(1.0).build().unwrap();
        let system = System::with_bodies(SimConfig::default(), [rock]).unwrap();
        assert!(default_watches(&system).is_empty());
    }
}
