// ---------------------------------------------------------------------------
// Time-speed control: how many whole steps to run per rendered frame
// ---------------------------------------------------------------------------

/// Selectable speed multipliers.
pub const TIME_SPEEDS: [f64; 5] = [0.0, 0.5, 1.0, 2.0, 5.0];
pub const DEFAULT_SPEED_INDEX: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeControl {
    speed_index: usize,
    paused: bool,
}

impl TimeControl {
    pub fn new() -> Self {
        Self { speed_index: DEFAULT_SPEED_INDEX, paused: false }
    }

    /// Start at the multiplier closest to `speed`.
    pub fn with_speed(speed: f64) -> Self {
        let speed_index = TIME_SPEEDS
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - speed).abs().total_cmp(&(*b - speed).abs()))
            .map_or(DEFAULT_SPEED_INDEX, |(i, _)| i);
        Self { speed_index, paused: false }
    }

    pub fn speed(&self) -> f64 {
        TIME_SPEEDS[self.speed_index]
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn slower(&mut self) {
        self.speed_index = self.speed_index.saturating_sub(1);
    }

    pub fn faster(&mut self) {
        self.speed_index = (self.speed_index + 1).min(TIME_SPEEDS.len() - 1);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Whole steps to run this frame. Fractional multipliers below one still
    /// run a single step; above one they are truncated.
    pub fn steps_per_frame(&self) -> usize {
        let speed = self.speed();
        if self.paused || speed == 0.0 {
            0
        } else if speed > 1.0 {
            speed as usize
        } else {
            1
        }
    }

    /// Total steps for `frames` frames at the current speed; `None` on overflow.
    pub fn steps_for_frames(&self, frames: usize) -> Option<usize> {
        frames.checked_mul(self.steps_per_frame())
    }

    /// Short label for a speed readout, e.g. `2.0x` or `Paused`.
    pub fn label(&self) -> String {
        if self.paused {
            "Paused".to_string()
        } else {
            format!("{:.1}x", self.speed())
        }
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new()
    }
}
