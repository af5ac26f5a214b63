// Screen shake extracted from the frame loop
use crate::util::RandomSource;

/// Below this the shake is treated as settled.
const SHAKE_FLOOR: f64 = 0.01;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shake {
    pub magnitude: f64,
}

impl Shake {
    /// Starts a new pulse. Overrides, never accumulates.
    pub fn kick(&mut self, magnitude: f64) {
        self.magnitude = magnitude;
    }

    /// Offset for this frame, then decays the magnitude.
    pub fn step(&mut self, decay: f64, rng: &mut dyn RandomSource) -> (f64, f64) {
        if self.magnitude <= 0.0 {
            return (0.0, 0.0);
        }
        let dx = (rng.next_f64() - 0.5) * self.magnitude;
        let dy = (rng.next_f64() - 0.5) * self.magnitude;
        self.magnitude *= decay;
        if self.magnitude < SHAKE_FLOOR {
            self.magnitude = 0.0;
        }
        (dx, dy)
    }
}
