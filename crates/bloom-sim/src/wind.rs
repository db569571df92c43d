//! The wind field: one scalar, exponentially smoothed toward a target

/// Smoothing factor per frame. Small enough that wind changes feel like a
/// lagged breeze instead of per-frame jitter.
const SMOOTHING: f32 = 0.05;

/// A single scalar wind value decaying toward an externally set target.
/// No state machine: `value += (target - value) * 0.05` per frame, which
/// converges monotonically and never overshoots.
#[derive(Debug, Default)]
pub struct WindField {
    value: f32,
    target: f32,
}

impl WindField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current smoothed wind value
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Set the target the field decays toward
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance one frame
    pub fn step(&mut self) {
        self.value += (self.target - self.value) * SMOOTHING;
    }
}

/// Derive a wind target from a horizontal pointer position, normalized to
/// [-0.2, 0.2] across the surface width
pub fn wind_target_for_pointer(pointer_x: f32, surface_width: f32) -> f32 {
    if surface_width <= 0.0 {
        return 0.0;
    }
    (pointer_x / surface_width - 0.5) * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_monotonically_without_overshoot() {
        let mut wind = WindField::new();
        wind.set_target(1.0);

        let mut prev = wind.value();
        for _ in 0..500 {
            wind.step();
            assert!(wind.value() >= prev, "wind regressed");
            assert!(wind.value() <= 1.0, "wind overshot its target");
            prev = wind.value();
        }
        assert!((wind.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn converges_downward_too() {
        let mut wind = WindField::new();
        wind.set_target(1.0);
        for _ in 0..200 {
            wind.step();
        }
        wind.set_target(-0.5);
        let mut prev = wind.value();
        for _ in 0..500 {
            wind.step();
            assert!(wind.value() <= prev);
            assert!(wind.value() >= -0.5);
            prev = wind.value();
        }
    }

    #[test]
    fn pointer_target_is_bounded() {
        assert!((wind_target_for_pointer(0.0, 800.0) + 0.2).abs() < 1e-6);
        assert!((wind_target_for_pointer(800.0, 800.0) - 0.2).abs() < 1e-6);
        assert!(wind_target_for_pointer(400.0, 800.0).abs() < 1e-6);
        assert_eq!(wind_target_for_pointer(10.0, 0.0), 0.0);
    }
}
