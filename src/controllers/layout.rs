/// Last measured pixel height of a variable-height layout element.
///
/// Starts at `0`, which consumers treat as a valid placeholder until the
/// first measurement lands.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeightSync {
    height_px: f64,
}

impl HeightSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height_px(&self) -> f64 {
        self.height_px
    }

    /// Stores a fresh measurement. `None` means the element is not mounted
    /// yet, so the previous value is kept until the next cycle.
    pub fn record(&mut self, measured: Option<f64>) -> f64 {
        if let Some(value) = measured {
            self.height_px = if value.is_finite() { value.max(0.0) } else { 0.0 };
        }
        self.height_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_placeholder() {
        assert_eq!(HeightSync::new().height_px(), 0.0);
    }

    #[test]
    fn repeated_measurement_is_idempotent() {
        let mut sync = HeightSync::new();

        let first = sync.record(Some(96.0));
        let second = sync.record(Some(96.0));
        assert_eq!(first, second);
        assert_eq!(sync.height_px(), 96.0);
    }

    #[test]
    fn unmounted_element_keeps_previous_value() {
        let mut sync = HeightSync::new();

        assert_eq!(sync.record(None), 0.0);
        sync.record(Some(72.0));
        assert_eq!(sync.record(None), 72.0);
    }

    #[test]
    fn negative_or_non_finite_heights_store_zero() {
        let mut sync = HeightSync::new();

        assert_eq!(sync.record(Some(-4.0)), 0.0);
        sync.record(Some(64.0));
        assert_eq!(sync.record(Some(f64::NAN)), 0.0);
    }
}
