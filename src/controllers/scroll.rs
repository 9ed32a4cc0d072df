/// Shows scroll-reactive content while the visitor scrolls toward the top and
/// hides it while they scroll down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDirectionTracker {
    previous_offset: f64,
    visible: bool,
}

impl Default for ScrollDirectionTracker {
    fn default() -> Self {
        Self {
            previous_offset: 0.0,
            visible: true,
        }
    }
}

impl ScrollDirectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll sample and returns the updated reveal flag.
    pub fn observe(&mut self, offset: f64) -> bool {
        // Overscroll bounce reports negative offsets on some platforms.
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };

        self.visible = offset < self.previous_offset;
        self.previous_offset = offset;
        self.visible
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn previous_offset(&self) -> f64 {
        self.previous_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_revealed_at_top() {
        let tracker = ScrollDirectionTracker::new();

        assert!(tracker.visible());
        assert_eq!(tracker.previous_offset(), 0.0);
    }

    #[test]
    fn reveal_follows_direction_of_each_sample() {
        let offsets = [120.0, 340.0, 300.0, 300.0, 10.0, 500.0, 0.0];
        let mut tracker = ScrollDirectionTracker::new();
        let mut previous = 0.0;

        for offset in offsets {
            let visible = tracker.observe(offset);
            assert_eq!(visible, offset < previous, "offset {offset} after {previous}");
            previous = offset;
        }
    }

    #[test]
    fn unchanged_offset_hides() {
        let mut tracker = ScrollDirectionTracker::new();

        assert!(!tracker.observe(0.0));
    }

    #[test]
    fn negative_and_non_finite_offsets_clamp_to_top() {
        let mut tracker = ScrollDirectionTracker::new();
        tracker.observe(200.0);

        assert!(tracker.observe(-35.0));
        assert_eq!(tracker.previous_offset(), 0.0);

        tracker.observe(80.0);
        assert!(tracker.observe(f64::NAN));
        assert_eq!(tracker.previous_offset(), 0.0);
    }
}
