//! Shared parameters for the page controllers.
//!
//! Every page builds its controllers from a [`SiteConfig`] instead of carrying
//! its own copy of the thresholds, so a page that needs a tighter fade band or
//! a different clock only overrides the field it cares about.

pub const DEFAULT_NEAR_THRESHOLD_PX: f64 = 100.0;
pub const DEFAULT_FAR_VIEWPORT_RATIO: f64 = 0.8;
pub const DEFAULT_CLOCK_TIMEZONE: &str = "Asia/Kolkata";
pub const DEFAULT_CLOCK_FORMAT: &str = "%H:%M";
pub const DEFAULT_CLOCK_PERIOD_MS: u32 = 60_000;
pub const DEFAULT_HOVER_TRANSITION_MS: u32 = 650;
pub const DEFAULT_ICON_FADE_DELAY_MS: u32 = 300;
pub const DEFAULT_HERO_MIN_SCALE: f64 = 0.9;

const NEAR_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const FAR_VIEWPORT_RATIO_BOUNDS: (f64, f64) = (0.05, 1.0);
const CLOCK_PERIOD_MS_BOUNDS: (u32, u32) = (1_000, 3_600_000);
const TRANSITION_MS_BOUNDS: (u32, u32) = (0, 5_000);
const HERO_MIN_SCALE_BOUNDS: (f64, f64) = (0.1, 1.0);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub near_threshold_px: f64,
    pub far_viewport_ratio: f64,
    pub clock_timezone: String,
    pub clock_format: String,
    pub clock_period_ms: u32,
    pub hover_transition_ms: u32,
    pub icon_fade_delay_ms: u32,
    pub hero_min_scale: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            near_threshold_px: DEFAULT_NEAR_THRESHOLD_PX,
            far_viewport_ratio: DEFAULT_FAR_VIEWPORT_RATIO,
            clock_timezone: DEFAULT_CLOCK_TIMEZONE.to_string(),
            clock_format: DEFAULT_CLOCK_FORMAT.to_string(),
            clock_period_ms: DEFAULT_CLOCK_PERIOD_MS,
            hover_transition_ms: DEFAULT_HOVER_TRANSITION_MS,
            icon_fade_delay_ms: DEFAULT_ICON_FADE_DELAY_MS,
            hero_min_scale: DEFAULT_HERO_MIN_SCALE,
        }
    }
}

impl SiteConfig {
    pub fn with_near_threshold(mut self, px: f64) -> Self {
        self.near_threshold_px = clamp_f64(px, DEFAULT_NEAR_THRESHOLD_PX, NEAR_THRESHOLD_PX_BOUNDS);
        self
    }

    pub fn with_far_viewport_ratio(mut self, ratio: f64) -> Self {
        self.far_viewport_ratio =
            clamp_f64(ratio, DEFAULT_FAR_VIEWPORT_RATIO, FAR_VIEWPORT_RATIO_BOUNDS);
        self
    }

    pub fn with_clock_timezone(mut self, zone: &str) -> Self {
        let zone = zone.trim();
        if !zone.is_empty() {
            self.clock_timezone = zone.to_string();
        }
        self
    }

    pub fn with_clock_format(mut self, format: &str) -> Self {
        if !format.trim().is_empty() {
            self.clock_format = format.to_string();
        }
        self
    }

    pub fn with_clock_period_ms(mut self, period_ms: u32) -> Self {
        self.clock_period_ms = period_ms.clamp(CLOCK_PERIOD_MS_BOUNDS.0, CLOCK_PERIOD_MS_BOUNDS.1);
        self
    }

    pub fn with_hover_transition_ms(mut self, ms: u32) -> Self {
        self.hover_transition_ms = ms.clamp(TRANSITION_MS_BOUNDS.0, TRANSITION_MS_BOUNDS.1);
        self
    }

    pub fn with_icon_fade_delay_ms(mut self, ms: u32) -> Self {
        self.icon_fade_delay_ms = ms.clamp(TRANSITION_MS_BOUNDS.0, TRANSITION_MS_BOUNDS.1);
        self
    }

    pub fn with_hero_min_scale(mut self, scale: f64) -> Self {
        self.hero_min_scale = clamp_f64(scale, DEFAULT_HERO_MIN_SCALE, HERO_MIN_SCALE_BOUNDS);
        self
    }

    /// Zeroes every transition, for visitors who asked for reduced motion.
    pub fn without_motion(mut self) -> Self {
        self.hover_transition_ms = 0;
        self.icon_fade_delay_ms = 0;
        self
    }
}

fn clamp_f64(value: f64, default: f64, bounds: (f64, f64)) -> f64 {
    if value.is_finite() {
        value.clamp(bounds.0, bounds.1)
    } else {
        default
    }
}
