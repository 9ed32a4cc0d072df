use crate::config::SiteConfig;

/// Maps a scroll offset onto a `[0, 1]` engagement value between two fixed
/// breakpoints. `1` means the visitor is still near the top of the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressBand {
    near: f64,
    far: f64,
}

impl ProgressBand {
    pub fn new(near: f64, far: f64) -> Self {
        Self { near, far }
    }

    /// Builds the band from the viewport height captured at mount.
    pub fn from_viewport(viewport_height: f64, config: &SiteConfig) -> Self {
        let height = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };

        Self::new(config.near_threshold_px, height * config.far_viewport_ratio)
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }

    pub fn progress(&self, offset: f64) -> f64 {
        // An empty or inverted band has nothing to interpolate over.
        if self.far <= self.near {
            return 0.0;
        }

        let offset = if offset.is_finite() { offset } else { 0.0 };

        if offset <= self.near {
            return 1.0;
        }

        if offset >= self.far {
            return 0.0;
        }

        (1.0 - (offset - self.near) / (self.far - self.near)).clamp(0.0, 1.0)
    }

    pub fn opacity(&self, offset: f64) -> f64 {
        self.progress(offset)
    }

    /// Scale factor running from `min_scale` when disengaged up to `1.0`.
    pub fn scale(&self, offset: f64, min_scale: f64) -> f64 {
        min_scale + (1.0 - min_scale) * self.progress(offset)
    }

    /// The sticky logo fades in as the hero fades out.
    pub fn sticky_logo_opacity(&self, offset: f64) -> f64 {
        1.0 - self.progress(offset)
    }
}
