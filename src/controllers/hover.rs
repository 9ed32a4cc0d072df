/// Per-control pointer hover state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverFlag {
    hovered: bool,
    transitions: u32,
}

impl HoverFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Number of pointer events applied so far.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn enter(&mut self) -> bool {
        self.apply(true)
    }

    pub fn leave(&mut self) -> bool {
        self.apply(false)
    }

    fn apply(&mut self, hovered: bool) -> bool {
        self.hovered = hovered;
        self.transitions = self.transitions.saturating_add(1);
        self.hovered
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverPalette {
    pub idle_background: String,
    pub idle_foreground: String,
    pub hover_background: String,
    pub hover_foreground: String,
}

impl Default for HoverPalette {
    fn default() -> Self {
        Self {
            idle_background: "#ffffff".to_string(),
            idle_foreground: "#0b3d5c".to_string(),
            hover_background: "#0b3d5c".to_string(),
            hover_foreground: "#ffffff".to_string(),
        }
    }
}

impl HoverPalette {
    /// Colors swap places on hover, which is what every call-to-action on
    /// the site does.
    pub fn inverted(background: &str, foreground: &str) -> Self {
        Self {
            idle_background: background.to_string(),
            idle_foreground: foreground.to_string(),
            hover_background: foreground.to_string(),
            hover_foreground: background.to_string(),
        }
    }

    pub fn style(&self, hovered: bool, transition_ms: u32) -> String {
        let (background, foreground) = if hovered {
            (&self.hover_background, &self.hover_foreground)
        } else {
            (&self.idle_background, &self.idle_foreground)
        };

        format!(
            "background-color: {background}; color: {foreground}; \
             transition: background-color {transition_ms}ms ease, color {transition_ms}ms ease;"
        )
    }
}

/// Icon pair cross-faded when the owning control is hovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverIcon {
    pub idle: String,
    pub hovered: String,
}

impl Default for HoverIcon {
    fn default() -> Self {
        Self {
            idle: "→".to_string(),
            hovered: "↗".to_string(),
        }
    }
}

impl HoverIcon {
    pub fn glyph(&self, hovered: bool) -> &str {
        if hovered {
            &self.hovered
        } else {
            &self.idle
        }
    }

    pub fn style(&self, delay_ms: u32) -> String {
        format!("transition: opacity {delay_ms}ms ease-in-out {delay_ms}ms;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_pointer_event_is_one_transition() {
        let mut flag = HoverFlag::new();

        assert!(flag.enter());
        assert_eq!(flag.transitions(), 1);
        assert!(!flag.leave());
        assert_eq!(flag.transitions(), 2);
    }

    #[test]
    fn rapid_enter_leave_enter_ends_hovered() {
        let mut flag = HoverFlag::new();
        flag.enter();
        flag.leave();
        flag.enter();

        assert!(flag.hovered());
        assert_eq!(flag.transitions(), 3);
    }

    #[test]
    fn separate_controls_do_not_share_state() {
        let mut first = HoverFlag::new();
        let second = HoverFlag::new();
        first.enter();

        assert!(first.hovered());
        assert!(!second.hovered());
    }

    #[test]
    fn inverted_palette_swaps_colors_on_hover() {
        let palette = HoverPalette::inverted("#fff", "#123");

        let idle = palette.style(false, 650);
        let hovered = palette.style(true, 650);
        assert!(idle.starts_with("background-color: #fff; color: #123;"));
        assert!(hovered.starts_with("background-color: #123; color: #fff;"));
        assert!(hovered.contains("650ms ease"));
    }

    #[test]
    fn icon_glyph_follows_hover() {
        let icon = HoverIcon::default();

        assert_eq!(icon.glyph(false), "→");
        assert_eq!(icon.glyph(true), "↗");
        assert_eq!(icon.style(300), "transition: opacity 300ms ease-in-out 300ms;");
    }
}
