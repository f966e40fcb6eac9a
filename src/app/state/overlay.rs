use std::collections::HashSet;
use std::time::Duration;

/// Time between opening the overlay and its input taking focus.
pub const INPUT_FOCUS_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OverlayMode {
    #[default]
    Normal,
    Overlay,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    Terminal,
    Container,
    Footer,
    ThemeToggle,
}

impl Region {
    /// Regions flipped together by every overlay transition.
    pub const LOCKSTEP: [Region; 4] = [
        Region::Terminal,
        Region::Container,
        Region::Footer,
        Region::ThemeToggle,
    ];
}

/// Per-region hidden flag. A region is visible unless it is marked hidden.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Visibility {
    hidden: HashSet<Region>,
}

impl Visibility {
    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        !self.hidden.contains(&region)
    }

    pub fn hide(&mut self, region: Region) {
        self.hidden.insert(region);
    }

    pub fn show(&mut self, region: Region) {
        self.hidden.remove(&region);
    }

    pub fn toggle(&mut self, region: Region) {
        if !self.hidden.remove(&region) {
            self.hidden.insert(region);
        }
    }
}

/// Two-state controller for the command overlay.
///
/// The overlay surface and the normal chrome (container, footer, theme
/// toggle) are always complementary: exactly one side is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayController {
    mode: OverlayMode,
    regions: Visibility,
    input_focused: bool,
}

impl Default for OverlayController {
    fn default() -> Self {
        let mut regions = Visibility::default();
        regions.hide(Region::Terminal);
        Self {
            mode: OverlayMode::Normal,
            regions,
            input_focused: false,
        }
    }
}

impl OverlayController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_state(&self) -> OverlayMode {
        self.mode
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mode == OverlayMode::Overlay
    }

    /// Flips the mode and every lockstep region. Returns the new mode.
    pub fn toggle(&mut self) -> OverlayMode {
        for region in Region::LOCKSTEP {
            self.regions.toggle(region);
        }
        self.mode = match self.mode {
            OverlayMode::Normal => OverlayMode::Overlay,
            OverlayMode::Overlay => {
                self.input_focused = false;
                OverlayMode::Normal
            }
        };
        self.mode
    }

    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        self.regions.is_visible(region)
    }

    /// Gives the overlay input focus. Ignored once the overlay has closed.
    pub fn focus_input(&mut self) -> bool {
        if self.is_active() && self.is_visible(Region::Terminal) {
            self.input_focused = true;
        }
        self.input_focused
    }

    #[must_use]
    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }
}
