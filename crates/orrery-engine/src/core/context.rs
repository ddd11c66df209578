/// Page theme. Only the host page changes with it; the scene does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// CSS background for the page body.
    pub fn background(self) -> &'static str {
        match self {
            Theme::Dark => "linear-gradient(135deg, #0c0c0c 0%, #1a1a2e 50%, #16213e 100%)",
            Theme::Light => "linear-gradient(135deg, #87CEEB 0%, #98D8E8 50%, #B6E2FF 100%)",
        }
    }
}

/// Run state toggled by the UI and read by the run-loop every tick.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub paused: bool,
    pub theme: Theme,
}

impl SimulationContext {
    pub fn new() -> Self {
        Self {
            paused: false,
            theme: Theme::Dark,
        }
    }

    /// Flip the pause flag and return the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

impl Default for SimulationContext {
    fn default() -> Self {
        Self::new()
    }
}
