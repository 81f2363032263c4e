// Driver-level actions and their default keys

use winit::keyboard::KeyCode;

/// Everything the runner driver reacts to
///
/// The gameplay core only understands the start trigger; quitting is the
/// window's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Begin the run (the core's start trigger)
    Start,
    /// Close the window
    Quit,
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::Space), Action::Start),
        (InputSource::key(KeyCode::Enter), Action::Start),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}
