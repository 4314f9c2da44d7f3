//! Keys the bootstrap watches

/// Key codes checked by the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyCode {
    /// Escape key, requests window closure while held
    #[default]
    Escape,
}

impl KeyCode {
    /// GLFW key for this code
    #[must_use]
    pub const fn to_glfw(self) -> glfw::Key {
        match self {
            Self::Escape => glfw::Key::Escape,
        }
    }
}
