//! Window backend trait
//!
//! The bootstrap only needs a sliver of what a window system offers. This
//! trait names that sliver so the main loop and the startup sequence can run
//! against GLFW or against a recording mock in tests.

use crate::input::KeyCode;
use crate::window::resize::ResizeHandler;

/// Window operations used by the bootstrap
///
/// # Thread Safety
/// Not `Send`: GLFW windows and their contexts belong to the main thread.
pub trait WindowBackend {
    /// Bind this window's GL context to the calling thread
    ///
    /// Must happen before any loader or GL call.
    fn make_current(&mut self);

    /// Register the handler run when the framebuffer size changes
    ///
    /// Replaces any previously installed handler. The handler fires from
    /// inside [`WindowBackend::poll_events`].
    fn set_resize_handler(&mut self, handler: ResizeHandler);

    /// Check if the window should close
    ///
    /// True once the user clicked the close control or the application set
    /// the flag through [`WindowBackend::set_should_close`].
    fn should_close(&self) -> bool;

    /// Set whether the window should close
    fn set_should_close(&mut self, should_close: bool);

    /// Whether `key` is currently held down
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending window system events without blocking
    fn poll_events(&mut self);
}
