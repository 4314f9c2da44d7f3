//! The handful of GL state the bootstrap touches
//!
//! Rendering is limited to clearing the color buffer and resetting the
//! viewport. [`GlApi`] is the seam between the main loop and the loaded GL
//! entry points so the loop can be driven without a live context.

pub mod gl_api;

pub use gl_api::{load_with, GlFunctions, REQUIRED_SYMBOLS};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Normalized RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Rgba {
    /// Background color of the Learn OpenGL window
    pub const TEAL_GRAY: Self = Self::new(0.2, 0.3, 0.3, 1.0);

    /// Create a color from its components
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// True when every component is finite and within `[0, 1]`
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TEAL_GRAY
    }
}

bitflags! {
    /// Buffers cleared by [`GlApi::clear`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        /// Color buffer
        const COLOR = gl::COLOR_BUFFER_BIT;
    }
}

/// Viewport rectangle in framebuffer pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge
    pub x: i32,
    /// Bottom edge
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Viewport {
    /// Viewport anchored at the origin
    #[must_use]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// GL calls issued by the bootstrap
///
/// Implementations must only be constructed once the function pointers are
/// loaded and the context is current on the calling thread.
pub trait GlApi {
    /// `glClearColor`
    fn clear_color(&self, color: Rgba);

    /// `glClear`
    fn clear(&self, mask: ClearFlags);

    /// `glViewport`
    fn viewport(&self, viewport: Viewport);
}

/// Clear the color buffer to `color`
pub fn clear_frame<G: GlApi + ?Sized>(gl: &G, color: Rgba) {
    gl.clear_color(color);
    gl.clear(ClearFlags::COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingGl {
        calls: RefCell<Vec<String>>,
    }

    impl GlApi for RecordingGl {
        fn clear_color(&self, color: Rgba) {
            self.calls.borrow_mut().push(format!("clear_color {color:?}"));
        }

        fn clear(&self, mask: ClearFlags) {
            self.calls.borrow_mut().push(format!("clear {:#x}", mask.bits()));
        }

        fn viewport(&self, viewport: Viewport) {
            self.calls.borrow_mut().push(format!("viewport {viewport:?}"));
        }
    }

    #[test]
    fn test_clear_frame_sets_color_then_clears_color_buffer() {
        let gl = RecordingGl::default();
        clear_frame(&gl, Rgba::TEAL_GRAY);

        let calls = gl.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].starts_with("clear_color"));
        assert_eq!(calls[1], format!("clear {:#x}", gl::COLOR_BUFFER_BIT));
    }

    #[test]
    fn test_clear_flags_only_color() {
        assert_eq!(ClearFlags::COLOR.bits(), 0x4000);
        assert_eq!(ClearFlags::all(), ClearFlags::COLOR);
    }

    #[test]
    fn test_is_normalized() {
        assert!(Rgba::TEAL_GRAY.is_normalized());
        assert!(Rgba::new(0.0, 0.0, 0.0, 0.0).is_normalized());
        assert!(Rgba::new(1.0, 1.0, 1.0, 1.0).is_normalized());
        assert!(!Rgba::new(-0.1, 0.0, 0.0, 1.0).is_normalized());
        assert!(!Rgba::new(0.0, f32::INFINITY, 0.0, 1.0).is_normalized());
    }

    #[test]
    fn test_viewport_from_size() {
        let viewport = Viewport::from_size(800, 600);
        assert_eq!((viewport.x, viewport.y), (0, 0));
        assert_eq!((viewport.width, viewport.height), (800, 600));
    }
}
