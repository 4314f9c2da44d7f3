//! Framebuffer resize handling

use serde::{Deserialize, Serialize};

use crate::render::{GlApi, Viewport};

/// How the viewport follows framebuffer size changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Re-apply the window's initial size, ignoring the reported one
    #[default]
    Fixed,
    /// Use the size reported by the window system
    Track,
}

/// Turns framebuffer size notifications into viewports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeHandler {
    policy: ResizePolicy,
    initial_width: i32,
    initial_height: i32,
}

impl ResizeHandler {
    /// Handler for a window created at `width` x `height`
    #[must_use]
    pub fn new(policy: ResizePolicy, (width, height): (u32, u32)) -> Self {
        Self {
            policy,
            initial_width: i32::try_from(width).unwrap_or(i32::MAX),
            initial_height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Active policy
    #[must_use]
    pub const fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Viewport to apply after the framebuffer became `width` x `height`
    #[must_use]
    pub fn viewport_for(&self, width: i32, height: i32) -> Viewport {
        match self.policy {
            ResizePolicy::Fixed => Viewport::from_size(self.initial_width, self.initial_height),
            ResizePolicy::Track => Viewport::from_size(width.max(0), height.max(0)),
        }
    }
}

/// Apply the viewport `handler` picks for a framebuffer of `width` x `height`
///
/// Body of the framebuffer-size callback. Returns the viewport that was set.
pub fn apply_resize<G: GlApi + ?Sized>(
    gl: &G,
    handler: ResizeHandler,
    width: i32,
    height: i32,
) -> Viewport {
    let viewport = handler.viewport_for(width, height);
    log::debug!("Framebuffer resized to {width}x{height}, viewport {viewport:?}");
    gl.viewport(viewport);
    viewport
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ClearFlags, Rgba};
    use std::cell::RefCell;

    #[derive(Default)]
    struct ViewportLog {
        viewports: RefCell<Vec<Viewport>>,
    }

    impl GlApi for ViewportLog {
        fn clear_color(&self, _color: Rgba) {}

        fn clear(&self, _mask: ClearFlags) {}

        fn viewport(&self, viewport: Viewport) {
            self.viewports.borrow_mut().push(viewport);
        }
    }

    #[test]
    fn test_apply_resize_sets_fixed_viewport() {
        let gl = ViewportLog::default();
        let handler = ResizeHandler::new(ResizePolicy::Fixed, (800, 600));

        let applied = apply_resize(&gl, handler, 1280, 720);
        assert_eq!(applied, Viewport::from_size(800, 600));
        assert_eq!(*gl.viewports.borrow(), vec![Viewport::from_size(800, 600)]);
    }

    #[test]
    fn test_apply_resize_tracks_when_asked() {
        let gl = ViewportLog::default();
        let handler = ResizeHandler::new(ResizePolicy::Track, (800, 600));

        apply_resize(&gl, handler, 1280, 720);
        assert_eq!(*gl.viewports.borrow(), vec![Viewport::from_size(1280, 720)]);
    }

    #[test]
    fn test_fixed_policy_ignores_reported_size() {
        let handler = ResizeHandler::new(ResizePolicy::Fixed, (800, 600));
        for (w, h) in [(0, 0), (1, 1), (640, 480), (800, 600), (1920, 1080), (-5, 7)] {
            assert_eq!(handler.viewport_for(w, h), Viewport::from_size(800, 600));
        }
    }

    #[test]
    fn test_track_policy_follows_reported_size() {
        let handler = ResizeHandler::new(ResizePolicy::Track, (800, 600));
        assert_eq!(handler.viewport_for(1024, 768), Viewport::from_size(1024, 768));
        assert_eq!(handler.viewport_for(0, 0), Viewport::from_size(0, 0));
    }

    #[test]
    fn test_track_policy_clamps_negative_sizes() {
        let handler = ResizeHandler::new(ResizePolicy::Track, (800, 600));
        assert_eq!(handler.viewport_for(-1, 300), Viewport::from_size(0, 300));
    }

    #[test]
    fn test_policy_serializes_snake_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            policy: ResizePolicy,
        }

        let text = toml::to_string(&Wrapper { policy: ResizePolicy::Track }).unwrap();
        assert_eq!(text.trim(), "policy = \"track\"");
        let parsed: Wrapper = toml::from_str("policy = \"fixed\"").unwrap();
        assert_eq!(parsed.policy, ResizePolicy::Fixed);
    }
}
