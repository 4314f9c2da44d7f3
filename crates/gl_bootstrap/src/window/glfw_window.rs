//! Window management using GLFW
//!
//! Provides window creation with an OpenGL context, input queries and event
//! polling for the bootstrap.

use std::ffi::c_void;

use glfw::Context;

use crate::config::{ContextConfig, WindowConfig};
use crate::error::{BootstrapError, BootstrapResult};
use crate::input::KeyCode;
use crate::render::GlFunctions;
use crate::window::backend::WindowBackend;
use crate::window::resize::{apply_resize, ResizeHandler};

/// Apply the context hints for the next window created through `glfw`
pub fn apply_context_hints(glfw: &mut glfw::Glfw, context: &ContextConfig, resizable: bool) {
    glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
    glfw.window_hint(glfw::WindowHint::ContextVersion(
        context.version_major,
        context.version_minor,
    ));
    if context.core_profile {
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
    }
    if context.forward_compat {
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    }
    glfw.window_hint(glfw::WindowHint::Resizable(resizable));

    log::debug!(
        "Context hints: GL {}.{} core={} forward_compat={} resizable={}",
        context.version_major,
        context.version_minor,
        context.core_profile,
        context.forward_compat,
        resizable
    );
}

/// GLFW window and its GL context
///
/// Holds its own handle to the library, so GLFW stays initialized for as long
/// as the window lives and terminates once the last handle drops.
pub struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
}

impl GlfwWindow {
    /// Create a windowed-mode window with a GL context
    ///
    /// The window is not bound to any monitor and shares no context.
    ///
    /// # Errors
    /// [`BootstrapError::WindowCreationFailed`] when GLFW cannot create the
    /// window or a context matching the hints.
    pub fn create(
        glfw: &mut glfw::Glfw,
        config: &WindowConfig,
        context: &ContextConfig,
    ) -> BootstrapResult<Self> {
        apply_context_hints(glfw, context, config.resizable);

        // Input and close state are queried directly, so the event receiver is unused
        let (window, _events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(BootstrapError::WindowCreationFailed)?;

        log::info!(
            "Created window \"{}\" ({}x{})",
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            glfw: glfw.clone(),
            window,
        })
    }

    /// Address of a GL entry point for the current context
    pub fn proc_address(&mut self, symbol: &str) -> *const c_void {
        self.window.get_proc_address(symbol) as *const c_void
    }
}

impl WindowBackend for GlfwWindow {
    fn make_current(&mut self) {
        self.window.make_current();
    }

    fn set_resize_handler(&mut self, handler: ResizeHandler) {
        self.window
            .set_framebuffer_size_callback(move |_, width, height| {
                if let Some(gl) = GlFunctions::current() {
                    apply_resize(&gl, handler, width, height);
                }
            });
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.window.get_key(key.to_glfw()) == glfw::Action::Press
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }
}
