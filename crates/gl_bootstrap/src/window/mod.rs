//! Window management subsystem
//!
//! # Module Organization
//!
//! - **`backend`**: trait the main loop drives a window through
//! - **`resize`**: framebuffer-resize policy and the viewport it produces
//! - **`glfw_window`**: GLFW implementation of the backend

pub mod backend;
pub mod glfw_window;
pub mod resize;

pub use backend::WindowBackend;
pub use glfw_window::GlfwWindow;
pub use resize::{apply_resize, ResizeHandler, ResizePolicy};
