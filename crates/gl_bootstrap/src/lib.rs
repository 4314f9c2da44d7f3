//! # GL Bootstrap
//!
//! Opens a GLFW window with an OpenGL 3.3 core context, loads the GL function
//! pointers and clears the window to a fixed color every frame until the user
//! closes it or presses the close key.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_bootstrap::{launch, AppConfig};
//!
//! fn main() {
//!     match launch(&AppConfig::default()) {
//!         Ok(stats) => println!("rendered {} frames", stats.frames),
//!         Err(e) => {
//!             eprintln!("{e}");
//!             std::process::exit(e.exit_code());
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod input;
pub mod platform;
pub mod render;
pub mod window;

mod application;
mod error;

pub use application::{launch, process_input, run, run_event_loop, FrameStats, LoopSettings};
pub use config::{AppConfig, Config, ConfigError};
pub use error::{BootstrapError, BootstrapResult, FAILURE_EXIT_CODE};
pub use platform::{GlfwPlatform, Platform};
