//! Window-system platform: library lifetime, window creation and GL loading

use crate::config::{ContextConfig, WindowConfig};
use crate::error::{BootstrapError, BootstrapResult};
use crate::render::{self, GlApi};
use crate::window::{GlfwWindow, WindowBackend};

/// Source of windows and GL entry points
///
/// Dropping the platform (together with every window it created)
/// deinitializes the underlying window system.
pub trait Platform {
    /// Window type produced by this platform
    type Window: WindowBackend;

    /// Loaded GL entry points
    type Gl: GlApi;

    /// Create a window with a GL context
    ///
    /// # Errors
    /// [`BootstrapError::WindowCreationFailed`] when no window is produced.
    fn create_window(
        &mut self,
        config: &WindowConfig,
        context: &ContextConfig,
    ) -> BootstrapResult<Self::Window>;

    /// Resolve GL function pointers for the context current on this thread
    ///
    /// # Errors
    /// [`BootstrapError::LoaderInitFailed`] when required entry points are missing.
    fn load_gl(&mut self, window: &mut Self::Window) -> BootstrapResult<Self::Gl>;
}

/// GLFW-backed platform
pub struct GlfwPlatform {
    glfw: glfw::Glfw,
}

impl GlfwPlatform {
    /// Initialize GLFW
    ///
    /// GLFW errors raised after initialization are forwarded to the `log` facade.
    ///
    /// # Errors
    /// [`BootstrapError::InitFailed`] when GLFW cannot initialize, typically
    /// because no display is available.
    pub fn init() -> BootstrapResult<Self> {
        let glfw = glfw::init(glfw::log_errors)
            .map_err(|e| BootstrapError::InitFailed(format!("{e:?}")))?;
        log::info!("GLFW {} initialized", glfw::get_version_string());
        Ok(Self { glfw })
    }
}

impl Platform for GlfwPlatform {
    type Window = GlfwWindow;
    type Gl = render::GlFunctions;

    fn create_window(
        &mut self,
        config: &WindowConfig,
        context: &ContextConfig,
    ) -> BootstrapResult<GlfwWindow> {
        GlfwWindow::create(&mut self.glfw, config, context)
    }

    fn load_gl(&mut self, window: &mut GlfwWindow) -> BootstrapResult<render::GlFunctions> {
        render::load_with(|symbol| window.proc_address(symbol))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    struct CapturingLogger {
        records: Mutex<Vec<String>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push(format!("{} {}", record.level(), record.args()));
            }
        }

        fn flush(&self) {}
    }

    fn capturing_logger() -> &'static CapturingLogger {
        static LOGGER: OnceLock<CapturingLogger> = OnceLock::new();
        let logger = LOGGER.get_or_init(|| CapturingLogger {
            records: Mutex::new(Vec::new()),
        });
        if log::set_logger(logger).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
        logger
    }

    #[test]
    fn test_glfw_errors_reach_log_facade() {
        let logger = capturing_logger();

        glfw::log_errors(glfw::Error::PlatformError, "no display".to_string());

        let records = logger.records.lock().unwrap();
        assert!(
            records
                .iter()
                .any(|r| r.starts_with("ERROR") && r.contains("no display")),
            "GLFW error was not logged: {records:?}"
        );
    }
}
