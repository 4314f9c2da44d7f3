//! Startup sequence and main loop
//!
//! Startup runs in a fixed order: create the window, make its context current,
//! install the resize handler, load GL. Only then does the loop start. Each
//! iteration checks the close key, clears the frame, swaps and polls events,
//! and the loop ends once the close flag is seen at the top of an iteration.

use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::error::BootstrapResult;
use crate::input::KeyCode;
use crate::platform::{GlfwPlatform, Platform};
use crate::render::{self, GlApi, Rgba};
use crate::window::{ResizeHandler, WindowBackend};

/// Summary of a finished main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Completed loop iterations
    pub frames: u64,

    /// Wall-clock time spent in the loop
    pub elapsed: Duration,
}

impl FrameStats {
    /// Average frames per second over the whole run
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            self.frames as f64 / seconds
        } else {
            0.0
        }
    }
}

/// Settings the main loop reads every iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    /// Key that requests closure while held, always Escape
    pub close_key: KeyCode,

    /// Color the frame is cleared to
    pub clear_color: Rgba,
}

impl From<&AppConfig> for LoopSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            close_key: KeyCode::Escape,
            clear_color: config.render.clear_color,
        }
    }
}

/// Request closure if the close key is held
///
/// Returns whether the close flag was set by this call.
pub fn process_input<W: WindowBackend + ?Sized>(window: &mut W, close_key: KeyCode) -> bool {
    if window.is_key_pressed(close_key) {
        window.set_should_close(true);
        true
    } else {
        false
    }
}

/// Run the main loop until the window's close flag is set
pub fn run_event_loop<W, G>(window: &mut W, gl: &G, settings: &LoopSettings) -> FrameStats
where
    W: WindowBackend + ?Sized,
    G: GlApi + ?Sized,
{
    log::info!("Entering main loop");
    let start = Instant::now();
    let mut frames = 0_u64;

    while !window.should_close() {
        if process_input(window, settings.close_key) {
            log::info!("{:?} pressed, closing window", settings.close_key);
        }
        render::clear_frame(gl, settings.clear_color);
        window.swap_buffers();
        window.poll_events();
        frames += 1;
    }

    let stats = FrameStats {
        frames,
        elapsed: start.elapsed(),
    };
    log::info!(
        "Main loop finished: {} frames in {:.2?} ({:.1} fps)",
        stats.frames,
        stats.elapsed,
        stats.average_fps()
    );
    stats
}

/// Bring up a window on `platform` and run it until closed
///
/// Every resource acquired here is scoped, so the window system is released
/// on every return path, including loader failure.
///
/// # Errors
/// Invalid configuration, window creation failure or GL loader failure.
pub fn run<P: Platform>(platform: &mut P, config: &AppConfig) -> BootstrapResult<FrameStats> {
    config.validate()?;

    let mut window = platform.create_window(&config.window, &config.context)?;
    window.make_current();
    window.set_resize_handler(ResizeHandler::new(
        config.window.resize_policy,
        config.window.size(),
    ));

    let gl = platform.load_gl(&mut window)?;

    Ok(run_event_loop(&mut window, &gl, &LoopSettings::from(config)))
}

/// Initialize GLFW and run the bootstrap with `config`
///
/// # Errors
/// Any [`crate::BootstrapError`]; GLFW is terminated before this returns.
pub fn launch(config: &AppConfig) -> BootstrapResult<FrameStats> {
    let mut platform = GlfwPlatform::init()?;
    run(&mut platform, config)
}
