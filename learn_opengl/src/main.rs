//! Learn OpenGL
//!
//! Opens an 800x600 window, clears it to teal-gray every frame and exits when
//! the window is closed or Escape is pressed.

use gl_bootstrap::{launch, AppConfig};

fn main() {
    // Set up panic hook for better error reporting
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC occurred: {panic_info:?}");

        if let Some(location) = panic_info.location() {
            eprintln!(
                "Panic location: {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            );
        }

        if let Some(payload) = panic_info.payload().downcast_ref::<&str>() {
            eprintln!("Panic message: {payload}");
        } else if let Some(payload) = panic_info.payload().downcast_ref::<String>() {
            eprintln!("Panic message: {payload}");
        }
    }));

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Learn OpenGL");

    // Everything GLFW owns is released inside launch, before the process exits
    let exit_code = match launch(&AppConfig::default()) {
        Ok(stats) => {
            log::info!("Exited cleanly after {} frames", stats.frames);
            0
        }
        Err(e) => {
            eprintln!("{e}");
            log::error!("Bootstrap failed: {e}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}
