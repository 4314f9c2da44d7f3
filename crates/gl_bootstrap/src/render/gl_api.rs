//! GL function-pointer loading and the live [`GlApi`] implementation
#![allow(unsafe_code)]

use std::ffi::c_void;

use super::{ClearFlags, GlApi, Rgba, Viewport};
use crate::error::{BootstrapError, BootstrapResult};

/// Entry points that must resolve for the bootstrap to run
pub const REQUIRED_SYMBOLS: [&str; 3] = ["glClearColor", "glClear", "glViewport"];

fn symbol_loaded(symbol: &str) -> bool {
    match symbol {
        "glClearColor" => gl::ClearColor::is_loaded(),
        "glClear" => gl::Clear::is_loaded(),
        "glViewport" => gl::Viewport::is_loaded(),
        _ => false,
    }
}

fn missing_symbols() -> Vec<&'static str> {
    REQUIRED_SYMBOLS
        .iter()
        .copied()
        .filter(|symbol| !symbol_loaded(symbol))
        .collect()
}

/// Load every GL function pointer through `loader`
///
/// `loader` resolves a symbol name to its address for the context current on
/// this thread, usually the window system's `get_proc_address`.
///
/// # Errors
/// [`BootstrapError::LoaderInitFailed`] listing the required symbols that did
/// not resolve.
pub fn load_with<F>(mut loader: F) -> BootstrapResult<GlFunctions>
where
    F: FnMut(&str) -> *const c_void,
{
    gl::load_with(|symbol| loader(symbol));

    GlFunctions::current().map_or_else(
        || Err(BootstrapError::LoaderInitFailed(missing_symbols().join(", "))),
        |functions| {
            log::debug!("Loaded GL entry points: {}", REQUIRED_SYMBOLS.join(", "));
            Ok(functions)
        },
    )
}

/// Loaded GL entry points
///
/// Only obtainable once the pointers the bootstrap calls are resolved.
#[derive(Debug)]
pub struct GlFunctions {
    _loaded: (),
}

impl GlFunctions {
    /// Entry points loaded by an earlier [`load_with`], if every one resolved
    ///
    /// Window-system callbacks use this: they are installed before loading
    /// but only fire during event polling.
    #[must_use]
    pub fn current() -> Option<Self> {
        missing_symbols().is_empty().then_some(Self { _loaded: () })
    }
}

impl GlApi for GlFunctions {
    fn clear_color(&self, color: Rgba) {
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) };
    }

    fn clear(&self, mask: ClearFlags) {
        unsafe { gl::Clear(mask.bits()) };
    }

    fn viewport(&self, viewport: Viewport) {
        unsafe { gl::Viewport(viewport.x, viewport.y, viewport.width, viewport.height) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_loader_fails() {
        let result = load_with(|_| std::ptr::null());
        match result {
            Err(BootstrapError::LoaderInitFailed(missing)) => {
                for symbol in REQUIRED_SYMBOLS {
                    assert!(missing.contains(symbol), "{symbol} not reported in {missing}");
                }
            }
            other => panic!("expected loader failure, got {other:?}"),
        }
    }

    #[test]
    fn test_no_current_functions_without_loading() {
        let _ = load_with(|_| std::ptr::null());
        assert!(GlFunctions::current().is_none());
    }

    #[test]
    fn test_unknown_symbol_is_not_loaded() {
        assert!(!symbol_loaded("glDrawArrays"));
    }
}
