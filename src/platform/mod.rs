// glfetch/src/platform/mod.rs
//
//! Platform-specific symbol resolution, selected at build time.

#[cfg(windows)]
pub mod windows;
#[cfg(windows)]
pub use windows::{load_wgl_extensions, SystemResolver};

#[cfg(macos)]
pub mod macos;
#[cfg(macos)]
pub use macos::SystemResolver;

#[cfg(linux)]
pub mod unix;
#[cfg(linux)]
pub use unix::{load_glx_extensions, SystemResolver};
