//! Cross-platform loading of OpenGL function pointers at runtime.
//!
//! OpenGL entry points beyond the 1.1 baseline aren't plain symbols of a
//! library you can link; they have to be resolved one by one, by name,
//! against whatever driver owns the current context. This crate does that
//! resolution in a single pass and hands back an owned [`GlLoader`]: one
//! slot per command, one availability record per extension, plus the
//! parsed version and profile. Nothing is stored in process-wide globals,
//! so independent contexts can hold independently-loaded function sets.
//!
//! This is in contrast to crates like glutin or SDL bindings, which manage
//! context creation and windowing as well; here an already-current context
//! is assumed, and everything else is out of scope.
//!
//! ```no_run
//! let gl = glfetch::GlLoader::load().expect("no current GL context?");
//! if gl.supports_version(3, 3) || gl.has_extension("GL_ARB_vertex_array_object") {
//!     let bind_vertex_array = gl.entry_point("glBindVertexArray").unwrap();
//!     // transmute to the right signature and call
//! }
//! ```

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;

pub mod platform;

mod error;
pub use crate::error::Error;

pub mod ffi;

mod info;
pub use crate::info::{ContextProfileMask, GLVersion, Profile};

mod loader;
pub use crate::loader::{ExtensionStatus, GlLoader, WindowSystemExtensions};

pub mod registry;

mod resolver;
pub use crate::resolver::FunctionResolver;

#[cfg(test)]
mod tests;
