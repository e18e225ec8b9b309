// glfetch/src/error.rs
//
//! Various errors that loading can produce.

/// Various errors that loading can produce.
///
/// Individual entry points failing to resolve are *not* errors; they are
/// tallied into [`crate::GlLoader::missing`]. Only conditions that leave the
/// loader unable to interrogate the context at all surface here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The system OpenGL library couldn't be located.
    NoGLLibraryFound,
    /// A bootstrap command (`glGetString`, or on 3.0+ contexts
    /// `glGetStringi`/`glGetIntegerv`) couldn't be resolved. Without these
    /// the driver can't be queried, so nothing can be loaded.
    GLFunctionNotFound,
    /// The reported version matched no version-table row, and the maximal
    /// fallback row was unavailable too.
    UnsupportedGLVersion,
}
