// glfetch/src/ffi.rs
//
//! The slice of the OpenGL ABI the load driver itself touches.
//!
//! Only the scalar types, the query enums, and the three bootstrap commands
//! are declared here. Everything else the crate resolves is handed back to
//! callers as an untyped pointer; committing to ~2,000 typed signatures is
//! the job of a bindings crate, not a loader.

#![allow(dead_code)]

pub type GLboolean = u8;
pub type GLubyte = u8;
pub type GLenum = u32;
pub type GLuint = u32;
pub type GLint = i32;
pub type GLsizei = i32;
pub type GLbitfield = u32;

pub const VERSION: GLenum = 0x1F02;
pub const EXTENSIONS: GLenum = 0x1F03;
pub const NUM_EXTENSIONS: GLenum = 0x821D;
pub const CONTEXT_PROFILE_MASK: GLenum = 0x9126;

/// `glGetString`
pub type GetStringFn = unsafe extern "C" fn(name: GLenum) -> *const GLubyte;
/// `glGetStringi` (3.0+)
pub type GetStringiFn = unsafe extern "C" fn(name: GLenum, index: GLuint) -> *const GLubyte;
/// `glGetIntegerv`
pub type GetIntegervFn = unsafe extern "C" fn(pname: GLenum, data: *mut GLint);
