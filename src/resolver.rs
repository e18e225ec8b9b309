// glfetch/src/resolver.rs
//
//! The symbol-resolution seam between the load driver and the platform.

use std::os::raw::c_void;

/// Maps an OpenGL command name to a function pointer.
///
/// The only failure signal is a null return; resolvers never panic and
/// never report errors any other way. The platform implementations live in
/// [`crate::platform`]; tests substitute their own through the same trait.
pub trait FunctionResolver {
    /// Resolves one command by its unmangled GL name, e.g. `"glGetString"`.
    fn lookup(&self, symbol_name: &str) -> *const c_void;
}

/// `wglGetProcAddress` signals "unsupported" through a handful of small
/// integer values as well as null; anything in that set has to be treated
/// as a miss, never called through.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn is_wgl_sentinel(pointer: *const c_void) -> bool {
    match pointer as isize {
        0 | 1 | 2 | 3 | -1 => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_wgl_sentinel;
    use std::os::raw::c_void;

    #[test]
    fn sentinel_values_read_as_misses() {
        for value in &[0isize, 1, 2, 3, -1] {
            assert!(is_wgl_sentinel(*value as *const c_void), "{}", value);
        }
    }

    #[test]
    fn plausible_addresses_pass_through() {
        assert!(!is_wgl_sentinel(4 as *const c_void));
        assert!(!is_wgl_sentinel(0x7fff_a000 as *const c_void));
        assert!(!is_wgl_sentinel(-2isize as *const c_void));
    }
}
