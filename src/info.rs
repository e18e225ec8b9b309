// glfetch/src/info.rs
//
//! OpenGL version and profile information.

use crate::ffi::GLbitfield;

/// Describes an OpenGL version as reported by the driver.
///
/// Ordering is lexicographic on `(major, minor)`, so version-threshold
/// checks are plain comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GLVersion {
    pub major: u8,
    pub minor: u8,
}

impl GLVersion {
    #[inline]
    pub fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Parses the leading `"<major>.<minor>"` out of a `GL_VERSION` string,
    /// tolerating trailing vendor text after the minor number.
    ///
    /// Anything without that leading dotted form parses as `0.0`; the load
    /// driver then falls back to the maximal version-table row rather than
    /// failing outright.
    pub fn parse(version_string: &str) -> GLVersion {
        let mut halves = version_string.splitn(2, '.');
        let major = halves.next().and_then(leading_number);
        let minor = halves.next().and_then(leading_number);
        match (major, minor) {
            (Some(major), Some(minor)) => GLVersion { major, minor },
            _ => GLVersion { major: 0, minor: 0 },
        }
    }
}

// Parses the run of ASCII digits at the front of `text`, if any.
fn leading_number(text: &str) -> Option<u8> {
    let digits = text.split(|c: char| !c.is_ascii_digit()).next()?;
    digits.parse().ok()
}

/// The context profile.
///
/// Profiles only exist from GL 3.2 on; `Core` doubles as the neutral value
/// for everything older, and the version table keys its legacy rows the
/// same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    Core,
    Compatibility,
}

bitflags! {
    /// The `GL_CONTEXT_PROFILE_MASK` bits (GL 3.2+).
    pub struct ContextProfileMask: GLbitfield {
        const CORE          = 0x1;
        const COMPATIBILITY = 0x2;
    }
}

#[cfg(test)]
mod tests {
    use super::GLVersion;

    #[test]
    fn parses_bare_version() {
        assert_eq!(GLVersion::parse("4.3"), GLVersion::new(4, 3));
    }

    #[test]
    fn parses_version_with_vendor_text() {
        assert_eq!(GLVersion::parse("2.1 My Driver"), GLVersion::new(2, 1));
        assert_eq!(
            GLVersion::parse("3.0 Mesa 21.2.6"),
            GLVersion::new(3, 0)
        );
    }

    #[test]
    fn dotless_string_parses_as_zero() {
        assert_eq!(GLVersion::parse("garbage"), GLVersion::new(0, 0));
        assert_eq!(GLVersion::parse(""), GLVersion::new(0, 0));
    }

    #[test]
    fn minor_stops_at_first_nondigit() {
        // Point-release noise after the minor number must not spill in.
        assert_eq!(GLVersion::parse("4.6.0 NVIDIA"), GLVersion::new(4, 6));
    }

    #[test]
    fn version_ordering_is_lexicographic() {
        assert!(GLVersion::new(3, 0) < GLVersion::new(3, 1));
        assert!(GLVersion::new(2, 9) < GLVersion::new(3, 0));
        assert!(GLVersion::new(4, 0) > GLVersion::new(3, 3));
    }
}
