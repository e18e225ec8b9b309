// glfetch/build.rs
//
//! The `glfetch` build script.

use cfg_aliases::cfg_aliases;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        windows: { target_os = "windows" },
        macos: { target_os = "macos" },
        android: { target_os = "android" },
        linux: { all(unix, not(any(macos, android))) },
    }
}
