// glfetch/src/loader.rs
//
//! The load driver and the loaded-context object it produces.

use crate::error::Error;
use crate::ffi::{self, GLint, GLuint};
use crate::info::{ContextProfileMask, GLVersion, Profile};
use crate::registry::{self, Extension};
use crate::resolver::FunctionResolver;

use log::{debug, info};
use std::collections::HashMap;
use std::ffi::CStr;
use std::mem;
use std::os::raw::{c_char, c_void};
use std::ptr::NonNull;

/// Availability of one advertised extension after a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtensionStatus {
    /// How many of the extension's commands failed to resolve.
    pub missing: usize,
}

impl ExtensionStatus {
    /// True when every command the extension adds resolved.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.missing == 0
    }
}

/// Everything resolved against one OpenGL context.
///
/// A `GlLoader` is immutable once constructed. It holds one slot per
/// underlying symbol name, so a command reachable through several
/// extensions (the EXT direct-state-access aliases, say) occupies a single
/// slot and the extension statuses are purely advisory. After a context
/// change, build a fresh loader; the maps carry no state across loads.
pub struct GlLoader {
    commands: HashMap<&'static str, NonNull<c_void>>,
    extensions: HashMap<&'static str, ExtensionStatus>,
    version: GLVersion,
    profile: Profile,
    missing: usize,
}

impl GlLoader {
    /// Loads against the calling thread's current context using the
    /// platform's symbol resolver.
    #[cfg(any(windows, macos, linux))]
    pub fn load() -> Result<GlLoader, Error> {
        let resolver = crate::platform::SystemResolver::new()?;
        GlLoader::load_with(&resolver)
    }

    /// Loads through the given resolver.
    ///
    /// The driver is a single pass: parse `GL_VERSION`, enumerate and load
    /// the advertised extensions, determine the profile, then resolve the
    /// matching version-table row. Individual commands failing to resolve
    /// only bump [`GlLoader::missing`]; the errors this can return are
    /// listed on [`Error`].
    pub fn load_with<R: FunctionResolver>(resolver: &R) -> Result<GlLoader, Error> {
        let mut loader = GlLoader {
            commands: HashMap::new(),
            extensions: HashMap::new(),
            version: GLVersion::new(0, 0),
            profile: Profile::Core,
            missing: 0,
        };

        let get_string: ffi::GetStringFn = unsafe {
            mem::transmute(loader.resolve_required("glGetString", resolver)?.as_ptr())
        };

        let version_string = unsafe { gl_string(get_string(ffi::VERSION)) };
        loader.version = GLVersion::parse(&version_string);

        if loader.version.major < 3 {
            // Pre-3.0 contexts hand back the whole extension list as one
            // space-delimited string.
            let extension_string = unsafe { gl_string(get_string(ffi::EXTENSIONS)) };
            for name in extension_string.split_whitespace() {
                loader.load_extension_by_name(name, resolver);
            }
        } else {
            let get_integerv: ffi::GetIntegervFn = unsafe {
                mem::transmute(loader.resolve_required("glGetIntegerv", resolver)?.as_ptr())
            };
            let get_stringi: ffi::GetStringiFn = unsafe {
                mem::transmute(loader.resolve_required("glGetStringi", resolver)?.as_ptr())
            };

            let mut count: GLint = 0;
            unsafe { get_integerv(ffi::NUM_EXTENSIONS, &mut count) };
            for index in 0..count.max(0) as GLuint {
                let name = unsafe { gl_string(get_stringi(ffi::EXTENSIONS, index)) };
                loader.load_extension_by_name(&name, resolver);
            }

            loader.profile = loader.determine_profile(get_integerv);
        }

        let entry = registry::find_version_entry(loader.version, loader.profile)
            .or_else(|| registry::fallback_version_entry())
            .ok_or(Error::UnsupportedGLVersion)?;
        for block in entry.blocks {
            loader.missing += resolve_commands(&mut loader.commands, block, resolver);
        }

        info!(
            "glfetch: loaded GL {}.{} ({:?}): {} commands resolved, {} missing, {} extensions",
            loader.version.major,
            loader.version.minor,
            loader.profile,
            loader.commands.len(),
            loader.missing,
            loader.extensions.len(),
        );
        Ok(loader)
    }

    /// The resolved pointer for `name`, or `None` if it wasn't advertised
    /// or didn't resolve.
    #[inline]
    pub fn entry_point(&self, name: &str) -> Option<NonNull<c_void>> {
        self.commands.get(name).copied()
    }

    /// Whether the driver advertised `name` during the load.
    #[inline]
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }

    /// Per-extension load outcome, if the extension was advertised.
    #[inline]
    pub fn extension_status(&self, name: &str) -> Option<ExtensionStatus> {
        self.extensions.get(name).copied()
    }

    /// The version parsed out of `GL_VERSION`.
    #[inline]
    pub fn version(&self) -> GLVersion {
        self.version
    }

    /// The profile determined during the load.
    #[inline]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Whether the loaded context is at least `major.minor`.
    #[inline]
    pub fn supports_version(&self, major: u8, minor: u8) -> bool {
        self.version >= GLVersion::new(major, minor)
    }

    /// Total commands that failed to resolve, across the version row and
    /// every advertised extension. Zero on a clean load.
    #[inline]
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// Total commands resolved.
    #[inline]
    pub fn loaded_count(&self) -> usize {
        self.commands.len()
    }

    // Unknown names are ignored outright: the driver advertising an
    // extension this table doesn't describe mutates nothing.
    fn load_extension_by_name<R: FunctionResolver>(&mut self, name: &str, resolver: &R) {
        let extension = match registry::find_extension(name) {
            Some(extension) => extension,
            None => return,
        };
        let missing = resolve_commands(&mut self.commands, extension.commands, resolver);
        self.missing += missing;
        self.extensions
            .insert(extension.name, ExtensionStatus { missing });
    }

    fn determine_profile(&self, get_integerv: ffi::GetIntegervFn) -> Profile {
        if self.version < GLVersion::new(3, 1) {
            // Profiles don't exist yet.
            return Profile::Core;
        }
        if self.version == GLVersion::new(3, 1) {
            // 3.1 has no profile query; the compatibility extension is the
            // only signal.
            return self.arb_compatibility_profile();
        }

        let mut mask_bits: GLint = 0;
        unsafe { get_integerv(ffi::CONTEXT_PROFILE_MASK, &mut mask_bits) };
        let mask = ContextProfileMask::from_bits_truncate(mask_bits as u32);
        if mask.contains(ContextProfileMask::COMPATIBILITY) {
            Profile::Compatibility
        } else {
            // Some drivers report a zero or core-only mask while still
            // exposing the full compatibility command set.
            self.arb_compatibility_profile()
        }
    }

    fn arb_compatibility_profile(&self) -> Profile {
        if self.has_extension("GL_ARB_compatibility") {
            Profile::Compatibility
        } else {
            Profile::Core
        }
    }

    fn resolve_required<R: FunctionResolver>(
        &mut self,
        name: &'static str,
        resolver: &R,
    ) -> Result<NonNull<c_void>, Error> {
        match NonNull::new(resolver.lookup(name) as *mut c_void) {
            Some(pointer) => {
                self.commands.insert(name, pointer);
                Ok(pointer)
            }
            None => Err(Error::GLFunctionNotFound),
        }
    }
}

/// Resolves each name in `names`, storing successes into `slots` and
/// counting failures. Already-resolved slots from earlier in the batch stay
/// resolved regardless of what fails after them.
pub(crate) fn resolve_commands<R: FunctionResolver>(
    slots: &mut HashMap<&'static str, NonNull<c_void>>,
    names: &[&'static str],
    resolver: &R,
) -> usize {
    let mut missing = 0;
    for &name in names {
        match NonNull::new(resolver.lookup(name) as *mut c_void) {
            Some(pointer) => {
                slots.insert(name, pointer);
            }
            None => {
                debug!("glfetch: failed to resolve {}", name);
                missing += 1;
            }
        }
    }
    missing
}

/// Window-system (WGL or GLX) extensions resolved for one drawable or
/// display, shaped like [`GlLoader`] but driven by the platform's own
/// extension-string query.
pub struct WindowSystemExtensions {
    commands: HashMap<&'static str, NonNull<c_void>>,
    extensions: HashMap<&'static str, ExtensionStatus>,
    missing: usize,
}

impl WindowSystemExtensions {
    pub(crate) fn empty() -> WindowSystemExtensions {
        WindowSystemExtensions {
            commands: HashMap::new(),
            extensions: HashMap::new(),
            missing: 0,
        }
    }

    pub(crate) fn from_extension_string<R: FunctionResolver>(
        extension_string: &str,
        table: &'static [Extension],
        resolver: &R,
    ) -> WindowSystemExtensions {
        let mut loaded = WindowSystemExtensions::empty();
        for name in extension_string.split_whitespace() {
            let row = match table.iter().find(|row| row.name == name) {
                Some(row) => row,
                None => continue,
            };
            let missing = resolve_commands(&mut loaded.commands, row.commands, resolver);
            loaded.missing += missing;
            loaded
                .extensions
                .insert(row.name, ExtensionStatus { missing });
        }
        loaded
    }

    #[inline]
    pub fn entry_point(&self, name: &str) -> Option<NonNull<c_void>> {
        self.commands.get(name).copied()
    }

    #[inline]
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }

    #[inline]
    pub fn extension_status(&self, name: &str) -> Option<ExtensionStatus> {
        self.extensions.get(name).copied()
    }

    #[inline]
    pub fn missing(&self) -> usize {
        self.missing
    }
}

// Copies a driver-owned GL string. A null pointer reads as empty rather
// than crashing; the empty string then degrades the same way an
// unparsable one does.
unsafe fn gl_string(pointer: *const ffi::GLubyte) -> String {
    if pointer.is_null() {
        return String::new();
    }
    CStr::from_ptr(pointer as *const c_char)
        .to_string_lossy()
        .into_owned()
}
