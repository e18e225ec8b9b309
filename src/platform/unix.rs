// glfetch/src/platform/unix.rs
//
//! Symbol resolution through libGL and GLX, plus GLX extension loading.

use crate::error::Error;
use crate::loader::WindowSystemExtensions;
use crate::registry::{extensions, Extension};
use crate::resolver::FunctionResolver;

use libc::{dlopen, dlsym, RTLD_LAZY, RTLD_LOCAL};
use log::warn;
use std::ffi::{CStr, CString};
use std::mem;
use std::os::raw::{c_char, c_int, c_void};
use std::ptr;

type GlXGetProcAddressFn = unsafe extern "C" fn(name: *const u8) -> *const c_void;
type QueryExtensionsStringFn =
    unsafe extern "C" fn(display: *mut c_void, screen: c_int) -> *const c_char;

// The handle is kept as an integer so the memoized library is Sync; it is
// never dlclosed.
struct GlLibrary {
    handle: usize,
    get_proc_address: Option<GlXGetProcAddressFn>,
}

lazy_static! {
    static ref GL_LIBRARY: GlLibrary = unsafe {
        let handle = open_gl_library();
        if handle.is_null() {
            warn!("glfetch: no OpenGL library found, every lookup will miss");
            GlLibrary {
                handle: 0,
                get_proc_address: None,
            }
        } else {
            // Route lookups through glXGetProcAddress where the library
            // has one; extension commands are only reachable that way.
            let mut get_proc_address = None;
            for name in &["glXGetProcAddressARB\0", "glXGetProcAddress\0"] {
                let symbol = dlsym(handle, name.as_ptr() as *const c_char);
                if !symbol.is_null() {
                    get_proc_address =
                        Some(mem::transmute::<*mut c_void, GlXGetProcAddressFn>(symbol));
                    break;
                }
            }
            GlLibrary {
                handle: handle as usize,
                get_proc_address,
            }
        }
    };
}

unsafe fn open_gl_library() -> *mut c_void {
    for name in &["libGL.so.1\0", "libGL.so\0"] {
        let handle = dlopen(name.as_ptr() as *const c_char, RTLD_LAZY | RTLD_LOCAL);
        if !handle.is_null() {
            return handle;
        }
    }
    // The process may already link GL; fall back to its own image.
    dlopen(ptr::null(), RTLD_LAZY | RTLD_LOCAL)
}

/// Resolves against the process's OpenGL library, preferring
/// `glXGetProcAddressARB` and falling back to plain `dlsym`.
pub struct SystemResolver {
    library: &'static GlLibrary,
}

impl SystemResolver {
    pub fn new() -> Result<SystemResolver, Error> {
        let library: &'static GlLibrary = &GL_LIBRARY;
        if library.handle == 0 {
            return Err(Error::NoGLLibraryFound);
        }
        Ok(SystemResolver { library })
    }
}

impl FunctionResolver for SystemResolver {
    fn lookup(&self, symbol_name: &str) -> *const c_void {
        let symbol_name: CString = CString::new(symbol_name).unwrap();
        unsafe {
            if let Some(get_proc_address) = self.library.get_proc_address {
                let pointer = get_proc_address(symbol_name.as_ptr() as *const u8);
                if !pointer.is_null() {
                    return pointer;
                }
            }
            dlsym(self.library.handle as *mut c_void, symbol_name.as_ptr()) as *const c_void
        }
    }
}

/// The GLX extensions the loader knows how to handle.
pub static GLX_EXTENSIONS: &[Extension] = extensions![
    "GLX_ARB_create_context" => ["glXCreateContextAttribsARB"],
    "GLX_ARB_create_context_profile" => [],
    "GLX_ARB_create_context_robustness" => [],
    "GLX_ARB_framebuffer_sRGB" => [],
    "GLX_ARB_get_proc_address" => ["glXGetProcAddressARB"],
    "GLX_ARB_multisample" => [],
    "GLX_EXT_buffer_age" => [],
    "GLX_EXT_create_context_es2_profile" => [],
    "GLX_EXT_framebuffer_sRGB" => [],
    "GLX_EXT_import_context" => [
        "glXFreeContextEXT",
        "glXGetContextIDEXT",
        "glXGetCurrentDisplayEXT",
        "glXImportContextEXT",
        "glXQueryContextInfoEXT",
    ],
    "GLX_EXT_swap_control" => ["glXSwapIntervalEXT"],
    "GLX_EXT_swap_control_tear" => [],
    "GLX_EXT_texture_from_pixmap" => [
        "glXBindTexImageEXT",
        "glXReleaseTexImageEXT",
    ],
    "GLX_EXT_visual_info" => [],
    "GLX_EXT_visual_rating" => [],
    "GLX_MESA_copy_sub_buffer" => ["glXCopySubBufferMESA"],
    "GLX_MESA_release_buffers" => ["glXReleaseBuffersMESA"],
    "GLX_OML_swap_method" => [],
    "GLX_OML_sync_control" => [
        "glXGetMscRateOML",
        "glXGetSyncValuesOML",
        "glXSwapBuffersMscOML",
        "glXWaitForMscOML",
        "glXWaitForSbcOML",
    ],
    "GLX_SGI_make_current_read" => [
        "glXGetCurrentReadDrawableSGI",
        "glXMakeCurrentReadSGI",
    ],
    "GLX_SGI_swap_control" => ["glXSwapIntervalSGI"],
    "GLX_SGI_video_sync" => [
        "glXGetVideoSyncSGI",
        "glXWaitVideoSyncSGI",
    ],
];

/// Loads the GLX extensions advertised for `screen` of `display`.
///
/// A library without `glXQueryExtensionsString` (GLX older than 1.1)
/// yields an empty set, not an error.
pub fn load_glx_extensions<R: FunctionResolver>(
    resolver: &R,
    display: *mut c_void,
    screen: c_int,
) -> WindowSystemExtensions {
    let query = resolver.lookup("glXQueryExtensionsString");
    if query.is_null() {
        warn!("glfetch: glXQueryExtensionsString unavailable, loading no GLX extensions");
        return WindowSystemExtensions::empty();
    }
    let query: QueryExtensionsStringFn = unsafe { mem::transmute(query) };

    let extension_string = unsafe {
        let pointer = query(display, screen);
        if pointer.is_null() {
            String::new()
        } else {
            CStr::from_ptr(pointer).to_string_lossy().into_owned()
        }
    };
    WindowSystemExtensions::from_extension_string(&extension_string, GLX_EXTENSIONS, resolver)
}
