// glfetch/src/platform/windows.rs
//
//! Symbol resolution through WGL, plus WGL extension loading.

use crate::error::Error;
use crate::loader::WindowSystemExtensions;
use crate::registry::{extensions, Extension};
use crate::resolver::{self, FunctionResolver};

use log::warn;
use std::ffi::{CStr, CString};
use std::mem;
use std::os::raw::{c_char, c_void};
use winapi::shared::minwindef::HMODULE;
use winapi::shared::ntdef::LPCSTR;
use winapi::shared::windef::HDC;
use winapi::um::libloaderapi::{GetModuleHandleA, GetProcAddress};
use winapi::um::wingdi::wglGetProcAddress;

type GetExtensionsStringARBFn = unsafe extern "C" fn(hdc: HDC) -> *const c_char;

/// Resolves against the calling thread's current WGL context.
pub struct SystemResolver {
    opengl32: HMODULE,
}

impl SystemResolver {
    pub fn new() -> Result<SystemResolver, Error> {
        let opengl32 = unsafe { GetModuleHandleA(b"opengl32.dll\0".as_ptr() as LPCSTR) };
        if opengl32.is_null() {
            return Err(Error::NoGLLibraryFound);
        }
        Ok(SystemResolver { opengl32 })
    }
}

impl FunctionResolver for SystemResolver {
    fn lookup(&self, symbol_name: &str) -> *const c_void {
        let symbol_name: CString = CString::new(symbol_name).unwrap();
        unsafe {
            let pointer = wglGetProcAddress(symbol_name.as_ptr() as LPCSTR) as *const c_void;
            if !resolver::is_wgl_sentinel(pointer) {
                return pointer;
            }
            // GL 1.1 entry points aren't reachable through
            // wglGetProcAddress; they're plain exports of opengl32.dll.
            GetProcAddress(self.opengl32, symbol_name.as_ptr() as LPCSTR) as *const c_void
        }
    }
}

/// The WGL extensions the loader knows how to handle.
pub static WGL_EXTENSIONS: &[Extension] = extensions![
    "WGL_ARB_buffer_region" => [
        "wglCreateBufferRegionARB",
        "wglDeleteBufferRegionARB",
        "wglRestoreBufferRegionARB",
        "wglSaveBufferRegionARB",
    ],
    "WGL_ARB_create_context" => ["wglCreateContextAttribsARB"],
    "WGL_ARB_create_context_profile" => [],
    "WGL_ARB_create_context_robustness" => [],
    "WGL_ARB_extensions_string" => ["wglGetExtensionsStringARB"],
    "WGL_ARB_framebuffer_sRGB" => [],
    "WGL_ARB_make_current_read" => [
        "wglGetCurrentReadDCARB",
        "wglMakeContextCurrentARB",
    ],
    "WGL_ARB_multisample" => [],
    "WGL_ARB_pbuffer" => [
        "wglCreatePbufferARB",
        "wglDestroyPbufferARB",
        "wglGetPbufferDCARB",
        "wglQueryPbufferARB",
        "wglReleasePbufferDCARB",
    ],
    "WGL_ARB_pixel_format" => [
        "wglChoosePixelFormatARB",
        "wglGetPixelFormatAttribfvARB",
        "wglGetPixelFormatAttribivARB",
    ],
    "WGL_ARB_pixel_format_float" => [],
    "WGL_ARB_render_texture" => [
        "wglBindTexImageARB",
        "wglReleaseTexImageARB",
        "wglSetPbufferAttribARB",
    ],
    "WGL_EXT_create_context_es2_profile" => [],
    "WGL_EXT_extensions_string" => ["wglGetExtensionsStringEXT"],
    "WGL_EXT_framebuffer_sRGB" => [],
    "WGL_EXT_swap_control" => [
        "wglGetSwapIntervalEXT",
        "wglSwapIntervalEXT",
    ],
    "WGL_EXT_swap_control_tear" => [],
    "WGL_NV_DX_interop" => [
        "wglDXCloseDeviceNV",
        "wglDXLockObjectsNV",
        "wglDXObjectAccessNV",
        "wglDXOpenDeviceNV",
        "wglDXRegisterObjectNV",
        "wglDXSetResourceShareHandleNV",
        "wglDXUnlockObjectsNV",
        "wglDXUnregisterObjectNV",
    ],
    "WGL_NV_DX_interop2" => [],
];

/// Loads the WGL extensions advertised for `hdc`.
///
/// A driver without `wglGetExtensionsStringARB` yields an empty set, not
/// an error; WGL extensions are strictly optional.
pub fn load_wgl_extensions<R: FunctionResolver>(
    resolver: &R,
    hdc: HDC,
) -> WindowSystemExtensions {
    let query = resolver.lookup("wglGetExtensionsStringARB");
    if query.is_null() {
        warn!("glfetch: wglGetExtensionsStringARB unavailable, loading no WGL extensions");
        return WindowSystemExtensions::empty();
    }
    let query: GetExtensionsStringARBFn = unsafe { mem::transmute(query) };

    let extension_string = unsafe {
        let pointer = query(hdc);
        if pointer.is_null() {
            String::new()
        } else {
            CStr::from_ptr(pointer).to_string_lossy().into_owned()
        }
    };
    WindowSystemExtensions::from_extension_string(&extension_string, WGL_EXTENSIONS, resolver)
}
