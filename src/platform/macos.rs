// glfetch/src/platform/macos.rs
//
//! Symbol resolution through the OpenGL framework bundle.

use crate::error::Error;
use crate::resolver::FunctionResolver;

use core_foundation::base::TCFType;
use core_foundation::bundle::CFBundleGetBundleWithIdentifier;
use core_foundation::bundle::CFBundleGetFunctionPointerForName;
use core_foundation::bundle::CFBundleRef;
use core_foundation::string::CFString;
use std::os::raw::c_void;
use std::ptr;
use std::str::FromStr;

static OPENGL_FRAMEWORK_IDENTIFIER: &'static str = "com.apple.opengl";

thread_local! {
    static OPENGL_FRAMEWORK: CFBundleRef = {
        unsafe {
            let framework_identifier: CFString =
                FromStr::from_str(OPENGL_FRAMEWORK_IDENTIFIER).unwrap();
            CFBundleGetBundleWithIdentifier(framework_identifier.as_concrete_TypeRef())
        }
    };
}

/// Resolves against the system OpenGL framework. The framework exports
/// every entry point directly, so no per-context mechanism is involved.
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Result<SystemResolver, Error> {
        if OPENGL_FRAMEWORK.with(|framework| framework.is_null()) {
            return Err(Error::NoGLLibraryFound);
        }
        Ok(SystemResolver)
    }
}

impl FunctionResolver for SystemResolver {
    fn lookup(&self, symbol_name: &str) -> *const c_void {
        OPENGL_FRAMEWORK.with(|framework| unsafe {
            if framework.is_null() {
                return ptr::null();
            }
            let symbol_name: CFString = FromStr::from_str(symbol_name).unwrap();
            CFBundleGetFunctionPointerForName(*framework, symbol_name.as_concrete_TypeRef())
        })
    }
}
