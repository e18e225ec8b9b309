// glfetch/src/tests.rs
//
//! Unit tests: the load driver run against a mock GL driver.
//!
//! The mock state is process-global because the bootstrap commands are
//! plain `extern "C"` functions; every test that touches it is `#[serial]`.

use crate::ffi::{self, GLenum, GLint, GLubyte, GLuint};
use crate::loader::resolve_commands;
use crate::registry::Extension;
use crate::resolver::FunctionResolver;
use crate::{Error, GLVersion, GlLoader, Profile, WindowSystemExtensions};

use serial_test::serial;
use std::collections::{HashMap, HashSet};
use std::ffi::CString;
use std::os::raw::c_void;
use std::ptr;
use std::sync::Mutex;

struct MockGlState {
    version: CString,
    legacy_extensions: CString,
    extensions: Vec<CString>,
    profile_mask: GLint,
}

lazy_static! {
    static ref MOCK_GL: Mutex<MockGlState> = Mutex::new(MockGlState {
        version: CString::new("").unwrap(),
        legacy_extensions: CString::new("").unwrap(),
        extensions: Vec::new(),
        profile_mask: 0,
    });
}

fn set_mock_gl(version: &str, legacy_extensions: &str, extensions: &[&str], profile_mask: GLint) {
    let mut state = MOCK_GL.lock().unwrap();
    state.version = CString::new(version).unwrap();
    state.legacy_extensions = CString::new(legacy_extensions).unwrap();
    state.extensions = extensions
        .iter()
        .map(|name| CString::new(*name).unwrap())
        .collect();
    state.profile_mask = profile_mask;
}

unsafe extern "C" fn mock_get_string(name: GLenum) -> *const GLubyte {
    let state = MOCK_GL.lock().unwrap();
    match name {
        ffi::VERSION => state.version.as_ptr() as *const GLubyte,
        ffi::EXTENSIONS => state.legacy_extensions.as_ptr() as *const GLubyte,
        _ => ptr::null(),
    }
}

unsafe extern "C" fn mock_get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
    let state = MOCK_GL.lock().unwrap();
    if name != ffi::EXTENSIONS {
        return ptr::null();
    }
    match state.extensions.get(index as usize) {
        Some(extension) => extension.as_ptr() as *const GLubyte,
        None => ptr::null(),
    }
}

unsafe extern "C" fn mock_get_integerv(pname: GLenum, data: *mut GLint) {
    let state = MOCK_GL.lock().unwrap();
    match pname {
        ffi::NUM_EXTENSIONS => *data = state.extensions.len() as GLint,
        ffi::CONTEXT_PROFILE_MASK => *data = state.profile_mask,
        _ => {}
    }
}

unsafe extern "C" fn mock_command() {}

/// Resolves everything against the mock driver, except the names it was
/// told to miss.
struct MockResolver {
    missing: HashSet<&'static str>,
}

impl MockResolver {
    fn succeeding() -> MockResolver {
        MockResolver {
            missing: HashSet::new(),
        }
    }

    fn with_missing(missing: &[&'static str]) -> MockResolver {
        MockResolver {
            missing: missing.iter().cloned().collect(),
        }
    }
}

impl FunctionResolver for MockResolver {
    fn lookup(&self, symbol_name: &str) -> *const c_void {
        if self.missing.contains(symbol_name) {
            return ptr::null();
        }
        match symbol_name {
            "glGetString" => mock_get_string as ffi::GetStringFn as *const c_void,
            "glGetStringi" => mock_get_stringi as ffi::GetStringiFn as *const c_void,
            "glGetIntegerv" => mock_get_integerv as ffi::GetIntegervFn as *const c_void,
            _ => mock_command as unsafe extern "C" fn() as *const c_void,
        }
    }
}

#[test]
#[serial]
fn legacy_context_loads_cleanly() {
    set_mock_gl("2.1 My Driver", "", &[], 0);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();

    assert_eq!(gl.version(), GLVersion::new(2, 1));
    assert_eq!(gl.profile(), Profile::Core);
    assert_eq!(gl.missing(), 0);
    assert!(gl.supports_version(2, 0));
    assert!(gl.supports_version(2, 1));
    assert!(!gl.supports_version(3, 0));

    // A 2.1 context carries the full legacy command set.
    assert!(gl.entry_point("glBegin").is_some());
    assert!(gl.entry_point("glUniformMatrix4x3fv").is_some());
    // ...but nothing newer.
    assert!(gl.entry_point("glBindVertexArray").is_none());
}

#[test]
#[serial]
fn indexed_extension_enumeration() {
    set_mock_gl("4.3", "", &["GL_ARB_copy_buffer"], 0x1);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();

    assert_eq!(gl.version(), GLVersion::new(4, 3));
    assert!(gl.has_extension("GL_ARB_copy_buffer"));
    assert!(gl.extension_status("GL_ARB_copy_buffer").unwrap().is_complete());
    assert!(gl.entry_point("glCopyBufferSubData").is_some());
    assert_eq!(gl.missing(), 0);
}

#[test]
#[serial]
fn garbage_version_falls_back_to_maximal_row() {
    set_mock_gl("garbage", "", &[], 0);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();

    assert_eq!(gl.version(), GLVersion::new(0, 0));
    assert_eq!(gl.missing(), 0);
    // The fallback row is 4.3 compatibility, so both ends of the command
    // spectrum are present.
    assert!(gl.entry_point("glBegin").is_some());
    assert!(gl.entry_point("glDispatchCompute").is_some());
}

#[test]
#[serial]
fn unresolvable_get_string_is_fatal() {
    set_mock_gl("4.3", "", &[], 0);
    let result = GlLoader::load_with(&MockResolver::with_missing(&["glGetString"]));
    assert_eq!(result.err(), Some(Error::GLFunctionNotFound));
}

#[test]
#[serial]
fn unresolvable_get_stringi_is_fatal_on_modern_contexts() {
    set_mock_gl("3.2", "", &[], 0x1);
    let result = GlLoader::load_with(&MockResolver::with_missing(&["glGetStringi"]));
    assert_eq!(result.err(), Some(Error::GLFunctionNotFound));

    // A legacy context never asks for it.
    set_mock_gl("2.1", "", &[], 0);
    let gl = GlLoader::load_with(&MockResolver::with_missing(&["glGetStringi"])).unwrap();
    assert_eq!(gl.missing(), 0);
}

#[test]
#[serial]
fn missing_commands_are_counted_not_fatal() {
    set_mock_gl("3.3", "", &["GL_ARB_copy_buffer"], 0x1);
    let gl = GlLoader::load_with(&MockResolver::with_missing(&["glCopyBufferSubData"])).unwrap();

    // The command is attempted once for the extension and once for the
    // 3.1 core block; both attempts count.
    assert_eq!(gl.missing(), 2);
    assert!(gl.entry_point("glCopyBufferSubData").is_none());

    let status = gl.extension_status("GL_ARB_copy_buffer").unwrap();
    assert!(gl.has_extension("GL_ARB_copy_buffer"));
    assert_eq!(status.missing, 1);
    assert!(!status.is_complete());
}

#[test]
#[serial]
fn reloading_is_idempotent() {
    set_mock_gl("3.3", "", &["GL_ARB_copy_buffer", "GL_ARB_compatibility"], 0x2);
    let resolver = MockResolver::succeeding();

    let first = GlLoader::load_with(&resolver).unwrap();
    let second = GlLoader::load_with(&resolver).unwrap();

    assert_eq!(first.version(), second.version());
    assert_eq!(first.profile(), second.profile());
    assert_eq!(first.missing(), second.missing());
    assert_eq!(first.loaded_count(), second.loaded_count());
    assert_eq!(
        first.has_extension("GL_ARB_copy_buffer"),
        second.has_extension("GL_ARB_copy_buffer")
    );
    assert_eq!(
        first.entry_point("glCopyBufferSubData"),
        second.entry_point("glCopyBufferSubData")
    );
}

#[test]
#[serial]
fn profile_of_3_0_is_core_with_legacy_commands() {
    set_mock_gl("3.0 Mesa 21.2.6", "", &[], 0);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();

    // Profiles don't exist at 3.0; the neutral value is core, but the
    // legacy commands are all still there.
    assert_eq!(gl.profile(), Profile::Core);
    assert!(gl.entry_point("glBegin").is_some());
}

#[test]
#[serial]
fn profile_of_3_1_follows_arb_compatibility() {
    set_mock_gl("3.1", "", &[], 0);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();
    assert_eq!(gl.profile(), Profile::Core);
    assert!(gl.entry_point("glBegin").is_none());

    set_mock_gl("3.1", "", &["GL_ARB_compatibility"], 0);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();
    assert_eq!(gl.profile(), Profile::Compatibility);
    assert!(gl.entry_point("glBegin").is_some());
}

#[test]
#[serial]
fn profile_mask_is_authoritative_when_set() {
    set_mock_gl("3.2", "", &[], 0x2);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();
    assert_eq!(gl.profile(), Profile::Compatibility);

    set_mock_gl("3.2", "", &[], 0x1);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();
    assert_eq!(gl.profile(), Profile::Core);
}

#[test]
#[serial]
fn zero_profile_mask_falls_back_to_arb_compatibility() {
    set_mock_gl("3.2", "", &["GL_ARB_compatibility"], 0);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();
    assert_eq!(gl.profile(), Profile::Compatibility);

    set_mock_gl("3.2", "", &[], 0);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();
    assert_eq!(gl.profile(), Profile::Core);
}

#[test]
#[serial]
fn unknown_extensions_are_ignored() {
    set_mock_gl("4.3", "", &["GL_FAKE_not_a_thing", "GL_ARB_copy_buffer"], 0x1);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();

    assert!(!gl.has_extension("GL_FAKE_not_a_thing"));
    assert!(gl.extension_status("GL_FAKE_not_a_thing").is_none());
    assert!(gl.has_extension("GL_ARB_copy_buffer"));
}

#[test]
#[serial]
fn legacy_extension_string_is_tokenized_on_whitespace() {
    set_mock_gl("2.1", "GL_ARB_multisample  GL_ARB_imaging GL_ARB_vertex_buffer_object", &[], 0);
    let gl = GlLoader::load_with(&MockResolver::succeeding()).unwrap();

    assert!(gl.has_extension("GL_ARB_multisample"));
    assert!(gl.has_extension("GL_ARB_vertex_buffer_object"));
    assert!(gl.entry_point("glBindBufferARB").is_some());
    // Capability-only flag: recorded as present, nothing to resolve.
    assert!(gl.extension_status("GL_ARB_imaging").unwrap().is_complete());
}

#[test]
fn resolve_commands_counts_exactly_the_misses() {
    let resolver = MockResolver::with_missing(&["glTwo", "glFour"]);
    let names: &[&str] = &["glOne", "glTwo", "glThree", "glFour"];
    let mut slots = HashMap::new();

    let missing = resolve_commands(&mut slots, names, &resolver);
    assert_eq!(missing, 2);
    assert!(slots.contains_key("glOne"));
    assert!(slots.contains_key("glThree"));
    assert!(!slots.contains_key("glTwo"));
    assert!(!slots.contains_key("glFour"));

    // A second pass over the same list never exceeds the list length.
    let missing = resolve_commands(&mut slots, names, &MockResolver::succeeding());
    assert_eq!(missing, 0);
    assert_eq!(slots.len(), 4);
}

static TEST_WINDOW_SYSTEM_TABLE: &[Extension] = &[
    Extension {
        name: "TEST_with_commands",
        commands: &["testCommandA", "testCommandB"],
    },
    Extension {
        name: "TEST_capability_only",
        commands: &[],
    },
];

#[test]
fn window_system_extensions_follow_the_advertised_string() {
    let loaded = WindowSystemExtensions::from_extension_string(
        "TEST_with_commands TEST_capability_only TEST_unknown",
        TEST_WINDOW_SYSTEM_TABLE,
        &MockResolver::succeeding(),
    );

    assert!(loaded.has_extension("TEST_with_commands"));
    assert!(loaded.entry_point("testCommandA").is_some());
    assert!(loaded.extension_status("TEST_capability_only").unwrap().is_complete());
    assert!(!loaded.has_extension("TEST_unknown"));
    assert_eq!(loaded.missing(), 0);

    let partial = WindowSystemExtensions::from_extension_string(
        "TEST_with_commands",
        TEST_WINDOW_SYSTEM_TABLE,
        &MockResolver::with_missing(&["testCommandB"]),
    );
    assert_eq!(partial.missing(), 1);
    assert_eq!(
        partial.extension_status("TEST_with_commands").unwrap().missing,
        1
    );
}
