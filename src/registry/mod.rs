// glfetch/src/registry/mod.rs
//
//! The static description of what can be loaded: core command blocks per
//! version, the version table, and the extension table.

use crate::info::{GLVersion, Profile};

use std::collections::HashMap;

pub mod gl_core;
pub mod gl_ext;

/// One OpenGL extension: its advertised name and the commands it adds.
#[derive(Clone, Copy, Debug)]
pub struct Extension {
    pub name: &'static str,
    pub commands: &'static [&'static str],
}

/// Builds a static extension table out of `"name" => [commands]` rows.
macro_rules! extensions {
    ($($name:literal => [$($command:literal),* $(,)?],)*) => {
        &[$($crate::registry::Extension {
            name: $name,
            commands: &[$($command),*],
        }),*]
    };
}
pub(crate) use extensions;

/// One row of the version table: the command blocks to resolve for
/// "everything up through this version under this profile".
#[derive(Clone, Copy, Debug)]
pub struct VersionEntry {
    pub version: GLVersion,
    pub profile: Profile,
    pub blocks: &'static [&'static [&'static str]],
}

impl VersionEntry {
    /// Total number of commands across this row's blocks.
    pub fn command_count(&self) -> usize {
        self.blocks.iter().map(|block| block.len()).sum()
    }
}

lazy_static! {
    static ref EXTENSION_INDEX: HashMap<&'static str, &'static Extension> = {
        let mut index = HashMap::with_capacity(gl_ext::EXTENSIONS.len());
        for extension in gl_ext::EXTENSIONS {
            index.insert(extension.name, extension);
        }
        index
    };
}

/// Looks up an extension row by its advertised name. Exact, case-sensitive
/// match only.
pub fn find_extension(name: &str) -> Option<&'static Extension> {
    EXTENSION_INDEX.get(name).copied()
}

/// Looks up the version-table row matching `(version, profile)` exactly.
pub fn find_version_entry(
    version: GLVersion,
    profile: Profile,
) -> Option<&'static VersionEntry> {
    gl_core::VERSION_MAP
        .iter()
        .find(|entry| entry.version == version && entry.profile == profile)
}

/// The row the load driver falls back to when the reported version matches
/// nothing: the maximal version the table knows.
pub fn fallback_version_entry() -> Option<&'static VersionEntry> {
    find_version_entry(gl_core::FALLBACK_VERSION, Profile::Compatibility)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_row_is_indexed() {
        for extension in gl_ext::EXTENSIONS {
            let row = find_extension(extension.name)
                .unwrap_or_else(|| panic!("{} missing from index", extension.name));
            assert_eq!(row.name, extension.name);
        }
    }

    #[test]
    fn extension_names_are_unique() {
        assert_eq!(EXTENSION_INDEX.len(), gl_ext::EXTENSIONS.len());
    }

    #[test]
    fn lookup_is_exact_match_only() {
        assert!(find_extension("GL_ARB_copy_buffer").is_some());
        assert!(find_extension("GL_ARB_copy").is_none());
        assert!(find_extension("GL_ARB_copy_buffer_object").is_none());
        assert!(find_extension("gl_arb_copy_buffer").is_none());
        assert!(find_extension("").is_none());
    }

    #[test]
    fn version_rows_are_unique_and_exactly_matched() {
        for entry in gl_core::VERSION_MAP {
            let found = find_version_entry(entry.version, entry.profile).unwrap();
            assert_eq!(found.version, entry.version);
            assert_eq!(found.profile, entry.profile);
        }
        assert!(find_version_entry(GLVersion::new(0, 0), Profile::Core).is_none());
        assert!(find_version_entry(GLVersion::new(5, 0), Profile::Core).is_none());
        // 3.0 predates profiles, so there is no compatibility row for it.
        assert!(find_version_entry(GLVersion::new(3, 0), Profile::Compatibility).is_none());
    }

    #[test]
    fn fallback_row_is_the_maximal_compatibility_row() {
        let fallback = fallback_version_entry().unwrap();
        assert_eq!(fallback.version, GLVersion::new(4, 3));
        assert_eq!(fallback.profile, Profile::Compatibility);
        for entry in gl_core::VERSION_MAP {
            assert!(entry.version <= fallback.version);
        }
    }

    #[test]
    fn compatibility_rows_superset_their_core_rows() {
        for entry in gl_core::VERSION_MAP {
            if entry.profile != Profile::Compatibility {
                continue;
            }
            let core = find_version_entry(entry.version, Profile::Core).unwrap();
            assert!(entry.command_count() > core.command_count());
        }
    }
}
