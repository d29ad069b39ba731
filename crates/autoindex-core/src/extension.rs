use std::path::Path;

/// Base name shared by every barrel file, regardless of extension.
pub const MARKER_STEM: &str = "autoindex";

/// Source-module extensions that can be barrelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleExtension {
    Ts,
    Tsx,
    Js,
    Jsx,
}

impl ModuleExtension {
    /// Matching is exact: `.TS` is not a module extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" => Some(ModuleExtension::Ts),
            "tsx" => Some(ModuleExtension::Tsx),
            "js" => Some(ModuleExtension::Js),
            "jsx" => Some(ModuleExtension::Jsx),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// File stem as a UTF-8 string, if it has one.
pub(crate) fn stem_of(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}

/// True when `path` names a barrel file: stem `autoindex` plus a module extension.
pub fn is_marker_path(path: &Path) -> bool {
    stem_of(path) == Some(MARKER_STEM) && ModuleExtension::from_path(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ModuleExtension::from_extension("ts"), Some(ModuleExtension::Ts));
        assert_eq!(ModuleExtension::from_extension("jsx"), Some(ModuleExtension::Jsx));
        assert_eq!(ModuleExtension::from_extension("md"), None);
        assert_eq!(ModuleExtension::from_extension("mjs"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(ModuleExtension::from_path(Path::new("a/b.tsx")), Some(ModuleExtension::Tsx));
        assert_eq!(ModuleExtension::from_path(Path::new("a/b.TS")), None);
        assert_eq!(ModuleExtension::from_path(Path::new("a/Makefile")), None);
    }

    #[test]
    fn test_is_marker_path() {
        assert!(is_marker_path(Path::new("src/autoindex.ts")));
        assert!(is_marker_path(Path::new("autoindex.jsx")));
        assert!(!is_marker_path(Path::new("src/autoindex.md")));
        assert!(!is_marker_path(Path::new("src/autoindex.d.ts")));
        assert!(!is_marker_path(Path::new("src/index.ts")));
        assert!(!is_marker_path(Path::new("src/autoindex")));
    }
}
