//! Path helpers for the invocation compiler.

use std::io;
use std::path::{Path, PathBuf};

/// Returns an absolute form of `path` without touching the filesystem
/// beyond reading the current directory.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Replaces the extension of `path` with `suffix`, preserving the directory.
///
/// The suffix carries its own extension and is appended to the base name with
/// the original extension stripped: `out/Gen.java` with suffix `Intf.java`
/// becomes `out/GenIntf.java`, with suffix `.h` becomes `out/Gen.h`.
pub fn replace_extension(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(suffix);
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replace_extension_with_dotted_suffix() {
        assert_eq!(
            replace_extension(Path::new("out/Gen.c"), ".h"),
            PathBuf::from("out/Gen.h")
        );
    }

    #[test]
    fn test_replace_extension_with_name_suffix() {
        assert_eq!(
            replace_extension(Path::new("out/Gen.java"), "Intf.java"),
            PathBuf::from("out/GenIntf.java")
        );
    }

    #[test]
    fn test_replace_extension_preserves_directory() {
        assert_eq!(
            replace_extension(Path::new("/abs/dir/Parser.pas"), ".inc"),
            PathBuf::from("/abs/dir/Parser.inc")
        );
    }

    #[test]
    fn test_replace_extension_bare_filename() {
        assert_eq!(
            replace_extension(Path::new("Gen.java"), "Intf.java"),
            PathBuf::from("GenIntf.java")
        );
    }

    #[test]
    fn test_replace_extension_no_extension() {
        assert_eq!(
            replace_extension(Path::new("out/Gen"), ".h"),
            PathBuf::from("out/Gen.h")
        );
    }

    #[test]
    fn test_absolutize_keeps_absolute_paths() {
        let abs = if cfg!(windows) {
            Path::new("C:\\work\\g.syx")
        } else {
            Path::new("/work/g.syx")
        };
        assert_eq!(absolutize(abs).unwrap(), abs.to_path_buf());
    }

    #[test]
    fn test_absolutize_anchors_relative_paths() {
        let abs = absolutize(Path::new("g.syx")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("g.syx"));
    }
}
