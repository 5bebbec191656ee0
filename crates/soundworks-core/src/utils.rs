//! Name sanitising and file tree helpers

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::fs;
use std::sync::LazyLock;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Files never copied from templates
pub const IGNORE_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

static INVALID_PACKAGE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9~.-]+").expect("package name regex is valid"));

static RESERVED_FILENAME_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[<>:"/\\|?*\x00-\x1F]+"#).expect("filename regex is valid")
});

/// Convert a project name into a valid npm package name
pub fn to_valid_package_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let dashed = WHITESPACE_RE.replace_all(&lower, "-");
    let stripped = dashed
        .strip_prefix(['.', '_'])
        .unwrap_or(&dashed);
    INVALID_PACKAGE_CHARS_RE
        .replace_all(stripped, "-")
        .into_owned()
}

/// Make `input` safe to use as a file name, appending `ext` when missing
pub fn to_valid_filename(input: &str, ext: Option<&str>) -> String {
    let mut name = RESERVED_FILENAME_CHARS_RE
        .replace_all(input.trim(), "!")
        .into_owned();

    if name == "." || name == ".." {
        name = "!".to_string();
    }

    if let Some(ext) = ext {
        if !name.ends_with(ext) {
            name.push_str(ext);
        }
    }

    name
}

/// Whether `dir` exists and contains at least one entry
pub fn is_non_empty_dir(dir: &Utf8Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    Ok(fs::read_dir(dir)?.next().is_some())
}

/// Recursively copy `src` into `dest`, skipping [`IGNORE_FILES`]
///
/// Returns the written files.
pub fn copy_dir(src: &Utf8Path, dest: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    copy_dir_filtered(src, dest, |_| true)
}

/// Like [`copy_dir`], copying only the files for which `keep` returns true
///
/// `keep` receives paths relative to `src`.
pub fn copy_dir_filtered<F>(src: &Utf8Path, dest: &Utf8Path, keep: F) -> Result<Vec<Utf8PathBuf>>
where
    F: Fn(&Utf8Path) -> bool,
{
    if !src.is_dir() {
        return Err(Error::config_not_found(src.as_str()));
    }

    fs::create_dir_all(dest)?;
    let mut written = Vec::new();

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = Utf8Path::from_path(entry.path())
            .ok_or_else(|| Error::invalid_config(format!("Non UTF-8 path: {}", entry.path().display())))?;

        if path
            .file_name()
            .is_some_and(|name| IGNORE_FILES.contains(&name))
        {
            continue;
        }

        let relative = path.strip_prefix(src).unwrap_or(path);
        if !keep(relative) {
            continue;
        }

        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &target)?;
        written.push(target);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_to_valid_package_name() {
        assert_eq!(to_valid_package_name("My App"), "my-app");
        assert_eq!(to_valid_package_name("  _private thing "), "private-thing");
        assert_eq!(to_valid_package_name("a@b/c"), "a-b-c");
        assert_eq!(to_valid_package_name("v1.0~beta"), "v1.0~beta");
    }

    #[test]
    fn test_to_valid_filename() {
        assert_eq!(to_valid_filename("player", None), "player");
        assert_eq!(to_valid_filename("a/b:c", None), "a!b!c");
        assert_eq!(to_valid_filename("index", Some(".js")), "index.js");
        assert_eq!(to_valid_filename("index.js", Some(".js")), "index.js");
    }

    #[test]
    fn test_copy_dir_skips_ignored_files() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let src = root.join("src");
        std::fs::create_dir_all(src.join("views")).unwrap();
        std::fs::write(src.join("index.js"), "index").unwrap();
        std::fs::write(src.join("views/layout.js"), "layout").unwrap();
        std::fs::write(src.join(".DS_Store"), "").unwrap();

        let dest = root.join("dest");
        let written = copy_dir(&src, &dest).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(std::fs::read_to_string(dest.join("views/layout.js")).unwrap(), "layout");
        assert!(!dest.join(".DS_Store").exists());
        assert!(is_non_empty_dir(&dest).unwrap());
    }

    #[test]
    fn test_copy_dir_filtered() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let src = root.join("src");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::write(src.join("keep.js"), "").unwrap();
        std::fs::write(src.join("template-infos.json"), "{}").unwrap();

        let dest = root.join("dest");
        copy_dir_filtered(&src, &dest, |rel| rel.as_str() != "template-infos.json").unwrap();

        assert!(dest.join("keep.js").exists());
        assert!(!dest.join("template-infos.json").exists());
    }

    #[test]
    fn test_copy_missing_dir() {
        let err = copy_dir(Utf8Path::new("/not/here"), Utf8Path::new("/tmp/x")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }
}
