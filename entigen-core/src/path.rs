//! Relative import paths between generated output directories.

use std::path::{Component, Path, PathBuf};

/// Compute the relative import path from `from_dir` to `to_dir`.
///
/// The computation is purely lexical; neither directory has to exist. The
/// result always ends in `/` and starts with `./` or `../`, so it can be used
/// as an import specifier prefix directly.
///
/// ```
/// use entigen_core::relative_import_path;
///
/// assert_eq!(relative_import_path("src/models", "src/entities"), "../entities/");
/// assert_eq!(relative_import_path("src/models", "src/models"), "./");
/// ```
pub fn relative_import_path(from_dir: impl AsRef<Path>, to_dir: impl AsRef<Path>) -> String {
    let from = normalize(from_dir.as_ref());
    let to = normalize(to_dir.as_ref());

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    parts.extend(std::iter::repeat_n("..".to_string(), from.len() - common));
    parts.extend(to[common..].iter().cloned());

    if parts.is_empty() {
        return "./".to_string();
    }

    let mut joined = parts.join("/");
    joined.push('/');
    if !joined.starts_with("../") {
        joined.insert_str(0, "./");
    }
    joined
}

/// Resolve `.` and `..` lexically and split into components.
fn normalize(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.last().is_some_and(|p| p != "..") {
                    parts.pop();
                } else {
                    parts.push("..".to_string());
                }
            }
            Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
            Component::RootDir | Component::Prefix(_) => parts.clear(),
        }
    }
    parts
}

/// Build the on-disk path of a generated file.
pub fn output_file(root: &Path, dir: &str, file_name: &str, extension: &str) -> PathBuf {
    root.join(dir).join(format!("{file_name}.{extension}"))
}
