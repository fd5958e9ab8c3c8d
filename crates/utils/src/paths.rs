//! Lexical path utilities

use std::path::{Component, Path, PathBuf};

/// Remove `.` components and fold `..` into their parent, without touching
/// the file system.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) && normalized.pop();
                if !popped && !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Express `target` relative to the directory `base`.
///
/// Both paths are normalized lexically first. When they share no common
/// root (different prefixes on Windows, or one absolute and one relative)
/// the normalized `target` is returned unchanged. Equal paths give an empty
/// path.
pub fn relative_to(base: &Path, target: &Path) -> PathBuf {
    let base = normalize_lexically(base);
    let target = normalize_lexically(target);

    if base.has_root() != target.has_root() {
        return target;
    }

    let base_parts: Vec<Component<'_>> = base.components().collect();
    let target_parts: Vec<Component<'_>> = target.components().collect();

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 && base.has_root() {
        return target;
    }

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part.as_os_str());
    }
    relative
}
