// file: src/resolver/paths.rs
// description: platform independent path normalization and containment
// reference: lexical path handling, no filesystem access

use crate::error::{ResolveError, Result};
use std::path::Path;

/// True for `/x`, `\x` and drive-prefixed `C:...` paths on every host.
pub fn is_rooted(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('\\') || has_drive_prefix(path)
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Lexically normalize a path to forward slashes.
///
/// Repeated separators collapse, `.` segments vanish and `..` pops the
/// previous segment. A rooted path never climbs above its root; a relative
/// path keeps leading `..` segments it cannot resolve.
pub fn normalize(path: &str) -> String {
    let unified = path.replace('\\', "/");

    let (root, rest) = if has_drive_prefix(&unified) {
        (format!("{}/", &unified[..2]), &unified[2..])
    } else if unified.starts_with('/') {
        ("/".to_string(), unified.as_str())
    } else {
        (String::new(), unified.as_str())
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ if root.is_empty() => segments.push(".."),
                _ => {}
            },
            other => segments.push(other),
        }
    }

    format!("{}{}", root, segments.join("/"))
}

/// Whether `candidate` is `root` itself or lies below it.
pub fn is_descendant(root: &str, candidate: &str) -> bool {
    strip_root(root, candidate).is_some()
}

/// `candidate` relative to `root` with forward slashes; `None` when it is not
/// a descendant. The root itself maps to an empty string.
pub fn make_relative(root: &str, candidate: &str) -> Option<String> {
    strip_root(root, candidate)
}

fn strip_root(root: &str, candidate: &str) -> Option<String> {
    let root = normalize(root);
    let candidate = normalize(candidate);

    // An empty root contains nothing, not everything
    if root.is_empty() {
        return None;
    }

    // Drive letters and Windows paths in general are case-insensitive
    let prefix_matches = |len: usize| {
        if has_drive_prefix(&root) {
            candidate.as_bytes()[..len].eq_ignore_ascii_case(&root.as_bytes()[..len])
        } else {
            candidate.as_bytes()[..len] == root.as_bytes()[..len]
        }
    };

    if candidate.len() < root.len() || !prefix_matches(root.len()) {
        return None;
    }

    let rest = &candidate[root.len()..];
    if rest.is_empty() {
        return Some(String::new());
    }

    if root.ends_with('/') {
        return Some(rest.to_string());
    }

    rest.strip_prefix('/').map(str::to_string)
}

/// Path of `path` relative to the repository root.
///
/// `None` stays `None` (the repository root). Relative input is trusted and
/// returned unchanged, absolute input must live under `local_root`.
pub fn repository_relative_path(
    path: Option<&str>,
    local_root: Option<&Path>,
) -> Result<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };

    if !is_rooted(path) {
        return Ok(Some(path.to_string()));
    }

    let not_contained = || ResolveError::PathNotInRepository {
        path: path.to_string(),
        root: local_root.map(|root| root.to_string_lossy().into_owned()),
    };

    let root = local_root.ok_or_else(not_contained)?;
    let relative = make_relative(&root.to_string_lossy(), path).ok_or_else(not_contained)?;

    Ok(Some(relative))
}
