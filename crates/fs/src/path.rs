// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Virtual path helpers.
//!
//! Capabilities work on absolute, `/`-separated paths. These helpers keep
//! that model independent of the host's `std::path` conventions.

/// Normalize an absolute path: collapse repeated separators, drop `.`
/// segments and resolve `..` (never above the root).
///
/// ```ignore
/// use fsh_fs::path::normalize;
///
/// assert_eq!(normalize("/a//b/./c/../d/"), "/a/b/d");
/// assert_eq!(normalize("/.."), "/");
/// ```
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Resolve `path` against `cwd` and normalize the result.
pub fn resolve(cwd: &str, path: &str) -> String {
    if path.starts_with('/') {
        normalize(path)
    } else {
        normalize(&format!("{cwd}/{path}"))
    }
}

/// Join a directory and a child name.
pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Final segment of a path (`"/"` for the root).
pub fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Parent directory of a normalized absolute path, `None` for the root.
pub fn parent(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.rfind('/') {
        Some(0) => Some("/"),
        Some(i) => Some(&trimmed[..i]),
        None => None,
    }
}

/// Whether `path` lies strictly inside `dir`.
pub fn is_descendant(path: &str, dir: &str) -> bool {
    if dir == "/" {
        return path != "/" && path.starts_with('/');
    }
    path.len() > dir.len() && path.starts_with(dir) && path.as_bytes()[dir.len()] == b'/'
}

/// Escape glob metacharacters so `text` matches only itself.
pub fn escape_pattern(text: &str) -> String {
    glob::Pattern::escape(text)
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
