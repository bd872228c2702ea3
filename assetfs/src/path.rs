//! Helpers for slash-separated asset paths.
//!
//! Asset paths are relative; the root directory is the empty string.

/// Strips any leading slashes from `path`.
pub fn normalize(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// The final path component, or the path itself when it has none.
pub fn base_name(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((_, base)) => base,
        None => path,
    }
}

/// Joins a child name onto a parent directory path. Children of the root
/// join to bare names.
pub fn join(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_owned()
    } else {
        format!("{parent}/{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_leading_slashes() {
        assert_eq!(normalize("/hello.txt"), "hello.txt");
        assert_eq!(normalize("//hello/world.txt"), "hello/world.txt");
        assert_eq!(normalize("hello.txt"), "hello.txt");
        assert_eq!(normalize("/"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("hello/world.txt"), "world.txt");
        assert_eq!(base_name("a/b/c"), "c");
        assert_eq!(base_name("hello.txt"), "hello.txt");
        assert_eq!(base_name(""), "");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "hello"), "hello");
        assert_eq!(join("hello", "world.txt"), "hello/world.txt");
    }
}
