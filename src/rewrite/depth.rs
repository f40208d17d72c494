//! Depth of a directory under a root, and the relative prefix it implies.

use std::path::{Component, Path};

/// Number of directory levels between `root` and `dir`.
///
/// `dir == root` is depth 0. A `dir` outside `root` is also treated as 0.
#[must_use]
pub fn depth(root: &Path, dir: &Path) -> usize {
    dir.strip_prefix(root).map_or(0, |rel| {
        rel.components().filter(|c| matches!(c, Component::Normal(_))).count()
    })
}

/// Relative path that climbs from a directory at `depth` back to the root.
///
/// `"./"` at depth 0, otherwise `"../"` once per level.
#[must_use]
pub fn prefix(depth: usize) -> String {
    if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_itself_is_depth_zero() {
        let root = Path::new("/repo/src");
        assert_eq!(depth(root, root), 0);
        assert_eq!(prefix(0), "./");
    }

    #[test]
    fn one_level_down() {
        assert_eq!(depth(Path::new("/repo/src"), Path::new("/repo/src/components")), 1);
        assert_eq!(prefix(1), "../");
    }

    #[test]
    fn three_levels_down() {
        let d = depth(Path::new("src"), Path::new("src/app/(shop)/cart"));
        assert_eq!(d, 3);
        assert_eq!(prefix(d), "../../../");
    }

    #[test]
    fn trailing_separator_and_dot_segments_do_not_count() {
        assert_eq!(depth(Path::new("src/"), Path::new("src/./lib")), 1);
        assert_eq!(depth(Path::new("./src"), Path::new("./src/lib/ui")), 2);
    }

    #[test]
    fn unrelated_directory_is_depth_zero() {
        assert_eq!(depth(Path::new("/a"), Path::new("/b/c")), 0);
    }
}
