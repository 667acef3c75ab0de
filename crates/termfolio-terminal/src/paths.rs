//! Site sections the terminal treats as directories.
//!
//! Only the root has children. Each child is a page reachable at `/<name>`.

/// The home location.
pub const ROOT_PATH: &str = "/";

const ROOT_CHILDREN: &[&str] = &["about", "projects", "blog", "contact"];

/// Child names valid at `path`, in display order.
pub fn children(path: &str) -> &'static [&'static str] {
    match path {
        ROOT_PATH => ROOT_CHILDREN,
        _ => &[],
    }
}

/// Whether `name` is a child of the root.
pub fn is_root_child(name: &str) -> bool {
    ROOT_CHILDREN.contains(&name)
}

/// Resolve a `cd` target to an absolute path.
///
/// `/`, `~` and `..` go home; a bare root child goes to `/<name>`. Anything
/// else is not a known location.
pub fn resolve_target(target: &str) -> Option<String> {
    match target {
        "/" | "~" | ".." => Some(ROOT_PATH.to_string()),
        name if is_root_child(name) => Some(format!("/{name}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_children_in_order() {
        assert_eq!(children("/"), &["about", "projects", "blog", "contact"]);
    }

    #[test]
    fn non_root_has_no_children() {
        assert!(children("/about").is_empty());
        assert!(children("").is_empty());
    }

    #[test]
    fn resolve_home_aliases() {
        for t in ["/", "~", ".."] {
            assert_eq!(resolve_target(t).as_deref(), Some("/"));
        }
    }

    #[test]
    fn resolve_child_and_unknown() {
        assert_eq!(resolve_target("blog").as_deref(), Some("/blog"));
        assert_eq!(resolve_target("/blog"), None);
        assert_eq!(resolve_target("secrets"), None);
    }
}
