use crate::path::PropertyPath;
use crate::tree::Tree;

/// Get the value at a property path without creating anything.
///
/// Returns `None` if a key is missing, an index is past the end or lands on
/// a hole, or the path descends into something that is not the container
/// the segment asks for. An explicit `null` is returned as a value.
///
/// # Example
///
/// ```
/// use path_mutator::{get, Tree};
/// use serde_json::json;
///
/// let doc = Tree::from(json!({"a": {"b": [10, 20]}}));
/// assert_eq!(get(&doc, "a.b[1]"), Some(&Tree::Integer(20)));
/// assert_eq!(get(&doc, "a.c"), None);
/// ```
pub fn get<'a>(tree: &'a Tree, property_path: &str) -> Option<&'a Tree> {
    get_path(tree, &PropertyPath::parse(property_path))
}

/// [`get`] for an already parsed path.
pub fn get_path<'a>(tree: &'a Tree, path: &PropertyPath) -> Option<&'a Tree> {
    let mut current = tree;
    for segment in path.segments() {
        let child = current.as_mapping().ok()?.get(&segment.name)?;
        current = match segment.index {
            None => child,
            Some(index) => child.as_sequence().ok()?.get(index)?,
        };
    }
    match current {
        Tree::Undefined => None,
        found => Some(found),
    }
}
