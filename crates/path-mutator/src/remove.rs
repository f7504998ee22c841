use crate::error::MutateError;
use crate::options::MutateOptions;
use crate::tree::Tree;
use crate::walk::{walk, Terminal, Vivify};

/// Copy `obj` and delete the value at `property_path` in the copy.
///
/// A plain terminal segment deletes the key. An indexed terminal segment
/// splices one element out of the sequence, shifting later elements left.
///
/// The walk creates missing structure before deleting, the same way
/// [`update`](crate::update) does. `remove({}, "x.y")` therefore returns
/// `{"x": {}}`, and removing past the end of a sequence first pads it with
/// holes. Use [`remove_with`] and [`MutateOptions::strict`] to leave missing
/// paths untouched instead.
///
/// # Errors
///
/// Same as [`update`](crate::update).
///
/// # Example
///
/// ```
/// use path_mutator::{remove, Tree};
/// use serde_json::json;
///
/// let doc = Tree::from(json!({"a": [1, 2, 3], "b": {"c": 1, "d": 2}}));
/// let out = remove(&doc, "a[1]").unwrap();
/// let out = remove(&out, "b.c").unwrap();
/// assert_eq!(serde_json::Value::from(&out), json!({"a": [1, 3], "b": {"d": 2}}));
/// ```
pub fn remove(obj: &Tree, property_path: &str) -> Result<Tree, MutateError> {
    remove_with(obj, property_path, &MutateOptions::default())
}

/// [`remove`] with explicit options.
pub fn remove_with(
    obj: &Tree,
    property_path: &str,
    options: &MutateOptions,
) -> Result<Tree, MutateError> {
    let vivify = if options.vivify_on_remove {
        Vivify::Create
    } else {
        Vivify::Skip
    };
    walk(obj, property_path, vivify, options, |terminal| {
        match terminal {
            Terminal::Key { map, name } => {
                map.shift_remove(name);
            }
            Terminal::Element { seq, index } => {
                if index < seq.len() {
                    seq.remove(index);
                }
            }
        }
        Ok(())
    })
}
