use crate::error::MutateError;
use crate::options::MutateOptions;
use crate::tree::Tree;
use crate::walk::{walk, Terminal, Vivify};

/// Copy `obj` and set `new_value` at `property_path` in the copy.
///
/// Missing or falsy containers along the path are replaced: a plain segment
/// gets an empty mapping, an indexed segment gets an empty sequence padded
/// with holes up to the index.
///
/// `new_value` is stored as given. Writing [`Tree::Undefined`] stores a hole:
/// [`get`](crate::get) reports nothing there and JSON output omits the key
/// (or shows `null` inside a sequence).
///
/// # Errors
///
/// - [`MutateError::TypeMismatch`] if the path descends into a truthy scalar,
///   or indexes something that is not a sequence
/// - [`MutateError::CapacityOverflow`] if a sequence cannot be padded up to
///   an index
/// - [`MutateError::Clone`] if `obj` cannot be copied
///
/// # Example
///
/// ```
/// use path_mutator::{update, Tree};
/// use serde_json::json;
///
/// let doc = Tree::from(json!({"a": {"b": 1}}));
/// let out = update(&doc, "a.c[1]", Tree::from("x")).unwrap();
/// assert_eq!(serde_json::Value::from(&out), json!({"a": {"b": 1, "c": [null, "x"]}}));
/// assert_eq!(doc, Tree::from(json!({"a": {"b": 1}})));
/// ```
pub fn update(obj: &Tree, property_path: &str, new_value: Tree) -> Result<Tree, MutateError> {
    update_with(obj, property_path, new_value, &MutateOptions::default())
}

/// [`update`] with explicit options.
///
/// With [`MutateOptions::max_index`] set, a larger index fails with
/// [`MutateError::IndexTooLarge`] before anything is copied or allocated.
pub fn update_with(
    obj: &Tree,
    property_path: &str,
    new_value: Tree,
    options: &MutateOptions,
) -> Result<Tree, MutateError> {
    walk(obj, property_path, Vivify::Create, options, |terminal| {
        match terminal {
            Terminal::Key { map, name } => {
                map.insert(name.to_string(), new_value);
            }
            Terminal::Element { seq, index } => {
                seq[index] = new_value;
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeKind;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> Tree {
        Tree::from(value)
    }

    #[test]
    fn test_set_top_level_key() {
        let out = update(&tree(json!({"a": 1})), "b", Tree::Integer(2)).unwrap();
        assert_eq!(out, tree(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_overwrite_keeps_key_position() {
        let out = update(&tree(json!({"a": 1, "b": 2, "c": 3})), "b", Tree::Integer(9)).unwrap();
        let keys: Vec<&String> = out.as_mapping().unwrap().keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(out, tree(json!({"a": 1, "b": 9, "c": 3})));
    }

    #[test]
    fn test_deep_path_leaves_holes() {
        let out = update(&tree(json!({})), "a.b[2].c", Tree::Integer(5)).unwrap();
        let expected = Tree::Mapping(
            [(
                "a".to_string(),
                Tree::Mapping(
                    [(
                        "b".to_string(),
                        Tree::Sequence(vec![
                            Tree::Undefined,
                            Tree::Undefined,
                            tree(json!({"c": 5})),
                        ]),
                    )]
                    .into_iter()
                    .collect(),
                ),
            )]
            .into_iter()
            .collect(),
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_set_existing_element() {
        let out = update(&tree(json!({"a": [1, 2, 3]})), "a[1]", Tree::from("x")).unwrap();
        assert_eq!(out, tree(json!({"a": [1, "x", 3]})));
    }

    #[test]
    fn test_set_element_past_end() {
        let out = update(&tree(json!({"a": [1]})), "a[3]", Tree::Bool(true)).unwrap();
        assert_eq!(
            out,
            Tree::Mapping(
                [(
                    "a".to_string(),
                    Tree::Sequence(vec![
                        Tree::Integer(1),
                        Tree::Undefined,
                        Tree::Undefined,
                        Tree::Bool(true),
                    ]),
                )]
                .into_iter()
                .collect()
            )
        );
    }

    #[test]
    fn test_descends_through_existing_element() {
        let doc = tree(json!({"rows": [{"id": 1}, {"id": 2}]}));
        let out = update(&doc, "rows[1].name", Tree::from("two")).unwrap();
        assert_eq!(out, tree(json!({"rows": [{"id": 1}, {"id": 2, "name": "two"}]})));
    }

    #[test]
    fn test_falsy_intermediate_is_replaced() {
        let out = update(&tree(json!({"a": null})), "a.b", Tree::Integer(1)).unwrap();
        assert_eq!(out, tree(json!({"a": {"b": 1}})));

        let out = update(&tree(json!({"a": [0]})), "a[0].b", Tree::Integer(1)).unwrap();
        assert_eq!(out, tree(json!({"a": [{"b": 1}]})));
    }

    #[test]
    fn test_truthy_scalar_intermediate_is_a_type_mismatch() {
        let err = update(&tree(json!({"a": "text"})), "a.b.c", Tree::Null).unwrap_err();
        assert!(matches!(
            err,
            MutateError::TypeMismatch { ref segment, expected: TreeKind::Mapping, found: TreeKind::String }
                if segment == "b"
        ));
    }

    #[test]
    fn test_indexing_a_mapping_is_a_type_mismatch() {
        let err = update(&tree(json!({"a": {"x": 1}})), "a[0]", Tree::Null).unwrap_err();
        assert_eq!(
            err,
            MutateError::TypeMismatch {
                segment: "a[0]".to_string(),
                expected: TreeKind::Sequence,
                found: TreeKind::Mapping,
            }
        );
    }

    #[test]
    fn test_non_mapping_root_is_a_type_mismatch() {
        let err = update(&tree(json!([1, 2])), "0", Tree::Null).unwrap_err();
        assert!(matches!(err, MutateError::TypeMismatch { found: TreeKind::Sequence, .. }));
    }

    #[test]
    fn test_empty_path_sets_empty_key() {
        let out = update(&tree(json!({})), "", Tree::Integer(1)).unwrap();
        assert_eq!(out, tree(json!({"": 1})));
    }

    #[test]
    fn test_malformed_bracket_is_a_literal_key() {
        let out = update(&tree(json!({})), "a[x]", Tree::Integer(1)).unwrap();
        assert_eq!(out, tree(json!({"a[x]": 1})));
    }

    #[test]
    fn test_non_finite_input_fails_to_clone() {
        let doc = Tree::Mapping([("n".to_string(), Tree::Float(f64::NAN))].into_iter().collect());
        let err = update(&doc, "m", Tree::Null).unwrap_err();
        assert!(matches!(err, MutateError::Clone(crate::CloneError::NonFiniteNumber(_))));
    }

    #[test]
    fn test_index_above_a_million_is_padded_with_holes() {
        let index = (1usize << 20) + 10;
        let out = update(&tree(json!({})), &format!("a[{index}]"), Tree::Integer(1)).unwrap();
        let seq = out.as_mapping().unwrap()["a"].as_sequence().unwrap();
        assert_eq!(seq.len(), index + 1);
        assert_eq!(seq[index], Tree::Integer(1));
        assert_eq!(seq[index - 1], Tree::Undefined);
    }

    #[test]
    fn test_unallocatable_index_is_a_capacity_overflow() {
        let err = update(&tree(json!({})), "a[99999999999999999999999999]", Tree::Null).unwrap_err();
        assert_eq!(
            err,
            MutateError::CapacityOverflow {
                segment: format!("a[{}]", usize::MAX),
                index: usize::MAX,
            }
        );

        let err = update(&tree(json!({})), &format!("a[{}]", usize::MAX - 1), Tree::Null).unwrap_err();
        assert!(matches!(err, MutateError::CapacityOverflow { .. }));
    }

    #[test]
    fn test_max_index_option_rejects_larger_indices() {
        let options = MutateOptions {
            max_index: Some(3),
            ..MutateOptions::default()
        };
        let err = update_with(&tree(json!({})), "a[4]", Tree::Null, &options).unwrap_err();
        assert!(matches!(err, MutateError::IndexTooLarge { index: 4, max: 3, .. }));
        assert!(update_with(&tree(json!({})), "a[3]", Tree::Null, &options).is_ok());
    }

    #[test]
    fn test_nameless_index_addresses_empty_key() {
        let out = update(&tree(json!({})), "[0]", Tree::Integer(1)).unwrap();
        assert_eq!(out, tree(json!({"": [1]})));
    }

    #[test]
    fn test_undefined_value_is_a_hole() {
        let out = update(&tree(json!({"a": 1})), "k", Tree::Undefined).unwrap();
        assert_eq!(out.as_mapping().unwrap()["k"], Tree::Undefined);
        assert_eq!(crate::get(&out, "k"), None);
        assert_eq!(serde_json::Value::from(&out), json!({"a": 1}));
    }
}
