use path_mutator::{get, remove, update, MutateError, Tree};
use proptest::prelude::*;

fn arb_tree() -> impl Strategy<Value = Tree> {
    let leaf = prop_oneof![
        Just(Tree::Null),
        any::<bool>().prop_map(Tree::Bool),
        (-3i64..3).prop_map(Tree::Integer),
        "[a-c]{0,2}".prop_map(Tree::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Tree::Sequence),
            prop::collection::vec(("[a-c]", inner), 0..4)
                .prop_map(|entries| Tree::Mapping(entries.into_iter().collect())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Tree> {
    prop::collection::vec(("[a-c]", arb_tree()), 0..4)
        .prop_map(|entries| Tree::Mapping(entries.into_iter().collect()))
}

fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-c]", prop::option::of(0usize..3)), 1..4).prop_map(|segments| {
        segments
            .into_iter()
            .map(|(name, index)| match index {
                Some(i) => format!("{name}[{i}]"),
                None => name,
            })
            .collect::<Vec<_>>()
            .join(".")
    })
}

fn is_type_mismatch(result: &Result<Tree, MutateError>) -> bool {
    matches!(result, Err(MutateError::TypeMismatch { .. }))
}

proptest! {
    #[test]
    fn test_update_then_get_reads_back_value(doc in arb_document(), path in arb_path(), value in arb_tree()) {
        let result = update(&doc, &path, value.clone());
        if let Ok(out) = &result {
            prop_assert_eq!(get(out, &path), Some(&value));
        } else {
            prop_assert!(is_type_mismatch(&result));
        }
    }

    #[test]
    fn test_update_and_remove_leave_input_alone(doc in arb_document(), path in arb_path(), value in arb_tree()) {
        let before = doc.clone();
        let _ = update(&doc, &path, value);
        let _ = remove(&doc, &path);
        prop_assert_eq!(doc, before);
    }

    #[test]
    fn test_remove_after_update_deletes_key(doc in arb_document(), path in arb_path(), value in arb_tree()) {
        prop_assume!(!path.ends_with(']'));
        if let Ok(updated) = update(&doc, &path, value) {
            let removed = remove(&updated, &path).unwrap();
            prop_assert_eq!(get(&removed, &path), None);
        }
    }

    #[test]
    fn test_remove_after_update_shrinks_sequence_by_one(doc in arb_document(), path in arb_path(), value in arb_tree()) {
        prop_assume!(path.ends_with(']'));
        if let Ok(updated) = update(&doc, &path, value) {
            let (parent, _) = path.rsplit_once('[').unwrap();
            let before = get(&updated, parent).unwrap().as_sequence().unwrap().len();
            let removed = remove(&updated, &path).unwrap();
            let after = get(&removed, parent).unwrap().as_sequence().unwrap().len();
            prop_assert_eq!(after, before - 1);
        }
    }
}
