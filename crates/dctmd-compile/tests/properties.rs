//! Property tests over arbitrary model trees.

use std::collections::HashSet;

use proptest::prelude::*;

use dctmd_compile::{compile_defaults, compile_instances, compile_schema};
use dctmd_model::{ModelNode, Primitive, group, question};

fn arb_primitive() -> impl Strategy<Value = Primitive> {
    prop_oneof![
        Just(Primitive::checkbox()),
        Just(Primitive::yes_no()),
        Just(Primitive::measurement().required()),
        Just(Primitive::choice(["mild", "moderate", "severe"])),
        Just(Primitive::multi_select(["click", "crepitus"])),
    ]
}

fn arb_tree() -> impl Strategy<Value = ModelNode> {
    let leaf = arb_primitive().prop_map(question);
    leaf.prop_recursive(4, 48, 5, |inner| {
        prop::collection::btree_map("[a-z]{1,6}", inner, 0..5)
            .prop_map(|children| ModelNode::from(group(children)))
    })
}

proptest! {
    #[test]
    fn instance_paths_are_globally_unique(tree in arb_tree()) {
        let instances = compile_instances("exam", &tree);
        let unique: HashSet<_> = instances.iter().map(|i| i.path.as_str()).collect();
        prop_assert_eq!(unique.len(), instances.len());
    }

    #[test]
    fn instance_count_equals_question_leaves(tree in arb_tree()) {
        let instances = compile_instances("exam", &tree);
        prop_assert_eq!(instances.len(), tree.question_count());
    }

    #[test]
    fn defaults_conform_to_compiled_schema(tree in arb_tree()) {
        let issues = compile_schema(&tree).check(&compile_defaults(&tree));
        prop_assert!(issues.is_empty(), "issues: {:?}", issues);
    }

    #[test]
    fn defaults_key_sets_mirror_group_children(tree in arb_tree()) {
        // Shape parity at the top level; deeper levels are covered by the
        // schema conformance property above.
        if let ModelNode::Group(g) = &tree {
            let defaults = compile_defaults(&tree);
            let object = defaults.as_object().unwrap();
            let expected: HashSet<_> = g.children.keys().cloned().collect();
            let actual: HashSet<_> = object.keys().cloned().collect();
            prop_assert_eq!(expected, actual);
        }
    }
}
