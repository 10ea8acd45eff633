//! Integration tests for the compiled registry over a realistic
//! opening-movement section: a raw measurement and an abort flag merged with
//! the per-side pain interview.

use dctmd_compile::{CompiledExam, StepDef};
use dctmd_model::builders::pain_interview;
use dctmd_model::{
    ContextFilter, ModelError, ModelNode, PainType, Primitive, Region, Side, group, question,
};
use serde_json::json;

fn opening_model() -> ModelNode {
    let mut max_unassisted = group([
        (
            "measurement",
            question(Primitive::measurement().required().with_range(0.0, 85.0)),
        ),
        ("terminated", question(Primitive::checkbox())),
    ]);
    for (key, node) in pain_interview(&[Region::Temporalis, Region::Masseter]).into_children() {
        max_unassisted.insert(key, node);
    }
    group([("max_unassisted", max_unassisted.into())]).into()
}

fn compiled() -> CompiledExam {
    CompiledExam::compile("exam", &opening_model())
}

#[test]
fn instance_list_follows_traversal_order() {
    let exam = compiled();
    let paths: Vec<_> = exam.all().iter().map(|i| i.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "exam.max_unassisted.measurement",
            "exam.max_unassisted.terminated",
            "exam.max_unassisted.left.temporalis.pain",
            "exam.max_unassisted.left.temporalis.familiar_pain",
            "exam.max_unassisted.left.temporalis.familiar_headache",
            "exam.max_unassisted.left.masseter.pain",
            "exam.max_unassisted.left.masseter.familiar_pain",
            "exam.max_unassisted.right.temporalis.pain",
            "exam.max_unassisted.right.temporalis.familiar_pain",
            "exam.max_unassisted.right.temporalis.familiar_headache",
            "exam.max_unassisted.right.masseter.pain",
            "exam.max_unassisted.right.masseter.familiar_pain",
        ]
    );
}

#[test]
fn get_and_has() {
    let exam = compiled();
    let instance = exam.get("exam.max_unassisted.left.temporalis.pain").unwrap();
    assert_eq!(instance.context.side, Some(Side::Left));
    assert_eq!(instance.context.region, Some(Region::Temporalis));
    assert_eq!(instance.context.pain_type, Some(PainType::Pain));

    assert!(exam.has("exam.max_unassisted.terminated"));
    assert!(!exam.has("exam.max_unassisted.opened"));
}

#[test]
fn get_unknown_path_fails_fast() {
    let exam = compiled();
    let err = exam.get("exam.max_unassisted.opened").unwrap_err();
    assert!(matches!(err, ModelError::UnknownPath(path) if path == "exam.max_unassisted.opened"));
}

#[test]
fn context_queries() {
    let exam = compiled();

    // 5 interview questions per side.
    assert_eq!(exam.by_side(Side::Left).len(), 5);
    assert_eq!(exam.by_side(Side::Right).len(), 5);

    // Temporalis asks three questions per side, masseter two.
    assert_eq!(exam.by_region(Region::Temporalis).len(), 6);
    assert_eq!(exam.by_region(Region::Masseter).len(), 4);

    let filter = ContextFilter::side(Side::Right).and_pain_type(PainType::FamiliarHeadache);
    let matched = exam.by_context(&filter);
    assert_eq!(matched.len(), 1);
    assert_eq!(
        matched[0].path,
        "exam.max_unassisted.right.temporalis.familiar_headache"
    );
}

#[test]
fn kind_queries() {
    let exam = compiled();
    assert_eq!(exam.measurements().len(), 1);
    assert_eq!(exam.yes_no_questions().len(), 10);
}

#[test]
fn interview_questions_excludes_bare_leaves() {
    let exam = compiled();
    let all = exam.interview_questions(None);
    assert_eq!(all.len(), 10);
    assert!(all.iter().all(|i| i.context.side.is_some()));

    let left_only = exam.interview_questions(Some("exam.max_unassisted.left"));
    assert_eq!(left_only.len(), 5);
}

#[test]
fn prefix_step_expands_to_sided_instances_only() {
    let exam = compiled();
    let paths = exam.resolve_step(&StepDef::prefix("max_unassisted"));
    assert_eq!(paths.len(), 10);
    assert!(!paths.contains(&"exam.max_unassisted.measurement".to_string()));
    assert!(!paths.contains(&"exam.max_unassisted.terminated".to_string()));
    assert_eq!(paths[0], "exam.max_unassisted.left.temporalis.pain");
}

#[test]
fn explicit_step_prepends_root_key() {
    let exam = compiled();
    let step = StepDef::explicit(["max_unassisted.measurement", "max_unassisted.terminated"]);
    assert_eq!(
        exam.resolve_step(&step),
        vec![
            "exam.max_unassisted.measurement".to_string(),
            "exam.max_unassisted.terminated".to_string(),
        ]
    );
}

#[test]
fn defaults_seed_the_expected_value_tree() {
    let exam = compiled();
    let defaults = exam.defaults();
    assert_eq!(defaults["max_unassisted"]["measurement"], json!(null));
    assert_eq!(defaults["max_unassisted"]["terminated"], json!(false));
    assert_eq!(
        defaults["max_unassisted"]["left"]["temporalis"]["pain"],
        json!(null)
    );

    // Note: the defaults/schema tree is keyed from the model root's
    // children; the root key only prefixes instance paths.
    let issues = exam.schema().check(defaults);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}
