//! Builders for the repeated interview sub-trees of the examination model.
//!
//! A pain interview has the shape `{side → {region → questions}}` for every
//! side/region combination; generating it here keeps the shape contract in
//! one place instead of hand-duplicating dozens of question nodes.

use crate::context::ContextTag;
use crate::node::{GroupNode, ModelNode, group, question_labeled};
use crate::primitive::{Primitive, YES};
use crate::vocab::{PainType, Region, Side};

/// Build the standard per-side pain interview for the given regions:
/// `{side → {region → {pain, familiar_pain, [familiar_headache]}}}`.
///
/// The `pain` question is unconditional; `familiar_pain` and (for regions
/// with a headache follow-up) `familiar_headache` are enabled only while
/// `pain` is answered `"yes"`. Side, region and question nodes carry their
/// context annotations so the compiled instances can be queried by context.
pub fn pain_interview(regions: &[Region]) -> GroupNode {
    let mut sides = GroupNode::default();
    for side in Side::ALL {
        sides.insert(
            side.key(),
            ModelNode::from(region_interview(regions)).tagged(ContextTag::Side(side)),
        );
    }
    sides
}

fn region_interview(regions: &[Region]) -> GroupNode {
    let mut out = GroupNode::default();
    for &region in regions {
        out.insert(
            region.key(),
            ModelNode::from(region_questions(region)).tagged(ContextTag::Region(region)),
        );
    }
    out
}

fn region_questions(region: Region) -> GroupNode {
    let mut questions = group([(
        PainType::Pain.key(),
        pain_question(PainType::Pain, Primitive::yes_no().required()),
    )]);
    questions.insert(
        PainType::FamiliarPain.key(),
        pain_question(
            PainType::FamiliarPain,
            Primitive::yes_no()
                .required()
                .with_enable_when(PainType::Pain.key(), YES),
        ),
    );
    if region.requires_headache_followup() {
        questions.insert(
            PainType::FamiliarHeadache.key(),
            pain_question(
                PainType::FamiliarHeadache,
                Primitive::yes_no()
                    .required()
                    .with_enable_when(PainType::Pain.key(), YES),
            ),
        );
    }
    questions
}

fn pain_question(pain_type: PainType, primitive: Primitive) -> ModelNode {
    question_labeled(primitive, format!("question.{}", pain_type.key()))
        .tagged(ContextTag::PainType(pain_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child<'a>(node: &'a GroupNode, key: &str) -> &'a GroupNode {
        match node.children.get(key) {
            Some(ModelNode::Group(g)) => g,
            other => panic!("expected group at {key}, got {other:?}"),
        }
    }

    #[test]
    fn interview_shape_is_side_region_questions() {
        let interview = pain_interview(&[Region::Temporalis, Region::Masseter]);
        let sides: Vec<_> = interview.children.keys().map(String::as_str).collect();
        assert_eq!(sides, vec!["left", "right"]);

        for side in ["left", "right"] {
            let regions = child(&interview, side);
            let keys: Vec<_> = regions.children.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["temporalis", "masseter"]);
        }
    }

    #[test]
    fn headache_followup_only_where_required() {
        let interview = pain_interview(&[Region::Temporalis, Region::Masseter]);
        let left = child(&interview, "left");

        let temporalis = child(left, "temporalis");
        assert!(temporalis.children.contains_key("familiar_headache"));

        let masseter = child(left, "masseter");
        assert!(!masseter.children.contains_key("familiar_headache"));
        let keys: Vec<_> = masseter.children.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["pain", "familiar_pain"]);
    }

    #[test]
    fn followups_are_gated_on_pain_yes() {
        let interview = pain_interview(&[Region::Temporalis]);
        let temporalis = child(child(&interview, "right"), "temporalis");

        let pain = &temporalis.children["pain"];
        let familiar = &temporalis.children["familiar_pain"];
        let (ModelNode::Question(pain), ModelNode::Question(familiar)) = (pain, familiar) else {
            panic!("expected question nodes");
        };
        assert!(pain.primitive.config.enable_when.is_none());
        let rule = familiar.primitive.config.enable_when.as_ref().unwrap();
        assert_eq!(rule.sibling, "pain");
        assert_eq!(rule.equals, YES);
    }
}
