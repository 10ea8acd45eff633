//! Interview-completeness pass.
//!
//! Groups the compiled interview questions by `(region, side)` and checks
//! that the pain question and its conditional follow-ups are fully answered
//! for each pair.

use std::collections::BTreeMap;

use dctmd_compile::CompiledExam;
use dctmd_model::{PainType, QuestionInstance, Region, Side, YES};

use crate::report::{IncompleteRegion, InterviewReport};
use crate::value::{ValueSource, is_empty_value};

#[derive(Default)]
struct RegionSlots<'a> {
    pain: Option<&'a QuestionInstance>,
    familiar_pain: Option<&'a QuestionInstance>,
    familiar_headache: Option<&'a QuestionInstance>,
}

/// Check every `(region, side)` interview group for unanswered questions.
/// Follow-ups are only required while `pain` is answered `"yes"`; the
/// familiar-headache flag applies only where the model asks that question.
pub fn validate_interview_completion(
    exam: &CompiledExam,
    source: &impl ValueSource,
) -> InterviewReport {
    // BTreeMap keeps the emitted records in (region, side) order.
    let mut groups: BTreeMap<(Region, Side), RegionSlots<'_>> = BTreeMap::new();
    for instance in exam.all() {
        let (Some(region), Some(side)) = (instance.context.region, instance.context.side) else {
            continue;
        };
        let slots = groups.entry((region, side)).or_default();
        match instance.context.pain_type {
            Some(PainType::Pain) => slots.pain = Some(instance),
            Some(PainType::FamiliarPain) => slots.familiar_pain = Some(instance),
            Some(PainType::FamiliarHeadache) => slots.familiar_headache = Some(instance),
            _ => {}
        }
    }

    let mut incomplete = Vec::new();
    for ((region, side), slots) in groups {
        let is_empty = |slot: Option<&QuestionInstance>| {
            slot.is_some_and(|instance| is_empty_value(&source.value(&instance.path)))
        };
        let pain_is_yes = slots
            .pain
            .is_some_and(|instance| source.value(&instance.path).as_str() == Some(YES));

        let missing_pain = is_empty(slots.pain);
        let missing_familiar_pain = pain_is_yes && is_empty(slots.familiar_pain);
        let missing_familiar_headache = pain_is_yes && is_empty(slots.familiar_headache);

        if missing_pain || missing_familiar_pain || missing_familiar_headache {
            incomplete.push(IncompleteRegion {
                region,
                side,
                missing_pain,
                missing_familiar_pain,
                missing_familiar_headache,
            });
        }
    }
    InterviewReport { incomplete }
}
