use serde::{Deserialize, Serialize};

use crate::vocab::{PainType, Region, Side};

/// A typed context annotation attached to a model node at construction time.
/// Builders tag the side, region and pain-type levels of the trees they
/// produce; untagged nodes never extend context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextTag {
    Side(Side),
    Region(Region),
    PainType(PainType),
}

/// Context accumulated top-down while flattening the model tree. Each tag
/// encountered on the walk fills (or overwrites) its slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub side: Option<Side>,
    pub region: Option<Region>,
    pub pain_type: Option<PainType>,
}

impl Context {
    pub fn with(mut self, tag: ContextTag) -> Self {
        match tag {
            ContextTag::Side(side) => self.side = Some(side),
            ContextTag::Region(region) => self.region = Some(region),
            ContextTag::PainType(pain_type) => self.pain_type = Some(pain_type),
        }
        self
    }
}

/// Partial context used by the path-helper queries: every populated slot
/// must match (AND semantics), empty slots match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextFilter {
    pub side: Option<Side>,
    pub region: Option<Region>,
    pub pain_type: Option<PainType>,
}

impl ContextFilter {
    pub fn side(side: Side) -> Self {
        Self {
            side: Some(side),
            ..Self::default()
        }
    }

    pub fn region(region: Region) -> Self {
        Self {
            region: Some(region),
            ..Self::default()
        }
    }

    pub fn pain_type(pain_type: PainType) -> Self {
        Self {
            pain_type: Some(pain_type),
            ..Self::default()
        }
    }

    pub fn and_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn and_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn and_pain_type(mut self, pain_type: PainType) -> Self {
        self.pain_type = Some(pain_type);
        self
    }

    pub fn matches(&self, context: &Context) -> bool {
        self.side.is_none_or(|side| context.side == Some(side))
            && self.region.is_none_or(|region| context.region == Some(region))
            && self
                .pain_type
                .is_none_or(|pain_type| context.pain_type == Some(pain_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_fill_slots_independently() {
        let ctx = Context::default()
            .with(ContextTag::Side(Side::Left))
            .with(ContextTag::Region(Region::Masseter));
        assert_eq!(ctx.side, Some(Side::Left));
        assert_eq!(ctx.region, Some(Region::Masseter));
        assert_eq!(ctx.pain_type, None);
    }

    #[test]
    fn filter_matches_on_populated_slots_only() {
        let ctx = Context::default()
            .with(ContextTag::Side(Side::Right))
            .with(ContextTag::Region(Region::Temporalis))
            .with(ContextTag::PainType(PainType::Pain));

        assert!(ContextFilter::default().matches(&ctx));
        assert!(ContextFilter::side(Side::Right).matches(&ctx));
        assert!(
            ContextFilter::side(Side::Right)
                .and_region(Region::Temporalis)
                .matches(&ctx)
        );
        assert!(!ContextFilter::side(Side::Left).matches(&ctx));
        assert!(!ContextFilter::region(Region::Masseter).matches(&ctx));
    }
}
