//! Variants on non-coding transcripts.

use crate::checkers::{intronic_effect, EffectChecker};
use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};

/// Classifies every variant on a non-coding transcript as exonic or intronic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodingEffectChecker;

impl EffectChecker for CodingEffectChecker {
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect> {
        let tm = ctx.transcript();
        if tm.is_coding() {
            return None;
        }

        let variant = ctx.variant();
        let pos = variant.position();
        let last = variant.corrected_ref_position_last();
        if tm.exons().iter().any(|exon| exon.overlaps(pos, last)) {
            return Some(Effect {
                length: Some(ctx.exonic_length()),
                ..Effect::with_context(EffectType::NonCoding, ctx)
            });
        }

        let intron = tm
            .exons()
            .windows(2)
            .position(|pair| pair[0].stop < pos && last < pair[1].start);
        Some(match intron {
            Some(idx) => intronic_effect(
                EffectType::NonCodingIntron,
                ctx,
                tm.exons()[idx].stop,
                tm.exons()[idx + 1].start,
                idx + 1,
                false,
            ),
            // outside of the exon span
            None => Effect::with_context(EffectType::NonCodingIntron, ctx),
        })
    }
}
