//! Loss of the stop codon.

use crate::checkers::EffectChecker;
use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};

/// Matches variants hitting the stop codon whose translation no longer ends in a stop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopLossEffectChecker;

impl EffectChecker for StopLossEffectChecker {
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect> {
        if !ctx.transcript().is_coding() || !ctx.is_stop_codon_affected() {
            return None;
        }

        let amino_acids = match ctx.amino_acids() {
            Ok(amino_acids) => amino_acids,
            Err(e) => {
                log::debug!("cannot check stop loss of {}: {}", ctx.variant(), e);
                return None;
            }
        };
        if !amino_acids.loses_stop() {
            return None;
        }

        let mut effect = Effect::with_protein_position(EffectType::NoEnd, ctx);
        effect.set_amino_acids(amino_acids);
        Some(effect)
    }
}
