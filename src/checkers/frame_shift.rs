//! Insertions and deletions in the coding sequence.

use crate::checkers::EffectChecker;
use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};

/// Classifies coding indels as frame-shifting or frame-preserving.
///
/// Three cases are checked in order: a start codon that is hit but relocated, a stop codon
/// whose translated position moves, and indels inside the CDS away from the start and stop
/// codons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameShiftEffectChecker;

impl FrameShiftEffectChecker {
    fn create_effect(ctx: &dyn VariantEffectContext, length: i32) -> Option<Effect> {
        if length == 0 {
            return None;
        }

        let amino_acids = ctx.amino_acids();
        let effect_type = if length % 3 != 0 {
            EffectType::FrameShift
        } else if amino_acids.as_ref().is_ok_and(|aas| aas.gains_stop()) {
            EffectType::NoFrameShiftNewStop
        } else {
            EffectType::NoFrameShift
        };

        let mut effect = Effect::with_protein_position(effect_type, ctx);
        match amino_acids {
            Ok(amino_acids) => effect.set_amino_acids(amino_acids),
            Err(e) => log::debug!(
                "{} on {} without amino acid change: {}",
                effect_type,
                ctx.transcript().transcript_id(),
                e
            ),
        }
        Some(effect)
    }

    fn check_start_codon(ctx: &dyn VariantEffectContext) -> Option<Effect> {
        if !ctx.is_start_codon_affected() {
            return None;
        }
        let start_codon = ctx.find_start_codon()?;

        match start_codon.shift() {
            0 => Self::create_effect(ctx, ctx.variant().indel_length()),
            shift => Self::create_effect(ctx, shift),
        }
    }

    fn check_stop_codon(ctx: &dyn VariantEffectContext) -> Option<Effect> {
        if !ctx.is_stop_codon_affected() {
            return None;
        }
        let amino_acids = ctx.amino_acids().ok()?;

        // only a moved stop counts, a lost or gained one is left to other checkers
        match (
            amino_acids.reference_stop_index(),
            amino_acids.alternate_stop_index(),
        ) {
            (Some(reference), Some(alternate)) if reference != alternate => {
                Self::create_effect(ctx, ctx.variant().indel_length())
            }
            _ => None,
        }
    }

    fn check_coding_region(ctx: &dyn VariantEffectContext) -> Option<Effect> {
        let tm = ctx.transcript();
        let (cds_start, cds_end) = tm.cds();
        let pos = ctx.variant().position();

        let inside = tm.cds_regions(0).iter().any(|region| {
            // start and stop codon are handled separately
            let start = if region.start == cds_start {
                region.start + 3
            } else {
                region.start
            };
            let stop = if region.stop == cds_end {
                region.stop - 3
            } else {
                region.stop
            };
            start <= pos && pos <= stop
        });

        if inside {
            Self::create_effect(ctx, ctx.variant().indel_length())
        } else {
            None
        }
    }
}

impl EffectChecker for FrameShiftEffectChecker {
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect> {
        if !ctx.transcript().is_coding() {
            return None;
        }

        Self::check_start_codon(ctx)
            .or_else(|| Self::check_stop_codon(ctx))
            .or_else(|| Self::check_coding_region(ctx))
    }
}


// <LICENSE>
// Copyright 2023 hgvs-rs Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// </LICENSE>
