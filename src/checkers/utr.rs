//! Variants in untranslated regions and their introns.

use crate::checkers::{intronic_effect, EffectChecker};
use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};
use crate::transcript::Strand;

/// Matches variants upstream of `cds.0` or downstream of `cds.1`, and variants in the stop
/// codon that keep the stop in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtrEffectChecker;

/// Side of the CDS a variant lies on, in genomic direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl UtrEffectChecker {
    fn check_stop_codon(ctx: &dyn VariantEffectContext) -> Option<Effect> {
        if !ctx.is_stop_codon_affected() || !ctx.has_3_utr_region() {
            return None;
        }
        let amino_acids = ctx.amino_acids().ok()?;
        let stop_index = amino_acids.reference_stop_index()?;
        if amino_acids.alternate_stop_index() != Some(stop_index) {
            return None;
        }

        Some(Effect {
            distance_from_coding: Some(0),
            ..Effect::with_protein_length(EffectType::Utr3, ctx)
        })
    }

    fn check_region(ctx: &dyn VariantEffectContext) -> Option<Effect> {
        let tm = ctx.transcript();
        let (cds_start, cds_end) = tm.cds();
        let variant = ctx.variant();
        let pos = variant.position();
        let last = variant.corrected_ref_position_last();

        let side = if pos < cds_start {
            Side::Left
        } else if pos > cds_end {
            Side::Right
        } else {
            return None;
        };
        let (exon_type, intron_type) = match (side, tm.strand()) {
            (Side::Left, Strand::Plus) | (Side::Right, Strand::Minus) => {
                (EffectType::Utr5, EffectType::Utr5Intron)
            }
            (Side::Left, Strand::Minus) | (Side::Right, Strand::Plus) => {
                (EffectType::Utr3, EffectType::Utr3Intron)
            }
        };

        for (idx, exon) in tm.exons().iter().enumerate() {
            if exon.overlaps(pos, last) {
                let distance = match side {
                    Side::Left => ctx.exonic_distance(last.min(cds_start), cds_start),
                    Side::Right => ctx.exonic_distance(cds_end, pos),
                };
                return Some(Effect {
                    distance_from_coding: Some(distance),
                    ..Effect::with_protein_length(exon_type, ctx)
                });
            }

            if idx > 0 {
                let prev = &tm.exons()[idx - 1];
                if prev.stop < pos && pos < exon.start {
                    return Some(intronic_effect(
                        intron_type,
                        ctx,
                        prev.stop,
                        exon.start,
                        idx,
                        false,
                    ));
                }
            }
        }

        log::trace!(
            "{} lies outside of the exons of {}",
            variant,
            tm.transcript_id()
        );
        None
    }
}

impl EffectChecker for UtrEffectChecker {
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect> {
        if !ctx.transcript().is_coding() {
            return None;
        }

        Self::check_stop_codon(ctx).or_else(|| Self::check_region(ctx))
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
