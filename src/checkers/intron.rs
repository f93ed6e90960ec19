//! Variants in introns of the coding sequence.

use crate::checkers::{intronic_effect, EffectChecker};
use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};

/// Matches variants lying entirely within an intron flanked by coding exons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntronicEffectChecker;

impl EffectChecker for IntronicEffectChecker {
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect> {
        let tm = ctx.transcript();
        if !tm.is_coding() {
            return None;
        }

        let (cds_start, cds_end) = tm.cds();
        let variant = ctx.variant();
        let pos = variant.position();
        let last = variant.corrected_ref_position_last();

        tm.exons()
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0].stop >= cds_start && pair[1].start <= cds_end)
            .find(|(_, pair)| pair[0].stop < pos && last < pair[1].start)
            .map(|(idx, pair)| {
                intronic_effect(
                    EffectType::Intron,
                    ctx,
                    pair[0].stop,
                    pair[1].start,
                    idx + 1,
                    true,
                )
            })
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
