//! Length-preserving substitutions in the coding sequence.

use crate::checkers::EffectChecker;
use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};

/// Compares reference and alternate amino acids of substitutions inside a CDS region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProteinChangeEffectChecker;

impl EffectChecker for ProteinChangeEffectChecker {
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect> {
        let tm = ctx.transcript();
        let variant = ctx.variant();
        if !tm.is_coding() || variant.reference().len() != variant.alternative().len() {
            return None;
        }

        let pos = variant.position();
        if !tm
            .cds_regions(0)
            .iter()
            .any(|region| region.start <= pos && pos <= region.stop)
        {
            return None;
        }

        let amino_acids = match ctx.amino_acids() {
            Ok(amino_acids) => amino_acids,
            Err(e) => {
                log::debug!("no protein change for {}: {}", variant, e);
                return None;
            }
        };

        let effect_type = if amino_acids.has_unknown() {
            EffectType::CodingUnknown
        } else if amino_acids.gains_stop() {
            EffectType::Nonsense
        } else if amino_acids.reference != amino_acids.alternate {
            EffectType::Missense
        } else {
            EffectType::Synonymous
        };

        let mut effect = Effect::with_protein_position(effect_type, ctx);
        effect.set_amino_acids(amino_acids);
        Some(effect)
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
