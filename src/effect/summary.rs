//! Summaries over the effects of one variant on several transcripts.

use std::cmp::Reverse;

use super::{Effect, EffectType};

/// Effects sorted by decreasing severity; ties keep their input order.
pub fn sort_effects(effects: &[Effect]) -> Vec<&Effect> {
    let mut sorted: Vec<&Effect> = effects.iter().collect();
    sorted.sort_by_key(|effect| Reverse(effect.effect_type.severity()));
    sorted
}

/// The most severe effect type, `None` for no effects.
pub fn worst_effect(effects: &[Effect]) -> Option<EffectType> {
    effects
        .iter()
        .map(|effect| effect.effect_type)
        .max_by_key(EffectType::severity)
}

/// `intergenic` and `no-mutation` stand for the whole set of effects when they are the worst.
fn collapsed(effects: &[Effect]) -> Option<EffectType> {
    worst_effect(effects)
        .filter(|worst| matches!(worst, EffectType::Intergenic | EffectType::NoMutation))
}

/// Per-gene effects: within a severity tier, one `(gene, effect)` pair per run of consecutive
/// effects on the same gene.
pub fn gene_effects(effects: &[Effect]) -> Vec<(String, EffectType)> {
    if let Some(worst) = collapsed(effects) {
        return vec![(worst.name().to_string(), worst)];
    }

    let mut result: Vec<(String, EffectType)> = Vec::new();
    for effect in sort_effects(effects) {
        let gene = effect.gene.clone().unwrap_or_default();
        let same_run = result.last().is_some_and(|(last_gene, last_type)| {
            *last_gene == gene && last_type.severity() == effect.effect_type.severity()
        });
        if !same_run {
            result.push((gene, effect.effect_type));
        }
    }
    result
}

/// Per-transcript `(transcript_id, gene, effect, details)` in input order.
pub fn transcript_effects(effects: &[Effect]) -> Vec<(String, String, EffectType, String)> {
    if let Some(worst) = collapsed(effects) {
        let name = worst.name().to_string();
        return vec![(name.clone(), name.clone(), worst, name)];
    }

    effects
        .iter()
        .map(|effect| {
            (
                effect.transcript_id.clone().unwrap_or_default(),
                effect.gene.clone().unwrap_or_default(),
                effect.effect_type,
                effect.details(),
            )
        })
        .collect()
}

/// Worst effect, `gene:effect|...` and `transcript:gene:effect:details|...`.
pub fn effects_description(effects: &[Effect]) -> Option<(EffectType, String, String)> {
    let worst = worst_effect(effects)?;
    let genes = gene_effects(effects)
        .iter()
        .map(|(gene, effect_type)| format!("{}:{}", gene, effect_type))
        .collect::<Vec<_>>()
        .join("|");
    let transcripts = transcript_effects(effects)
        .iter()
        .map(|(transcript_id, gene, effect_type, details)| {
            format!("{}:{}:{}:{}", transcript_id, gene, effect_type, details)
        })
        .collect::<Vec<_>>()
        .join("|");

    Some((worst, genes, transcripts))
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{effects_description, gene_effects, sort_effects, worst_effect};
    use crate::effect::{Effect, EffectType};

    fn effect(effect_type: EffectType, gene: &str, transcript_id: &str) -> Effect {
        Effect {
            gene: Some(gene.to_string()),
            transcript_id: Some(transcript_id.to_string()),
            ..Effect::new(effect_type)
        }
    }

    fn effects() -> Vec<Effect> {
        vec![
            Effect {
                distance_from_coding: Some(12),
                ..effect(EffectType::Utr5, "A", "NM_1")
            },
            Effect {
                protein_position: Some(5),
                protein_length: Some(200),
                ..effect(EffectType::SpliceSite, "B", "NM_2")
            },
            effect(EffectType::Utr3, "A", "NM_3"),
            effect(EffectType::Utr5, "B", "NM_4"),
            effect(EffectType::Utr5, "A", "NM_5"),
        ]
    }

    #[test]
    fn sort_is_stable() {
        let effects = effects();
        let ids: Vec<_> = sort_effects(&effects)
            .iter()
            .map(|e| e.transcript_id.clone().unwrap_or_default())
            .collect();

        assert_eq!(ids, vec!["NM_2", "NM_3", "NM_1", "NM_4", "NM_5"]);
        assert_eq!(worst_effect(&effects), Some(EffectType::SpliceSite));
        assert_eq!(worst_effect(&[]), None);
    }

    #[test]
    fn one_effect_per_gene_run() {
        assert_eq!(
            gene_effects(&effects()),
            vec![
                ("B".to_string(), EffectType::SpliceSite),
                ("A".to_string(), EffectType::Utr3),
                ("A".to_string(), EffectType::Utr5),
                ("B".to_string(), EffectType::Utr5),
                ("A".to_string(), EffectType::Utr5),
            ]
        );
    }

    #[test]
    fn consecutive_gene_effects_merge() {
        let effects = vec![
            effect(EffectType::Missense, "A", "NM_1"),
            effect(EffectType::Missense, "A", "NM_2"),
            effect(EffectType::Missense, "B", "NM_3"),
            effect(EffectType::Intron, "B", "NM_4"),
        ];

        assert_eq!(
            gene_effects(&effects),
            vec![
                ("A".to_string(), EffectType::Missense),
                ("B".to_string(), EffectType::Missense),
                ("B".to_string(), EffectType::Intron),
            ]
        );
    }

    #[test]
    fn description() {
        let effects = effects();

        assert_eq!(
            effects_description(&effects[..2]),
            Some((
                EffectType::SpliceSite,
                "B:splice-site|A:5'UTR".to_string(),
                "NM_1:A:5'UTR:12|NM_2:B:splice-site:5/200".to_string()
            ))
        );
        assert_eq!(effects_description(&[]), None);
    }

    #[test]
    fn intergenic_collapses() {
        let effects = vec![
            Effect::new(EffectType::Intergenic),
            Effect::new(EffectType::Intergenic),
        ];

        assert_eq!(
            effects_description(&effects),
            Some((
                EffectType::Intergenic,
                "intergenic:intergenic".to_string(),
                "intergenic:intergenic:intergenic:intergenic".to_string()
            ))
        );
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
