//! Running the checkers in order and annotating variants against transcript collections.

use crate::checkers::{
    Checker, CodingEffectChecker, EffectChecker, FrameShiftEffectChecker, IntronicEffectChecker,
    PromoterEffectChecker, ProteinChangeEffectChecker, SpliceSiteEffectChecker,
    StartLossEffectChecker, StopLossEffectChecker, UtrEffectChecker,
};
use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};
use crate::transcript::{TranscriptIndex, TranscriptModel};
use crate::variant::Variant;

/// Configuration for the `EffectClassifier`.
#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    /// Number of intronic bases next to an exon that count as splice site.
    pub splice_site_length: i32,
    /// Length of the promoter window upstream of the transcript; `0` disables promoter
    /// effects.
    pub promoter_len: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            splice_site_length: 2,
            promoter_len: 0,
        }
    }
}

/// Classifies a variant on a transcript by running the checkers most-specific-first.
#[derive(Debug, Clone)]
pub struct EffectClassifier {
    config: Config,
    checkers: Vec<Checker>,
}

impl Default for EffectClassifier {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl EffectClassifier {
    pub fn new(config: Config) -> Self {
        let checkers = vec![
            Checker::Promoter(PromoterEffectChecker::new(config.promoter_len)),
            Checker::Coding(CodingEffectChecker),
            Checker::SpliceSite(SpliceSiteEffectChecker::new(config.splice_site_length)),
            Checker::StartLoss(StartLossEffectChecker),
            Checker::StopLoss(StopLossEffectChecker),
            Checker::FrameShift(FrameShiftEffectChecker),
            Checker::ProteinChange(ProteinChangeEffectChecker),
            Checker::Utr(UtrEffectChecker),
            Checker::Intronic(IntronicEffectChecker),
        ];
        Self { config, checkers }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn checkers(&self) -> &[Checker] {
        &self.checkers
    }

    /// Return the effect of the first matching checker.
    ///
    /// Variants whose trimmed alleles are both empty yield `no-mutation`, variants matched
    /// by no checker yield `unknown` carrying the variant length.
    pub fn classify(&self, ctx: &dyn VariantEffectContext) -> Effect {
        let variant = ctx.variant();
        let tm = ctx.transcript();
        if variant.is_no_op() {
            return Effect::with_transcript(EffectType::NoMutation, tm);
        }

        for checker in &self.checkers {
            if let Some(effect) = checker.get_effect(ctx) {
                log::trace!(
                    "{} on {}: {} by {} checker",
                    variant,
                    tm.transcript_id(),
                    effect.effect_type,
                    checker.name()
                );
                return effect;
            }
        }

        log::debug!("no checker matched {} on {}", variant, tm.transcript_id());
        Effect {
            length: Some(variant.length()),
            ..Effect::with_transcript(EffectType::Unknown, tm)
        }
    }

    /// Classify `variant` against every transcript in `index` it overlaps.
    ///
    /// The transcript spans are widened by `promoter_len` on both sides.  `make_ctx` builds
    /// the translation-capable context for one transcript.  Returns a single `intergenic`
    /// effect if no transcript overlaps.
    pub fn annotate<C, F>(
        &self,
        variant: &Variant,
        index: &TranscriptIndex,
        make_ctx: F,
    ) -> Vec<Effect>
    where
        C: VariantEffectContext,
        F: Fn(&Variant, &TranscriptModel) -> C,
    {
        let effects: Vec<_> = index
            .overlapping(
                variant.chrom(),
                variant.position(),
                variant.corrected_ref_position_last(),
                self.config.promoter_len,
            )
            .map(|tm| self.classify(&make_ctx(variant, tm)))
            .collect();

        if effects.is_empty() {
            log::debug!("{} overlaps no transcript", variant);
            vec![Effect::new(EffectType::Intergenic)]
        } else {
            effects
        }
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
