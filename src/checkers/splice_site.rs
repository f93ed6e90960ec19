//! Variants touching the splice sites of coding introns.

use crate::checkers::{intronic_effect, EffectChecker};
use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};

/// Matches variants that reach into the intron and start or end within `splice_site_length`
/// bases of an exon boundary.
///
/// Only introns whose both flanking exons overlap the CDS are considered.
#[derive(Debug, Clone, PartialEq)]
pub struct SpliceSiteEffectChecker {
    pub splice_site_length: i32,
}

impl SpliceSiteEffectChecker {
    pub fn new(splice_site_length: i32) -> Self {
        Self { splice_site_length }
    }
}

impl Default for SpliceSiteEffectChecker {
    fn default() -> Self {
        Self::new(2)
    }
}

impl EffectChecker for SpliceSiteEffectChecker {
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect> {
        let tm = ctx.transcript();
        if !tm.is_coding() {
            return None;
        }

        let (cds_start, cds_end) = tm.cds();
        let variant = ctx.variant();
        let pos = variant.position();
        let last = variant.corrected_ref_position_last();
        let length = self.splice_site_length;

        for (idx, pair) in tm.exons().windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.stop < cds_start || next.start > cds_end {
                continue;
            }

            let at_prev = pos < prev.stop + length + 1 && last > prev.stop;
            let at_next = pos < next.start && last > next.start - length - 1;
            if at_prev || at_next {
                let anchor = if at_prev { prev.stop } else { next.start };
                log::trace!(
                    "{} hits splice site at {} of {}",
                    variant,
                    anchor,
                    tm.transcript_id()
                );
                return Some(Effect {
                    protein_position: ctx.protein_position_for_pos(anchor),
                    ..intronic_effect(
                        EffectType::SpliceSite,
                        ctx,
                        prev.stop,
                        next.start,
                        idx + 1,
                        false,
                    )
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::SpliceSiteEffectChecker;
    use crate::checkers::EffectChecker;
    use crate::context::test_helpers::StubContext;
    use crate::effect::EffectType;
    use crate::transcript::{test_helpers::build_transcript, Strand, TranscriptModel};
    use crate::variant::Variant;

    fn transcript(strand: Strand) -> TranscriptModel {
        build_transcript(
            strand,
            (150, 550),
            &[(100, 200), (300, 400), (500, 600)],
        )
    }

    fn effect_type(strand: Strand, input: &str) -> Result<Option<EffectType>, anyhow::Error> {
        let ctx = StubContext::new(input.parse()?, transcript(strand));
        Ok(SpliceSiteEffectChecker::default()
            .get_effect(&ctx)
            .map(|e| e.effect_type))
    }

    #[rstest]
    #[case("1:201:A:G", true)]
    #[case("1:202:A:G", true)]
    #[case("1:203:A:G", false)]
    #[case("1:298:A:G", true)]
    #[case("1:299:A:G", true)]
    #[case("1:297:A:G", false)]
    #[case("1:200:A:G", false)]
    #[case("1:300:A:G", false)]
    // deletion of 199-201, across the boundary
    #[case("1:198:ACGT:A", true)]
    // deletion of 294-297, ending just before the splice site
    #[case("1:293:ACGTC:A", false)]
    // deletion of 295-298, ending in the splice site
    #[case("1:294:ACGTC:A", true)]
    #[case("1:250:A:G", false)]
    fn splice_site_window(
        #[case] input: &str,
        #[case] hit: bool,
    ) -> Result<(), anyhow::Error> {
        let expected = hit.then_some(EffectType::SpliceSite);

        assert_eq!(effect_type(Strand::Plus, input)?, expected);
        assert_eq!(effect_type(Strand::Minus, input)?, expected);

        Ok(())
    }

    #[test]
    fn far_from_boundaries_never_matches() -> Result<(), anyhow::Error> {
        let checker = SpliceSiteEffectChecker::new(3);
        for pos in (304..=396).chain(504..=550) {
            let ctx = StubContext::new(
                Variant::new("1", pos, "A", "C")?,
                transcript(Strand::Plus),
            );
            assert_eq!(checker.get_effect(&ctx), None, "pos {}", pos);
        }

        Ok(())
    }

    #[test]
    fn utr_introns_are_skipped() -> Result<(), anyhow::Error> {
        let ctx = StubContext::new(
            "1:201:A:G".parse()?,
            build_transcript(
                Strand::Plus,
                (350, 550),
                &[(100, 200), (300, 400), (500, 600)],
            ),
        );

        assert_eq!(SpliceSiteEffectChecker::default().get_effect(&ctx), None);

        Ok(())
    }

    #[test]
    fn effect_details() -> Result<(), anyhow::Error> {
        let ctx = StubContext::new("1:499:A:G".parse()?, transcript(Strand::Minus));

        let effect = SpliceSiteEffectChecker::default()
            .get_effect(&ctx)
            .ok_or_else(|| anyhow::anyhow!("no effect"))?;

        assert_eq!(effect.which_intron, Some(1));
        assert_eq!(effect.distance_from_donor, Some(0));
        assert_eq!(effect.distance_from_acceptor, Some(98));
        assert_eq!(effect.protein_position, Some(17));
        assert_eq!(effect.protein_length, Some(67));
        assert_eq!(effect.details(), "17/67");

        Ok(())
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
