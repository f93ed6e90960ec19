//! Variants upstream of the transcript, within the promoter window.

use crate::checkers::EffectChecker;
use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};
use crate::transcript::Strand;

/// Matches variants within `promoter_len` bases upstream of the transcript's 5' end.
///
/// Inactive when `promoter_len` is zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromoterEffectChecker {
    pub promoter_len: i32,
}

impl PromoterEffectChecker {
    pub fn new(promoter_len: i32) -> Self {
        Self { promoter_len }
    }
}

impl EffectChecker for PromoterEffectChecker {
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect> {
        let tm = ctx.transcript();
        if self.promoter_len == 0 || !tm.is_coding() {
            return None;
        }

        let variant = ctx.variant();
        let (first_start, last_stop) = tm.exon_span();
        let distance = match tm.strand() {
            Strand::Plus => {
                let last = variant.corrected_ref_position_last();
                (last < first_start && last >= first_start - self.promoter_len)
                    .then_some(first_start - last)
            }
            Strand::Minus => {
                let pos = variant.position();
                (pos > last_stop && pos <= last_stop + self.promoter_len)
                    .then_some(pos - last_stop)
            }
        }?;

        Some(Effect {
            distance_from_5utr: Some(distance),
            ..Effect::with_transcript(EffectType::Promoter, tm)
        })
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::PromoterEffectChecker;
    use crate::checkers::EffectChecker;
    use crate::context::test_helpers::StubContext;
    use crate::effect::EffectType;
    use crate::transcript::{test_helpers::build_transcript, Strand};

    #[rstest]
    #[case(Strand::Plus, "1:95:A:G", Some(5))]
    #[case(Strand::Plus, "1:90:A:G", Some(10))]
    #[case(Strand::Plus, "1:89:A:G", None)]
    #[case(Strand::Plus, "1:98:AAA:G", None)]
    #[case(Strand::Plus, "1:410:A:G", None)]
    #[case(Strand::Minus, "1:401:A:G", Some(1))]
    #[case(Strand::Minus, "1:410:A:G", Some(10))]
    #[case(Strand::Minus, "1:411:A:G", None)]
    #[case(Strand::Minus, "1:95:A:G", None)]
    fn promoter_window(
        #[case] strand: Strand,
        #[case] input: &str,
        #[case] expected: Option<i32>,
    ) -> Result<(), anyhow::Error> {
        let ctx = StubContext::new(
            input.parse()?,
            build_transcript(strand, (150, 350), &[(100, 200), (300, 400)]),
        );

        let effect = PromoterEffectChecker::new(10).get_effect(&ctx);

        assert_eq!(
            effect.as_ref().map(|e| e.effect_type),
            expected.map(|_| EffectType::Promoter)
        );
        assert_eq!(effect.and_then(|e| e.distance_from_5utr), expected);

        Ok(())
    }

    #[test]
    fn inactive_without_promoter_length() -> Result<(), anyhow::Error> {
        let ctx = StubContext::new(
            "1:95:A:G".parse()?,
            build_transcript(Strand::Plus, (150, 350), &[(100, 200), (300, 400)]),
        );

        assert_eq!(PromoterEffectChecker::new(0).get_effect(&ctx), None);
        assert_eq!(PromoterEffectChecker::default().get_effect(&ctx), None);

        Ok(())
    }
}
