//! Loss of the start codon.

use crate::checkers::EffectChecker;
use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};

/// Matches variants hitting the start codon when no replacement start codon is found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartLossEffectChecker;

impl EffectChecker for StartLossEffectChecker {
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect> {
        if !ctx.transcript().is_coding() || !ctx.is_start_codon_affected() {
            return None;
        }

        match ctx.find_start_codon() {
            Some(_) => None,
            None => Some(Effect::with_protein_position(EffectType::NoStart, ctx)),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::StartLossEffectChecker;
    use crate::checkers::EffectChecker;
    use crate::context::test_helpers::StubContext;
    use crate::effect::EffectType;
    use crate::transcript::{test_helpers::build_transcript, Strand};

    #[test]
    fn start_codon_lost() -> Result<(), anyhow::Error> {
        let ctx = StubContext::new(
            "1:151:T:C".parse()?,
            build_transcript(Strand::Plus, (150, 350), &[(100, 200), (300, 400)]),
        );

        let effect = StartLossEffectChecker
            .get_effect(&ctx)
            .ok_or_else(|| anyhow::anyhow!("no effect"))?;

        assert_eq!(effect.effect_type, EffectType::NoStart);
        assert_eq!(effect.protein_position, Some(1));
        assert_eq!(effect.amino_acid_change, None);
        assert_eq!(effect.details(), "33");

        Ok(())
    }

    #[test]
    fn start_codon_lost_minus() -> Result<(), anyhow::Error> {
        let ctx = StubContext::new(
            "1:348:T:C".parse()?,
            build_transcript(Strand::Minus, (150, 350), &[(100, 200), (300, 400)]),
        );

        let effect = StartLossEffectChecker.get_effect(&ctx);

        assert_eq!(effect.as_ref().map(|e| e.effect_type), Some(EffectType::NoStart));
        assert_eq!(effect.and_then(|e| e.protein_position), Some(1));

        Ok(())
    }

    #[test]
    fn replacement_start_codon() -> Result<(), anyhow::Error> {
        let ctx = StubContext::new(
            "1:151:T:C".parse()?,
            build_transcript(Strand::Plus, (150, 350), &[(100, 200), (300, 400)]),
        )
        .with_start_codon(0, 6);

        assert_eq!(StartLossEffectChecker.get_effect(&ctx), None);

        Ok(())
    }

    #[test]
    fn outside_start_codon() -> Result<(), anyhow::Error> {
        let ctx = StubContext::new(
            "1:153:T:C".parse()?,
            build_transcript(Strand::Plus, (150, 350), &[(100, 200), (300, 400)]),
        );

        assert_eq!(StartLossEffectChecker.get_effect(&ctx), None);

        Ok(())
    }
}
