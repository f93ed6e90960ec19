//! Effect checkers, each deciding whether one class of consequence applies.

pub mod coding;
pub mod frame_shift;
pub mod intron;
pub mod promoter;
pub mod protein_change;
pub mod splice_site;
pub mod start_loss;
pub mod stop_loss;
pub mod utr;

use crate::context::VariantEffectContext;
use crate::effect::{Effect, EffectType};
use crate::transcript::Strand;

pub use crate::checkers::coding::CodingEffectChecker;
pub use crate::checkers::frame_shift::FrameShiftEffectChecker;
pub use crate::checkers::intron::IntronicEffectChecker;
pub use crate::checkers::promoter::PromoterEffectChecker;
pub use crate::checkers::protein_change::ProteinChangeEffectChecker;
pub use crate::checkers::splice_site::SpliceSiteEffectChecker;
pub use crate::checkers::start_loss::StartLossEffectChecker;
pub use crate::checkers::stop_loss::StopLossEffectChecker;
pub use crate::checkers::utr::UtrEffectChecker;

/// Trait for effect checkers.
pub trait EffectChecker {
    /// Return the effect of the context's variant on its transcript, or `None` if this
    /// checker's class of consequence does not apply.
    ///
    /// Failing translation queries are treated as "does not apply".
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect>;
}

/// The closed set of checkers run by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Checker {
    Promoter(PromoterEffectChecker),
    Coding(CodingEffectChecker),
    SpliceSite(SpliceSiteEffectChecker),
    StartLoss(StartLossEffectChecker),
    StopLoss(StopLossEffectChecker),
    FrameShift(FrameShiftEffectChecker),
    ProteinChange(ProteinChangeEffectChecker),
    Utr(UtrEffectChecker),
    Intronic(IntronicEffectChecker),
}

impl Checker {
    pub fn name(&self) -> &'static str {
        match self {
            Checker::Promoter(_) => "promoter",
            Checker::Coding(_) => "coding",
            Checker::SpliceSite(_) => "splice-site",
            Checker::StartLoss(_) => "start-loss",
            Checker::StopLoss(_) => "stop-loss",
            Checker::FrameShift(_) => "frame-shift",
            Checker::ProteinChange(_) => "protein-change",
            Checker::Utr(_) => "utr",
            Checker::Intronic(_) => "intronic",
        }
    }
}

impl EffectChecker for Checker {
    fn get_effect(&self, ctx: &dyn VariantEffectContext) -> Option<Effect> {
        match self {
            Checker::Promoter(checker) => checker.get_effect(ctx),
            Checker::Coding(checker) => checker.get_effect(ctx),
            Checker::SpliceSite(checker) => checker.get_effect(ctx),
            Checker::StartLoss(checker) => checker.get_effect(ctx),
            Checker::StopLoss(checker) => checker.get_effect(ctx),
            Checker::FrameShift(checker) => checker.get_effect(ctx),
            Checker::ProteinChange(checker) => checker.get_effect(ctx),
            Checker::Utr(checker) => checker.get_effect(ctx),
            Checker::Intronic(checker) => checker.get_effect(ctx),
        }
    }
}

/// Build an effect for a variant inside the intron between `start` (last base of the
/// upstream exon) and `end` (first base of the downstream exon).
///
/// `index` is the genomic-order number of the intron (1-based), converted to transcript
/// order on the `-` strand.  With `with_protein_position`, the protein position is taken from
/// the nearer exon boundary.
pub(crate) fn intronic_effect(
    effect_type: EffectType,
    ctx: &dyn VariantEffectContext,
    start: i32,
    end: i32,
    index: usize,
    with_protein_position: bool,
) -> Effect {
    let tm = ctx.transcript();
    let variant = ctx.variant();
    let dist_left = variant.position() - start - 1;
    let dist_right = end - variant.ref_position_last();
    let how_many_introns = tm.intron_count() as i32;
    let index = index as i32;

    let (distance_from_acceptor, distance_from_donor, which_intron) = match tm.strand() {
        Strand::Plus => (dist_right, dist_left, index),
        Strand::Minus => (dist_left, dist_right, how_many_introns - index + 1),
    };

    let protein_position = if with_protein_position {
        let anchor = match tm.strand() {
            Strand::Plus if dist_left < dist_right => start,
            Strand::Plus => end,
            Strand::Minus if dist_right < dist_left => end,
            Strand::Minus => start,
        };
        ctx.protein_position_for_pos(anchor)
    } else {
        None
    };

    Effect {
        protein_position,
        distance_from_coding: Some(dist_left.min(dist_right)),
        how_many_introns: Some(how_many_introns),
        intron_length: Some(end - start - 1),
        distance_from_acceptor: Some(distance_from_acceptor),
        distance_from_donor: Some(distance_from_donor),
        which_intron: Some(which_intron),
        ..Effect::with_protein_length(effect_type, ctx)
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
