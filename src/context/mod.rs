//! The boundary between effect classification and sequence translation.
//!
//! A `VariantEffectContext` binds one `Variant` to one `TranscriptModel`.  Implementors
//! provide the translation-dependent queries (`amino_acids()`, `find_start_codon()`); the
//! geometric queries derived from the transcript model alone are provided methods.

mod error;

use std::fmt::Display;

use crate::transcript::{Strand, TranscriptModel};
use crate::variant::Variant;

pub use crate::context::error::Error;

/// A single translated amino acid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    /// A regular residue, e.g., `"Met"`.
    Residue(String),
    /// Translated stop codon, written `"End"`.
    Stop,
    /// Codon that could not be translated, written `"?"`.
    Unknown,
}

impl From<&str> for AminoAcid {
    fn from(value: &str) -> Self {
        match value {
            "End" => AminoAcid::Stop,
            "?" => AminoAcid::Unknown,
            _ => AminoAcid::Residue(value.to_string()),
        }
    }
}

impl Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AminoAcid::Residue(code) => write!(f, "{}", code),
            AminoAcid::Stop => write!(f, "End"),
            AminoAcid::Unknown => write!(f, "?"),
        }
    }
}

/// Reference and alternate amino acids around a variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AminoAcids {
    pub reference: Vec<AminoAcid>,
    pub alternate: Vec<AminoAcid>,
}

fn join(amino_acids: &[AminoAcid]) -> String {
    amino_acids.iter().map(|aa| aa.to_string()).collect()
}

fn stop_index(amino_acids: &[AminoAcid]) -> Option<usize> {
    amino_acids.iter().position(|aa| *aa == AminoAcid::Stop)
}

impl AminoAcids {
    pub fn new(reference: Vec<AminoAcid>, alternate: Vec<AminoAcid>) -> Self {
        Self {
            reference,
            alternate,
        }
    }

    /// Construct from amino acid tokens such as `["Met", "End"]`.
    pub fn from_tokens(reference: &[&str], alternate: &[&str]) -> Self {
        Self::new(
            reference.iter().map(|&t| AminoAcid::from(t)).collect(),
            alternate.iter().map(|&t| AminoAcid::from(t)).collect(),
        )
    }

    /// Amino acid change as written in effect details, e.g., `"Leu->Pro"`.
    pub fn change(&self) -> String {
        format!("{}->{}", join(&self.reference), join(&self.alternate))
    }

    pub fn reference_stop_index(&self) -> Option<usize> {
        stop_index(&self.reference)
    }

    pub fn alternate_stop_index(&self) -> Option<usize> {
        stop_index(&self.alternate)
    }

    /// Whether the alternate carries a stop that the reference does not.
    pub fn gains_stop(&self) -> bool {
        self.reference_stop_index().is_none() && self.alternate_stop_index().is_some()
    }

    /// Whether the reference carries a stop that the alternate does not.
    pub fn loses_stop(&self) -> bool {
        self.reference_stop_index().is_some() && self.alternate_stop_index().is_none()
    }

    pub fn has_unknown(&self) -> bool {
        self.reference
            .iter()
            .chain(self.alternate.iter())
            .any(|aa| *aa == AminoAcid::Unknown)
    }
}

/// Result of searching for a start codon after a variant hits the original one.
///
/// Offsets count bases from the CDS start (in transcript direction) to the first start
/// codon found in the reference and in the alternate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartCodonMatch {
    pub reference_offset: i32,
    pub alternate_offset: i32,
}

impl StartCodonMatch {
    pub fn shift(&self) -> i32 {
        (self.alternate_offset - self.reference_offset).abs()
    }
}

/// One variant in the context of one transcript.
pub trait VariantEffectContext {
    fn variant(&self) -> &Variant;

    fn transcript(&self) -> &TranscriptModel;

    /// Reference and alternate amino acids of the codons touched by the variant.
    fn amino_acids(&self) -> Result<AminoAcids, Error>;

    /// Search for a valid start codon near the original one; `None` if there is none.
    fn find_start_codon(&self) -> Option<StartCodonMatch>;

    /// Offset of `pos` in the coding sequence (0-based, transcript direction).
    ///
    /// A position up to one base outside of a CDS region is counted relative to that region.
    fn coding_nucleotide_position(&self, pos: i32) -> i32 {
        let regions = self.transcript().cds_regions(0);
        let mut length = 0;
        match self.transcript().strand() {
            Strand::Plus => {
                for region in &regions {
                    if region.start - 1 <= pos && pos <= region.stop + 1 {
                        length += pos - region.start;
                        break;
                    }
                    length += region.len();
                }
            }
            Strand::Minus => {
                for region in regions.iter().rev() {
                    if region.start - 1 <= pos && pos <= region.stop + 1 {
                        length += region.stop - pos;
                        break;
                    }
                    length += region.len();
                }
            }
        }
        log::trace!("coding nucleotide position of {} is {}", pos, length);
        length
    }

    /// 1-based codon number of `pos`, `None` outside of the CDS.
    fn protein_position_for_pos(&self, pos: i32) -> Option<i32> {
        let (cds_start, cds_end) = self.transcript().cds();
        if pos < cds_start || pos > cds_end {
            None
        } else {
            Some(self.coding_nucleotide_position(pos) / 3 + 1)
        }
    }

    /// First and last codon touched by the variant, clamped into the CDS.
    fn protein_position(&self) -> (i32, i32) {
        let (cds_start, cds_end) = self.transcript().cds();
        let clamp = |pos: i32| pos.max(cds_start).min(cds_end);
        let start = clamp(self.variant().position());
        let end = clamp(self.variant().ref_position_last() - 1).max(start);

        let start = self.coding_nucleotide_position(start) / 3 + 1;
        let end = self.coding_nucleotide_position(end) / 3 + 1;
        match self.transcript().strand() {
            Strand::Plus => (start, end),
            Strand::Minus => (end, start),
        }
    }

    /// Number of codons before the stop codon, `None` for non-coding transcripts.
    fn protein_length(&self) -> Option<i32> {
        let tm = self.transcript();
        if !tm.is_coding() {
            return None;
        }
        let (cds_start, cds_end) = tm.cds();
        let last = match tm.strand() {
            Strand::Plus => cds_end,
            Strand::Minus => cds_start,
        };
        Some(self.coding_nucleotide_position(last) / 3)
    }

    /// Number of exonic bases in `(min(a, b), max(a, b)]`.
    fn exonic_distance(&self, a: i32, b: i32) -> i32 {
        let (lo, hi) = (a.min(b), a.max(b));
        self.transcript()
            .exons()
            .iter()
            .map(|exon| {
                let start = exon.start.max(lo + 1);
                let stop = exon.stop.min(hi);
                (stop - start + 1).max(0)
            })
            .sum()
    }

    /// Length of the mature mRNA.
    fn exonic_length(&self) -> i32 {
        let (start, stop) = self.transcript().exon_span();
        self.exonic_distance(start, stop) + 1
    }

    /// 1-based position of the variant on the mature mRNA, counted in genomic direction.
    fn exonic_position(&self) -> i32 {
        let (start, _) = self.transcript().exon_span();
        self.exonic_distance(start, self.variant().position()) + 1
    }

    fn is_start_codon_affected(&self) -> bool {
        match self.transcript().strand() {
            Strand::Plus => touches_first_codon(self.transcript(), self.variant()),
            Strand::Minus => touches_last_codon(self.transcript(), self.variant()),
        }
    }

    fn is_stop_codon_affected(&self) -> bool {
        match self.transcript().strand() {
            Strand::Plus => touches_last_codon(self.transcript(), self.variant()),
            Strand::Minus => touches_first_codon(self.transcript(), self.variant()),
        }
    }

    fn has_5_utr_region(&self) -> bool {
        match self.transcript().strand() {
            Strand::Plus => has_left_utr(self.transcript()),
            Strand::Minus => has_right_utr(self.transcript()),
        }
    }

    fn has_3_utr_region(&self) -> bool {
        match self.transcript().strand() {
            Strand::Plus => has_right_utr(self.transcript()),
            Strand::Minus => has_left_utr(self.transcript()),
        }
    }
}

/// Whether the variant touches the three leftmost CDS bases.
fn touches_first_codon(tm: &TranscriptModel, variant: &Variant) -> bool {
    let cds_start = tm.cds().0;
    variant.position() <= cds_start + 2 && cds_start <= variant.corrected_ref_position_last()
}

/// Whether the variant touches the three rightmost CDS bases.
fn touches_last_codon(tm: &TranscriptModel, variant: &Variant) -> bool {
    let cds_end = tm.cds().1;
    variant.position() <= cds_end && cds_end - 2 <= variant.corrected_ref_position_last()
}

fn has_left_utr(tm: &TranscriptModel) -> bool {
    tm.exon_span().0 != tm.cds().0
}

fn has_right_utr(tm: &TranscriptModel) -> bool {
    tm.exon_span().1 != tm.cds().1
}


#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{test_helpers::StubContext, AminoAcid, AminoAcids, VariantEffectContext};
    use crate::transcript::{test_helpers::build_transcript, Strand};
    use crate::variant::Variant;

    fn plus_context(input: &str) -> Result<StubContext, anyhow::Error> {
        Ok(StubContext::new(
            input.parse::<Variant>()?,
            build_transcript(Strand::Plus, (150, 350), &[(100, 200), (300, 400)]),
        ))
    }

    fn minus_context(input: &str) -> Result<StubContext, anyhow::Error> {
        Ok(StubContext::new(
            input.parse::<Variant>()?,
            build_transcript(
                Strand::Minus,
                (1050, 1850),
                &[(1000, 1100), (1300, 1400), (1600, 1650), (1800, 1900)],
            ),
        ))
    }

    #[test]
    fn amino_acid_tokens() {
        let aas = AminoAcids::from_tokens(&["Leu", "End"], &["Pro", "?"]);

        assert_eq!(aas.reference[1], AminoAcid::Stop);
        assert_eq!(aas.change(), "LeuEnd->Pro?");
        assert_eq!(aas.reference_stop_index(), Some(1));
        assert!(aas.loses_stop());
        assert!(!aas.gains_stop());
        assert!(aas.has_unknown());
    }

    #[rstest]
    #[case(150, 0)]
    #[case(200, 50)]
    #[case(201, 51)]
    #[case(300, 51)]
    #[case(350, 101)]
    fn coding_nucleotide_position_plus(
        #[case] pos: i32,
        #[case] expected: i32,
    ) -> Result<(), anyhow::Error> {
        let ctx = plus_context("1:160:A:C")?;

        assert_eq!(ctx.coding_nucleotide_position(pos), expected);

        Ok(())
    }

    #[rstest]
    #[case(1850, 0)]
    #[case(1800, 50)]
    #[case(1650, 51)]
    #[case(1050, 253)]
    fn coding_nucleotide_position_minus(
        #[case] pos: i32,
        #[case] expected: i32,
    ) -> Result<(), anyhow::Error> {
        let ctx = minus_context("1:1820:A:C")?;

        assert_eq!(ctx.coding_nucleotide_position(pos), expected);

        Ok(())
    }

    #[test]
    fn protein_positions_plus() -> Result<(), anyhow::Error> {
        let ctx = plus_context("1:300:ACGTAC:A")?;

        assert_eq!(ctx.protein_length(), Some(33));
        assert_eq!(ctx.protein_position_for_pos(151), Some(1));
        assert_eq!(ctx.protein_position_for_pos(300), Some(18));
        assert_eq!(ctx.protein_position_for_pos(120), None);
        // deletion of 301-305
        assert_eq!(ctx.protein_position(), (18, 19));

        Ok(())
    }

    #[test]
    fn protein_positions_minus() -> Result<(), anyhow::Error> {
        let ctx = minus_context("1:1845:ACGTAC:A")?;

        assert_eq!(ctx.protein_length(), Some(84));
        assert_eq!(ctx.protein_position_for_pos(1850), Some(1));
        // deletion of 1846-1850, clamped at the CDS end
        assert_eq!(ctx.protein_position(), (1, 2));

        Ok(())
    }

    #[test]
    fn exonic_measures() -> Result<(), anyhow::Error> {
        let ctx = plus_context("1:151:A:C")?;

        assert_eq!(ctx.exonic_distance(100, 400), 201);
        assert_eq!(ctx.exonic_distance(400, 100), 201);
        assert_eq!(ctx.exonic_distance(190, 310), 21);
        assert_eq!(ctx.exonic_distance(250, 260), 0);
        assert_eq!(ctx.exonic_length(), ctx.transcript.total_len());
        assert_eq!(ctx.exonic_position(), 52);

        Ok(())
    }

    #[rstest]
    #[case("1:148:AAA:C", true, false)]
    #[case("1:152:A:C", true, false)]
    #[case("1:153:A:C", false, false)]
    #[case("1:348:A:C", false, true)]
    #[case("1:351:A:C", false, false)]
    fn codon_hits_plus(
        #[case] input: &str,
        #[case] start_hit: bool,
        #[case] stop_hit: bool,
    ) -> Result<(), anyhow::Error> {
        let ctx = plus_context(input)?;

        assert_eq!(ctx.is_start_codon_affected(), start_hit);
        assert_eq!(ctx.is_stop_codon_affected(), stop_hit);

        Ok(())
    }

    #[test]
    fn codon_hits_minus() -> Result<(), anyhow::Error> {
        let ctx = minus_context("1:1849:A:C")?;
        assert!(ctx.is_start_codon_affected());
        assert!(!ctx.is_stop_codon_affected());

        let ctx = minus_context("1:1051:A:C")?;
        assert!(!ctx.is_start_codon_affected());
        assert!(ctx.is_stop_codon_affected());

        Ok(())
    }

    #[test]
    fn utr_presence() -> Result<(), anyhow::Error> {
        let ctx = plus_context("1:151:A:C")?;
        assert!(ctx.has_5_utr_region());
        assert!(ctx.has_3_utr_region());

        let ctx = StubContext::new(
            "1:151:A:C".parse()?,
            build_transcript(Strand::Minus, (100, 350), &[(100, 200), (300, 400)]),
        );
        assert!(ctx.has_5_utr_region());
        assert!(!ctx.has_3_utr_region());

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
