//! Effects of variants on transcripts.

mod error;
pub mod summary;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::context::{AminoAcids, VariantEffectContext};
use crate::transcript::{Strand, TranscriptModel};

pub use crate::effect::error::Error;

/// The kind of an effect, from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    #[serde(rename = "tRNA:ANTICODON")]
    TrnaAnticodon,
    #[serde(rename = "all")]
    All,
    #[serde(rename = "splice-site")]
    SpliceSite,
    #[serde(rename = "frame-shift")]
    FrameShift,
    #[serde(rename = "nonsense")]
    Nonsense,
    #[serde(rename = "no-frame-shift-newStop")]
    NoFrameShiftNewStop,
    #[serde(rename = "noStart")]
    NoStart,
    #[serde(rename = "noEnd")]
    NoEnd,
    #[serde(rename = "missense")]
    Missense,
    #[serde(rename = "no-frame-shift")]
    NoFrameShift,
    #[serde(rename = "CDS")]
    Cds,
    #[serde(rename = "synonymous")]
    Synonymous,
    #[serde(rename = "coding_unknown")]
    CodingUnknown,
    #[serde(rename = "regulatory")]
    Regulatory,
    #[serde(rename = "3'UTR")]
    Utr3,
    #[serde(rename = "5'UTR")]
    Utr5,
    #[serde(rename = "intron")]
    Intron,
    #[serde(rename = "non-coding")]
    NonCoding,
    #[serde(rename = "5'UTR-intron")]
    Utr5Intron,
    #[serde(rename = "3'UTR-intron")]
    Utr3Intron,
    #[serde(rename = "promoter")]
    Promoter,
    #[serde(rename = "non-coding-intron")]
    NonCodingIntron,
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "intergenic")]
    Intergenic,
    #[serde(rename = "no-mutation")]
    NoMutation,
}

impl EffectType {
    /// All effect types, most severe first.
    pub const ALL: [EffectType; 25] = [
        EffectType::TrnaAnticodon,
        EffectType::All,
        EffectType::SpliceSite,
        EffectType::FrameShift,
        EffectType::Nonsense,
        EffectType::NoFrameShiftNewStop,
        EffectType::NoStart,
        EffectType::NoEnd,
        EffectType::Missense,
        EffectType::NoFrameShift,
        EffectType::Cds,
        EffectType::Synonymous,
        EffectType::CodingUnknown,
        EffectType::Regulatory,
        EffectType::Utr3,
        EffectType::Utr5,
        EffectType::Intron,
        EffectType::NonCoding,
        EffectType::Utr5Intron,
        EffectType::Utr3Intron,
        EffectType::Promoter,
        EffectType::NonCodingIntron,
        EffectType::Unknown,
        EffectType::Intergenic,
        EffectType::NoMutation,
    ];

    /// Name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            EffectType::TrnaAnticodon => "tRNA:ANTICODON",
            EffectType::All => "all",
            EffectType::SpliceSite => "splice-site",
            EffectType::FrameShift => "frame-shift",
            EffectType::Nonsense => "nonsense",
            EffectType::NoFrameShiftNewStop => "no-frame-shift-newStop",
            EffectType::NoStart => "noStart",
            EffectType::NoEnd => "noEnd",
            EffectType::Missense => "missense",
            EffectType::NoFrameShift => "no-frame-shift",
            EffectType::Cds => "CDS",
            EffectType::Synonymous => "synonymous",
            EffectType::CodingUnknown => "coding_unknown",
            EffectType::Regulatory => "regulatory",
            EffectType::Utr3 => "3'UTR",
            EffectType::Utr5 => "5'UTR",
            EffectType::Intron => "intron",
            EffectType::NonCoding => "non-coding",
            EffectType::Utr5Intron => "5'UTR-intron",
            EffectType::Utr3Intron => "3'UTR-intron",
            EffectType::Promoter => "promoter",
            EffectType::NonCodingIntron => "non-coding-intron",
            EffectType::Unknown => "unknown",
            EffectType::Intergenic => "intergenic",
            EffectType::NoMutation => "no-mutation",
        }
    }

    /// Severity rank; larger is more severe.
    pub fn severity(&self) -> u8 {
        match self {
            EffectType::TrnaAnticodon => 30,
            EffectType::All => 24,
            EffectType::SpliceSite => 23,
            EffectType::FrameShift => 22,
            EffectType::Nonsense => 21,
            EffectType::NoFrameShiftNewStop => 20,
            EffectType::NoStart => 19,
            EffectType::NoEnd => 18,
            EffectType::Missense => 17,
            EffectType::NoFrameShift => 16,
            EffectType::Cds => 15,
            EffectType::Synonymous => 14,
            EffectType::CodingUnknown => 13,
            EffectType::Regulatory => 12,
            EffectType::Utr3 => 11,
            EffectType::Utr5 => 10,
            EffectType::Intron => 9,
            EffectType::NonCoding => 8,
            EffectType::Utr5Intron => 7,
            EffectType::Utr3Intron => 6,
            EffectType::Promoter => 5,
            EffectType::NonCodingIntron => 4,
            EffectType::Unknown => 3,
            EffectType::Intergenic => 2,
            EffectType::NoMutation => 1,
        }
    }
}

impl Display for EffectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EffectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectType::ALL
            .iter()
            .find(|effect_type| effect_type.name() == s)
            .copied()
            .ok_or_else(|| Error::UnknownEffectType(s.to_string()))
    }
}

/// The effect of a variant on one transcript.
///
/// Which optional fields are set depends on `effect_type`, see `Effect::details()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub effect_type: EffectType,
    pub gene: Option<String>,
    pub transcript_id: Option<String>,
    pub strand: Option<Strand>,
    pub protein_position: Option<i32>,
    pub protein_length: Option<i32>,
    pub amino_acid_change: Option<String>,
    pub non_coding_position: Option<i32>,
    pub which_intron: Option<i32>,
    pub how_many_introns: Option<i32>,
    pub distance_from_coding: Option<i32>,
    pub distance_from_5utr: Option<i32>,
    pub distance_from_acceptor: Option<i32>,
    pub distance_from_donor: Option<i32>,
    pub intron_length: Option<i32>,
    pub length: Option<i32>,
    #[serde(skip)]
    pub amino_acids: Option<AminoAcids>,
}

impl Effect {
    pub fn new(effect_type: EffectType) -> Self {
        Self {
            effect_type,
            gene: None,
            transcript_id: None,
            strand: None,
            protein_position: None,
            protein_length: None,
            amino_acid_change: None,
            non_coding_position: None,
            which_intron: None,
            how_many_introns: None,
            distance_from_coding: None,
            distance_from_5utr: None,
            distance_from_acceptor: None,
            distance_from_donor: None,
            intron_length: None,
            length: None,
            amino_acids: None,
        }
    }

    /// Effect carrying the gene, transcript and strand of `tm`.
    pub fn with_transcript(effect_type: EffectType, tm: &TranscriptModel) -> Self {
        Self {
            gene: Some(tm.gene().to_string()),
            transcript_id: Some(tm.transcript_id().to_string()),
            strand: Some(tm.strand()),
            ..Self::new(effect_type)
        }
    }

    /// Like `with_transcript()`, also recording the variant's mRNA position.
    pub fn with_context(effect_type: EffectType, ctx: &dyn VariantEffectContext) -> Self {
        Self {
            non_coding_position: Some(ctx.exonic_position()),
            ..Self::with_transcript(effect_type, ctx.transcript())
        }
    }

    pub fn with_protein_length(
        effect_type: EffectType,
        ctx: &dyn VariantEffectContext,
    ) -> Self {
        Self {
            protein_length: ctx.protein_length(),
            ..Self::with_context(effect_type, ctx)
        }
    }

    /// Additionally records the first codon touched by the variant.
    pub fn with_protein_position(
        effect_type: EffectType,
        ctx: &dyn VariantEffectContext,
    ) -> Self {
        let (protein_position, _) = ctx.protein_position();
        Self {
            protein_position: Some(protein_position),
            ..Self::with_protein_length(effect_type, ctx)
        }
    }

    pub fn set_amino_acids(&mut self, amino_acids: AminoAcids) {
        self.amino_acid_change = Some(amino_acids.change());
        self.amino_acids = Some(amino_acids);
    }

    /// Human-readable detail string; missing values render as empty strings.
    pub fn details(&self) -> String {
        fn show<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        }

        match self.effect_type {
            EffectType::Intron
            | EffectType::Utr5Intron
            | EffectType::Utr3Intron
            | EffectType::NonCodingIntron => format!(
                "{}/{}[{}]",
                show(&self.which_intron),
                show(&self.how_many_introns),
                show(&self.distance_from_coding)
            ),
            EffectType::FrameShift
            | EffectType::NoFrameShift
            | EffectType::NoFrameShiftNewStop
            | EffectType::Missense
            | EffectType::Nonsense
            | EffectType::CodingUnknown => format!(
                "{}/{}({})",
                show(&self.protein_position),
                show(&self.protein_length),
                show(&self.amino_acid_change)
            ),
            EffectType::SpliceSite | EffectType::Synonymous => format!(
                "{}/{}",
                show(&self.protein_position),
                show(&self.protein_length)
            ),
            EffectType::Utr5 | EffectType::Utr3 => show(&self.distance_from_coding),
            EffectType::NonCoding | EffectType::Unknown | EffectType::TrnaAnticodon => {
                show(&self.length)
            }
            EffectType::NoStart | EffectType::NoEnd | EffectType::Cds | EffectType::All => {
                show(&self.protein_length)
            }
            EffectType::Promoter => show(&self.distance_from_5utr),
            EffectType::NoMutation => "no-mutation".to_string(),
            EffectType::Regulatory | EffectType::Intergenic => String::new(),
        }
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.transcript_id.as_deref().unwrap_or_default(),
            self.gene.as_deref().unwrap_or_default(),
            self.effect_type,
            self.details()
        )
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
