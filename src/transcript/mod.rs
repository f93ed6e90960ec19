//! Transcript models: exons, coding boundaries and strand.
//!
//! All coordinates are genomic, 1-based and closed.
//!
//! ```text
//!            exon 1                    exon 2                 exon 3
//!        |============|-------------|==========|-----------|===========|
//!  tx.0  ^       cds.0 ^                                    ^ cds.1     ^ tx.1
//!        [  UTR  ][      CDS      ]            [   CDS   ]  [   UTR   ]
//! ```
//!
//! On the `-` strand the 5' UTR is the one to the right of `cds.1`.

mod error;
pub mod frames;
pub mod index;
pub mod regions;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::transcript::error::Error;
pub use crate::transcript::index::TranscriptIndex;

/// Strand of a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Strand {
    pub fn symbol(&self) -> char {
        match self {
            Strand::Plus => '+',
            Strand::Minus => '-',
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Strand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            _ => Err(Error::InvalidStrand(s.to_string())),
        }
    }
}

/// A single exon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exon {
    /// Genomic start position (1-based).
    pub start: i32,
    /// Genomic stop position (1-based, closed).
    pub stop: i32,
    /// Reading frame of the first coding base; `None` for exons outside of the CDS or when
    /// frames have not been computed.
    #[serde(default)]
    pub frame: Option<u8>,
}

impl Exon {
    pub fn new(start: i32, stop: i32) -> Self {
        Self {
            start,
            stop,
            frame: None,
        }
    }

    pub fn with_frame(start: i32, stop: i32, frame: Option<u8>) -> Self {
        Self { start, stop, frame }
    }

    /// Number of bases in the exon.
    pub fn len(&self) -> i32 {
        self.stop - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.stop < self.start
    }

    /// Whether the closed interval `[start, stop]` lies within the exon.
    pub fn contains(&self, start: i32, stop: i32) -> bool {
        self.start <= start && stop <= self.stop
    }

    /// Whether the closed interval `[start, stop]` shares at least one base with the exon.
    pub fn overlaps(&self, start: i32, stop: i32) -> bool {
        start <= self.stop && self.start <= stop
    }
}

/// A genomic region with 1-based, closed coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BedRegion {
    pub chrom: String,
    pub start: i32,
    pub stop: i32,
}

impl BedRegion {
    pub fn new(chrom: &str, start: i32, stop: i32) -> Self {
        Self {
            chrom: chrom.to_string(),
            start,
            stop,
        }
    }

    pub fn len(&self) -> i32 {
        self.stop - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.stop < self.start
    }
}

impl Display for BedRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chrom, self.start, self.stop)
    }
}

/// Raw transcript record as read from JSON; converted into a `TranscriptModel` through
/// validation.
#[derive(Debug, Clone, Deserialize)]
struct TranscriptModelRecord {
    gene: String,
    transcript_id: String,
    chrom: String,
    strand: Strand,
    tx: (i32, i32),
    cds: (i32, i32),
    exons: Vec<Exon>,
}

/// Model of a transcript on the genome.
///
/// Instances are validated on construction and immutable afterwards.  Frame enrichment
/// produces a new model, see `TranscriptModel::update_frames()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TranscriptModelRecord")]
pub struct TranscriptModel {
    gene: String,
    transcript_id: String,
    chrom: String,
    strand: Strand,
    tx: (i32, i32),
    cds: (i32, i32),
    exons: Vec<Exon>,
}

impl TryFrom<TranscriptModelRecord> for TranscriptModel {
    type Error = Error;

    fn try_from(record: TranscriptModelRecord) -> Result<Self, Self::Error> {
        TranscriptModel::new(
            &record.gene,
            &record.transcript_id,
            &record.chrom,
            record.strand,
            record.tx,
            record.cds,
            record.exons,
        )
    }
}

impl TranscriptModel {
    /// Construct and validate a transcript model.
    ///
    /// # Arguments
    ///
    /// * `tx` -- transcript start and end (1-based, closed)
    /// * `cds` -- coding start and end including start and stop codon; `cds.0 >= cds.1` marks
    ///   a non-coding transcript
    /// * `exons` -- exons sorted by genomic start
    pub fn new(
        gene: &str,
        transcript_id: &str,
        chrom: &str,
        strand: Strand,
        tx: (i32, i32),
        cds: (i32, i32),
        exons: Vec<Exon>,
    ) -> Result<Self, Error> {
        let invalid = |reason: String| Error::InvalidTranscriptModel {
            transcript_id: transcript_id.to_string(),
            reason,
        };

        let (first, last) = match (exons.first(), exons.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(invalid("transcript has no exons".to_string())),
        };
        if let Some(exon) = exons.iter().find(|exon| exon.start > exon.stop) {
            return Err(invalid(format!(
                "exon start {} is after its stop {}",
                exon.start, exon.stop
            )));
        }
        if let Some(pair) = exons.windows(2).find(|pair| pair[0].stop >= pair[1].start) {
            return Err(invalid(format!(
                "exons {}-{} and {}-{} are unsorted or overlapping",
                pair[0].start, pair[0].stop, pair[1].start, pair[1].stop
            )));
        }
        if tx.0 > first.start || tx.1 < last.stop {
            return Err(invalid(format!(
                "transcript span {}-{} does not contain exons {}-{}",
                tx.0, tx.1, first.start, last.stop
            )));
        }
        if cds.0 < cds.1 {
            for boundary in [cds.0, cds.1] {
                if !exons.iter().any(|exon| exon.contains(boundary, boundary)) {
                    return Err(invalid(format!(
                        "CDS boundary {} is not inside an exon",
                        boundary
                    )));
                }
            }
        }

        Ok(Self {
            gene: gene.to_string(),
            transcript_id: transcript_id.to_string(),
            chrom: chrom.to_string(),
            strand,
            tx,
            cds,
            exons,
        })
    }

    pub fn gene(&self) -> &str {
        &self.gene
    }

    pub fn transcript_id(&self) -> &str {
        &self.transcript_id
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn tx(&self) -> (i32, i32) {
        self.tx
    }

    pub fn cds(&self) -> (i32, i32) {
        self.cds
    }

    pub fn exons(&self) -> &[Exon] {
        &self.exons
    }

    pub fn is_coding(&self) -> bool {
        self.cds.0 < self.cds.1
    }

    /// Start of the first and stop of the last exon.
    pub fn exon_span(&self) -> (i32, i32) {
        // exons are non-empty by construction
        (self.exons[0].start, self.exons[self.exons.len() - 1].stop)
    }

    /// Number of introns, i.e., the number of exon-exon junctions.
    pub fn intron_count(&self) -> usize {
        self.exons.len().saturating_sub(1)
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
