//! Per-chromosome collection of transcript models.

use indexmap::IndexMap;

use super::TranscriptModel;

/// Transcript models grouped by chromosome, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TranscriptIndex {
    by_chrom: IndexMap<String, Vec<TranscriptModel>>,
}

impl TranscriptIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, transcript: TranscriptModel) {
        self.by_chrom
            .entry(transcript.chrom().to_string())
            .or_default()
            .push(transcript);
    }

    /// All transcripts on `chrom`, empty if the chromosome is unknown.
    pub fn transcripts(&self, chrom: &str) -> &[TranscriptModel] {
        self.by_chrom.get(chrom).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_chrom(&self, chrom: &str) -> bool {
        self.by_chrom.contains_key(chrom)
    }

    pub fn chroms(&self) -> impl Iterator<Item = &str> {
        self.by_chrom.keys().map(String::as_str)
    }

    /// Transcripts on `chrom` whose `tx` span, widened by `padding` on both sides, overlaps
    /// the closed interval `[start, stop]`.
    pub fn overlapping<'a>(
        &'a self,
        chrom: &str,
        start: i32,
        stop: i32,
        padding: i32,
    ) -> impl Iterator<Item = &'a TranscriptModel> + 'a {
        self.transcripts(chrom).iter().filter(move |tm| {
            let (tx_start, tx_end) = tm.tx();
            tx_start - padding <= stop && start <= tx_end + padding
        })
    }

    /// Total number of transcripts.
    pub fn len(&self) -> usize {
        self.by_chrom.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<TranscriptModel> for TranscriptIndex {
    fn from_iter<T: IntoIterator<Item = TranscriptModel>>(iter: T) -> Self {
        let mut index = Self::new();
        for transcript in iter {
            index.insert(transcript);
        }
        index
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
