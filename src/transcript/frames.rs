//! Reading frames of exons.

use super::{Exon, Strand, TranscriptModel};

impl TranscriptModel {
    /// Compute the reading frame for every exon, in genomic order.
    ///
    /// The first coding exon in transcript direction has frame 0; each following coding exon
    /// has frame `(previous frame + previous coding length) mod 3`.  Exons without coding
    /// bases and all exons of non-coding transcripts get `None`.
    pub fn calc_frames(&self) -> Vec<Option<u8>> {
        let mut frames = vec![None; self.exons.len()];
        if !self.is_coding() {
            return frames;
        }

        let (cds_start, cds_end) = self.cds;
        let order: Box<dyn Iterator<Item = usize>> = match self.strand {
            Strand::Plus => Box::new(0..self.exons.len()),
            Strand::Minus => Box::new((0..self.exons.len()).rev()),
        };

        // frame and coding length of the previous coding exon
        let mut carry: Option<(u8, i32)> = None;
        for idx in order {
            let exon = &self.exons[idx];
            let start = exon.start.max(cds_start);
            let stop = exon.stop.min(cds_end);
            if start > stop {
                continue;
            }

            let frame = match carry {
                None => 0,
                Some((prev_frame, prev_len)) => ((prev_frame as i32 + prev_len) % 3) as u8,
            };
            frames[idx] = Some(frame);
            carry = Some((frame, stop - start + 1));
        }

        frames
    }

    /// Return a copy of this model with exon frames set from `calc_frames()`.
    pub fn update_frames(&self) -> TranscriptModel {
        let frames = self.calc_frames();
        log::trace!(
            "updating frames of {} to {:?}",
            &self.transcript_id,
            &frames
        );

        TranscriptModel {
            exons: self
                .exons
                .iter()
                .zip(frames)
                .map(|(exon, frame)| Exon::with_frame(exon.start, exon.stop, frame))
                .collect(),
            ..self.clone()
        }
    }

    /// Whether the stored exon frames agree with `calc_frames()`.
    pub fn test_frames(&self) -> bool {
        self.exons
            .iter()
            .map(|exon| exon.frame)
            .eq(self.calc_frames())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use test_log::test;

    use crate::transcript::{test_helpers::build_transcript, Strand};

    #[test]
    fn frames_plus_strand() {
        let tm = build_transcript(
            Strand::Plus,
            (150, 350),
            &[(100, 200), (300, 400), (500, 600)],
        );

        // 51 coding bases in exon 1
        assert_eq!(tm.calc_frames(), vec![Some(0), Some(0), None]);
    }

    #[test]
    fn frames_carry_coding_length() {
        let tm = build_transcript(
            Strand::Plus,
            (150, 520),
            &[(100, 200), (300, 349), (500, 600)],
        );

        // 51 bases -> frame 0, then 50 bases -> frame 2
        assert_eq!(tm.calc_frames(), vec![Some(0), Some(0), Some(2)]);
    }

    #[test]
    fn frames_minus_strand() {
        let tm = build_transcript(
            Strand::Minus,
            (1050, 1850),
            &[(1000, 1100), (1300, 1400), (1600, 1650), (1800, 1900)],
        );

        assert_eq!(
            tm.calc_frames(),
            vec![Some(2), Some(0), Some(0), Some(0)]
        );
    }

    #[test]
    fn frames_non_coding() {
        let tm = build_transcript(Strand::Plus, (401, 400), &[(100, 200), (300, 400)]);

        assert_eq!(tm.calc_frames(), vec![None, None]);
        assert!(tm.test_frames());
    }

    #[test]
    fn update_frames_is_idempotent() {
        let tm = build_transcript(
            Strand::Minus,
            (1050, 1850),
            &[(1000, 1100), (1300, 1400), (1600, 1650), (1800, 1900)],
        );
        assert!(!tm.test_frames());

        let updated = tm.update_frames();
        assert!(updated.test_frames());
        assert_eq!(updated.update_frames(), updated);
        assert_eq!(updated.cds(), tm.cds());
        assert_eq!(updated.exons().len(), tm.exons().len());
        assert_eq!(updated.exons()[0].frame, Some(2));
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
