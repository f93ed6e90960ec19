//! Derivation of CDS, UTR and exon regions from a transcript model.

use super::{BedRegion, Exon, Strand, TranscriptModel};

impl TranscriptModel {
    fn region(&self, start: i32, stop: i32) -> BedRegion {
        BedRegion::new(&self.chrom, start, stop)
    }

    fn exon_region(&self, exon: &Exon) -> BedRegion {
        self.region(exon.start, exon.stop)
    }

    /// Coding regions, one per exon overlapping the CDS.
    ///
    /// Interior boundaries are extended by `ss_extend` bases into the flanking introns; the
    /// CDS start and stop themselves are never extended.
    pub fn cds_regions(&self, ss_extend: i32) -> Vec<BedRegion> {
        let mut regions = Vec::new();
        if !self.is_coding() {
            return regions;
        }

        let (cds_start, cds_end) = self.cds;
        let exons = &self.exons;
        let mut k = 0;
        while k < exons.len() && exons[k].stop < cds_start {
            k += 1;
        }
        if k == exons.len() {
            return regions;
        }

        if cds_end <= exons[k].stop {
            regions.push(self.region(cds_start, cds_end));
            return regions;
        }

        regions.push(self.region(cds_start, exons[k].stop + ss_extend));
        k += 1;
        while k < exons.len() && exons[k].stop <= cds_end {
            if exons[k].stop < cds_end {
                regions.push(self.region(exons[k].start - ss_extend, exons[k].stop + ss_extend));
                k += 1;
            } else {
                regions.push(self.region(exons[k].start - ss_extend, exons[k].stop));
                return regions;
            }
        }

        if k < exons.len() && exons[k].start <= cds_end {
            regions.push(self.region(exons[k].start - ss_extend, cds_end));
        }

        regions
    }

    /// Exonic regions left of `cds.0`; the last one is clipped at `cds.0 - 1`.
    fn left_utr_regions(&self) -> Vec<BedRegion> {
        let mut regions = Vec::new();
        if !self.is_coding() {
            return regions;
        }

        let cds_start = self.cds.0;
        let mut k = 0;
        while k < self.exons.len() && self.exons[k].stop < cds_start {
            regions.push(self.exon_region(&self.exons[k]));
            k += 1;
        }
        if k < self.exons.len() && self.exons[k].start < cds_start {
            regions.push(self.region(self.exons[k].start, cds_start - 1));
        }

        regions
    }

    /// Exonic regions right of `cds.1`; the first one is clipped at `cds.1 + 1`.
    fn right_utr_regions(&self) -> Vec<BedRegion> {
        let mut regions = Vec::new();
        if !self.is_coding() {
            return regions;
        }

        let cds_end = self.cds.1;
        let mut k = 0;
        while k < self.exons.len() && self.exons[k].stop < cds_end {
            k += 1;
        }
        if k == self.exons.len() {
            return regions;
        }

        if self.exons[k].stop != cds_end {
            regions.push(self.region(cds_end + 1, self.exons[k].stop));
        }
        regions.extend(self.exons[k + 1..].iter().map(|exon| self.exon_region(exon)));

        regions
    }

    /// 5' untranslated regions in genomic order.
    pub fn utr5_regions(&self) -> Vec<BedRegion> {
        match self.strand {
            Strand::Plus => self.left_utr_regions(),
            Strand::Minus => self.right_utr_regions(),
        }
    }

    /// 3' untranslated regions in genomic order.
    pub fn utr3_regions(&self) -> Vec<BedRegion> {
        match self.strand {
            Strand::Plus => self.right_utr_regions(),
            Strand::Minus => self.left_utr_regions(),
        }
    }

    /// One region per exon.
    ///
    /// With `ss_extend > 0`, exon boundaries facing coding sequence across an intron are
    /// extended by `ss_extend`.  With `promoter > 0`, the 5'-most region is extended upstream
    /// by `promoter` bases.
    pub fn all_regions(&self, ss_extend: i32, promoter: i32) -> Vec<BedRegion> {
        let (cds_start, cds_end) = self.cds;
        let mut regions: Vec<BedRegion> = if ss_extend == 0 {
            self.exons
                .iter()
                .map(|exon| self.exon_region(exon))
                .collect()
        } else {
            self.exons
                .iter()
                .map(|exon| {
                    if exon.stop <= cds_start {
                        self.exon_region(exon)
                    } else if exon.start <= cds_start {
                        if exon.stop >= cds_end {
                            self.exon_region(exon)
                        } else {
                            self.region(exon.start, exon.stop + ss_extend)
                        }
                    } else if exon.start > cds_end {
                        self.exon_region(exon)
                    } else if exon.stop >= cds_end {
                        self.region(exon.start - ss_extend, exon.stop)
                    } else {
                        self.region(exon.start - ss_extend, exon.stop + ss_extend)
                    }
                })
                .collect()
        };

        if promoter != 0 {
            let edge = match self.strand {
                Strand::Plus => regions.first_mut(),
                Strand::Minus => regions.last_mut(),
            };
            match (edge, self.strand) {
                (Some(region), Strand::Plus) => region.start -= promoter,
                (Some(region), Strand::Minus) => region.stop += promoter,
                (None, _) => (),
            }
        }

        regions
    }

    pub fn total_len(&self) -> i32 {
        self.exons.iter().map(Exon::len).sum()
    }

    pub fn cds_len(&self) -> i32 {
        sum_len(&self.cds_regions(0))
    }

    pub fn utr3_len(&self) -> i32 {
        sum_len(&self.utr3_regions())
    }

    pub fn utr5_len(&self) -> i32 {
        sum_len(&self.utr5_regions())
    }
}

fn sum_len(regions: &[BedRegion]) -> i32 {
    regions.iter().map(BedRegion::len).sum()
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
