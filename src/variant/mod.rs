//! Genomic sequence variants as consumed by effect classification.

mod error;

use std::fmt::Display;
use std::str::FromStr;

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res},
    IResult, Parser,
};

use crate::utils::trim_alleles;

pub use crate::variant::error::Error;

/// A substitution, insertion or deletion on one chromosome.
///
/// Alleles are upper-cased and trimmed on construction: the common suffix is removed first,
/// then the common prefix, and `position` is shifted by the length of the removed prefix.
/// Thus, insertions have an empty `reference` and `position` points to the base right of
/// the insertion point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    chrom: String,
    position: i32,
    reference: String,
    alternative: String,
}

fn check_allele(allele: &str) -> Result<(), Error> {
    if allele
        .bytes()
        .all(|b| matches!(b, b'A' | b'C' | b'G' | b'T' | b'N'))
    {
        Ok(())
    } else {
        Err(Error::InvalidAllele(allele.to_string()))
    }
}

impl Variant {
    pub fn new(
        chrom: &str,
        position: i32,
        reference: &str,
        alternative: &str,
    ) -> Result<Self, Error> {
        if position < 1 {
            return Err(Error::InvalidPosition(position));
        }
        let reference = reference.to_ascii_uppercase();
        let alternative = alternative.to_ascii_uppercase();
        check_allele(&reference)?;
        check_allele(&alternative)?;

        let (position, reference, alternative) = trim_alleles(position, &reference, &alternative);
        Ok(Self {
            chrom: chrom.to_string(),
            position,
            reference: reference.to_string(),
            alternative: alternative.to_string(),
        })
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    /// 1-based position of the first affected base.
    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn alternative(&self) -> &str {
        &self.alternative
    }

    /// Position right after the reference allele, i.e., `position + len(reference)`.
    pub fn ref_position_last(&self) -> i32 {
        self.position + self.reference.len() as i32
    }

    /// Last affected position, inclusive.
    ///
    /// Equals `position` for insertions, where the reference allele is empty.
    pub fn corrected_ref_position_last(&self) -> i32 {
        self.position.max(self.ref_position_last() - 1)
    }

    /// Whether the variant changes nothing after trimming.
    pub fn is_no_op(&self) -> bool {
        self.reference.is_empty() && self.alternative.is_empty()
    }

    /// Net change in sequence length, `|len(alt) - len(ref)|`.
    pub fn indel_length(&self) -> i32 {
        (self.alternative.len() as i32 - self.reference.len() as i32).abs()
    }

    /// Length of the longer allele.
    pub fn length(&self) -> i32 {
        self.reference.len().max(self.alternative.len()) as i32
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.chrom, self.position, self.reference, self.alternative
        )
    }
}

fn parse_variant(input: &str) -> IResult<&str, (&str, i32, &str, &str)> {
    let allele = |c: char| c.is_ascii_alphabetic();
    let (input, chrom) = take_while1(|c: char| c != ':').parse(input)?;
    let (input, _) = char(':').parse(input)?;
    let (input, position) = map_res(digit1, str::parse::<i32>).parse(input)?;
    let (input, _) = char(':').parse(input)?;
    let (input, reference) = take_while(allele).parse(input)?;
    let (input, _) = char(':').parse(input)?;
    let (input, alternative) = take_while(allele).parse(input)?;

    Ok((input, (chrom, position, reference, alternative)))
}

impl FromStr for Variant {
    type Err = Error;

    /// Parse from `chrom:pos:ref:alt`; either allele may be empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, (chrom, position, reference, alternative)) = all_consuming(parse_variant)
            .parse(s)
            .map_err(|_| Error::InvalidVariantString(s.to_string()))?;
        Variant::new(chrom, position, reference, alternative)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Error, Variant};

    #[test]
    fn construction_trims_alleles() -> Result<(), anyhow::Error> {
        let var = Variant::new("1", 151, "a", "ag")?;

        assert_eq!(var.position(), 152);
        assert_eq!(var.reference(), "");
        assert_eq!(var.alternative(), "G");
        assert_eq!(var.ref_position_last(), 152);
        assert_eq!(var.corrected_ref_position_last(), 152);
        assert_eq!(var.indel_length(), 1);
        assert!(!var.is_no_op());

        Ok(())
    }

    #[rstest]
    #[case("1:100:A:C", 100, 101, 100)]
    #[case("1:100:CTTA:C", 101, 104, 103)]
    #[case("1:100:T:TTT", 100, 100, 100)]
    #[case("1:100:ACG:TCA", 100, 103, 102)]
    fn derived_positions(
        #[case] input: &str,
        #[case] position: i32,
        #[case] last: i32,
        #[case] corrected_last: i32,
    ) -> Result<(), anyhow::Error> {
        let var: Variant = input.parse()?;

        assert_eq!(var.position(), position);
        assert_eq!(var.ref_position_last(), last);
        assert_eq!(var.corrected_ref_position_last(), corrected_last);

        Ok(())
    }

    #[test]
    fn no_op() -> Result<(), anyhow::Error> {
        let var: Variant = "chr1:100:ACG:ACG".parse()?;

        assert!(var.is_no_op());
        assert_eq!(var.length(), 0);
        assert_eq!(format!("{}", var), "chr1:100::");

        Ok(())
    }

    #[test]
    fn parse_with_empty_alleles() -> Result<(), anyhow::Error> {
        let deletion: Variant = "X:5000:TG:".parse()?;
        assert_eq!(deletion.reference(), "TG");
        assert_eq!(deletion.alternative(), "");
        assert_eq!(deletion.length(), 2);

        let insertion: Variant = "X:5000::CCC".parse()?;
        assert_eq!(insertion.reference(), "");
        assert_eq!(insertion.indel_length(), 3);

        Ok(())
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            "1:100:A".parse::<Variant>(),
            Err(Error::InvalidVariantString("1:100:A".to_string()))
        );
        assert!("1:x:A:C".parse::<Variant>().is_err());
        assert!("1:100:A:C:".parse::<Variant>().is_err());
        assert_eq!(
            Variant::new("1", 0, "A", "C"),
            Err(Error::InvalidPosition(0))
        );
        assert_eq!(
            Variant::new("1", 10, "A", "X"),
            Err(Error::InvalidAllele("X".to_string()))
        );
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
