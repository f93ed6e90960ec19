use criterion::{criterion_group, criterion_main, Criterion};
use variant_effects::classifier::EffectClassifier;
use variant_effects::context::{AminoAcids, Error, StartCodonMatch, VariantEffectContext};
use variant_effects::transcript::{Exon, Strand, TranscriptModel};
use variant_effects::variant::Variant;

/// Context with a fixed missense translation.
struct BenchContext<'a> {
    variant: Variant,
    transcript: &'a TranscriptModel,
}

impl VariantEffectContext for BenchContext<'_> {
    fn variant(&self) -> &Variant {
        &self.variant
    }

    fn transcript(&self) -> &TranscriptModel {
        self.transcript
    }

    fn amino_acids(&self) -> Result<AminoAcids, Error> {
        Ok(AminoAcids::from_tokens(&["Leu"], &["Pro"]))
    }

    fn find_start_codon(&self) -> Option<StartCodonMatch> {
        None
    }
}

/// Transcript with 40 exons of 150 bases, separated by 850 base introns.
fn transcript() -> TranscriptModel {
    let exons: Vec<_> = (0..40)
        .map(|i| Exon::new(1_000 * i + 1, 1_000 * i + 150))
        .collect();
    TranscriptModel::new(
        "BENCH",
        "NM_999999.1",
        "1",
        Strand::Minus,
        (1, 39_150),
        (100, 39_100),
        exons,
    )
    .unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let tm = transcript();
    let classifier = EffectClassifier::default();
    let variants: Vec<Variant> = (1..39_150)
        .step_by(97)
        .map(|pos| Variant::new("1", pos, "A", "C").unwrap())
        .collect();

    c.bench_function("classify 40-exon transcript", |b| {
        b.iter(|| {
            for variant in &variants {
                let ctx = BenchContext {
                    variant: variant.clone(),
                    transcript: &tm,
                };
                classifier.classify(&ctx);
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
