use criterion::{black_box, criterion_group, criterion_main, Criterion};

use annosent::{AnnotatedSentence, AnnotatedWord};

const TOKEN: &'static str = "{turkish=tanıttı}{morphologicalAnalysis=tanıt+VERB+POS+PAST+A3SG}{metaMorphemes=tanıt+DH}{semantics=TUR10-0148580}{namedEntity=NONE}{propbank=PREDICATE$TUR10-0148580}{shallowParse=YUKLEM}{universalDependency=0$ROOT}";

pub fn bench_codec(c: &mut Criterion) {
    c.bench_function("decode_token", |b| {
        b.iter(|| AnnotatedWord::from_token(black_box(TOKEN)).expect("benchmark token decodes"))
    });

    let word = AnnotatedWord::from_token(TOKEN).expect("benchmark token decodes");
    c.bench_function("encode_token", |b| b.iter(|| black_box(&word).to_string()));

    let line = std::iter::repeat(TOKEN)
        .take(20)
        .collect::<Vec<_>>()
        .join(" ");
    c.bench_function("decode_sentence", |b| {
        b.iter(|| AnnotatedSentence::from_line(black_box(&line)).expect("benchmark line decodes"))
    });

    let sentence = AnnotatedSentence::from_line(&line).expect("benchmark line decodes");
    c.bench_function("shallow_parse_groups", |b| {
        b.iter(|| black_box(&sentence).shallow_parse_groups())
    });
    c.bench_function("compare_parses", |b| {
        b.iter(|| black_box(&sentence).compare_parses(black_box(&sentence)))
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
