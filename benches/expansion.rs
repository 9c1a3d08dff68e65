use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daily_excuse::excuse::EXTENDED_CAUSES;
use daily_excuse::{parse_vocabulary, sentence, Writer};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn expand_sentence(c: &mut Criterion) {
    let root = sentence();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("expand_and_render", |b| {
        b.iter(|| {
            let mut out = Writer::new();
            root.expand(&mut out, &mut rng);
            black_box(out.render())
        })
    });
}

fn parse_extended(c: &mut Criterion) {
    c.bench_function("parse_vocabulary", |b| {
        b.iter(|| black_box(parse_vocabulary(black_box(EXTENDED_CAUSES))))
    });
}

criterion_group!(benches, expand_sentence, parse_extended);
criterion_main!(benches);
