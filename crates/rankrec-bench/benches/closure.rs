//! Group 2: pipeline stages in isolation (contradiction scan, merge with
//! closure, layering).
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rankrec_bench::{SizeTier, generate_ranking_pair};
use rankrec_core::{
    CyclePolicy, ElementSet, RelationMap, RelationModel, TieBreak, build_consistent_ranking,
    build_dominance_ranking, find_contradictions,
};

struct Setup {
    elements: ElementSet,
    first: RelationModel,
    second: RelationModel,
}

fn setup(tier: SizeTier) -> Setup {
    let (first, second) = generate_ranking_pair(&tier.config(42));
    Setup {
        elements: ElementSet::from_rankings(&first, &second),
        first: RelationModel::new(&first),
        second: RelationModel::new(&second),
    }
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    group.sample_size(10);

    for tier in [
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
        SizeTier::XLarge,
    ] {
        let s = setup(tier);

        group.bench_function(BenchmarkId::new("contradictions", tier.name()), |b| {
            b.iter(|| find_contradictions(&s.elements, &s.first, &s.second));
        });

        group.bench_function(BenchmarkId::new("merge_and_close", tier.name()), |b| {
            b.iter(|| {
                RelationMap::merge(
                    s.elements.clone(),
                    &s.first,
                    &s.second,
                    TieBreak::FirstRanking,
                )
            });
        });

        let relations = RelationMap::merge(
            s.elements.clone(),
            &s.first,
            &s.second,
            TieBreak::FirstRanking,
        );

        group.bench_function(BenchmarkId::new("layer_topological", tier.name()), |b| {
            b.iter(|| {
                build_consistent_ranking(&relations, &s.first, &s.second, CyclePolicy::Strict)
                    .expect("acyclic")
            });
        });

        group.bench_function(BenchmarkId::new("layer_dominance", tier.name()), |b| {
            b.iter(|| build_dominance_ranking(&s.elements, &s.first, &s.second));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stages);
criterion_main!(benches);
