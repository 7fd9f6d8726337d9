use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkId,
    Criterion,
};
use num::BigUint;
use stabchain::{
    group::{
        stabchain::builder::{
            random::{
                RandomAlgoParameters,
                RandomizedBuilder,
            },
            SchreierSimsBuilder,
        },
        Group,
    },
    perm::{
        action::SimpleApplication,
        impls::Perm,
    },
};

const RANGE_OF_VALUES: [usize; 5] = [4, 6, 8, 10, 12];

fn stabchain_cyclic(c: &mut Criterion) {
    let mut group = c.benchmark_group("group__stabchain__cyclic");
    for i in RANGE_OF_VALUES.iter() {
        let g: Group<Perm> = Group::cyclic(*i);
        group.bench_with_input(BenchmarkId::new("deterministic", i), i, |b, _| {
            b.iter(|| SchreierSimsBuilder::new(SimpleApplication::default()).build(&g))
        });
        group.bench_with_input(BenchmarkId::new("randomized_known_order", i), i, |b, _| {
            let order = BigUint::from(*i as u64);
            b.iter(|| {
                let params = RandomAlgoParameters { order: Some(order.clone()), ..Default::default() };
                RandomizedBuilder::new(SimpleApplication::default(), params, rand::thread_rng()).build(&g)
            })
        });
    }
    group.finish();
}

fn stabchain_symmetric(c: &mut Criterion) {
    let mut group = c.benchmark_group("group__stabchain__symmetric");
    for i in RANGE_OF_VALUES.iter() {
        let g: Group<Perm> = Group::symmetric(*i);
        group.bench_with_input(BenchmarkId::new("deterministic", i), i, |b, _| {
            b.iter(|| SchreierSimsBuilder::new(SimpleApplication::default()).build(&g))
        });
    }
    group.finish();
}

fn order_computation(c: &mut Criterion) {
    let mut group = c.benchmark_group("group__stabchain__order");
    for i in RANGE_OF_VALUES.iter() {
        let g: Group<Perm> = Group::symmetric(*i);
        let chain = SchreierSimsBuilder::new(SimpleApplication::default()).build(&g);
        group.bench_with_input(BenchmarkId::new("order", i), i, |b, _| b.iter(|| chain.order()));
    }
    group.finish();
}

criterion_group!(stabilizer_chain, stabchain_cyclic, stabchain_symmetric, order_computation);
criterion_main!(stabilizer_chain);
