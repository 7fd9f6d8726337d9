use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BenchmarkId,
    Criterion,
};
use rand::{
    seq::SliceRandom,
    SeedableRng,
};
use rand_chacha::ChaCha8Rng;
use stabchain::perm::{
    impls::Perm,
    Permutation,
};

const RANGE_OF_VALUES: [usize; 6] = [8, 16, 32, 64, 128, 256];

fn random_permutation(n: usize, rng: &mut ChaCha8Rng) -> Perm {
    let mut images: Vec<usize> = (0..n).collect();
    images.shuffle(rng);
    Perm::from_images(&images).expect("shuffled range is a valid permutation")
}

fn random_instantiation(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut group = c.benchmark_group("permutation__random_creation");
    for i in RANGE_OF_VALUES.iter() {
        group.bench_with_input(BenchmarkId::new("from_images", i), i, |b, i| {
            b.iter(|| random_permutation(*i, &mut rng))
        });
    }
    group.finish();
}

fn composition(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut group = c.benchmark_group("permutation__op");
    for i in RANGE_OF_VALUES.iter() {
        group.bench_with_input(BenchmarkId::new("op", i), i, |b, i| {
            let first = random_permutation(*i, &mut rng);
            let second = random_permutation(*i, &mut rng);
            b.iter(|| black_box(first.op(&second)))
        });
    }
    group.finish();
}

fn inverse_of_product(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut group = c.benchmark_group("permutation__inv_prod");
    for i in RANGE_OF_VALUES.iter() {
        group.bench_with_input(BenchmarkId::new("inv_of_op", i), i, |b, i| {
            let first = random_permutation(*i, &mut rng);
            let second = random_permutation(*i, &mut rng);
            b.iter(|| black_box(first.op(&second).inverse()))
        });
        group.bench_with_input(BenchmarkId::new("op_of_inv", i), i, |b, i| {
            let first = random_permutation(*i, &mut rng);
            let second = random_permutation(*i, &mut rng);
            b.iter(|| black_box(second.inverse().op(&first.inverse())))
        });
    }
    group.finish();
}

fn exponentiation(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut group = c.benchmark_group("permutation__pow");
    for i in RANGE_OF_VALUES.iter() {
        group.bench_with_input(BenchmarkId::new("pow", i), i, |b, i| {
            let perm = random_permutation(*i, &mut rng);
            b.iter(|| black_box(perm.pow((*i / 2) as isize)))
        });
    }
    group.finish();
}

fn order_computation(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut group = c.benchmark_group("permutation__order");
    for i in RANGE_OF_VALUES.iter() {
        group.bench_with_input(BenchmarkId::new("order", i), i, |b, i| {
            let perm = random_permutation(*i, &mut rng);
            b.iter(|| perm.order())
        });
    }
    group.finish();
}

fn identity_check(c: &mut Criterion) {
    let id = Perm::id();
    c.bench_function("permutation__is_id", |b| b.iter(|| id.is_id()));
}

criterion_group!(
    permutation,
    random_instantiation,
    composition,
    inverse_of_product,
    exponentiation,
    order_computation,
    identity_check,
);
criterion_main!(permutation);
