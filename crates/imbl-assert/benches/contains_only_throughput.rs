use criterion::{black_box, criterion_group, criterion_main, Criterion};
use imbl::{HashMap, OrdMap};
use imbl_assert::{check_contains_only, Representation};

fn sample_entries(n: u64) -> Vec<(u64, u64)> {
    (0..n).map(|idx| (idx, idx.wrapping_mul(31))).collect()
}

fn contains_only_bench(c: &mut Criterion) {
    let entries = sample_entries(2_000);
    let hash_map: HashMap<u64, u64> = entries.iter().copied().collect();
    let ord_map: OrdMap<u64, u64> = entries.iter().copied().collect();
    let mut drifted = entries.clone();
    drifted[1_000].1 += 1;
    let repr = Representation::default();

    c.bench_function("contains_only_pass_hash_map", |b| {
        b.iter(|| black_box(check_contains_only(&hash_map, Some(&entries), &repr).is_ok()));
    });

    c.bench_function("contains_only_pass_ord_map", |b| {
        b.iter(|| black_box(check_contains_only(&ord_map, Some(&hash_map), &repr).is_ok()));
    });

    c.bench_function("contains_only_fail_render", |b| {
        b.iter(|| black_box(check_contains_only(&hash_map, Some(&drifted), &repr).is_err()));
    });
}

criterion_group!(benches, contains_only_bench);
criterion_main!(benches);
