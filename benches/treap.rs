use criterion::{black_box, criterion_group, criterion_main, Criterion};
use persistent_treap::TreapMultiset;
use rand::Rng;

const NUM_OF_OPERATIONS: usize = 1000;

fn random_entries() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_treap_insert(c: &mut Criterion) {
    let entries = random_entries();
    c.bench_function("bench treap insert", move |b| {
        b.iter(|| {
            let mut t = TreapMultiset::new();
            for entry in &entries {
                t = t.insert(*entry);
            }
            t
        })
    });
}

fn bench_treap_erase(c: &mut Criterion) {
    let entries = random_entries();
    let t = TreapMultiset::from_vec(entries.clone());
    c.bench_function("bench treap erase", move |b| {
        b.iter(|| {
            let mut u = t.clone();
            for entry in &entries {
                u = u.erase(entry);
            }
            u
        })
    });
}

fn bench_treap_bulk_load_sorted(c: &mut Criterion) {
    let mut entries = random_entries();
    entries.sort();
    c.bench_function("bench treap bulk load sorted", move |b| {
        b.iter(|| TreapMultiset::from_vec(entries.clone()))
    });
}

fn bench_treap_bulk_load_unsorted(c: &mut Criterion) {
    let entries = random_entries();
    c.bench_function("bench treap bulk load unsorted", move |b| {
        b.iter(|| TreapMultiset::from_vec(entries.clone()))
    });
}

fn bench_treap_lower_bound(c: &mut Criterion) {
    let entries = random_entries();
    let t = TreapMultiset::from_vec(entries.clone());
    c.bench_function("bench treap lower bound", move |b| {
        b.iter(|| {
            for entry in &entries {
                black_box(t.lower_bound(entry).rank());
            }
        })
    });
}

fn bench_treap_iter(c: &mut Criterion) {
    let t = TreapMultiset::from_vec(random_entries());
    c.bench_function("bench treap iter", move |b| {
        b.iter(|| {
            for entry in &t {
                black_box(entry);
            }
        })
    });
}

fn bench_treap_cursor(c: &mut Criterion) {
    let t = TreapMultiset::from_vec(random_entries());
    c.bench_function("bench treap cursor", move |b| {
        b.iter(|| {
            let mut cursor = t.begin();
            while let Some(entry) = cursor.get() {
                black_box(entry);
                cursor.move_next();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_treap_insert,
    bench_treap_erase,
    bench_treap_bulk_load_sorted,
    bench_treap_bulk_load_unsorted,
    bench_treap_lower_bound,
    bench_treap_iter,
    bench_treap_cursor,
);
criterion_main!(benches);
