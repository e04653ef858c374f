use alloc::format;
use core::hash::Hash;
use core::hash::Hasher;
use core::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::hash_table::Entry as HashbrownEntry;
use hashbrown::hash_table::HashTable as HashbrownHashTable;
use lp_hash::HashMap as LpHashMap;
use lp_hash::HashTable as LpHashTable;
use lp_hash::hash_table::Entry as LpEntry;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

extern crate alloc;

trait KeyValuePair: Clone {
    fn new(key: u64) -> Self;

    fn hash_key(&self) -> u64;
    fn eq_key(&self, other: &Self) -> bool;
}

#[derive(Clone)]
struct TestItem {
    key: String,
    _value: u64,
}

impl KeyValuePair for TestItem {
    fn new(key: u64) -> Self {
        black_box(Self {
            key: format!("key_{:016X}", key),
            _value: key,
        })
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.key.hash(&mut hasher);
        hasher.finish()
    }

    fn eq_key(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

#[derive(Clone)]
struct SmallTestItem {
    key: u64,
}

impl KeyValuePair for SmallTestItem {
    fn new(key: u64) -> Self {
        black_box(Self { key })
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.key.hash(&mut hasher);
        hasher.finish()
    }

    fn eq_key(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 11),
    (1 << 12),
    (1 << 13),
    (1 << 14),
    (1 << 15),
    (1 << 16),
];

fn random_items<TestItem: KeyValuePair>(count: usize) -> Vec<(u64, TestItem)> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| {
            let key = rng.try_next_u64().unwrap();
            let item = TestItem::new(key);
            let hash = item.hash_key();
            (hash, item)
        })
        .collect()
}

fn sequential_items<TestItem: KeyValuePair>(range: core::ops::Range<u64>) -> Vec<(u64, TestItem)> {
    range
        .map(|key| {
            let item = TestItem::new(key);
            let hash = item.hash_key();
            (hash, item)
        })
        .collect()
}

fn fill_lp<TestItem: KeyValuePair>(items: &[(u64, TestItem)]) -> LpHashTable<TestItem> {
    let mut table = LpHashTable::with_capacity(0);
    for (hash, item) in items.iter().cloned() {
        match table.entry(hash, |v| v.eq_key(&item)) {
            LpEntry::Vacant(entry) => {
                entry.insert(item);
            }
            LpEntry::Occupied(_) => unreachable!(),
        }
    }
    table
}

fn fill_hashbrown<TestItem: KeyValuePair>(
    items: &[(u64, TestItem)],
) -> HashbrownHashTable<TestItem> {
    let mut table = HashbrownHashTable::with_capacity(0);
    for (hash, item) in items.iter().cloned() {
        match table.entry(hash, |v: &TestItem| v.eq_key(&item), |v| v.hash_key()) {
            HashbrownEntry::Vacant(entry) => {
                entry.insert(item);
            }
            HashbrownEntry::Occupied(_) => unreachable!(),
        }
    }
    table
}

fn bench_insert_random<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_random_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<TestItem>(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function("lp_hash", |b| {
            b.iter_batched(
                || {
                    let mut hash_and_item = hash_and_item.clone();
                    hash_and_item.shuffle(&mut SmallRng::from_os_rng());
                    hash_and_item
                },
                |hash_and_item| black_box(fill_lp(&hash_and_item)),
                BatchSize::SmallInput,
            )
        });

        group.bench_function("hashbrown", |b| {
            b.iter_batched(
                || {
                    let mut hash_and_item = hash_and_item.clone();
                    hash_and_item.shuffle(&mut SmallRng::from_os_rng());
                    hash_and_item
                },
                |hash_and_item| black_box(fill_hashbrown(&hash_and_item)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "find_hit_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = sequential_items::<TestItem>(0..*size as u64);
        let lp_table = fill_lp(&hash_and_item);
        let hashbrown_table = fill_hashbrown(&hash_and_item);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function("lp_hash", |b| {
            b.iter(|| {
                for (hash, item) in hash_and_item.iter() {
                    black_box(lp_table.find(*hash, |v| v.eq_key(item)));
                }
            })
        });

        group.bench_function("hashbrown", |b| {
            b.iter(|| {
                for (hash, item) in hash_and_item.iter() {
                    black_box(hashbrown_table.find(*hash, |v| v.eq_key(item)));
                }
            })
        });
    }

    group.finish();
}

fn bench_find_miss<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "find_miss_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let present = sequential_items::<TestItem>(0..*size as u64);
        let absent = sequential_items::<TestItem>(*size as u64..2 * *size as u64);
        let lp_table = fill_lp(&present);
        let hashbrown_table = fill_hashbrown(&present);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function("lp_hash", |b| {
            b.iter(|| {
                for (hash, item) in absent.iter() {
                    black_box(lp_table.find(*hash, |v| v.eq_key(item)));
                }
            })
        });

        group.bench_function("hashbrown", |b| {
            b.iter(|| {
                for (hash, item) in absent.iter() {
                    black_box(hashbrown_table.find(*hash, |v| v.eq_key(item)));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "remove_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = sequential_items::<TestItem>(0..*size as u64);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function("lp_hash", |b| {
            b.iter_batched(
                || fill_lp(&hash_and_item),
                |mut table| {
                    for (hash, item) in hash_and_item.iter() {
                        black_box(table.remove(*hash, |v| v.eq_key(item)));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function("hashbrown", |b| {
            b.iter_batched(
                || fill_hashbrown(&hash_and_item),
                |mut table| {
                    for (hash, item) in hash_and_item.iter() {
                        let result = match table.find_entry(*hash, |v| v.eq_key(item)) {
                            Ok(entry) => Some(entry.remove().0),
                            Err(_) => None,
                        };
                        black_box(result);
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_iteration<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "iteration_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = sequential_items::<TestItem>(0..*size as u64);
        let lp_table = fill_lp(&hash_and_item);
        let hashbrown_table = fill_hashbrown(&hash_and_item);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function("lp_hash", |b| {
            b.iter(|| {
                for item in lp_table.iter() {
                    black_box(item);
                }
            })
        });

        group.bench_function("hashbrown", |b| {
            b.iter(|| {
                for item in hashbrown_table.iter() {
                    black_box(item);
                }
            })
        });
    }

    group.finish();
}

#[derive(Clone, Copy)]
enum Operation {
    Find,
    Insert,
    Remove,
}

fn bench_mixed_probabilistic_zipf<TestItem: KeyValuePair, const MAX_SIZE: usize>(
    c: &mut Criterion,
) {
    for exponent in [1.0, 1.3] {
        let mut group = c.benchmark_group(format!(
            "mixed_probabilistic_zipf_{:.01}_{}",
            exponent,
            core::any::type_name::<TestItem>()
        ));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        const KEY_SPACE_MULTIPLIER: u64 = 2;

        for size in SIZES[..=MAX_SIZE].iter() {
            let mut rng = SmallRng::from_os_rng();
            let op_distr = Zipf::new(3.0, exponent).unwrap();
            let key_distr =
                Zipf::new(*size as f32 * KEY_SPACE_MULTIPLIER as f32 - 1.0, 1.0).unwrap();

            // Keys are drawn up front so both tables replay the same workload.
            let operations = (0..*size * 3)
                .map(|_| {
                    let op_choice: f64 = rng.sample(op_distr);
                    let op = if op_choice <= 1.0 {
                        Operation::Find
                    } else if op_choice <= 2.0 {
                        Operation::Insert
                    } else {
                        Operation::Remove
                    };
                    let item = TestItem::new(rng.sample(key_distr) as u64);
                    (op, item.hash_key(), item)
                })
                .collect::<Vec<(Operation, u64, TestItem)>>();

            group.throughput(Throughput::Elements(*size as u64 * 3));
            group.bench_function("lp_hash", |b| {
                b.iter_batched(
                    || operations.clone(),
                    |operations| {
                        let mut table = LpHashTable::<TestItem>::with_capacity(0);
                        for (operation, hash, item) in operations {
                            match operation {
                                Operation::Insert => {
                                    match table.entry(hash, |v| v.eq_key(&item)) {
                                        LpEntry::Vacant(entry) => {
                                            black_box(entry.insert(item));
                                        }
                                        LpEntry::Occupied(mut occupied) => {
                                            *occupied.get_mut() = item;
                                        }
                                    }
                                }
                                Operation::Remove => {
                                    black_box(table.remove(hash, |v| v.eq_key(&item)));
                                }
                                Operation::Find => {
                                    black_box(table.find(hash, |v| v.eq_key(&item)));
                                }
                            }
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });

            group.bench_function("hashbrown", |b| {
                b.iter_batched(
                    || operations.clone(),
                    |operations| {
                        let mut table = HashbrownHashTable::<TestItem>::with_capacity(0);
                        for (operation, hash, item) in operations {
                            match operation {
                                Operation::Insert => {
                                    match table.entry(hash, |v| v.eq_key(&item), |v| v.hash_key())
                                    {
                                        HashbrownEntry::Vacant(entry) => {
                                            black_box(entry.insert(item));
                                        }
                                        HashbrownEntry::Occupied(mut occupied) => {
                                            *occupied.get_mut() = item;
                                        }
                                    }
                                }
                                Operation::Remove => {
                                    let result = match table.find_entry(hash, |v| v.eq_key(&item))
                                    {
                                        Ok(entry) => Some(entry.remove().0),
                                        Err(_) => None,
                                    };
                                    black_box(result);
                                }
                                Operation::Find => {
                                    black_box(table.find(hash, |v| v.eq_key(&item)));
                                }
                            }
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.finish();
    }
}

/// Insert/remove pairs over the same keys: every second touch of a key
/// leaves a tombstone, which stresses the rebuild path.
fn bench_churn<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("churn_{}", core::any::type_name::<TestItem>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let insertions_and_removals = sequential_items::<TestItem>(0..*size as u64)
            .into_iter()
            .flat_map(|pair| [pair.clone(), pair])
            .collect::<Vec<(u64, TestItem)>>();

        group.throughput(Throughput::Elements(*size as u64 * 2));
        group.bench_function("lp_hash", |b| {
            b.iter_batched(
                || {
                    let mut hash_and_item = insertions_and_removals.clone();
                    hash_and_item.shuffle(&mut SmallRng::from_os_rng());
                    hash_and_item
                },
                |hash_and_item| {
                    let mut table = LpHashTable::<TestItem>::with_capacity(0);
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v| v.eq_key(&item)) {
                            LpEntry::Vacant(entry) => {
                                entry.insert(item);
                            }
                            LpEntry::Occupied(entry) => {
                                black_box(entry.remove());
                            }
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function("hashbrown", |b| {
            b.iter_batched(
                || {
                    let mut hash_and_item = insertions_and_removals.clone();
                    hash_and_item.shuffle(&mut SmallRng::from_os_rng());
                    hash_and_item
                },
                |hash_and_item| {
                    let mut table = HashbrownHashTable::<TestItem>::with_capacity(0);
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v| v.eq_key(&item), |v| v.hash_key()) {
                            HashbrownEntry::Vacant(entry) => {
                                black_box(entry.insert(item));
                            }
                            HashbrownEntry::Occupied(entry) => {
                                black_box(entry.remove().0);
                            }
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_map_insert_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_insert_get_u64");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES.iter() {
        let mut keys = (0..*size as u64).collect::<Vec<u64>>();
        keys.shuffle(&mut SmallRng::from_os_rng());

        group.throughput(Throughput::Elements(*size as u64 * 2));
        group.bench_function("lp_hash", |b| {
            b.iter(|| {
                let mut map = LpHashMap::new();
                for key in keys.iter() {
                    map.insert(*key, *key);
                }
                for key in keys.iter() {
                    black_box(map.get(key));
                }
                black_box(map)
            })
        });

        group.bench_function("std", |b| {
            b.iter(|| {
                let mut map = std::collections::HashMap::new();
                for key in keys.iter() {
                    map.insert(*key, *key);
                }
                for key in keys.iter() {
                    black_box(map.get(key));
                }
                black_box(map)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mixed_probabilistic_zipf::<SmallTestItem, 6>,
    bench_mixed_probabilistic_zipf::<TestItem, 6>,
    bench_churn::<SmallTestItem, 6>,
    bench_churn::<TestItem, 6>,
    bench_insert_random::<SmallTestItem, 6>,
    bench_insert_random::<TestItem, 6>,
    bench_find_hit::<SmallTestItem, 6>,
    bench_find_hit::<TestItem, 6>,
    bench_find_miss::<SmallTestItem, 6>,
    bench_find_miss::<TestItem, 6>,
    bench_remove::<SmallTestItem, 6>,
    bench_remove::<TestItem, 6>,
    bench_iteration::<SmallTestItem, 6>,
    bench_iteration::<TestItem, 6>,
    bench_map_insert_get,
);

criterion_main!(benches);
