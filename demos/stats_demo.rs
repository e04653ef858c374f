use clap::Parser;
use lp_hash::HashMap;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    /// Every n-th key is removed again after the fill, leaving tombstones.
    #[arg(short = 'r', long = "remove_every", default_value_t = 3)]
    remove_every: u64,

    /// Number of fresh inserts performed after the removals.
    #[arg(short = 'n', long = "churn", default_value_t = 500)]
    churn: u64,
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating HashMap sized for {} entries",
        args.target_capacity
    );

    let mut map: HashMap<u64, u64> = HashMap::with_capacity(args.target_capacity);
    println!("Initial slot count: {}", map.capacity());

    let fill = args.target_capacity as u64;
    for key in 0..fill {
        map.insert(key, key * 2);
    }
    println!(
        "Filled {} keys, slot count now {}",
        map.len(),
        map.capacity()
    );

    let mut removed = 0;
    if args.remove_every > 0 {
        for key in (0..fill).step_by(args.remove_every as usize) {
            if map.remove(&key).is_some() {
                removed += 1;
            }
        }
    }
    println!("Removed {} keys", removed);
    map.debug_stats().print();

    let mut resizes = 0;
    for key in fill..fill + args.churn {
        let before = map.capacity();
        map.insert(key, key * 2);
        if map.capacity() != before {
            resizes += 1;
        }
    }

    println!(
        "Inserted {} more keys with {} resizes; {} live entries",
        args.churn,
        resizes,
        map.len()
    );
    map.print_probe_histogram();
    map.debug_stats().print();
}
