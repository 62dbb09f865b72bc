use std::env;
use std::path::Path;
use std::process;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use diskmark::bench::{measure_read, measure_seek, measure_write};
use diskmark::config::persistence::HistoryStore;
use diskmark::config::RunConfig;
use diskmark::models::{OpStats, RunRecord};

fn main() {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "diskmark".to_string());

    let Some(file_name) = args.next() else {
        eprintln!("usage: {} <FileName>", program);
        // Historical behavior: a usage error still exits successfully.
        process::exit(0);
    };
    // Extra arguments are silently ignored.

    let config = RunConfig::load().unwrap_or_else(|err| {
        eprintln!("warning: {}; using default configuration", err);
        RunConfig::default()
    });

    let path = Path::new(&file_name);
    println!("File name: {}", file_name);

    // Write runs first and overwrites the target; read and seek then operate
    // on the file it produced.
    let write = measure_write(path, config.block_size);
    print_stage("Write", &write, " MB/s");

    let read = measure_read(path, config.block_size);
    print_stage("Read", &read, " MB/s");

    let mut rng = SmallRng::from_entropy();
    let seek = measure_seek(path, config.seek_count, &mut rng);
    print_stage("Seek", &seek, "*10^6 ops/s");

    if config.save_history {
        let record = RunRecord::new(file_name, write, read, seek);
        if let Err(err) = HistoryStore::new().and_then(|store| store.append_run(record)) {
            eprintln!("warning: could not save run history: {}", err);
        }
    }
}

fn print_stage(label: &str, stats: &OpStats, throughput_unit: &str) {
    println!("{} operation stats:", label);
    println!("Average access time: {} ns", stats.average_access_ns);
    println!("Throughput: {}{}", stats.throughput, throughput_unit);
}
