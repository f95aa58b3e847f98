use std::env;

use anyhow::Context;

use disk_sim::{
    config::SimConfig, process::workload::WorkloadGenerator, scheduler::policy::Policy,
    simulator::Simulator,
};

#[macro_use]
extern crate log;

// disk_sim [FIFO|LOOK|FLOOK] [NUM_PROCESSES] [SEED]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let policy: Policy = args.next().as_deref().unwrap_or("LOOK").parse()?;
    let num_processes: usize = match args.next() {
        Some(arg) => arg.parse().context("NUM_PROCESSES must be a positive integer")?,
        None => 2,
    };
    let seed: u64 = match args.next() {
        Some(arg) => arg.parse().context("SEED must be an unsigned integer")?,
        None => 42,
    };

    let config = SimConfig::default();
    display_startup_info(&config, policy);

    let processes = WorkloadGenerator::new(seed, &config).generate(num_processes);
    for process in &processes {
        trace!(
            "Process {} starts with {} requests",
            process.pid(),
            process.pending_len()
        );
    }

    let report = Simulator::new(config, policy, processes)?.run();

    println!("Simulation completed. Total time: {:.2} ms", report.time_elapsed);
    println!(
        "Requests serviced: {} | Processes completed: {} | Head travel: {} tracks",
        report.requests_serviced, report.processes_completed, report.total_seek_distance
    );
    println!(
        "Cache: {} hits, {} promotions, {} misses, {} evictions, {} write-backs",
        report.cache.hits,
        report.cache.promotions,
        report.cache.misses,
        report.cache.evictions,
        report.cache.write_backs
    );
    Ok(())
}

fn display_startup_info(config: &SimConfig, policy: Policy) {
    println!("Starting...");
    println!("Algorithms Used:");
    println!("- Buffer Cache: Two-Segment LRU (Hot and Cold)");
    println!("- Scheduling: {}", policy);
    println!("================================================\n");
    println!(
        "Settings: NUM_TRACKS: {}\n RPM: {} \n NUM_BUFFERS: {} \n Processing time: {}",
        config.num_tracks, config.rpm, config.num_buffers, config.processing_time
    );
}
