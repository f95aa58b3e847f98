use std::collections::VecDeque;

use anyhow::bail;

use crate::{
    buffer::buffer_cache::{BufferCache, CacheStats, Eviction},
    config::SimConfig,
    process::process::Process,
    scheduler::{
        policy::{Policy, Scheduler},
        request::Request,
    },
    storage::disk::disk_model::{DiskModel, Track},
};

#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    pub policy: Policy,
    // Total simulated latency (ms)
    pub time_elapsed: f64,
    pub requests_serviced: usize,
    pub processes_completed: usize,
    // Tracks crossed by the head over the whole run
    pub total_seek_distance: u64,
    // Service order
    pub serviced: Vec<Track>,
    pub evictions: Vec<Eviction>,
    pub cache: CacheStats,
}

/// Discrete-event loop over a run queue and a sleep queue of processes.
///
/// Each dispatch hands one request from the process to the scheduler, drains
/// everything the scheduler has pending through the disk and the cache, then
/// charges the process's compute burst. Processes with work left go to sleep
/// and rejoin the run queue at the start of the next iteration.
pub struct Simulator {
    config: SimConfig,
    disk: DiskModel,
    cache: BufferCache,
    scheduler: Scheduler,

    run_queue: VecDeque<Process>,
    sleep_queue: VecDeque<Process>,

    time_elapsed: f64,
    total_seek_distance: u64,
    serviced: Vec<Track>,
    evictions: Vec<Eviction>,
    processes_completed: usize,
}

impl Simulator {
    pub fn new(
        config: SimConfig,
        policy: Policy,
        processes: impl IntoIterator<Item = Process>,
    ) -> anyhow::Result<Self> {
        config.validate()?;

        let run_queue: VecDeque<Process> = processes.into_iter().collect();
        for process in &run_queue {
            if let Some(request) = process
                .requests()
                .find(|request| request.track >= config.num_tracks)
            {
                bail!(
                    "process {} requests track {} outside the disk (0..{})",
                    process.pid(),
                    request.track,
                    config.num_tracks
                );
            }
        }

        Ok(Self {
            disk: DiskModel::new(
                config.start_track,
                config.start_direction,
                config.seek_time_per_track,
            ),
            cache: BufferCache::new(config.num_buffers),
            scheduler: Scheduler::new(policy),
            run_queue,
            sleep_queue: VecDeque::new(),
            time_elapsed: 0.0,
            total_seek_distance: 0,
            serviced: Vec::new(),
            evictions: Vec::new(),
            processes_completed: 0,
            config,
        })
    }

    pub fn time_elapsed(&self) -> f64 {
        self.time_elapsed
    }

    pub fn disk(&self) -> &DiskModel {
        &self.disk
    }

    pub fn cache(&self) -> &BufferCache {
        &self.cache
    }

    pub fn is_finished(&self) -> bool {
        self.run_queue.is_empty() && self.sleep_queue.is_empty()
    }

    /// One outer iteration: wake sleepers, dispatch one process, drain the
    /// scheduler. Returns false once both queues are empty.
    pub fn step(&mut self) -> bool {
        // Interrupt handling: every sleeper becomes runnable before the next pick
        self.run_queue.extend(self.sleep_queue.drain(..));

        let Some(mut process) = self.run_queue.pop_front() else {
            return false;
        };

        if let Some(request) = process.next_request() {
            log::debug!(
                "Process {} added request for track {}.",
                process.pid(),
                request.track
            );
            self.scheduler.add_request(request);
        }

        self.drain_scheduler();

        self.time_elapsed += process.processing_time();
        log::debug!(
            "Process {} processed data for {} ms.",
            process.pid(),
            process.processing_time()
        );

        if process.has_pending() {
            self.sleep_queue.push_back(process);
        } else {
            log::debug!("Process {} completed.", process.pid());
            self.processes_completed += 1;
        }
        true
    }

    fn drain_scheduler(&mut self) {
        loop {
            let batch = self
                .scheduler
                .next_batch(self.disk.current_track(), self.disk.direction());
            if batch.is_empty() {
                break;
            }
            for request in batch {
                self.service(request);
            }
        }
    }

    fn service(&mut self, request: Request) {
        self.total_seek_distance += self.disk.distance_to(request.track) as u64;
        let seek_time = self.disk.move_to(request.track);

        let access = self.cache.access(request.track, request.access);
        log::trace!(
            "Track {} classified as {:?}",
            request.track,
            access.classification
        );
        if let Some(eviction) = access.eviction {
            self.evictions.push(eviction);
        }

        self.time_elapsed += seek_time + self.config.service_overhead();
        self.serviced.push(request.track);

        log::debug!(
            "Processed request for track {}. Time elapsed: {:.2} ms",
            request.track,
            self.time_elapsed
        );
    }

    pub fn run(mut self) -> SimReport {
        while self.step() {}

        log::info!(
            "Simulation completed. Total time: {:.2} ms",
            self.time_elapsed
        );

        SimReport {
            policy: self.scheduler.policy(),
            time_elapsed: self.time_elapsed,
            requests_serviced: self.serviced.len(),
            processes_completed: self.processes_completed,
            total_seek_distance: self.total_seek_distance,
            serviced: self.serviced,
            evictions: self.evictions,
            cache: self.cache.stats(),
        }
    }
}
