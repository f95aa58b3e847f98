use std::ops::RangeInclusive;

use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{
    buffer::buffer_cache::AccessType, config::SimConfig, scheduler::request::Request,
    storage::disk::disk_model::Track,
};

use super::process::{Pid, Process};

pub const REQUESTS_PER_PROCESS: RangeInclusive<usize> = 5..=15;
pub const WRITE_PROBABILITY: f64 = 0.5;

/// Builds the process population for a run. Every random choice, including
/// whether a request writes, is drawn here from one seeded generator, so the
/// same seed always yields the same workload.
pub struct WorkloadGenerator {
    rng: Xoshiro256PlusPlus,
    num_tracks: Track,
    processing_time: f64,
    requests_per_process: RangeInclusive<usize>,
    write_probability: f64,
}

impl WorkloadGenerator {
    pub fn new(seed: u64, config: &SimConfig) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            num_tracks: config.num_tracks,
            processing_time: config.processing_time,
            requests_per_process: REQUESTS_PER_PROCESS,
            write_probability: WRITE_PROBABILITY,
        }
    }

    pub fn requests_per_process(mut self, range: RangeInclusive<usize>) -> Self {
        self.requests_per_process = range;
        self
    }

    pub fn write_probability(mut self, probability: f64) -> Self {
        self.write_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn generate(&mut self, num_processes: usize) -> Vec<Process> {
        (0..num_processes)
            .map(|pid| self.process(pid as Pid))
            .collect()
    }

    fn process(&mut self, pid: Pid) -> Process {
        let count = self.rng.random_range(self.requests_per_process.clone());
        let requests: Vec<Request> = (0..count).map(|_| self.request()).collect();
        Process::new(pid, requests, self.processing_time)
    }

    fn request(&mut self) -> Request {
        let track = self.rng.random_range(0..self.num_tracks);
        let access = if self.rng.random_bool(self.write_probability) {
            AccessType::Write
        } else {
            AccessType::Read
        };
        Request { track, access }
    }
}
