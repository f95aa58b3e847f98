use anyhow::bail;

use crate::storage::disk::disk_model::{Direction, Track};

use sim_constants::{
    NUM_BUFFERS, NUM_TRACKS, PROCESSING_TIME, RPM, SECTORS_PER_TRACK, SEEK_TIME_PER_TRACK,
};

pub mod sim_constants {
    // Geometry
    pub const NUM_TRACKS: u32 = 10_000;
    pub const SECTORS_PER_TRACK: u32 = 500;

    // Timing (ms)
    pub const SEEK_TIME_PER_TRACK: f64 = 0.5;
    pub const RPM: u32 = 7500;

    // Buffer cache, split evenly between the hot and cold segments
    pub const NUM_BUFFERS: usize = 10;

    // CPU burst following each dispatch (ms)
    pub const PROCESSING_TIME: f64 = 7.0;
}

/// Tunable constants of one simulation run. Fixed once the `Simulator` is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub num_tracks: u32,
    pub sectors_per_track: u32,
    // Milliseconds per track crossed
    pub seek_time_per_track: f64,
    pub rpm: u32,
    pub num_buffers: usize,
    // Milliseconds of compute per dispatch
    pub processing_time: f64,
    pub start_track: Track,
    pub start_direction: Direction,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_tracks: NUM_TRACKS,
            sectors_per_track: SECTORS_PER_TRACK,
            seek_time_per_track: SEEK_TIME_PER_TRACK,
            rpm: RPM,
            num_buffers: NUM_BUFFERS,
            processing_time: PROCESSING_TIME,
            start_track: 0,
            start_direction: Direction::Right,
        }
    }
}

impl SimConfig {
    /// Average wait for the sector to pass under the head: half a rotation.
    pub fn rotational_delay(&self) -> f64 {
        (60.0 * 1000.0 / self.rpm as f64) / 2.0
    }

    pub fn read_write_time_per_sector(&self) -> f64 {
        self.rotational_delay() / self.sectors_per_track as f64
    }

    // Fixed cost paid by every serviced request on top of its seek
    pub fn service_overhead(&self) -> f64 {
        self.rotational_delay() + self.read_write_time_per_sector()
    }

    pub fn segment_capacity(&self) -> usize {
        self.num_buffers / 2
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.num_tracks == 0 {
            bail!("num_tracks must be greater than zero");
        }
        if self.sectors_per_track == 0 {
            bail!("sectors_per_track must be greater than zero");
        }
        if self.rpm == 0 {
            bail!("rpm must be greater than zero");
        }
        if self.num_buffers < 2 {
            bail!(
                "num_buffers must be at least 2 to fill both cache segments, got {}",
                self.num_buffers
            );
        }
        if !self.seek_time_per_track.is_finite() || self.seek_time_per_track < 0.0 {
            bail!("seek_time_per_track must be a non-negative number of ms");
        }
        if !self.processing_time.is_finite() || self.processing_time < 0.0 {
            bail!("processing_time must be a non-negative number of ms");
        }
        if self.start_track >= self.num_tracks {
            bail!(
                "start_track {} is outside the disk (0..{})",
                self.start_track,
                self.num_tracks
            );
        }
        Ok(())
    }
}
