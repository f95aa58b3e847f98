use std::{fmt, str::FromStr};

use anyhow::bail;

pub type Track = u32;

// One request addresses one track/sector pair, so both share the same integer space
pub type Sector = Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    // Towards decreasing track numbers
    Left,
    // Towards increasing track numbers
    Right,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => bail!("unknown head direction: {}", other),
        }
    }
}

/// Head position of the simulated disk and the seek arithmetic around it.
///
/// `direction` is bookkeeping for the caller. Moving the head never updates it.
#[derive(Debug, Clone)]
pub struct DiskModel {
    current_track: Track,
    direction: Direction,
    seek_time_per_track: f64,
}

impl DiskModel {
    pub fn new(start_track: Track, direction: Direction, seek_time_per_track: f64) -> Self {
        Self {
            current_track: start_track,
            direction,
            seek_time_per_track,
        }
    }

    pub fn current_track(&self) -> Track {
        self.current_track
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn distance_to(&self, target: Track) -> u32 {
        self.current_track.abs_diff(target)
    }

    pub fn seek_time(&self, target: Track) -> f64 {
        if target == self.current_track {
            return 0.0;
        }
        self.distance_to(target) as f64 * self.seek_time_per_track
    }

    // The only place the head moves
    pub fn move_to(&mut self, target: Track) -> f64 {
        let seek_time = self.seek_time(target);
        log::trace!(
            "Seeking from track {} to track {} ({:.2} ms)",
            self.current_track,
            target,
            seek_time
        );
        self.current_track = target;
        seek_time
    }
}
