use std::{collections::VecDeque, fmt, str::FromStr};

use anyhow::bail;

use crate::storage::disk::disk_model::{Direction, Track};

use super::request::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    // Insertion order
    Fifo,
    // Full two-direction sweep over everything pending, drained in one shot
    Look,
    // Upward scan that wraps to the lowest pending track, one request per call
    Flook,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Look => "LOOK",
            Policy::Flook => "FLOOK",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Policy::Fifo),
            "LOOK" => Ok(Policy::Look),
            "FLOOK" => Ok(Policy::Flook),
            _ => bail!("Unknown scheduling algorithm: {}", s),
        }
    }
}

/// Result of one LOOK invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookSweep {
    pub sequence: Vec<Request>,
    // Sum of absolute track distances between consecutive stops
    pub seek_count: u64,
}

impl LookSweep {
    pub fn tracks(&self) -> Vec<Track> {
        self.sequence.iter().map(|request| request.track).collect()
    }
}

pub struct Scheduler {
    policy: Policy,
    pending: VecDeque<Request>,
}

impl Scheduler {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            pending: VecDeque::new(),
        }
    }

    pub fn from_name(name: &str) -> anyhow::Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn add_request(&mut self, request: Request) {
        self.pending.push_back(request);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_tracks(&self) -> Vec<Track> {
        self.pending.iter().map(|request| request.track).collect()
    }

    pub fn schedule_fifo(&mut self) -> Option<Request> {
        self.pending.pop_front()
    }

    /// Sweeps in `direction` through every request strictly past the head,
    /// then reverses and sweeps through everything strictly behind it.
    /// Requests sitting exactly on `current_track` are not part of either
    /// half and are dropped along with the rest of `pending`.
    pub fn schedule_look(&mut self, current_track: Track, direction: Direction) -> LookSweep {
        let (mut behind, mut ahead): (Vec<Request>, Vec<Request>) = self
            .pending
            .drain(..)
            .filter(|request| request.track != current_track)
            .partition(|request| request.track < current_track);

        // Stable, so equal tracks keep their arrival order
        behind.sort_by_key(|request| request.track);
        ahead.sort_by_key(|request| request.track);

        let mut sequence = Vec::with_capacity(behind.len() + ahead.len());
        let mut head = current_track;
        let mut seek_count = 0u64;
        let mut direction = direction;

        for _ in 0..2 {
            let half: Box<dyn Iterator<Item = &Request>> = match direction {
                Direction::Right => Box::new(ahead.iter()),
                Direction::Left => Box::new(behind.iter().rev()),
            };
            for request in half {
                seek_count += head.abs_diff(request.track) as u64;
                head = request.track;
                sequence.push(*request);
            }
            direction = direction.reversed();
        }

        LookSweep {
            sequence,
            seek_count,
        }
    }

    pub fn schedule_flook(&mut self, current_track: Track) -> Option<Request> {
        let (mut inward, mut outward): (Vec<Request>, Vec<Request>) = self
            .pending
            .drain(..)
            .partition(|request| request.track >= current_track);

        inward.sort_by_key(|request| request.track);
        outward.sort_by_key(|request| request.track);

        // Keep going up; once nothing is left above the head, wrap to the lowest track
        let next = if !inward.is_empty() {
            Some(inward.remove(0))
        } else if !outward.is_empty() {
            Some(outward.remove(0))
        } else {
            None
        };

        self.pending = inward.into_iter().chain(outward).collect();
        next
    }

    // Removes every pending request already under the head, in arrival order
    pub fn take_at_head(&mut self, current_track: Track) -> Vec<Request> {
        let (at_head, rest): (VecDeque<Request>, VecDeque<Request>) = self
            .pending
            .drain(..)
            .partition(|request| request.track == current_track);
        self.pending = rest;
        at_head.into_iter().collect()
    }

    /// The next requests to service given the head position. FIFO and FLOOK
    /// hand out one request per call; LOOK hands out requests already under
    /// the head followed by a full sweep. An empty batch means nothing is
    /// pending.
    pub fn next_batch(&mut self, current_track: Track, direction: Direction) -> Vec<Request> {
        match self.policy {
            Policy::Fifo => self.schedule_fifo().into_iter().collect(),
            Policy::Flook => self.schedule_flook(current_track).into_iter().collect(),
            Policy::Look => {
                let mut batch = self.take_at_head(current_track);
                let sweep = self.schedule_look(current_track, direction);
                log::debug!(
                    "LOOK Seek Sequence: {:?}. Total seek count: {}",
                    sweep.tracks(),
                    sweep.seek_count
                );
                batch.extend(sweep.sequence);
                batch
            }
        }
    }
}
