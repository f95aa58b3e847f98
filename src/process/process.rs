use std::collections::VecDeque;

use crate::scheduler::request::Request;

pub type Pid = u32;

#[derive(Debug, Clone)]
pub struct Process {
    pid: Pid,
    requests: VecDeque<Request>,
    // CPU burst applied after every dispatch (ms)
    processing_time: f64,
}

impl Process {
    pub fn new(pid: Pid, requests: impl IntoIterator<Item = Request>, processing_time: f64) -> Self {
        Self {
            pid,
            requests: requests.into_iter().collect(),
            processing_time,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn processing_time(&self) -> f64 {
        self.processing_time
    }

    // Consumes the front request
    pub fn next_request(&mut self) -> Option<Request> {
        self.requests.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.requests.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.requests.len()
    }

    pub fn requests(&self) -> impl Iterator<Item = &Request> {
        self.requests.iter()
    }
}
