use crate::{buffer::buffer_cache::AccessType, storage::disk::disk_model::Track};

// A pending disk request. Whether it reads or writes is decided by whoever
// produced it, the scheduler only looks at the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub track: Track,
    pub access: AccessType,
}

impl Request {
    pub fn read(track: Track) -> Self {
        Self {
            track,
            access: AccessType::Read,
        }
    }

    pub fn write(track: Track) -> Self {
        Self {
            track,
            access: AccessType::Write,
        }
    }
}

impl From<Track> for Request {
    fn from(track: Track) -> Self {
        Request::read(track)
    }
}
