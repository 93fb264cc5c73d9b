//! Flattening [`ScannerState`] to bytes and back.
//!
//! The host persists a snapshot after every token so it can resume scanning
//! mid-document after an edit.
//!
//! # Wire Format
//!
//! ```text
//! [fence, frame_0, frame_1, ..., frame_n]
//!  ^      ^
//!  |      one byte per layout frame, outermost first:
//!  |      0..=254 = indentation column, 255 = bracket
//!  0 = not in a raw string, n + 1 = inside a raw string fenced by n hashes
//! ```
//!
//! An empty snapshot is the empty state.

use crate::error::SnapshotError;
use crate::state::{Frame, ScannerState};

/// Size of the buffer the host provides for one snapshot.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Most layout frames a snapshot can carry (one byte goes to the fence).
pub const MAX_FRAMES: usize = SERIALIZATION_BUFFER_SIZE - 1;

impl ScannerState {
    /// Number of bytes [`serialize_into`](Self::serialize_into) writes.
    pub fn serialized_len(&self) -> usize {
        1 + self.depth()
    }

    /// Write the snapshot into `buf`, returning the number of bytes written.
    pub fn serialize_into(&self, buf: &mut [u8]) -> Result<usize, SnapshotError> {
        let needed = self.serialized_len();
        if buf.len() < needed {
            return Err(SnapshotError::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        }

        buf[0] = self.raw_fence().map_or(0, |fence| fence + 1);
        for (slot, frame) in buf[1..needed].iter_mut().zip(self.frames()) {
            *slot = frame.to_byte();
        }
        Ok(needed)
    }

    /// Snapshot as an owned byte vector.
    pub fn to_snapshot(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.serialized_len());
        bytes.push(self.raw_fence().map_or(0, |fence| fence + 1));
        bytes.extend(self.frames().iter().map(|frame| frame.to_byte()));
        bytes
    }

    /// Rebuild a state from a snapshot.
    ///
    /// An empty slice yields the empty state.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let Some((&fence, frames)) = bytes.split_first() else {
            return Ok(Self::new());
        };
        if bytes.len() > SERIALIZATION_BUFFER_SIZE {
            return Err(SnapshotError::TooLong {
                len: bytes.len(),
                max: SERIALIZATION_BUFFER_SIZE,
            });
        }

        let raw_fence = fence.checked_sub(1);
        let frames = frames.iter().copied().map(Frame::from_byte).collect();
        Ok(Self::from_parts(raw_fence, frames))
    }
}
