//! Keypoint sources
//!
//! The hand-pose pipeline is an external collaborator; this module defines
//! the per-frame contract it must satisfy and a JSON-lines reader used to
//! replay recorded pipeline output.
//!
//! # Line format
//!
//! ```text
//! {"joints": [[x, y, z], ...21 entries], "confidence": 0.93}
//! {"joints": null}
//! ```
//!
//! A missing or `null` `joints` field, or a confidence below the
//! configured minimum, is reported as [`Frame::Lost`].

use std::io::BufRead;

use serde::Deserialize;
use thiserror::Error;
use tracing::trace;

use crate::hand::{HandSkeleton, SkeletonError};

/// One frame from the keypoint source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Hand(HandSkeleton),
    /// No hand detected this frame
    Lost,
}

impl Frame {
    pub fn hand(&self) -> Option<&HandSkeleton> {
        match self {
            Frame::Hand(skeleton) => Some(skeleton),
            Frame::Lost => None,
        }
    }
}

/// Errors raised while reading keypoint frames
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read frame: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid frame JSON: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: {source}")]
    Skeleton {
        line: usize,
        #[source]
        source: SkeletonError,
    },
}

/// Produces one frame per call, synchronously
pub trait KeypointSource {
    /// Next frame, or `None` once the stream is exhausted
    fn next_frame(&mut self) -> Result<Option<Frame>, SourceError>;
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    #[serde(default)]
    joints: Option<Vec<[f32; 3]>>,
    #[serde(default = "full_confidence")]
    confidence: f32,
}

fn full_confidence() -> f32 {
    1.0
}

/// Reads newline-delimited JSON frames
pub struct JsonLinesSource<R> {
    reader: R,
    line: usize,
    min_confidence: f32,
    buf: String,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R, min_confidence: f32) -> Self {
        Self {
            reader,
            line: 0,
            min_confidence,
            buf: String::new(),
        }
    }

    /// 1-based number of the last line read
    pub fn line(&self) -> usize {
        self.line
    }

    fn parse_line(&self, text: &str) -> Result<Frame, SourceError> {
        let record: FrameRecord =
            serde_json::from_str(text).map_err(|source| SourceError::Parse {
                line: self.line,
                source,
            })?;

        let Some(points) = record.joints else {
            return Ok(Frame::Lost);
        };
        if record.confidence < self.min_confidence {
            trace!(
                line = self.line,
                confidence = record.confidence,
                "Frame below confidence threshold"
            );
            return Ok(Frame::Lost);
        }

        HandSkeleton::from_points(&points)
            .map(Frame::Hand)
            .map_err(|source| SourceError::Skeleton {
                line: self.line,
                source,
            })
    }
}

impl<R: BufRead> KeypointSource for JsonLinesSource<R> {
    fn next_frame(&mut self) -> Result<Option<Frame>, SourceError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = self.buf.trim();
            if text.is_empty() {
                continue;
            }
            return self.parse_line(text).map(Some);
        }
    }
}
