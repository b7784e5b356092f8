//! Append-only, growable diagnostic byte sink.

use std::fmt::{self, Write as _};

use tlsaudit_core::errors::OutputError;

/// Growable byte buffer holding diagnostic lines.
///
/// Starts with zero capacity so nothing is allocated until the first line
/// is written. An optional byte limit turns runaway output into an
/// [`OutputError::CapacityExceeded`].
///
/// Line boundaries are tracked as they are written, so a line whose text
/// itself contains `'\n'` or `'\r'` is still returned as one line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagnosticSink {
    buf: Vec<u8>,
    /// Offset one past each line's terminating `'\n'`.
    line_ends: Vec<usize>,
    limit: Option<usize>,
}

impl DiagnosticSink {
    /// An unbounded sink with zero initial capacity.
    pub fn growable() -> Self {
        Self::default()
    }

    /// A sink that refuses to grow past `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Append one formatted line followed by `'\n'`.
    ///
    /// The write is atomic: on failure the sink is left exactly as it was.
    pub fn write_line(&mut self, args: fmt::Arguments<'_>) -> Result<(), OutputError> {
        let start = self.buf.len();
        if self.line_ends.try_reserve(1).is_err() {
            return Err(OutputError::AllocationFailed {
                requested: std::mem::size_of::<usize>(),
            });
        }
        let mut writer = BoundedWriter {
            buf: &mut self.buf,
            limit: self.limit,
            failure: None,
        };

        let written = writer.write_fmt(args).and_then(|()| writer.write_char('\n'));
        if written.is_err() {
            let failure = writer.failure.take().unwrap_or(OutputError::Format);
            self.buf.truncate(start);
            return Err(failure);
        }
        self.line_ends.push(self.buf.len());
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Each written line without its terminator, in write order.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let mut start = 0;
        self.line_ends.iter().map(move |&end| {
            let line = &self.buf[start..end - 1];
            start = end;
            line
        })
    }

    /// Number of lines written.
    pub fn line_count(&self) -> usize {
        self.line_ends.len()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Release the storage and drop any limit. Safe to call repeatedly.
    pub fn free(&mut self) {
        *self = Self::default();
    }
}

struct BoundedWriter<'a> {
    buf: &'a mut Vec<u8>,
    limit: Option<usize>,
    failure: Option<OutputError>,
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let requested = self.buf.len() + s.len();
        if let Some(limit) = self.limit {
            if requested > limit {
                self.failure = Some(OutputError::CapacityExceeded { limit, requested });
                return Err(fmt::Error);
            }
        }
        if self.buf.try_reserve(s.len()).is_err() {
            self.failure = Some(OutputError::AllocationFailed { requested });
            return Err(fmt::Error);
        }
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }
}
