//! `Range: bytes=...` parsing.

/// What a `Range` header asks for, resolved against a body length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRange {
    /// Serve the full body (no header, malformed or multi-range).
    Full,
    /// Serve bytes `start..=end`.
    Partial { start: u64, end: u64 },
    /// The range lies outside the body.
    Unsatisfiable,
}

impl ByteRange {
    /// Resolves a `Range` header value against a body of `len` bytes.
    ///
    /// Only a single range is honoured; multi-range requests and anything
    /// malformed fall back to the full body.
    pub fn parse(header: &str, len: u64) -> Self {
        let Some(ranges) = header.trim().strip_prefix("bytes=") else {
            return Self::Full;
        };
        if ranges.contains(',') {
            return Self::Full;
        }
        let Some((first, last)) = ranges.trim().split_once('-') else {
            return Self::Full;
        };
        let (first, last) = (first.trim(), last.trim());

        if first.is_empty() {
            // Suffix range: the last N bytes.
            let Ok(suffix) = last.parse::<u64>() else {
                return Self::Full;
            };
            if suffix == 0 || len == 0 {
                return Self::Unsatisfiable;
            }
            return Self::Partial {
                start: len.saturating_sub(suffix),
                end: len - 1,
            };
        }

        let Ok(start) = first.parse::<u64>() else {
            return Self::Full;
        };
        let end = if last.is_empty() {
            None
        } else {
            match last.parse::<u64>() {
                Ok(end) if end >= start => Some(end),
                _ => return Self::Full,
            }
        };

        if start >= len {
            return Self::Unsatisfiable;
        }

        Self::Partial {
            start,
            end: end.map_or(len - 1, |end| end.min(len - 1)),
        }
    }
}
