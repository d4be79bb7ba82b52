/// One downsampled pixel column: the amplitude extremes of its sample bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeColumn {
    /// Output column index, strictly increasing from 0.
    pub column: usize,
    pub min: f32,
    pub max: f32,
}

/// Lazy min/max downsampler over a contiguous sample range.
///
/// Bounds the number of draw operations to the pixel width regardless of how
/// many samples the visible window covers. The trailing partial bucket is
/// dropped rather than flushed, so a column is only ever backed by a full
/// bucket of samples.
#[derive(Debug, Clone)]
pub struct EnvelopeColumns<'a> {
    samples: &'a [f32],
    cursor: usize,
    end: usize,
    bucket: usize,
    column: usize,
    column_count: usize,
}

/// Reduces `samples[start..end]` to at most `column_count` envelope columns.
///
/// Degenerate ranges (`end <= start`, or `end` past the buffer) yield an empty
/// iterator: the caller skips the frame instead of crashing, and recovers on
/// the next update once valid data arrives.
#[must_use]
pub fn envelope_columns(
    samples: &[f32],
    start: usize,
    end: usize,
    column_count: usize,
) -> EnvelopeColumns<'_> {
    let degenerate = end <= start || end > samples.len() || column_count == 0;
    let (start, end) = if degenerate { (0, 0) } else { (start, end) };
    // A flush threshold of zero would flush on every sample; treat it as
    // one-sample buckets, matching the upstream `arr.length >= step` loop.
    let bucket = if degenerate {
        1
    } else {
        ((end - start) / column_count).max(1)
    };
    EnvelopeColumns {
        samples,
        cursor: start,
        end,
        bucket,
        column: 0,
        column_count,
    }
}

impl Iterator for EnvelopeColumns<'_> {
    type Item = EnvelopeColumn;

    fn next(&mut self) -> Option<EnvelopeColumn> {
        if self.column >= self.column_count || self.cursor + self.bucket > self.end {
            return None;
        }

        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &raw in &self.samples[self.cursor..self.cursor + self.bucket] {
            // Non-finite decoder output reads as silence.
            let value = if raw.is_finite() { raw } else { 0.0 };
            min = min.min(value);
            max = max.max(value);
        }

        let column = self.column;
        self.cursor += self.bucket;
        self.column += 1;
        Some(EnvelopeColumn { column, min, max })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let by_range = (self.end - self.cursor) / self.bucket;
        let remaining = by_range.min(self.column_count - self.column);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EnvelopeColumns<'_> {}
