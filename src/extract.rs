//! Dominant colors by exact-match frequency.
//!
//! One pass over the pixels fills a histogram keyed by the packed 24-bit RGB
//! value. Ranking sorts by count descending and, for equal counts, by color
//! ascending, so `#00ff00` comes before `#ff0000` when both cover half the
//! image. Hex strings are only built for the entries that are returned.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::color::{key_to_hex, pack_rgba};

/// Number of colors returned when the caller does not ask for a specific count.
pub const DEFAULT_LIMIT: usize = 6;

/// One ranked palette entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub hex: String,
    /// Share of all pixels in the image, 0-100.
    pub percentage: f64,
}

/// Exact color → pixel count over some or all of a buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: HashMap<u32, u64>,
    total: u64,
}

impl Histogram {
    fn count_samples(&mut self, rgba: &[u8]) {
        for chunk in rgba.chunks_exact(4) {
            *self.counts.entry(pack_rgba(chunk)).or_insert(0) += 1;
        }
        self.total += (rgba.len() / 4) as u64;
    }

    /// Fold another partial histogram into this one.
    pub fn merge(&mut self, other: &Histogram) {
        for (&key, &count) in &other.counts {
            *self.counts.entry(key).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// Pixels counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Distinct colors seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Pixel count of the color with packed key `0xRRGGBB`.
    pub fn count_of(&self, key: u32) -> u64 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Every color, ranked.
    pub fn ranked(&self) -> Vec<ColorEntry> {
        self.top(usize::MAX)
    }

    /// The `limit` most frequent colors, ranked.
    pub fn top(&self, limit: usize) -> Vec<ColorEntry> {
        if self.total == 0 || limit == 0 {
            return Vec::new();
        }

        let mut entries: Vec<(u32, u64)> = self.counts.iter().map(|(&k, &c)| (k, c)).collect();
        // Equal percentages mean equal counts; compare counts to stay exact.
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(limit);

        let total = self.total as f64;
        entries
            .into_iter()
            .map(|(key, count)| ColorEntry {
                hex: key_to_hex(key),
                percentage: 100.0 * count as f64 / total,
            })
            .collect()
    }
}

/// Histogram of the whole buffer.
pub fn histogram(buffer: &PixelBuffer) -> Histogram {
    let mut hist = Histogram::default();
    hist.count_samples(buffer.samples());
    hist
}

/// Histogram of rows `start..end`. Partial histograms of disjoint row ranges
/// can be combined with [`Histogram::merge`].
pub fn histogram_of_rows(buffer: &PixelBuffer, start: u32, end: u32) -> Histogram {
    let mut hist = Histogram::default();
    hist.count_samples(buffer.rows(start, end));
    hist
}

/// The `limit` dominant colors of `buffer`. A zero-area buffer yields an empty list.
pub fn extract(buffer: &PixelBuffer, limit: usize) -> Vec<ColorEntry> {
    let hist = histogram(buffer);
    let colors = hist.top(limit);
    log::trace!(
        "extracted {} of {} distinct colors from {} pixels",
        colors.len(),
        hist.distinct(),
        hist.total()
    );
    colors
}

/// [`extract`] with [`DEFAULT_LIMIT`].
pub fn extract_default(buffer: &PixelBuffer) -> Vec<ColorEntry> {
    extract(buffer, DEFAULT_LIMIT)
}
