//! Chapter markers along the track.

use super::value_mapper::ValueMapper;

/// A named section of the value range, running from `start` to the next chapter's start.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chapter {
    /// Value at which the chapter begins.
    pub start: f64,
    /// Display title.
    pub title: String,
}

impl Chapter {
    /// Create a chapter.
    pub fn new(start: f64, title: impl Into<String>) -> Self {
        Self {
            start,
            title: title.into(),
        }
    }
}

/// Drop chapters with non-finite starts and sort the rest by start.
///
/// Starts are kept as given; lookups and painting clamp them into the
/// current range. Chapters sharing a start keep their original order.
pub(crate) fn prepare(mut chapters: Vec<Chapter>) -> Vec<Chapter> {
    chapters.retain(|c| c.start.is_finite());
    chapters.sort_by(|a, b| a.start.total_cmp(&b.start));
    chapters
}

/// Index of the chapter containing `value`: the last one whose clamped start
/// is at or before it.
///
/// Values before the first chapter belong to it.
pub(crate) fn index_at(chapters: &[Chapter], mapper: &ValueMapper, value: f64) -> Option<usize> {
    if chapters.is_empty() {
        return None;
    }
    let after = chapters.partition_point(|c| mapper.clamp(c.start) <= value);
    Some(after.saturating_sub(1))
}

/// Normalized `[from, to)` spans of each chapter along the track.
pub(crate) fn spans(chapters: &[Chapter], mapper: &ValueMapper) -> Vec<(f32, f32)> {
    if chapters.is_empty() {
        return vec![(0.0, 1.0)];
    }
    (0..chapters.len())
        .map(|i| {
            let from = if i == 0 {
                0.0
            } else {
                mapper.value_to_position(chapters[i].start) as f32
            };
            let to = chapters
                .get(i + 1)
                .map_or(1.0, |next| mapper.value_to_position(next.start) as f32);
            (from, to)
        })
        .collect()
}
