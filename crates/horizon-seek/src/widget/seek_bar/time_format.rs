//! Playback time formatting.

/// Format seconds as `m:ss`, or `h:mm:ss` from one hour up.
///
/// Fractions are truncated. Negative and NaN inputs format as `0:00`.
///
/// ```
/// use horizon_seek::widget::seek_bar::format_time;
///
/// assert_eq!(format_time(65.4), "1:05");
/// assert_eq!(format_time(3725.0), "1:02:05");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_nan() || seconds <= 0.0 {
        0
    } else {
        seconds.min(u64::MAX as f64) as u64
    };
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
