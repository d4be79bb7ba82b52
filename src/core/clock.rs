/// Formats a second count as a zero-padded `HH:MM:SS` clock label.
///
/// Sub-second precision is dropped; negative or non-finite input clamps to
/// `00:00:00` so ruler labels stay well-formed near the window edges.
#[must_use]
pub fn clock_label(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
