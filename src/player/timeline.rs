/// Where the device is within the current track, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    pub current: f64,
    /// `NaN` when the length is unknown.
    pub duration: f64,
}

impl Timeline {
    /// Progress through the track as a percentage, 0 when the length is unknown.
    pub fn percent(&self) -> f64 {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return 0.0;
        }
        (self.current / self.duration * 100.0).clamp(0.0, 100.0)
    }

    pub fn current_label(&self) -> String {
        format_time(self.current)
    }

    pub fn end_label(&self) -> String {
        format_time(self.duration)
    }
}

/// Format seconds as `MM:SS`. Unknown or negative times read `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
