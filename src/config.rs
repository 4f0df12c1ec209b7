use std::time::Duration;

/// Intervals and delays driving the widget's timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timings {
    pub weather_update: Duration,
    pub alert_rotation: Duration,
    pub timestamp_refresh: Duration,
    pub alert_fade: Duration,
    pub temperature_pulse: Duration,
    pub slider_delay: Duration,
    pub slider_step: Duration,
    pub slider_settle: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            weather_update: Duration::from_secs(5 * 60),
            alert_rotation: Duration::from_secs(2 * 60),
            timestamp_refresh: Duration::from_secs(60),
            alert_fade: Duration::from_millis(300),
            temperature_pulse: Duration::from_millis(200),
            slider_delay: Duration::from_secs(1),
            slider_step: Duration::from_millis(50),
            slider_settle: Duration::from_secs(2),
        }
    }
}
