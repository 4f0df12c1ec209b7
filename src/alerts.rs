use chrono::{Local, NaiveTime};
use tracing::debug;

use crate::error::WidgetError;
use crate::random::RandomSource;
use crate::surface::{ids, Surface};

const DEFAULT_ALERTS: [&str; 6] = [
    "Thunderstorm warning until 4 PM",
    "Heavy rain expected in 30 minutes",
    "Flash flood watch in effect",
    "Severe weather alert - seek shelter",
    "High wind warning until 6 PM",
    "Heat advisory until 8 PM",
];

#[derive(Debug, Clone, PartialEq)]
pub struct AlertCatalog {
    messages: Vec<String>,
}

impl AlertCatalog {
    pub fn new(messages: Vec<String>) -> Result<Self, WidgetError> {
        if messages.is_empty() {
            return Err(WidgetError::EmptyCatalog);
        }
        Ok(Self { messages })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.messages.get(index).map(String::as_str)
    }

    pub fn choose<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        rng.index(self.messages.len())
    }
}

impl Default for AlertCatalog {
    fn default() -> Self {
        Self {
            messages: DEFAULT_ALERTS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

pub trait Clock {
    fn now(&self) -> NaiveTime;
}

pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Picks the next alert and fades the banner out.
///
/// Returns the chosen catalog index; the text is only swapped in by
/// [`finish_rotation`] after the fade delay.
pub fn begin_rotation<R, S>(catalog: &AlertCatalog, rng: &mut R, surface: &mut S) -> usize
where
    R: RandomSource + ?Sized,
    S: Surface + ?Sized,
{
    let index = catalog.choose(rng);
    surface.set_style(ids::ALERT_MESSAGE, "opacity", "0");
    debug!(index, "alert fading out");
    index
}

pub fn finish_rotation<S: Surface + ?Sized>(catalog: &AlertCatalog, index: usize, surface: &mut S) {
    if let Some(message) = catalog.get(index) {
        surface.set_text(ids::ALERT_MESSAGE, message);
    }
    surface.set_style(ids::ALERT_MESSAGE, "opacity", "1");
}

pub fn timestamp_text(time: NaiveTime) -> String {
    format!("Updated {}", time.format("%-I:%M %p"))
}

pub fn refresh_timestamp<C, S>(clock: &C, surface: &mut S)
where
    C: Clock + ?Sized,
    S: Surface + ?Sized,
{
    surface.set_text(ids::ALERT_TIME, &timestamp_text(clock.now()));
}

#[cfg(test)]
pub struct FixedClock(pub NaiveTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Moves forward one minute every time it is read.
#[cfg(test)]
pub struct StepClock {
    start: NaiveTime,
    reads: std::cell::Cell<i64>,
}

#[cfg(test)]
impl StepClock {
    pub fn new(start: NaiveTime) -> Self {
        Self {
            start,
            reads: std::cell::Cell::new(0),
        }
    }
}

#[cfg(test)]
impl Clock for StepClock {
    fn now(&self) -> NaiveTime {
        let reads = self.reads.get();
        self.reads.set(reads + 1);
        self.start + chrono::Duration::minutes(reads)
    }
}
