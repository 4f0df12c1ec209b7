use strum::{EnumIter, EnumString, IntoStaticStr};

/// Time label of the first hourly slot. The hourly jitter step skips it.
pub const NOW_LABEL: &str = "Now";

pub const HOURLY_SLOTS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
pub enum Icon {
    #[strum(serialize = "fa-cloud-rain")]
    Rain,
    #[strum(serialize = "fa-cloud-showers-heavy")]
    HeavyRain,
    #[strum(serialize = "fa-cloud-sun")]
    PartlyCloudy,
    #[strum(serialize = "fa-sun")]
    Sunny,
    #[strum(serialize = "fa-cloud")]
    Cloudy,
    #[strum(serialize = "fa-cloud-moon")]
    CloudyNight,
    #[strum(serialize = "fa-moon")]
    Clear,
}

impl Icon {
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Class list written to an icon surface.
    pub fn glyph_class(self) -> String {
        format!("fas {}", self.id())
    }

    /// Recovers the icon from a glyph class such as `fas fa-sun`.
    pub fn from_glyph_class(class: &str) -> Option<Icon> {
        class
            .split_whitespace()
            .find_map(|token| token.parse::<Icon>().ok())
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Icon::Rain => "🌧",
            Icon::HeavyRain => "⛈",
            Icon::PartlyCloudy => "⛅",
            Icon::Sunny => "☀",
            Icon::Cloudy => "☁",
            Icon::CloudyNight => "☁",
            Icon::Clear => "☾",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: i32,
    pub condition: String,
    pub feels_like: i32,
    pub humidity: i32,
    pub precipitation_chance: i32,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: String,
    pub temperature: i32,
    pub icon: Icon,
    pub condition: String,
}

impl HourlyEntry {
    fn new(time: &str, temperature: i32, icon: Icon, condition: &str) -> Self {
        Self {
            time: time.to_string(),
            temperature,
            icon,
            condition: condition.to_string(),
        }
    }

    pub fn is_now(&self) -> bool {
        self.time == NOW_LABEL
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherModel {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyEntry>,
}

impl WeatherModel {
    /// Afternoon rain clearing into the evening.
    pub fn seed() -> Self {
        let current = CurrentConditions {
            temperature: 72,
            condition: "Light Rain".to_string(),
            feels_like: 75,
            humidity: 68,
            precipitation_chance: 85,
            icon: Icon::Rain,
        };

        let hourly = vec![
            HourlyEntry::new(NOW_LABEL, 72, Icon::Rain, "Rain"),
            HourlyEntry::new("1PM", 74, Icon::Rain, "Rain"),
            HourlyEntry::new("2PM", 76, Icon::HeavyRain, "Heavy Rain"),
            HourlyEntry::new("3PM", 78, Icon::HeavyRain, "Heavy Rain"),
            HourlyEntry::new("4PM", 80, Icon::PartlyCloudy, "Partly Cloudy"),
            HourlyEntry::new("5PM", 82, Icon::Sunny, "Sunny"),
            HourlyEntry::new("6PM", 80, Icon::Sunny, "Sunny"),
            HourlyEntry::new("7PM", 78, Icon::PartlyCloudy, "Partly Cloudy"),
            HourlyEntry::new("8PM", 76, Icon::Cloudy, "Cloudy"),
            HourlyEntry::new("9PM", 74, Icon::Cloudy, "Cloudy"),
            HourlyEntry::new("10PM", 72, Icon::CloudyNight, "Cloudy"),
            HourlyEntry::new("11PM", 70, Icon::Clear, "Clear"),
        ];

        debug_assert_eq!(hourly.len(), HOURLY_SLOTS);
        Self { current, hourly }
    }

    #[cfg(test)]
    pub fn labels(&self) -> Vec<&str> {
        self.hourly.iter().map(|h| h.time.as_str()).collect()
    }
}
