use tracing::debug;

use crate::random::RandomSource;
use crate::weather::WeatherModel;

const TEMPERATURE_JITTER: f64 = 2.0;
const HUMIDITY_JITTER: f64 = 5.0;
const PRECIPITATION_JITTER: f64 = 10.0;
const HOURLY_JITTER: f64 = 1.5;

/// Rounds halves towards positive infinity.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

pub fn clamp_percent(value: i32) -> i32 {
    value.clamp(0, 100)
}

/// Advances the model by one step of bounded random drift.
///
/// Temperature and feels-like share one delta but are rounded separately.
/// The "Now" hourly slot is left alone here and is never reconciled with
/// the current temperature.
pub fn tick<R: RandomSource + ?Sized>(model: &mut WeatherModel, rng: &mut R) {
    let current = &mut model.current;

    let temp_change = rng.uniform(TEMPERATURE_JITTER);
    current.temperature = round_half_up(f64::from(current.temperature) + temp_change);
    current.feels_like = round_half_up(f64::from(current.feels_like) + temp_change);

    let humidity_change = rng.uniform(HUMIDITY_JITTER);
    current.humidity = clamp_percent(round_half_up(
        f64::from(current.humidity) + humidity_change,
    ));

    let precip_change = rng.uniform(PRECIPITATION_JITTER);
    current.precipitation_chance = clamp_percent(round_half_up(
        f64::from(current.precipitation_chance) + precip_change,
    ));

    for hour in model.hourly.iter_mut().filter(|h| !h.is_now()) {
        let change = rng.uniform(HOURLY_JITTER);
        hour.temperature = round_half_up(f64::from(hour.temperature) + change);
    }

    debug!(
        temperature = current.temperature,
        feels_like = current.feels_like,
        humidity = current.humidity,
        precipitation = current.precipitation_chance,
        "weather ticked"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;
    use crate::weather::{HOURLY_SLOTS, NOW_LABEL};
    use proptest::prelude::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(72.5), 73);
        assert_eq!(round_half_up(72.49), 72);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.6), -2);
    }

    #[test]
    fn test_zero_deltas_leave_model_unchanged() {
        let mut model = WeatherModel::seed();
        let before = model.clone();
        tick(&mut model, &mut Scripted::still());
        assert_eq!(model, before);
    }

    #[test]
    fn test_humidity_and_precipitation_clamp_low() {
        let mut model = WeatherModel::seed();
        model.current.humidity = 0;
        model.current.precipitation_chance = 0;
        tick(&mut model, &mut Scripted::new(vec![0.0]));
        assert_eq!(model.current.humidity, 0);
        assert_eq!(model.current.precipitation_chance, 0);
    }

    #[test]
    fn test_humidity_and_precipitation_clamp_high() {
        let mut model = WeatherModel::seed();
        model.current.humidity = 100;
        model.current.precipitation_chance = 100;
        tick(&mut model, &mut Scripted::new(vec![0.99]));
        assert_eq!(model.current.humidity, 100);
        assert_eq!(model.current.precipitation_chance, 100);
    }

    #[test]
    fn test_temperature_and_feels_like_share_delta() {
        let mut model = WeatherModel::seed();
        model.current.temperature = 70;
        model.current.feels_like = 70;
        // 0.625 -> +0.5 on the shared temperature delta
        let mut rng = Scripted::new(vec![0.625, 0.5, 0.5, 0.5]);
        tick(&mut model, &mut rng);
        assert_eq!(model.current.temperature, 71);
        assert_eq!(model.current.feels_like, 71);
    }

    #[test]
    fn test_now_slot_is_skipped_by_hourly_jitter() {
        let mut model = WeatherModel::seed();
        // current-condition draws are neutral, every hourly draw is +1.2
        let mut values = vec![0.5, 0.5, 0.5];
        values.extend(std::iter::repeat(0.9).take(HOURLY_SLOTS - 1));
        tick(&mut model, &mut Scripted::new(values));

        let seed = WeatherModel::seed();
        assert_eq!(model.hourly[0].temperature, seed.hourly[0].temperature);
        for (after, before) in model.hourly.iter().zip(&seed.hourly).skip(1) {
            assert_eq!(after.temperature, before.temperature + 1);
        }
    }

    #[test]
    fn test_now_slot_drifts_from_current_temperature() {
        let mut model = WeatherModel::seed();
        tick(&mut model, &mut Scripted::new(vec![0.99]));
        assert_eq!(model.current.temperature, 74);
        assert_eq!(model.hourly[0].time, NOW_LABEL);
        assert_eq!(model.hourly[0].temperature, 72);
    }

    proptest! {
        #[test]
        fn prop_percentages_stay_in_range(
            draws in proptest::collection::vec(0.0f64..1.0, 1..64),
            humidity in 0i32..=100,
            precipitation in 0i32..=100,
            ticks in 1usize..40,
        ) {
            let mut model = WeatherModel::seed();
            model.current.humidity = humidity;
            model.current.precipitation_chance = precipitation;
            let mut rng = Scripted::new(draws);
            for _ in 0..ticks {
                tick(&mut model, &mut rng);
                prop_assert!((0..=100).contains(&model.current.humidity));
                prop_assert!((0..=100).contains(&model.current.precipitation_chance));
            }
        }

        #[test]
        fn prop_hourly_order_is_fixed(
            draws in proptest::collection::vec(0.0f64..1.0, 1..64),
            ticks in 0usize..40,
        ) {
            let mut model = WeatherModel::seed();
            let labels: Vec<String> = model.hourly.iter().map(|h| h.time.clone()).collect();
            let mut rng = Scripted::new(draws);
            for _ in 0..ticks {
                tick(&mut model, &mut rng);
            }
            prop_assert_eq!(model.hourly.len(), HOURLY_SLOTS);
            let after: Vec<String> = model.hourly.iter().map(|h| h.time.clone()).collect();
            prop_assert_eq!(after, labels);
        }
    }
}
