use std::time::Duration;

use tracing::{debug, info};

use crate::alerts::{self, AlertCatalog, Clock};
use crate::config::Timings;
use crate::random::RandomSource;
use crate::render;
use crate::scheduler::{Scheduler, TaskId};
use crate::simulator;
use crate::slider::{self, Sweep};
use crate::surface::Document;
use crate::weather::WeatherModel;

/// Unit of scheduled page work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    UpdateWeather,
    SettleTemperature,
    RotateAlert,
    ShowAlert(usize),
    RefreshTimestamp,
    StartSliderSweep,
    StepSlider,
    CentreSlider,
}

/// The widget: model, display tree and every timer that touches them.
pub struct Page<R, C> {
    model: WeatherModel,
    document: Document,
    catalog: AlertCatalog,
    rng: R,
    clock: C,
    timings: Timings,
    scheduler: Scheduler<Job>,
    sweep: Option<(TaskId, Sweep)>,
    slider: u8,
}

impl<R: RandomSource, C: Clock> Page<R, C> {
    pub fn new(
        model: WeatherModel,
        catalog: AlertCatalog,
        rng: R,
        clock: C,
        timings: Timings,
    ) -> Self {
        Self {
            model,
            document: Document::new(),
            catalog,
            rng,
            clock,
            timings,
            scheduler: Scheduler::new(),
            sweep: None,
            slider: slider::MIDPOINT,
        }
    }

    #[cfg(test)]
    pub fn model(&self) -> &WeatherModel {
        &self.model
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    #[cfg(test)]
    pub fn slider_value(&self) -> u8 {
        self.slider
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Runs every initializer once and starts the timers.
    pub fn ready(&mut self, now: Duration) {
        self.show_weather(now);

        self.rotate_alert(now);
        alerts::refresh_timestamp(&self.clock, &mut self.document);

        slider::apply(self.slider, &mut self.document);
        self.scheduler
            .after(now, self.timings.slider_delay, Job::StartSliderSweep);

        self.scheduler
            .every(now, self.timings.alert_rotation, Job::RotateAlert);
        self.scheduler
            .every(now, self.timings.timestamp_refresh, Job::RefreshTimestamp);
        self.scheduler
            .every(now, self.timings.weather_update, Job::UpdateWeather);

        self.scheduler.start();
        info!(tasks = self.scheduler.len(), "widget ready");
    }

    /// Runs every job due at or before `now`; returns how many ran.
    ///
    /// A periodic job that fell several intervals behind runs once.
    pub fn advance(&mut self, now: Duration) -> usize {
        let mut ran = 0;
        while let Some((at, job)) = self.scheduler.pop_due(now) {
            self.dispatch(at, job);
            ran += 1;
        }
        ran
    }

    /// Steps a simulated clock through every due instant up to `end`, so
    /// each periodic job runs once per interval.
    pub fn run_until(&mut self, end: Duration) -> usize {
        let mut ran = 0;
        while let Some(due) = self.next_due().filter(|due| *due <= end) {
            ran += self.advance(due);
        }
        ran
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
        self.sweep = None;
        info!("widget stopped");
    }

    /// Moves the accuracy slider as if the user dragged it.
    pub fn slide(&mut self, delta: i16) {
        self.slider = slider::nudge(self.slider, delta);
        slider::apply(self.slider, &mut self.document);
    }

    fn dispatch(&mut self, at: Duration, job: Job) {
        match job {
            Job::UpdateWeather => {
                simulator::tick(&mut self.model, &mut self.rng);
                self.show_weather(at);
            }
            Job::SettleTemperature => render::settle_temperature(&mut self.document),
            Job::RotateAlert => self.rotate_alert(at),
            Job::ShowAlert(index) => {
                alerts::finish_rotation(&self.catalog, index, &mut self.document)
            }
            Job::RefreshTimestamp => alerts::refresh_timestamp(&self.clock, &mut self.document),
            Job::StartSliderSweep => {
                let id = self
                    .scheduler
                    .every(at, self.timings.slider_step, Job::StepSlider);
                self.sweep = Some((id, Sweep::new()));
            }
            Job::StepSlider => self.step_slider(at),
            Job::CentreSlider => {
                self.slider = slider::MIDPOINT;
                slider::apply(self.slider, &mut self.document);
            }
        }
    }

    fn show_weather(&mut self, at: Duration) {
        render::render(&self.model, &mut self.document);
        self.scheduler
            .after(at, self.timings.temperature_pulse, Job::SettleTemperature);
    }

    fn rotate_alert(&mut self, at: Duration) {
        let index = alerts::begin_rotation(&self.catalog, &mut self.rng, &mut self.document);
        self.scheduler
            .after(at, self.timings.alert_fade, Job::ShowAlert(index));
    }

    fn step_slider(&mut self, at: Duration) {
        let Some((id, sweep)) = self.sweep.as_mut() else {
            return;
        };
        self.slider = sweep.step();
        slider::apply(self.slider, &mut self.document);
        debug!(value = self.slider, "slider step");

        if sweep.is_done() {
            let id = *id;
            self.sweep = None;
            self.scheduler.cancel(id);
            self.scheduler
                .after(at, self.timings.slider_settle, Job::CentreSlider);
        }
    }
}
