use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::info;

mod alerts;
mod app;
mod cli;
mod config;
mod error;
mod page;
mod random;
mod render;
mod scheduler;
mod simulator;
mod slider;
mod surface;
mod telemetry;
mod weather;

use crate::alerts::{AlertCatalog, LocalClock};
use crate::app::{restore_terminal, run_app, setup_terminal};
use crate::cli::Args;
use crate::page::Page;
use crate::random::SeededRandom;
use crate::surface::Document;
use crate::weather::WeatherModel;

fn print_document(doc: &Document) {
    for (id, text) in doc.texts() {
        println!("{id:18} {text}");
    }
    for item in doc.children(surface::ids::HOURLY_FORECAST) {
        let time = item.find("hourly-time").map(|n| n.text.as_str()).unwrap_or("");
        let temp = item.find("hourly-temp").map(|n| n.text.as_str()).unwrap_or("");
        println!("{:18} {time:5} {temp}", "hourly");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _guard = telemetry::init_tracing(&args.log_file)?;
    telemetry::install_panic_hook(!args.once);

    let catalog = if args.alerts.is_empty() {
        AlertCatalog::default()
    } else {
        AlertCatalog::new(args.alerts.clone())?
    };
    let timings = args.timings();
    info!(seed = ?args.seed, ?timings, "starting ClearCast");

    let mut page = Page::new(
        WeatherModel::seed(),
        catalog,
        SeededRandom::new(args.seed),
        LocalClock,
        timings.clone(),
    );

    if args.once {
        page.ready(Duration::ZERO);
        // let the startup transitions play out before the first update
        let mut now = timings.weather_update - Duration::from_millis(1);
        page.run_until(now);
        for _ in 0..args.ticks {
            now += timings.weather_update;
            page.run_until(now);
        }
        page.stop();
        print_document(page.document());
        return Ok(());
    }

    // setup terminal
    let mut terminal = setup_terminal()?;

    // run the widget until the user quits
    let res = run_app(&mut terminal, &mut page);

    // restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    info!("shutdown complete");
    Ok(())
}
