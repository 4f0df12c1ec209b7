use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame, Terminal,
};
use tracing::info;

use crate::alerts::Clock;
use crate::page::Page;
use crate::random::RandomSource;
use crate::render::PULSE_SCALE;
use crate::surface::{ids, Document, Node};
use crate::weather::Icon;

const MISSING: &str = "--";

/// Longest the loop sleeps waiting for input when no timer is closer.
const MAX_WAIT: Duration = Duration::from_millis(250);

const SLIDE_STEP: i16 = 5;

pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

pub fn run_app<B, R, C>(terminal: &mut Terminal<B>, page: &mut Page<R, C>) -> io::Result<()>
where
    B: Backend,
    R: RandomSource,
    C: Clock,
{
    let start = Instant::now();
    page.ready(start.elapsed());

    while page.is_running() {
        terminal.draw(|f| ui(f, page.document()))?;

        let now = start.elapsed();
        let timeout = page
            .next_due()
            .map(|due| due.saturating_sub(now))
            .unwrap_or(MAX_WAIT)
            .min(MAX_WAIT);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            info!("quit requested");
                            page.stop();
                        }
                        KeyCode::Left => page.slide(-SLIDE_STEP),
                        KeyCode::Right => page.slide(SLIDE_STEP),
                        _ => {}
                    }
                }
            }
        }

        page.advance(start.elapsed());
    }

    Ok(())
}

fn or_missing(text: &str) -> String {
    if text.is_empty() {
        MISSING.to_string()
    } else {
        text.to_string()
    }
}

/// Reads a percentage style value such as `85%` or `0.85` into 0..=100.
fn percent(value: Option<&str>) -> u16 {
    let Some(value) = value else {
        return 0;
    };
    let parsed = match value.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok(),
        None => value.trim().parse::<f64>().ok().map(|v| v * 100.0),
    };
    parsed.map(|p| p.round().clamp(0.0, 100.0) as u16).unwrap_or(0)
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::Yellow),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded)
}

fn display_headline(doc: &Document) -> Paragraph<'_> {
    let faded = doc.style(ids::ALERT_MESSAGE, "opacity") == Some("0");
    let alert_style = if faded {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    };

    Paragraph::new(vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled("ClearCast", Style::default().fg(Color::Blue)),
            Span::raw(" : "),
            Span::styled(or_missing(doc.text(ids::ALERT_MESSAGE)), alert_style),
        ]),
        Line::from(format!(" {}", or_missing(doc.text(ids::ALERT_TIME)))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .border_type(BorderType::Rounded),
    )
}

fn display_current_conditions(doc: &Document) -> Table<'_> {
    let pulsing = doc.style(ids::CURRENT_TEMP, "transform") == Some(PULSE_SCALE);
    let temp_style = if pulsing {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    let symbol = Icon::from_glyph_class(doc.class(ids::CURRENT_ICON))
        .map(Icon::symbol)
        .unwrap_or(MISSING);

    let rows = vec![
        Row::new(vec![Cell::from("")]),
        Row::new(vec![
            Cell::from(" Temperature"),
            Cell::from(or_missing(doc.text(ids::CURRENT_TEMP))).style(temp_style),
        ]),
        Row::new(vec![
            Cell::from(" Conditions"),
            Cell::from(format!("{symbol} {}", or_missing(doc.text(ids::CURRENT_CONDITION))))
                .style(Style::default().fg(Color::Green)),
        ]),
        Row::new(vec![
            Cell::from(" Feels like"),
            Cell::from(or_missing(doc.text(ids::FEELS_LIKE)))
                .style(Style::default().fg(Color::Green)),
        ]),
        Row::new(vec![
            Cell::from(" Humidity"),
            Cell::from(or_missing(doc.text(ids::HUMIDITY)))
                .style(Style::default().fg(Color::Green)),
        ]),
    ];

    Table::new(rows, [Constraint::Length(13), Constraint::Min(15)])
        .block(panel("Current Conditions"))
}

fn display_precipitation(doc: &Document) -> Gauge<'_> {
    Gauge::default()
        .block(panel("Precipitation"))
        .gauge_style(Style::default().fg(Color::Blue))
        .percent(percent(doc.style(ids::PRECIP_CHANCE, "width")))
        .label(or_missing(doc.text(ids::CHANCE_TEXT)))
}

fn hourly_row(item: &Node) -> Row<'_> {
    let text = |class: &str| {
        item.find(class)
            .map(|n| n.text.clone())
            .unwrap_or_else(|| MISSING.to_string())
    };
    let symbol = item
        .find("hourly-icon")
        .and_then(|n| n.children.first())
        .and_then(|n| Icon::from_glyph_class(&n.class))
        .map(Icon::symbol)
        .unwrap_or(MISSING);

    Row::new(vec![
        Cell::from(format!(" {}", text("hourly-time"))),
        Cell::from(symbol),
        Cell::from(text("hourly-temp")).style(Style::default().fg(Color::Green)),
    ])
}

fn display_hourly(doc: &Document) -> Table<'_> {
    let rows: Vec<Row> = doc.children(ids::HOURLY_FORECAST).iter().map(hourly_row).collect();

    Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(4),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(vec![" Time", "", "Temp"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(panel("Hourly Forecast"))
}

fn display_comparison(doc: &Document) -> Paragraph<'_> {
    let value = |id: &'static str, property: &'static str| {
        doc.style(id, property).unwrap_or(MISSING).to_string()
    };

    Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(format!(" {:13}", "Legacy")),
            Span::styled(
                format!(
                    "{}  opacity {}",
                    value(ids::BLURRY_MAP, "filter"),
                    value(ids::BLURRY_MAP, "opacity")
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw(format!(" {:13}", "ClearCast")),
            Span::styled(
                format!("opacity {}", value(ids::SHARP_MAP, "opacity")),
                Style::default().fg(Color::Green),
            ),
        ]),
    ])
    .block(panel("Accuracy"))
}

fn display_slider(doc: &Document) -> Gauge<'_> {
    let value = doc.text(ids::ACCURACY_SLIDER);
    Gauge::default()
        .block(panel("Slider  ←/→"))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(value.parse::<u16>().unwrap_or(0).min(100))
        .label(or_missing(value))
}

fn ui(f: &mut Frame, doc: &Document) {
    let vert_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(f.area());

    f.render_widget(display_headline(doc), vert_layout[0]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vert_layout[1]);

    let lchunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(chunks[0]);

    f.render_widget(display_current_conditions(doc), lchunks[0]);
    f.render_widget(display_precipitation(doc), lchunks[1]);
    f.render_widget(display_comparison(doc), lchunks[2]);
    f.render_widget(display_slider(doc), lchunks[3]);

    f.render_widget(display_hourly(doc), chunks[1]);
}
