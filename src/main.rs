// Calendar Engine
// Demo entry point: prints the current month and the week layout

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};

use calendar_engine::models::calendar::DateConstraints;
use calendar_engine::models::event::Event;
use calendar_engine::models::settings::Settings;
use calendar_engine::services::agenda::upcoming;
use calendar_engine::services::event::EventManager;
use calendar_engine::services::layout::WeekLayout;
use calendar_engine::services::navigation::CalendarState;
use calendar_engine::services::settings::SettingsService;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Engine demo");

    let settings = load_settings_or_default(&SettingsService::with_default_path());
    let today = Local::now().date_naive();

    let state = CalendarState::from_settings(today, &settings, DateConstraints::default());
    let mut manager = EventManager::new();
    seed_sample_events(&mut manager, today)?;
    manager.drain_changes();

    println!("{}", state.month_label());
    println!("{}", state.weekday_labels().join(" "));
    for week in state.grid().weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|day| {
                if state.grid().is_in_month(*day) {
                    format!("{:>3}", day.format("%-d"))
                } else {
                    "  .".to_string()
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }

    println!();
    println!("Upcoming:");
    for event in upcoming(manager.events()) {
        println!("  {}  {}", event.start.format("%a %d %H:%M"), event.title);
    }

    let index = manager.index();
    let focus_week = sample_day(today, 15).unwrap_or(today);
    let week = WeekLayout::build(focus_week, state.week_start(), &index);
    let json = serde_json::to_string_pretty(&week).context("failed to serialize week layout")?;
    println!();
    println!("{json}");

    Ok(())
}

fn load_settings_or_default(service: &SettingsService) -> Settings {
    match service.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}

fn sample_day(today: NaiveDate, day: u32) -> Option<NaiveDate> {
    use chrono::Datelike;
    NaiveDate::from_ymd_opt(today.year(), today.month(), day)
}

fn sample_instant(today: NaiveDate, day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    sample_day(today, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .context("sample event time out of range")
}

fn seed_sample_events(manager: &mut EventManager, today: NaiveDate) -> Result<()> {
    let samples = [
        (
            "Team Standup",
            Some("Daily sync with the team"),
            (15, 9, 0),
            (15, 9, 30),
            "#3b82f6",
            "Meeting",
        ),
        (
            "Design Review",
            Some("Review new component designs"),
            (15, 14, 0),
            (15, 15, 30),
            "#10b981",
            "Design",
        ),
        (
            "Client Presentation",
            None,
            (16, 10, 0),
            (16, 11, 30),
            "#f59e0b",
            "Meeting",
        ),
    ];

    for (title, description, start, end, color, category) in samples {
        let mut builder = Event::builder()
            .title(title)
            .start(sample_instant(today, start.0, start.1, start.2)?)
            .end(sample_instant(today, end.0, end.1, end.2)?)
            .color(color)
            .category(category);
        if let Some(description) = description {
            builder = builder.description(description);
        }
        manager.create(builder.build()?)?;
    }

    Ok(())
}
