use color_eyre::Result;
use serde::Serialize;
use std::fmt::{self, Write};

use crate::data::stats::format_count;
use crate::data::{share_text, TIMELINE, USER_STATS};
use crate::domain::{SlideId, Stat};
use crate::timeline::controller::rotation_for;
use crate::timeline::ring::TICK_COUNT;

/// Run the application in headless mode (no UI)
pub fn run_headless(json: bool) -> Result<()> {
    let report = build_report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report)?);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub generated_at: String,
    pub name: &'static str,
    pub year: u16,
    pub total_questions: u64,
    pub time_saved_hours: u64,
    pub share_text: String,
    pub months: Vec<HeadlessMonth>,
    pub slides: Vec<HeadlessSlide>,
}

#[derive(Debug, Serialize)]
pub struct HeadlessMonth {
    pub id: &'static str,
    pub month: &'static str,
    pub title: &'static str,
    pub angle: u16,
    pub rotation_target: f64,
    pub card_size: &'static str,
    /// Whether the month has a tick on the ring.
    pub has_tick: bool,
    pub stats: &'static [Stat],
}

#[derive(Debug, Serialize)]
pub struct HeadlessSlide {
    pub index: usize,
    pub id: &'static str,
    pub label: &'static str,
}

pub fn build_report() -> HeadlessReport {
    let months = TIMELINE
        .iter()
        .enumerate()
        .map(|(index, entry)| HeadlessMonth {
            id: entry.id,
            month: entry.display_month,
            title: entry.title,
            angle: entry.angle_degree,
            rotation_target: rotation_for(index),
            card_size: entry.card_size.as_str(),
            has_tick: usize::from(entry.angle_degree) < TICK_COUNT,
            stats: entry.stats,
        })
        .collect();

    let slides = SlideId::ALL
        .iter()
        .map(|slide| HeadlessSlide {
            index: slide.index(),
            id: slide.as_str(),
            label: slide.label(),
        })
        .collect();

    HeadlessReport {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        name: USER_STATS.name,
        year: USER_STATS.year,
        total_questions: USER_STATS.total_questions,
        time_saved_hours: USER_STATS.time_saved_hours,
        share_text: share_text(&USER_STATS),
        months,
        slides,
    }
}

pub fn render_text(report: &HeadlessReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "\n{} Wrapped for {}", report.year, report.name)?;
    writeln!(out, "=========================")?;
    writeln!(out, "Generated: {}", report.generated_at)?;
    let questions = format_count(report.total_questions);
    let saved = report.time_saved_hours;
    writeln!(out, "Questions: {questions}  Time saved: {saved}h")?;

    writeln!(out, "\nTimeline:")?;
    for month in &report.months {
        let stats = month
            .stats
            .iter()
            .map(|stat| format!("{} {}", stat.value, stat.label))
            .collect::<Vec<_>>()
            .join(", ");
        let HeadlessMonth {
            month: name,
            angle,
            rotation_target: rotation,
            card_size: size,
            title,
            ..
        } = month;
        let tick = if month.has_tick { "" } else { " (no tick)" };
        writeln!(
            out,
            "- {name:<9} | {angle:>3}° | rot {rotation:>5} | {size:<6} | {title}{tick} | {stats}"
        )?;
    }

    writeln!(out, "\nSlides:")?;
    for slide in &report.slides {
        writeln!(out, "{}. {} ({})", slide.index + 1, slide.label, slide.id)?;
    }

    writeln!(out, "\n{}", report.share_text)?;
    Ok(out)
}
