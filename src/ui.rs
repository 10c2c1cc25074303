//! UI rendering helpers for the terminal user interface.
//!
//! Two screens: the track detail page and the full-screen player. Both read
//! the published playback snapshot and never touch the controller.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{App, Screen};
use crate::config::ControlsSettings;
use crate::playback::{PlaybackSnapshot, PlaybackState};
use crate::timefmt;

const DETAIL_CONTROLS: &str = "[enter/space] play | [q] quit";

/// Render the player controls help text, incorporating skip seconds.
fn player_controls_text(app: &App, controls: &ControlsSettings) -> String {
    if app.gesture.is_active() {
        return format!(
            "[h/l] scrub -/+{}s | [enter] seek here | [esc] cancel",
            controls.scrub_step_seconds
        );
    }
    [
        "[space/p] play/pause".to_string(),
        format!("[h/l] skip -/+{}s", controls.skip_seconds),
        "[tab] scrub".to_string(),
        "[r] loop".to_string(),
        "[s] stop".to_string(),
        "[esc/x] close".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

fn state_text(snap: &PlaybackSnapshot) -> &'static str {
    match snap.state {
        PlaybackState::Idle => "Stopped",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    }
}

fn footer(text: String) -> Paragraph<'static> {
    Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true })
}

/// Render the current screen into `frame`.
pub fn draw(frame: &mut Frame, app: &App, controls: &ControlsSettings) {
    match app.screen {
        Screen::Detail => draw_detail(frame, app),
        Screen::Player => draw_player(frame, app, controls),
    }
}

fn draw_detail(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Artwork placeholder: the terminal shows the asset name instead of the image.
    let artwork_area = chunks[0];
    let art = Paragraph::new(format!("~ {} ~", app.track.artwork_resource()))
        .alignment(Alignment::Center)
        .italic()
        .block(Block::bordered().title(" breather "));
    frame.render_widget(art, vertically_centered(artwork_area));

    let snap = app.snapshot();
    let meta = format!(
        "MUSIC  •  {}",
        timefmt::abbreviated(app.displayed_duration(&snap).as_secs_f64()).to_uppercase()
    );

    let mut lines = vec![
        Line::from(Span::raw(meta).dim()),
        Line::default(),
        Line::from(Span::raw(app.track.title()).bold()),
        Line::default(),
        Line::from(Span::styled(
            "  ▶ Play  ",
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        )),
        Line::default(),
        Line::from(app.track.description()),
    ];
    if let Some(status) = &app.status {
        lines.push(Line::default());
        lines.push(Line::from(Span::raw(status.as_str()).red()));
    }

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().padding(Padding::horizontal(1)));
    frame.render_widget(details, chunks[1]);

    frame.render_widget(footer(DETAIL_CONTROLS.to_string()), chunks[2]);
}

fn draw_player(frame: &mut Frame, app: &App, controls: &ControlsSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(app.track.title())
        .alignment(Alignment::Center)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" breather ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let art = Paragraph::new(format!("~ {} ~", app.track.artwork_resource()))
        .alignment(Alignment::Center)
        .dim();
    frame.render_widget(art, vertically_centered(chunks[1]));

    // Timeline
    let snap = app.snapshot();
    let position = app.displayed_position(&snap);
    let duration = app.displayed_duration(&snap);
    let ratio = app.displayed_progress(&snap);
    let gauge_style = if app.gesture.is_active() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let gauge = Gauge::default()
        .block(Block::bordered())
        .gauge_style(gauge_style)
        .use_unicode(true)
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, chunks[2]);

    let times = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    frame.render_widget(
        Paragraph::new(timefmt::positional(position.as_secs_f64())),
        times[0],
    );
    frame.render_widget(
        Paragraph::new(timefmt::remaining(position, duration)).alignment(Alignment::Right),
        times[1],
    );

    // Status
    let mut parts: Vec<String> = vec![
        format!(" {}", state_text(&snap)),
        format!("Loop: {}", if snap.is_looping { "On" } else { "Off" }),
    ];
    if let Some(v) = app.gesture.value() {
        parts.push(format!("Seek to {}", timefmt::positional(v)));
    }
    if let Some(status) = &app.status {
        parts.push(status.clone());
    }
    let status = Paragraph::new(parts.join(" • "))
        .block(Block::bordered().title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[4]);

    frame.render_widget(footer(player_controls_text(app, controls)), chunks[5]);
}

/// Shrink `r` to three rows around its vertical middle.
fn vertically_centered(r: Rect) -> Rect {
    let height = r.height.min(3);
    Rect {
        x: r.x,
        y: r.y + (r.height.saturating_sub(height) / 2),
        width: r.width,
        height,
    }
}
