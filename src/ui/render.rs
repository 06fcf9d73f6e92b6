//! Render functions for the TUI.
//!
//! This module handles all rendering logic: the browse screen (nav bar,
//! banner, carousels, status bar) and the overlays drawn on top of it.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{banner, help, navbar, player, rows, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 20;

/// Main render dispatch function.
///
/// Handles terminal size validation before rendering, then draws the browse
/// screen and whichever overlays are active.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        // For very small terminals (less than 3 lines), just show minimal message
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        app.layout.clear_hit_areas();
        return;
    }

    f.render_widget(Block::default().style(app.style("background")), area);

    if app.player_is_fullscreen() {
        app.layout.clear_hit_areas();
        player::render(f, app);
        return;
    }

    if app.rows.is_empty() {
        render_empty(f, app);
    } else {
        render_browse(f, app);
    }

    if app.overlay.is_open() {
        player::render(f, app);
    } else {
        app.layout.player = None;
    }

    if app.show_help {
        help::render(f, app);
    }
}

/// Render the browse screen (nav bar, banner, carousels, status bar).
fn render_browse(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(banner::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    navbar::render(f, app, chunks[0]);
    banner::render(f, app, chunks[1]);
    rows::render(f, app, chunks[2]);
    status::render(f, app, chunks[3]);
}

/// Render the screen shown when no title carries a category.
fn render_empty(f: &mut Frame, app: &mut App) {
    app.layout.clear_hit_areas();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    navbar::render(f, app, chunks[0]);

    let body = chunks[1];
    let message_area = Rect {
        y: body.y + body.height.saturating_sub(3) / 2,
        height: body.height.min(3),
        ..body
    };
    let message = Paragraph::new(vec![
        Line::from(Span::styled("No content", app.style("banner_title"))),
        Line::from(""),
        Line::from(Span::styled(
            "The catalog has no categorised titles.",
            app.style("banner_subtitle"),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(message, message_area);

    status::render(f, app, chunks[2]);
}
