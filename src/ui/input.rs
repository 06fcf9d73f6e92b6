//! Input handling for the TUI.
//!
//! Keys are resolved through the keybinding registry and mouse positions
//! through the geometry recorded by the last render. Both end up as
//! `InputEvent`s for the dispatcher or as player/help commands.

use crate::app::{App, HitTarget};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crate::nav::InputEvent;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::Action;

/// Main key dispatch function.
///
/// Overlays take precedence: help, then the player, then browsing.
pub(super) fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    // Help overlay captures all keys when visible
    if app.show_help {
        return handle_help_input(app, code);
    }

    if app.overlay.is_open() {
        return handle_player_input(app, code, modifiers);
    }

    handle_browse_input(app, code, modifiers)
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_help(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_help(-1),
        _ => {}
    }
    Action::Continue
}

/// Handle input while the player is open.
///
/// Navigation keys are swallowed so the catalog never moves behind the player.
fn handle_player_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Player)
    {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::Back) => app.escape_player(),
        Some(KbAction::ClosePlayer) => app.close_player(),
        Some(KbAction::Fullscreen) => app.request_fullscreen(),
        Some(KbAction::OpenInBrowser) => app.open_in_browser(),
        _ => {}
    }
    Action::Continue
}

/// Handle input while browsing the catalog.
fn handle_browse_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    let action = app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Global);

    match action {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::NavUp) => {
            app.handle_input(InputEvent::Up);
        }
        Some(KbAction::NavDown) => {
            app.handle_input(InputEvent::Down);
        }
        Some(KbAction::NavLeft) => {
            app.handle_input(InputEvent::Left);
        }
        Some(KbAction::NavRight) => {
            app.handle_input(InputEvent::Right);
        }
        Some(KbAction::Play) => app.play_active(),
        Some(KbAction::OpenInBrowser) => app.open_in_browser(),
        Some(KbAction::CycleTheme) => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        Some(KbAction::ShowHelp) => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        Some(KbAction::Back | KbAction::ClosePlayer | KbAction::Fullscreen) | None => {}
    }
    Action::Continue
}

/// Mouse dispatch.
///
/// Wheel motion is always consumed; it never scrolls the terminal itself.
pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Action {
    if app.show_help {
        match mouse.kind {
            MouseEventKind::ScrollDown => app.scroll_help(1),
            MouseEventKind::ScrollUp => app.scroll_help(-1),
            _ => {}
        }
        return Action::Continue;
    }

    if app.overlay.is_open() {
        handle_player_mouse(app, mouse);
        return Action::Continue;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown => {
            app.handle_input(InputEvent::Wheel { delta_y: 1 });
        }
        MouseEventKind::ScrollUp => {
            app.handle_input(InputEvent::Wheel { delta_y: -1 });
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match app.layout.hit(mouse.column, mouse.row) {
                Some(HitTarget::Browse(event)) => {
                    app.handle_input(event);
                }
                Some(HitTarget::PlayButton) => app.play_active(),
                None => {}
            }
        }
        _ => {}
    }
    Action::Continue
}

/// A click outside the windowed player closes it; everything else the
/// player swallows.
fn handle_player_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(area) = app.layout.player else {
        return;
    };
    if !area.contains(Position::new(mouse.column, mouse.row)) {
        app.close_player();
    }
}

// ============================================================================
// Tests
// ============================================================================
