use crate::app::App;
use crate::keybindings::{Action, Context};
use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

const BROWSE_HINTS: [(Action, &str); 5] = [
    (Action::Play, "play"),
    (Action::OpenInBrowser, "open"),
    (Action::CycleTheme, "theme"),
    (Action::ShowHelp, "help"),
    (Action::Quit, "quit"),
];

const PLAYER_HINTS: [(Action, &str); 4] = [
    (Action::Back, "back"),
    (Action::Fullscreen, "full screen"),
    (Action::ClosePlayer, "close"),
    (Action::OpenInBrowser, "open in browser"),
];

/// ` [key]label` for each action that has a key in `context`, using the
/// current bindings.
pub(super) fn key_hints(app: &App, context: Context, hints: &[(Action, &str)]) -> String {
    hints
        .iter()
        .filter_map(|(action, label)| {
            let key = app.keybindings.key_label(context, *action)?;
            Some(format!(" [{}]{}", key, label))
        })
        .collect()
}

/// Render the status bar: message or key hints on the left, position on the right.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    // Guard against zero-width/height areas
    if area.width < 1 || area.height < 1 {
        return;
    }

    let style = app.style("status_bar");

    // Borrow the status message instead of cloning
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.overlay.is_open() {
        Cow::Owned(key_hints(app, Context::Player, &PLAYER_HINTS))
    } else if app.rows.is_empty() {
        Cow::Owned(key_hints(app, Context::Global, &[(Action::Quit, "quit")]))
    } else {
        Cow::Owned(key_hints(app, Context::Global, &BROWSE_HINTS))
    };

    f.render_widget(Paragraph::new(text).style(style), area);

    if let Some(position) = position_label(app) {
        f.render_widget(
            Paragraph::new(position)
                .alignment(Alignment::Right)
                .style(style),
            area,
        );
    }
}

/// `category m/n · title i/k`, or `None` without rows.
fn position_label(app: &App) -> Option<String> {
    let row = app.active_row()?;
    Some(format!(
        "{} {}/{} · {}/{} ",
        row.category,
        app.selection.category + 1,
        app.rows.len(),
        app.selection.movie + 1,
        row.len()
    ))
}
