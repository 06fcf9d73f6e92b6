//! Playback overlay.
//!
//! Full screen while the player holds exclusive presentation, otherwise a
//! half-size window centered over the catalog.

use crate::app::App;
use crate::keybindings::{Action, Context};
use crate::playback::Presentation;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::help::centered_rect;
use super::status::key_hints;

const FULLSCREEN_HINTS: [(Action, &str); 3] = [
    (Action::Back, "exit full screen"),
    (Action::ClosePlayer, "close"),
    (Action::OpenInBrowser, "browser"),
];

const WINDOWED_HINTS: [(Action, &str); 4] = [
    (Action::Fullscreen, "full screen"),
    (Action::Back, "close"),
    (Action::ClosePlayer, "close"),
    (Action::OpenInBrowser, "browser"),
];

pub fn render(f: &mut Frame, app: &mut App) {
    if !app.overlay.is_open() {
        app.layout.player = None;
        return;
    }
    let Some(session) = app.overlay.session() else {
        return;
    };

    let (area, hint) = match session.presentation {
        Presentation::Exclusive => (
            f.area(),
            key_hints(app, Context::Player, &FULLSCREEN_HINTS),
        ),
        Presentation::Windowed => {
            let mut hint = key_hints(app, Context::Player, &WINDOWED_HINTS);
            if app.mouse_capture {
                hint.push_str(" · click outside to close");
            }
            (centered_rect(50, 50, f.area()), hint)
        }
    };
    if area.width < 10 || area.height < 5 {
        return;
    }

    f.render_widget(Clear, area);

    let body = vec![
        Line::from(""),
        Line::from(Span::styled("Now playing", app.style("overlay_hint"))),
        Line::from(Span::styled(
            session.title.as_str(),
            app.style("banner_title"),
        )),
        Line::from(""),
        Line::from(session.url.as_str()),
        Line::from(""),
        Line::from(Span::styled(hint.trim_start(), app.style("overlay_hint"))),
    ];

    let paragraph = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("overlay_border"))
                .title(" ▶ Player "),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .style(app.style("overlay_body"));
    f.render_widget(paragraph, area);

    app.layout.player = match app.overlay.presentation() {
        Some(Presentation::Windowed) => Some(area),
        _ => None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::rows_with_sizes;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};
    use std::collections::HashMap;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_fullscreen_records_no_window() {
        let mut app = App::new(rows_with_sizes(&[1]), &Config::default());
        app.play_active();
        let screen = draw(&mut app);
        assert!(screen.contains("Now playing"));
        assert!(screen.contains("Title 0"));
        assert!(app.layout.player.is_none());
    }

    #[test]
    fn test_windowed_records_area() {
        let mut app = App::new(rows_with_sizes(&[1]), &Config::default());
        app.play_active();
        app.escape_player();
        draw(&mut app);
        assert_eq!(app.layout.player, Some(Rect::new(20, 6, 40, 12)));
    }

    #[test]
    fn test_hints_show_rebound_keys() {
        let mut keybindings = HashMap::new();
        keybindings.insert("close_player".to_string(), "c".to_string());
        let config = Config {
            keybindings,
            ..Config::default()
        };
        let mut app = App::new(rows_with_sizes(&[1]), &config);
        app.play_active();
        let screen = draw(&mut app);
        assert!(screen.contains("[Esc]exit full screen"));
        assert!(screen.contains("[c]close"));
        assert!(!screen.contains("[x]close"));
    }
}
