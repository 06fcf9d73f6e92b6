//! Hero banner for the active title.

use crate::app::App;
use crate::util::display_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Banner height in lines.
pub const HEIGHT: u16 = 9;

const PLAY_LABEL: &str = " ▶ Play ";
/// Shown after the title when the entry has logo art the terminal cannot draw.
const LOGO_MARKER: &str = "  [logo]";

/// Render the banner and record the play button's area.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    app.layout.play_button = Rect::default();
    if area.width < 4 || area.height < HEIGHT {
        return;
    }

    let Some(title) = app.active_title() else {
        return;
    };

    // Keep text off the edges and out of the right quarter
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: (area.width.saturating_sub(4) * 3 / 4).max(1),
        height: area.height - 1,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1),
            Constraint::Length(3), // description
            Constraint::Length(1), // rating + year
            Constraint::Length(1), // play
        ])
        .split(inner);

    let mut heading = vec![Span::styled(title.title.as_str(), app.style("banner_title"))];
    if title.logo_image().is_some() {
        heading.push(Span::styled(LOGO_MARKER, app.style("overlay_hint")));
    }
    f.render_widget(Paragraph::new(Line::from(heading)), chunks[0]);

    if let Some(subtitle) = title.subtitle() {
        f.render_widget(
            Paragraph::new(Span::styled(subtitle, app.style("banner_subtitle"))),
            chunks[1],
        );
    }

    f.render_widget(
        Paragraph::new(title.description.as_str())
            .style(app.style("banner_body"))
            .wrap(Wrap { trim: true }),
        chunks[3],
    );

    let mut meta = Vec::with_capacity(3);
    if !title.rating.is_empty() {
        meta.push(Span::styled(
            format!(" {} ", title.rating),
            app.style("banner_rating"),
        ));
        meta.push(Span::raw("  "));
    }
    if !title.year.is_empty() {
        meta.push(Span::styled(title.year.as_str(), app.style("banner_year")));
    }
    f.render_widget(Paragraph::new(Line::from(meta)), chunks[4]);

    let play_width = (display_width(PLAY_LABEL) as u16).min(chunks[5].width);
    let play_area = Rect {
        width: play_width,
        ..chunks[5]
    };
    f.render_widget(
        Paragraph::new(Span::styled(PLAY_LABEL, app.style("banner_play"))),
        play_area,
    );
    let hint_area = Rect {
        x: play_area.x + play_width + 1,
        width: chunks[5].width.saturating_sub(play_width + 1),
        ..chunks[5]
    };
    f.render_widget(
        Paragraph::new(Span::styled("Enter", app.style("overlay_hint"))),
        hint_area,
    );

    app.layout.play_button = play_area;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::HitTarget;
    use crate::catalog::fixtures::title;
    use crate::catalog::{group_by_category, Title};
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with(entry: Title) -> App {
        App::new(group_by_category(&[entry]), &Config::default())
    }

    #[test]
    fn test_banner_shows_active_title_details() {
        let mut entry = title(1, &["Drama"]);
        entry.title = "Nightfall".to_string();
        entry.subtitle = Some("A city without sun".to_string());
        entry.rating = "16+".to_string();
        entry.year = "1999".to_string();
        let mut app = app_with(entry);

        let screen = draw(&mut app, 80, HEIGHT);
        assert!(screen.contains("Nightfall"));
        assert!(screen.contains("A city without sun"));
        assert!(screen.contains(" 16+ "));
        assert!(screen.contains("1999"));
        assert!(screen.contains("Play"));
        assert!(!screen.contains("[logo]"));
    }

    #[test]
    fn test_banner_records_play_button() {
        let mut app = app_with(title(1, &["Drama"]));
        draw(&mut app, 80, HEIGHT);

        let play = app.layout.play_button;
        assert_eq!((play.x, play.y, play.height), (2, HEIGHT - 1, 1));
        assert!(play.width > 0);
        assert_eq!(app.layout.hit(play.x, play.y), Some(HitTarget::PlayButton));
        assert_eq!(app.layout.hit(play.x, play.y - 1), None);
    }

    #[test]
    fn test_banner_marks_logo_art() {
        let mut entry = title(1, &["Drama"]);
        entry.logo_image = Some("/img/1-logo.png".to_string());
        let mut app = app_with(entry);
        assert!(draw(&mut app, 80, HEIGHT).contains("Title 1  [logo]"));

        let mut blank = title(2, &["Drama"]);
        blank.logo_image = Some("  ".to_string());
        let mut app = app_with(blank);
        assert!(!draw(&mut app, 80, HEIGHT).contains("[logo]"));
    }

    #[test]
    fn test_short_area_draws_nothing() {
        let mut app = app_with(title(1, &["Drama"]));
        app.layout.play_button = Rect::new(2, 8, 8, 1);
        let screen = draw(&mut app, 80, HEIGHT - 1);
        assert!(!screen.contains("Title 1"));
        assert_eq!(app.layout.play_button, Rect::default());
    }
}
