use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BRAND: &str = "MARQUEE";
const SECTIONS: [&str; 3] = ["Series", "Movies", "New"];

/// Render the one-line navigation bar: brand on the left, sections after it,
/// theme name on the right.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(BRAND, app.style("nav_brand")),
        Span::raw("   "),
    ];
    for section in SECTIONS {
        spans.push(Span::styled(section, app.style("nav_link")));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);

    let theme = Paragraph::new(Span::styled(
        format!("{} ", app.theme_variant.name()),
        app.style("nav_link"),
    ))
    .alignment(Alignment::Right);
    f.render_widget(theme, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::rows_with_sizes;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal.draw(|f| render(f, app, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_brand_and_sections() {
        let app = App::new(rows_with_sizes(&[1]), &Config::default());
        let line = draw(&app);
        assert!(line.starts_with(" MARQUEE   Series  Movies  New"));
        assert!(line.ends_with("Dark "));
    }

    #[test]
    fn test_theme_name_follows_cycle() {
        let mut app = App::new(rows_with_sizes(&[1]), &Config::default());
        app.cycle_theme();
        assert!(draw(&app).ends_with("Light "));
    }
}
