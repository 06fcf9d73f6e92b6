//! Category carousels.
//!
//! Each row is a heading line above a strip of bordered title cells, with
//! `❮`/`❯` buttons at either end. Only the active row is scrolled; the others
//! always start at their first title.

use crate::app::{App, RowGeometry};
use crate::util::{center_to_width, truncate_to_width};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Heading line, three-line cells, and a blank separator.
const ROW_HEIGHT: u16 = 5;
const CELL_WIDTH: u16 = 22;
const ARROW_WIDTH: u16 = 3;

/// Rows and cells that fit in `area`, never less than one of each.
fn capacity(area: Rect) -> (usize, usize) {
    let rows = (area.height / ROW_HEIGHT).max(1) as usize;
    let items = (area.width.saturating_sub(ARROW_WIDTH * 2) / CELL_WIDTH).max(1) as usize;
    (rows, items)
}

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    app.layout.rows.clear();
    if area.width < ARROW_WIDTH * 2 + 4 || area.height < ROW_HEIGHT - 1 {
        return;
    }

    let (visible_rows, visible_items) = capacity(area);
    if (visible_rows, visible_items) != (app.layout.visible_rows, app.layout.visible_items) {
        app.layout.visible_rows = visible_rows;
        app.layout.visible_items = visible_items;
        app.refresh_viewport();
    }

    let last = (app.row_offset + visible_rows).min(app.rows.len());
    let mut geometry = Vec::with_capacity(last.saturating_sub(app.row_offset));

    for (slot, r) in (app.row_offset..last).enumerate() {
        let y = area.y + slot as u16 * ROW_HEIGHT;
        let active = r == app.selection.category;
        let row = &app.rows[r];

        let heading_style = if active {
            app.style("row_heading_active")
        } else {
            app.style("row_heading")
        };
        let heading = Line::from(vec![
            Span::styled(row.category.as_str(), heading_style),
            Span::styled(format!("  {}", row.len()), app.style("overlay_hint")),
        ]);
        f.render_widget(
            Paragraph::new(heading),
            Rect::new(area.x + ARROW_WIDTH, y, area.width - ARROW_WIDTH, 1),
        );

        let strip_y = y + 1;
        let strip_height = (area.y + area.height).saturating_sub(strip_y).min(3);
        if strip_height == 0 {
            break;
        }

        let left_arrow = Rect::new(area.x, strip_y, ARROW_WIDTH, strip_height);
        let right_arrow = Rect::new(
            area.x + area.width - ARROW_WIDTH,
            strip_y,
            ARROW_WIDTH,
            strip_height,
        );
        render_arrow(f, app, left_arrow, "❮");
        render_arrow(f, app, right_arrow, "❯");

        let offset = if active { app.item_offset } else { 0 };
        let mut items = Vec::with_capacity(visible_items);
        for (cell, index) in (offset..row.len()).take(visible_items).enumerate() {
            let Some(title) = row.get(index) else {
                break;
            };
            let cell_area = Rect::new(
                area.x + ARROW_WIDTH + cell as u16 * CELL_WIDTH,
                strip_y,
                CELL_WIDTH - 1,
                strip_height,
            );

            let is_active = app.selection.is_active(r, index);
            let (border_style, text_style, border_type) = if is_active {
                (
                    app.style("item_border_active"),
                    app.style("item_active"),
                    BorderType::Thick,
                )
            } else {
                (
                    app.style("item_border"),
                    app.style("item_normal"),
                    BorderType::Rounded,
                )
            };

            let inner_width = cell_area.width.saturating_sub(2) as usize;
            let label = center_to_width(&truncate_to_width(&title.title, inner_width), inner_width);
            let widget = Paragraph::new(Span::styled(label, text_style)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(border_style),
            );
            f.render_widget(widget, cell_area);
            items.push((index, cell_area));
        }

        geometry.push(RowGeometry {
            row: r,
            left_arrow,
            right_arrow,
            items,
        });
    }

    app.layout.rows = geometry;
}

fn render_arrow(f: &mut Frame, app: &App, area: Rect, glyph: &'static str) {
    let mut lines = vec![Line::from(""); area.height as usize];
    if let Some(middle) = lines.get_mut(area.height as usize / 2) {
        *middle = Line::from(glyph);
    }
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(app.style("arrow_button")),
        area,
    );
}
