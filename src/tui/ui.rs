//! Rendering for the macro panel: header, button grid, footer.

use crate::panel::{ButtonCell, Color as PanelColor};
use crate::tui::app::App;
use crate::tui::geometry::{layout_slots, ButtonSlot};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

/// Key binding hints shown when there is no status message.
pub const KEY_HINTS: &str = "arrows/hjkl: move | Enter/Space: send | Esc: clear | q: quit";

/// Maps a panel colour to a terminal colour. Fully transparent becomes the
/// terminal default.
pub fn terminal_color(color: PanelColor) -> Color {
    if color.is_transparent() {
        Color::Reset
    } else {
        Color::Rgb(color.r, color.g, color.b)
    }
}

/// Text style for a button: its colours plus bold/italic from the font.
pub fn button_style(button: &ButtonCell) -> Style {
    let mut style = Style::default()
        .fg(terminal_color(button.foreground))
        .bg(terminal_color(button.background));
    if button.style.font.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if button.style.font.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

/// Renders the whole panel and records the button areas on `app` for
/// mouse hit-testing.
pub fn render_panel(frame: &mut Frame, app: &mut App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);
    app.button_areas = layout_slots(&app.layout, body);
    for slot in &app.button_areas {
        let selected = app.selected == Some((slot.row, slot.column));
        if let Some(button) = app
            .layout
            .cell(slot.row, slot.column)
            .and_then(|cell| cell.as_button())
        {
            render_button(frame, slot, button, selected);
        }
    }
    render_footer(frame, footer, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            app.window_title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("-> {}", app.destination),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_button(frame: &mut Frame, slot: &ButtonSlot, button: &ButtonCell, selected: bool) {
    let style = button_style(button);
    let block = Block::bordered().style(style);
    let block = if selected {
        block
            .border_type(BorderType::Double)
            .border_style(style.add_modifier(Modifier::REVERSED))
    } else {
        block.border_type(BorderType::Rounded)
    };

    let inner = block.inner(slot.area);
    frame.render_widget(block, slot.area);
    if inner.is_empty() {
        return;
    }
    let label_area = Rect {
        y: inner.y + inner.height / 2,
        height: 1,
        ..inner
    };
    frame.render_widget(
        Paragraph::new(button.label.as_str())
            .alignment(Alignment::Center)
            .style(style),
        label_area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some((message, _)) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
