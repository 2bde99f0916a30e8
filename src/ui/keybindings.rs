use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, area: Rect, ui_mode: UiMode) {
    let hints = match ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" w work   "),
            Span::raw("t travel   "),
            Span::raw("Tab switch   "),
            Span::raw("a add   "),
            Span::raw("↑/↓ select   "),
            Span::raw("d delete   "),
            Span::raw("C clear all   "),
            Span::raw("r reload   "),
            Span::raw("q quit"),
        ]),
        UiMode::Editing => Line::from(vec![
            Span::raw(" Enter add   "),
            Span::raw("Esc cancel"),
        ]),
        UiMode::ConfirmDelete | UiMode::ConfirmClear => Line::from(vec![
            Span::raw(" y confirm   "),
            Span::raw("n/Esc cancel"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
