use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::KeyValueStore;
use crate::ui::styles::{border_style, default_style, focused_border_style, modal_title_style, placeholder_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the single-line input box for new tasks
pub fn render_input_box<G: KeyValueStore>(f: &mut Frame, app: &AppState<G>, area: Rect) {
    let editing = app.ui_mode == UiMode::Editing;

    let line = if app.input.is_empty() && !editing {
        Line::from(Span::styled(app.mode().placeholder(), placeholder_style()))
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.input.as_str(), default_style()),
            if editing {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ])
    };

    let border = if editing {
        focused_border_style()
    } else {
        border_style()
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );

    f.render_widget(paragraph, area);
}
