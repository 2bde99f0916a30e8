use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::KeyValueStore;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the yes/no modal for delete or clear-all
pub fn render_confirm_modal<G: KeyValueStore>(f: &mut Frame, app: &AppState<G>, area: Rect) {
    let (title, message) = match app.ui_mode {
        UiMode::ConfirmDelete => (
            " Delete To Do ",
            format!(
                "  Delete \"{}\"? Are you sure?",
                app.pending_delete_text().unwrap_or_default()
            ),
        ),
        UiMode::ConfirmClear => (
            " Clear All ",
            "  Delete every task in both lists?".to_string(),
        ),
        _ => return,
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(message),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" I'm sure  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
