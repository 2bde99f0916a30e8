use crate::domain::Category;
use crate::ui::styles::{active_tab_style, border_style, inactive_tab_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the two category tabs, highlighting the active one
pub fn render_header(f: &mut Frame, active: Category, area: Rect) {
    let mut spans = Vec::new();
    for (idx, category) in Category::all().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("      "));
        }
        let style = if *category == active {
            active_tab_style()
        } else {
            inactive_tab_style()
        };
        spans.push(Span::styled(category.name(), style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(border_style()),
        );

    f.render_widget(paragraph, area);
}
