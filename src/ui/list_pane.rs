use crate::app::AppState;
use crate::domain::Task;
use crate::persistence::KeyValueStore;
use crate::ui::styles::{border_style, default_style, selected_style, title_style, trash_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn create_task_line(task: &Task) -> Line<'_> {
    Line::from(vec![
        Span::styled(task.text.as_str(), default_style()),
        Span::raw("  "),
        Span::styled("[d]", trash_style()),
    ])
}

/// Render the tasks of the active list
pub fn render_list_pane<G: KeyValueStore>(f: &mut Frame, app: &AppState<G>, area: Rect) {
    let tasks = app.visible_tasks();
    let count = tasks.len();

    let items: Vec<ListItem> = tasks
        .into_iter()
        .enumerate()
        .map(|(idx, task)| {
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(create_task_line(task)).style(style)
        })
        .collect();

    let title = format!(" {} ({}) ", app.mode().name(), count);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
