pub mod header;
pub mod input_box;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::KeyValueStore;
use header::render_header;
use input_box::render_input_box;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_confirm_modal;
use ratatui::{text::Span, widgets::Paragraph, Frame};
use styles::error_style;

/// Main render function - draws the entire UI
pub fn render<G: KeyValueStore>(f: &mut Frame, app: &AppState<G>) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area, app.ui_mode);
    render_header(f, app.mode(), layout.header_area);
    render_input_box(f, app, layout.input_area);
    render_list_pane(f, app, layout.list_area);

    if let Some(status) = &app.status {
        let paragraph = Paragraph::new(Span::styled(status.as_str(), error_style()));
        f.render_widget(paragraph, layout.status_area);
    }

    if matches!(app.ui_mode, UiMode::ConfirmDelete | UiMode::ConfirmClear) {
        render_confirm_modal(f, app, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::persistence::MemoryStore;
    use crate::store::Tracker;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_shows_active_list_only() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        tracker.add_task("Buy milk").unwrap();
        tracker.set_mode(Category::Travel).unwrap();
        tracker.add_task("Tokyo").unwrap();
        let app = AppState::new(tracker);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("Tokyo"));
        assert!(!text.contains("Buy milk"));
        assert!(text.contains("Travel (1)"));
        assert!(text.contains("Where do you want to go?"));
    }

    #[test]
    fn test_render_delete_modal() {
        let mut tracker = Tracker::open(MemoryStore::new()).unwrap();
        tracker.add_task("Call Bob").unwrap();
        let mut app = AppState::new(tracker);
        app.request_delete_selected();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("Delete To Do"));
        assert!(text.contains("I'm sure"));
    }
}
