use crate::app::AppState;
use crate::domain::{Category, UiMode};
use crate::persistence::KeyValueStore;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle a key press; returns `true` when the app should quit
pub fn handle_key<G: KeyValueStore>(app: &mut AppState<G>, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Editing => handle_editing_mode(app, key),
        UiMode::ConfirmDelete | UiMode::ConfirmClear => handle_confirm_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<G: KeyValueStore>(app: &mut AppState<G>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),

        // Switch lists
        KeyCode::Char('w') | KeyCode::Char('W') => app.switch_mode(Category::Work),
        KeyCode::Char('t') | KeyCode::Char('T') => app.switch_mode(Category::Travel),
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => app.toggle_mode(),

        // Focus input
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Enter => app.start_editing(),

        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.request_delete_selected(),

        KeyCode::Char('r') | KeyCode::Char('R') => app.reload(),

        // Clear all (capital only, it wipes both lists)
        KeyCode::Char('C') => app.request_clear_all(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while typing into the input box
fn handle_editing_mode<G: KeyValueStore>(app: &mut AppState<G>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel_editing(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys in a yes/no confirmation modal
fn handle_confirm_mode<G: KeyValueStore>(app: &mut AppState<G>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_confirm(),
        _ => {}
    }
    false
}
