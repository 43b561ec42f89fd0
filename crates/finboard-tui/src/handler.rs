use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use finboard_core::{Page, QUICK_PROMPTS};
use ratatui::layout::Rect;

use crate::app::{App, FocusPane, InputMode};
use crate::tui::AppEvent;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub async fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => app.tick_animation(),
    }

    app.check_reply_task().await;
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Quick prompts fire on the assistant page regardless of focus or mode
    if let KeyCode::F(n @ 1..=4) = key.code {
        if app.page == Page::Assistant {
            app.send_quick_prompt(n as usize - 1);
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(page) = Page::from_index(index) {
                app.set_page(page);
            }
            return;
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                FocusPane::Sidebar => FocusPane::Content,
                FocusPane::Content | FocusPane::Prompts => FocusPane::Sidebar,
            };
            return;
        }
        _ => {}
    }

    if app.focus == FocusPane::Sidebar {
        handle_sidebar(app, key);
    } else if app.page == Page::Assistant {
        handle_assistant_normal(app, key);
    }
}

fn handle_sidebar(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.next_page(),
        KeyCode::Char('k') | KeyCode::Up => app.prev_page(),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            app.focus = FocusPane::Content;
        }
        _ => {}
    }
}

fn handle_assistant_normal(app: &mut App, key: KeyEvent) {
    if app.focus == FocusPane::Prompts {
        match key.code {
            KeyCode::Esc => app.focus = FocusPane::Content,
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => {
                app.prompt_nav_down()
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => {
                app.prompt_nav_up()
            }
            KeyCode::Enter => {
                if app.send_selected_prompt() {
                    app.focus = FocusPane::Content;
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('i') | KeyCode::Enter => {
            app.input_mode = InputMode::Editing;
            app.chat_cursor = app.chat_input.chars().count();
        }
        KeyCode::Char('p') => app.focus = FocusPane::Prompts,
        KeyCode::Char('j') | KeyCode::Down => app.chat_scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.chat_scroll_up(1),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat_scroll_down(app.chat_height / 2);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat_scroll_up(app.chat_height / 2);
        }
        KeyCode::Char('g') => app.chat_scroll = 0,
        KeyCode::Char('G') => app.scroll_chat_to_bottom(),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => app.focus = FocusPane::Sidebar,
        _ => {}
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            // Blank input and sends while a reply is pending are dropped
            app.send_input();
        }
        KeyCode::Backspace => {
            if app.chat_cursor > 0 {
                app.chat_cursor -= 1;
                let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
                app.chat_input.remove(byte_pos);
            }
        }
        KeyCode::Delete => {
            let char_count = app.chat_input.chars().count();
            if app.chat_cursor < char_count {
                let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
                app.chat_input.remove(byte_pos);
            }
        }
        KeyCode::Left => {
            app.chat_cursor = app.chat_cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            let char_count = app.chat_input.chars().count();
            app.chat_cursor = (app.chat_cursor + 1).min(char_count);
        }
        KeyCode::Home => {
            app.chat_cursor = 0;
        }
        KeyCode::End => {
            app.chat_cursor = app.chat_input.chars().count();
        }
        KeyCode::Char(c) => {
            let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
            app.chat_input.insert(byte_pos, c);
            app.chat_cursor += 1;
        }
        _ => {}
    }
}

/// Check if a point is within a rectangle
fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let x = mouse.column;
    let y = mouse.row;

    let in_sidebar = app.sidebar_area.map(|r| point_in_rect(x, y, r)).unwrap_or(false);
    let in_content = app.content_area.map(|r| point_in_rect(x, y, r)).unwrap_or(false);

    match mouse.kind {
        MouseEventKind::ScrollDown => {
            if in_sidebar {
                app.next_page();
            } else if in_content && app.page == Page::Assistant {
                app.chat_scroll_down(3);
            }
        }
        MouseEventKind::ScrollUp => {
            if in_sidebar {
                app.prev_page();
            } else if in_content && app.page == Page::Assistant {
                app.chat_scroll_up(3);
            }
        }
        MouseEventKind::Down(MouseButton::Left) if in_sidebar => {
            // sidebar_area is the page list block; first item sits under the top border
            if let Some(area) = app.sidebar_area {
                let row = y.saturating_sub(area.y + 1) as usize;
                if y > area.y && row < Page::all().len() {
                    if let Some(page) = Page::from_index(row) {
                        app.set_page(page);
                        app.focus = FocusPane::Sidebar;
                    }
                }
            }
        }
        _ => {}
    }
}

/// Footer label for the quick prompt bound to function key `F{n}`.
pub fn quick_prompt_key(index: usize) -> Option<String> {
    (index < QUICK_PROMPTS.len()).then(|| format!("F{}", index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{settle, test_app};
    use crossterm::event::{KeyEventKind, KeyEventState};
    use finboard_core::{resolve, ChatRole};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).await.unwrap();
        }
    }

    #[test]
    fn test_char_to_byte_index_multibyte() {
        let s = "a€b";
        assert_eq!(char_to_byte_index(s, 0), 0);
        assert_eq!(char_to_byte_index(s, 1), 1);
        assert_eq!(char_to_byte_index(s, 2), 4);
        assert_eq!(char_to_byte_index(s, 10), s.len());
    }

    #[tokio::test]
    async fn test_number_keys_switch_pages() {
        let mut app = test_app();
        handle_event(&mut app, key(KeyCode::Char('4'))).await.unwrap();
        assert_eq!(app.page, Page::Predictions);
        handle_event(&mut app, key(KeyCode::Char('1'))).await.unwrap();
        assert_eq!(app.page, Page::Dashboard);
    }

    #[tokio::test]
    async fn test_sidebar_navigation_moves_highlight() {
        let mut app = test_app();
        handle_event(&mut app, key(KeyCode::Char('j'))).await.unwrap();
        handle_event(&mut app, key(KeyCode::Down)).await.unwrap();
        assert_eq!(app.page, Page::Expense);
        assert!(app.is_active(Page::Expense));
        handle_event(&mut app, key(KeyCode::Char('k'))).await.unwrap();
        assert_eq!(app.page, Page::Income);
    }

    #[tokio::test]
    async fn test_typed_message_round_trip() {
        let mut app = test_app();
        app.set_page(Page::Assistant);
        app.focus = FocusPane::Content;

        handle_event(&mut app, key(KeyCode::Char('i'))).await.unwrap();
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "BUDGET TIPX").await;
        handle_event(&mut app, key(KeyCode::Backspace)).await.unwrap();
        type_text(&mut app, "S please").await;
        assert_eq!(app.chat_input, "BUDGET TIPS please");

        handle_event(&mut app, key(KeyCode::Enter)).await.unwrap();
        settle(&mut app).await;

        let messages = app.session.messages();
        assert_eq!(messages[1].content, "BUDGET TIPS please");
        assert_eq!(messages[2].role, ChatRole::Assistant);
        assert_eq!(messages[2].content, resolve("budget tips"));
        // Still editing so the next question can be typed straight away
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[tokio::test]
    async fn test_cursor_editing_in_middle() {
        let mut app = test_app();
        app.input_mode = InputMode::Editing;
        type_text(&mut app, "héllo").await;
        handle_event(&mut app, key(KeyCode::Home)).await.unwrap();
        handle_event(&mut app, key(KeyCode::Right)).await.unwrap();
        handle_event(&mut app, key(KeyCode::Delete)).await.unwrap();
        assert_eq!(app.chat_input, "hllo");
        handle_event(&mut app, key(KeyCode::Char('e'))).await.unwrap();
        handle_event(&mut app, key(KeyCode::End)).await.unwrap();
        type_text(&mut app, "!").await;
        assert_eq!(app.chat_input, "hello!");
    }

    #[tokio::test]
    async fn test_q_while_editing_is_text_not_quit() {
        let mut app = test_app();
        app.input_mode = InputMode::Editing;
        type_text(&mut app, "q").await;
        assert!(!app.should_quit);
        handle_event(&mut app, key(KeyCode::Esc)).await.unwrap();
        handle_event(&mut app, key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_function_key_sends_quick_prompt() {
        let mut app = test_app();
        app.set_page(Page::Assistant);
        app.focus = FocusPane::Content;

        handle_event(&mut app, key(KeyCode::F(3))).await.unwrap();
        settle(&mut app).await;

        let messages = app.session.messages();
        assert_eq!(messages[1].content, "Review my expenses");
        assert_eq!(messages[2].content, resolve("review my expenses"));
    }

    #[tokio::test]
    async fn test_function_key_ignores_focus_and_mode() {
        let mut app = test_app();
        app.set_page(Page::Assistant);
        app.focus = FocusPane::Sidebar;

        handle_event(&mut app, key(KeyCode::F(1))).await.unwrap();
        settle(&mut app).await;
        assert_eq!(app.session.messages()[1].content, "Analyze my spending");

        app.focus = FocusPane::Content;
        app.input_mode = InputMode::Editing;
        type_text(&mut app, "draft").await;
        handle_event(&mut app, key(KeyCode::F(4))).await.unwrap();
        settle(&mut app).await;

        let messages = app.session.messages();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[3].content, "Budget tips");
        assert_eq!(messages[4].content, resolve("budget tips"));
        assert_eq!(app.chat_input, "draft");
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[tokio::test]
    async fn test_function_key_off_assistant_page_does_nothing() {
        let mut app = test_app();
        app.set_page(Page::Income);
        handle_event(&mut app, key(KeyCode::F(2))).await.unwrap();
        assert_eq!(app.session.messages().len(), 1);
        assert!(!app.is_typing());
    }

    #[tokio::test]
    async fn test_prompt_bar_selection() {
        let mut app = test_app();
        app.set_page(Page::Assistant);
        app.focus = FocusPane::Content;

        handle_event(&mut app, key(KeyCode::Char('p'))).await.unwrap();
        assert_eq!(app.focus, FocusPane::Prompts);
        handle_event(&mut app, key(KeyCode::Right)).await.unwrap();
        handle_event(&mut app, key(KeyCode::Right)).await.unwrap();
        handle_event(&mut app, key(KeyCode::Right)).await.unwrap();
        handle_event(&mut app, key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.prompt_state.selected(), Some(3));

        handle_event(&mut app, key(KeyCode::Enter)).await.unwrap();
        settle(&mut app).await;
        assert_eq!(app.focus, FocusPane::Content);
        assert_eq!(app.session.messages()[1].content, "Budget tips");
    }

    #[tokio::test]
    async fn test_click_in_sidebar_selects_page() {
        let mut app = test_app();
        app.sidebar_area = Some(Rect::new(0, 5, 20, 7));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 9,
            modifiers: KeyModifiers::NONE,
        };
        handle_event(&mut app, AppEvent::Mouse(click)).await.unwrap();
        assert_eq!(app.page, Page::Predictions);

        let on_border = MouseEvent { row: 5, ..click };
        handle_event(&mut app, AppEvent::Mouse(on_border)).await.unwrap();
        assert_eq!(app.page, Page::Predictions);
    }

    #[test]
    fn test_quick_prompt_key_labels() {
        assert_eq!(quick_prompt_key(0).as_deref(), Some("F1"));
        assert_eq!(quick_prompt_key(3).as_deref(), Some("F4"));
        assert_eq!(quick_prompt_key(4), None);
    }
}
