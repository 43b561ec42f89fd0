use finboard_core::{Assistant, ChatSession, Config, FinancialSnapshot, Page, QUICK_PROMPTS};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tokio::task::JoinHandle;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Sidebar,
    Content,
    Prompts, // Quick prompt bar (assistant page only)
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub page: Page,
    pub input_mode: InputMode,
    pub focus: FocusPane,

    // Sidebar
    pub sidebar_state: ListState,
    pub user_name: String,
    pub user_initials: String,

    // Data
    pub snapshot: FinancialSnapshot,
    pub assistant: Assistant,

    // Assistant chat state
    pub session: ChatSession,
    pub chat_input: String,
    pub chat_cursor: usize, // cursor position in chat_input, in chars
    pub chat_scroll: u16,
    pub chat_height: u16, // Height of chat area for scroll calculations
    pub chat_width: u16,  // Width of chat area for wrap calculations
    pub reply_task: Option<JoinHandle<String>>,
    pub prompt_state: ListState,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Panel areas for mouse hit-testing (updated during render)
    pub sidebar_area: Option<Rect>,
    pub content_area: Option<Rect>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let page = config.start_page();

        let mut sidebar_state = ListState::default();
        sidebar_state.select(Some(page.index()));

        let mut prompt_state = ListState::default();
        prompt_state.select(Some(0));

        Self {
            should_quit: false,
            page,
            input_mode: InputMode::Normal,
            focus: FocusPane::Sidebar,

            sidebar_state,
            user_name: config.user_name().to_string(),
            user_initials: config.user_initials(),

            snapshot: FinancialSnapshot::SAMPLE,
            assistant: Assistant::with_delay(config.reply_delay()),

            session: ChatSession::new(),
            chat_input: String::new(),
            chat_cursor: 0,
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,
            reply_task: None,
            prompt_state,

            animation_frame: 0,

            sidebar_area: None,
            content_area: None,
        }
    }

    // Page navigation
    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            tracing::info!(from = self.page.route(), to = page.route(), "page change");
        }
        self.page = page;
        self.sidebar_state.select(Some(page.index()));
        self.input_mode = InputMode::Normal;
        if self.focus == FocusPane::Prompts && page != Page::Assistant {
            self.focus = FocusPane::Content;
        }
    }

    pub fn next_page(&mut self) {
        let len = Page::all().len();
        let next = (self.page.index() + 1).min(len - 1);
        if let Some(page) = Page::from_index(next) {
            self.set_page(page);
        }
    }

    pub fn prev_page(&mut self) {
        let prev = self.page.index().saturating_sub(1);
        if let Some(page) = Page::from_index(prev) {
            self.set_page(page);
        }
    }

    /// Whether `page` should be drawn highlighted in the sidebar.
    pub fn is_active(&self, page: Page) -> bool {
        self.page == page
    }

    // Assistant actions
    pub fn is_typing(&self) -> bool {
        self.session.is_awaiting_reply()
    }

    /// Submit `text` to the assistant. Returns false if it was not accepted
    /// (blank, or a reply is still pending).
    pub fn send(&mut self, text: &str) -> bool {
        let Some(id) = self.session.submit(text) else {
            return false;
        };
        tracing::info!(message_id = id, "user message submitted");

        let assistant = self.assistant.clone();
        let input = text.to_string();
        self.reply_task = Some(tokio::spawn(async move { assistant.reply(&input).await }));

        self.scroll_chat_to_bottom();
        true
    }

    /// Send whatever is in the input box, clearing it on success.
    pub fn send_input(&mut self) -> bool {
        let text = self.chat_input.clone();
        if !self.send(&text) {
            return false;
        }
        self.chat_input.clear();
        self.chat_cursor = 0;
        true
    }

    pub fn send_quick_prompt(&mut self, index: usize) -> bool {
        let Some(prompt) = QUICK_PROMPTS.get(index) else {
            return false;
        };
        self.prompt_state.select(Some(index));
        tracing::info!(prompt = prompt.text, "quick prompt selected");
        self.send(prompt.text)
    }

    pub fn send_selected_prompt(&mut self) -> bool {
        let index = self.prompt_state.selected().unwrap_or(0);
        self.send_quick_prompt(index)
    }

    /// Append the pending reply if its task has finished. Never blocks on an
    /// unfinished task.
    pub async fn check_reply_task(&mut self) {
        let finished = self
            .reply_task
            .as_ref()
            .map(|task| task.is_finished())
            .unwrap_or(false);
        if !finished {
            return;
        }

        if let Some(task) = self.reply_task.take() {
            let body = match task.await {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::error!(error = %err, "reply task failed");
                    format!("Error: the assistant could not reply ({err}).")
                }
            };
            let id = self.session.push_reply(body);
            tracing::info!(message_id = id, "assistant reply appended");
            self.animation_frame = 0;
            self.scroll_chat_to_bottom();
        }
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.is_typing() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    pub fn prompt_nav_down(&mut self) {
        let i = self.prompt_state.selected().unwrap_or(0);
        self.prompt_state.select(Some((i + 1).min(QUICK_PROMPTS.len() - 1)));
    }

    pub fn prompt_nav_up(&mut self) {
        let i = self.prompt_state.selected().unwrap_or(0);
        self.prompt_state.select(Some(i.saturating_sub(1)));
    }

    pub fn chat_scroll_down(&mut self, lines: u16) {
        let max = self.chat_total_lines().saturating_sub(self.visible_chat_height());
        self.chat_scroll = self.chat_scroll.saturating_add(lines).min(max);
    }

    pub fn chat_scroll_up(&mut self, lines: u16) {
        self.chat_scroll = self.chat_scroll.saturating_sub(lines);
    }

    /// Scroll chat so the newest message (or the typing indicator) is visible
    pub fn scroll_chat_to_bottom(&mut self) {
        let total_lines = self.chat_total_lines();
        let visible_height = self.visible_chat_height();

        self.chat_scroll = total_lines.saturating_sub(visible_height);
    }

    /// Rendered height of the chat transcript, including wrap.
    fn chat_total_lines(&self) -> u16 {
        // Use actual chat width for wrap calculation, default to 50 if not set
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        };

        let mut total_lines: u16 = 0;

        for msg in self.session.messages() {
            total_lines = total_lines.saturating_add(1); // Header line ("You" / "Finance Bot" + time)
            for line in msg.content.lines() {
                let line_width = line.width();
                let wrapped = if line_width == 0 { 1 } else { line_width / wrap_width + 1 };
                total_lines = total_lines.saturating_add(wrapped as u16);
            }
            total_lines = total_lines.saturating_add(1); // Blank line after message
        }

        if self.is_typing() {
            total_lines = total_lines.saturating_add(2); // Header + "Thinking..."
        }

        total_lines
    }

    fn visible_chat_height(&self) -> u16 {
        if self.chat_height > 0 {
            self.chat_height
        } else {
            20
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use finboard_core::{resolve, ChatRole};

    pub(crate) fn test_app() -> App {
        let config = Config {
            reply_delay_ms: Some(0),
            ..Config::new()
        };
        App::new(&config)
    }

    pub(crate) async fn settle(app: &mut App) {
        while app.is_typing() {
            tokio::task::yield_now().await;
            app.check_reply_task().await;
        }
    }

    #[test]
    fn test_start_page_from_config() {
        let config = Config {
            start_page: Some("/predictions".to_string()),
            ..Config::new()
        };
        let app = App::new(&config);
        assert_eq!(app.page, Page::Predictions);
        assert_eq!(app.sidebar_state.selected(), Some(Page::Predictions.index()));
        assert_eq!(app.user_initials, "AS");
    }

    #[test]
    fn test_only_active_page_is_highlighted() {
        let mut app = test_app();
        app.set_page(Page::Expense);
        let active: Vec<Page> = Page::all().into_iter().filter(|p| app.is_active(*p)).collect();
        assert_eq!(active, vec![Page::Expense]);
        assert_eq!(app.sidebar_state.selected(), Some(2));
    }

    #[test]
    fn test_page_cycling_clamps() {
        let mut app = test_app();
        app.prev_page();
        assert_eq!(app.page, Page::Dashboard);
        for _ in 0..10 {
            app.next_page();
        }
        assert_eq!(app.page, Page::Assistant);
    }

    #[tokio::test]
    async fn test_send_appends_user_then_reply() {
        let mut app = test_app();
        app.set_page(Page::Assistant);
        app.chat_input = "Please review my expenses now".to_string();
        app.chat_cursor = app.chat_input.chars().count();

        assert!(app.send_input());
        assert!(app.chat_input.is_empty());
        assert_eq!(app.chat_cursor, 0);
        assert!(app.is_typing());

        settle(&mut app).await;

        let messages = app.session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(messages[1].content, "Please review my expenses now");
        assert_eq!(messages[2].role, ChatRole::Assistant);
        assert_eq!(messages[2].content, resolve("review my expenses"));
        assert!(app.reply_task.is_none());
    }

    #[tokio::test]
    async fn test_blank_input_is_not_sent() {
        let mut app = test_app();
        app.chat_input = "   ".to_string();
        assert!(!app.send_input());
        assert_eq!(app.chat_input, "   ");
        assert_eq!(app.session.messages().len(), 1);
        assert!(app.reply_task.is_none());
    }

    #[tokio::test]
    async fn test_cannot_send_while_typing() {
        let config = Config {
            reply_delay_ms: Some(60_000),
            ..Config::new()
        };
        let mut app = App::new(&config);

        assert!(app.send("budget tips"));
        app.chat_input = "another".to_string();
        assert!(!app.send_input());
        assert_eq!(app.chat_input, "another");

        app.check_reply_task().await;
        assert!(app.is_typing());
        assert_eq!(app.session.messages().len(), 2);
    }

    #[tokio::test]
    async fn test_quick_prompt_goes_through_resolver() {
        let mut app = test_app();
        assert!(app.send_quick_prompt(1));
        settle(&mut app).await;

        let last = app.session.last().unwrap();
        assert_eq!(last.content, resolve("How can I save more?"));
        assert_eq!(app.prompt_state.selected(), Some(1));
        assert!(!app.send_quick_prompt(QUICK_PROMPTS.len()));
    }

    #[test]
    fn test_typing_animation_only_advances_while_typing() {
        let mut app = test_app();
        app.tick_animation();
        assert_eq!(app.animation_frame, 0);
    }

    #[test]
    fn test_scroll_to_bottom_with_small_viewport() {
        let mut app = test_app();
        app.chat_height = 3;
        app.chat_width = 200;
        app.scroll_chat_to_bottom();
        assert!(app.chat_scroll > 0);

        app.chat_scroll_up(u16::MAX);
        assert_eq!(app.chat_scroll, 0);
        app.chat_scroll_down(u16::MAX);
        assert_eq!(app.chat_scroll, app.chat_total_lines() - 3);
    }
}
