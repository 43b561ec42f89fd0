#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Income,
    Expense,
    Predictions,
    Assistant,
}

impl Page {
    pub fn route(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Income => "/income",
            Page::Expense => "/expense",
            Page::Predictions => "/predictions",
            Page::Assistant => "/assistant",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Income => "income",
            Page::Expense => "expense",
            Page::Predictions => "predictions",
            Page::Assistant => "assistant",
        }
    }

    /// Accepts either the short name or the route, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Page::all()
            .into_iter()
            .find(|p| p.as_str() == s || p.route() == s)
    }

    pub fn all() -> Vec<Page> {
        vec![
            Page::Dashboard,
            Page::Income,
            Page::Expense,
            Page::Predictions,
            Page::Assistant,
        ]
    }

    pub fn index(&self) -> usize {
        Page::all().iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Page::all().get(i).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Income => "Income",
            Page::Expense => "Expense",
            Page::Predictions => "Predictions",
            Page::Assistant => "AI Assistant",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "▦",
            Page::Income => "◈",
            Page::Expense => "▭",
            Page::Predictions => "↗",
            Page::Assistant => "✉",
        }
    }
}
