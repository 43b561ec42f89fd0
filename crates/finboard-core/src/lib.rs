pub mod assistant;
pub mod config;
pub mod dashboard;
pub mod page;
pub mod predictions;
pub mod replies;
pub mod resolver;
pub mod snapshot;
pub mod state;

// Re-export main types for convenience
pub use assistant::{Assistant, QuickPrompt, DEFAULT_REPLY_DELAY, QUICK_PROMPTS};
pub use config::Config;
pub use page::Page;
pub use replies::{ReplyEntry, ReplyTable, DEFAULT_REPLIES};
pub use resolver::{resolve, Resolver};
pub use snapshot::{format_usd, FinancialSnapshot};
pub use state::{ChatMessage, ChatRole, ChatSession};
