use std::time::Duration;

use crate::resolver::Resolver;

/// Default pause before a reply becomes visible.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Preset prompts offered under the chat input. They go through the same
/// resolver path as typed text.
pub const QUICK_PROMPTS: [QuickPrompt; 4] = [
    QuickPrompt { icon: "📈", text: "Analyze my spending" },
    QuickPrompt { icon: "🐷", text: "How can I save more?" },
    QuickPrompt { icon: "🧾", text: "Review my expenses" },
    QuickPrompt { icon: "💡", text: "Budget tips" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickPrompt {
    pub icon: &'static str,
    pub text: &'static str,
}

/// Scripted assistant: a resolver plus a simulated "thinking" delay.
#[derive(Debug, Clone)]
pub struct Assistant {
    resolver: Resolver,
    reply_delay: Duration,
}

impl Assistant {
    pub fn new(resolver: Resolver, reply_delay: Duration) -> Self {
        Self { resolver, reply_delay }
    }

    pub fn with_delay(reply_delay: Duration) -> Self {
        Self::new(Resolver::default(), reply_delay)
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Wait out the reply delay, then resolve `input`.
    pub async fn reply(&self, input: &str) -> String {
        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        let reply = self.resolver.resolve(input);
        tracing::debug!(input_len = input.len(), reply_len = reply.len(), "resolved reply");
        reply
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::with_delay(DEFAULT_REPLY_DELAY)
    }
}
