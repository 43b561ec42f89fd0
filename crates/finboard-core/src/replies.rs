//! Canned assistant replies.

use crate::snapshot::{format_usd, FinancialSnapshot};

/// A trigger phrase and the reply it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyEntry {
    /// Lowercase substring looked for in the normalized input.
    pub trigger: &'static str,
    pub reply: &'static str,
}

/// Ordered list of canned replies. Lookup is first-match in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct ReplyTable {
    entries: &'static [ReplyEntry],
}

impl ReplyTable {
    pub const fn new(entries: &'static [ReplyEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [ReplyEntry] {
        self.entries
    }

    /// First entry whose trigger occurs in `normalized`.
    pub fn first_match(&self, normalized: &str) -> Option<&'static ReplyEntry> {
        self.entries
            .iter()
            .find(|entry| !entry.trigger.is_empty() && normalized.contains(entry.trigger))
    }
}

impl Default for ReplyTable {
    fn default() -> Self {
        DEFAULT_REPLIES
    }
}

pub const DEFAULT_REPLIES: ReplyTable = ReplyTable::new(&[
    ReplyEntry {
        trigger: "analyze my spending",
        reply: ANALYZE_SPENDING,
    },
    ReplyEntry {
        trigger: "how can i save more",
        reply: SAVE_MORE,
    },
    ReplyEntry {
        trigger: "review my expenses",
        reply: REVIEW_EXPENSES,
    },
    ReplyEntry {
        trigger: "budget tips",
        reply: BUDGET_TIPS,
    },
]);

/// First assistant message of every session.
pub const GREETING: &str = "Hello! 👋 I'm your AI Financial Assistant. 

I can help you:
• 📊 Analyze your spending patterns
• 💰 Find ways to save money
• 📋 Review your expenses
• 🎯 Create budget plans

What would you like to know about your finances today?";

const ANALYZE_SPENDING: &str = "Based on your recent transactions, here's what I found:

📊 **Spending Breakdown:**
• Food & Groceries: $2,500 (29%)
• Transportation: $1,200 (14%)
• Entertainment: $800 (9%)
• Shopping: $1,500 (18%)
• Utilities: $600 (7%)
• Others: $2,000 (23%)

💡 **Key Insight:** Your entertainment spending increased by 19% compared to last month. Consider setting a monthly limit to stay on track!";

const SAVE_MORE: &str = "Here are personalized savings tips based on your spending patterns:

🎯 **Top 3 Recommendations:**

1. **Cut Entertainment Costs** - You spent $800 this month. Try free alternatives like parks or home movie nights to save ~$300/month.

2. **Meal Planning** - Your food expenses are $2,500. Planning meals could reduce this by 20%, saving you $500/month.

3. **Transportation Hack** - Consider carpooling or public transit 2x per week to save ~$200/month.

💰 **Potential Monthly Savings: $1,000!**";

const REVIEW_EXPENSES: &str = "📋 **Recent Expense Review:**

| Category | Amount | Status |
|----------|--------|--------|
| Gift | $3,000 | ⚠️ High |
| Petrol | $4,977 | ⚠️ Over budget |
| Fruits | $100 | ✅ Normal |
| Cloths | $8,000 | 🔴 Very High |

🚨 **Alert:** Clothing expenses are unusually high this month. Was this a planned purchase?

Would you like me to help you create a budget plan to balance these expenses?";

const BUDGET_TIPS: &str = "💡 **Smart Budget Tips:**

1. **50/30/20 Rule** - Allocate 50% to needs, 30% to wants, 20% to savings.

2. **Envelope Method** - Set cash limits for categories like entertainment and shopping.

3. **No-Spend Days** - Try 2-3 no-spend days per week to boost savings.

4. **Automate Savings** - Set up automatic transfers to your savings account on payday.

5. **Track Everything** - Use this app daily to monitor all expenses!

Would you like me to create a personalized budget based on your income of $61,000?";

/// Reply used when no trigger matches. `input` is quoted verbatim.
pub fn fallback_reply(input: &str, snapshot: &FinancialSnapshot) -> String {
    format!(
        "I understand you're asking about \"{input}\". 

Based on your financial data:
• Total Balance: {balance}
• Total Income: {income}
• Total Expenses: {expenses}

How can I help you better manage your finances? You can ask me to:
- Analyze your spending patterns
- Suggest ways to save money
- Review specific expense categories
- Provide budget recommendations",
        balance = format_usd(snapshot.balance),
        income = format_usd(snapshot.income),
        expenses = format_usd(snapshot.expenses),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_triggers_are_lowercase_and_ordered() {
        let triggers: Vec<&str> = DEFAULT_REPLIES.entries().iter().map(|e| e.trigger).collect();
        assert_eq!(
            triggers,
            vec!["analyze my spending", "how can i save more", "review my expenses", "budget tips"]
        );
        for trigger in triggers {
            assert_eq!(trigger, trigger.to_lowercase());
        }
    }

    #[test]
    fn test_first_match_prefers_declaration_order() {
        let hit = DEFAULT_REPLIES
            .first_match("budget tips to analyze my spending")
            .unwrap();
        assert_eq!(hit.trigger, "analyze my spending");
    }

    #[test]
    fn test_empty_trigger_never_matches() {
        static ENTRIES: [ReplyEntry; 1] = [ReplyEntry { trigger: "", reply: "never" }];
        let table = ReplyTable::new(&ENTRIES);
        assert!(table.first_match("anything").is_none());
    }

    #[test]
    fn test_fallback_quotes_input_and_totals() {
        let text = fallback_reply("What about Taxes?", &FinancialSnapshot::SAMPLE);
        assert!(text.starts_with("I understand you're asking about \"What about Taxes?\"."));
        assert!(text.contains("• Total Balance: $47,923"));
        assert!(text.contains("• Total Income: $61,000"));
        assert!(text.contains("• Total Expenses: $13,077"));
    }

    #[test]
    fn test_first_lines_keep_trailing_space() {
        let text = fallback_reply("rent", &FinancialSnapshot::SAMPLE);
        assert!(text.starts_with("I understand you're asking about \"rent\". \n\nBased on"));
        assert!(GREETING.starts_with("Hello! 👋 I'm your AI Financial Assistant. \n\nI can help you:"));
    }
}
