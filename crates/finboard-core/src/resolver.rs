use crate::replies::{fallback_reply, ReplyTable};
use crate::snapshot::FinancialSnapshot;

/// Maps free-text input to a canned reply.
///
/// Matching is a case-insensitive substring test against each trigger in
/// table order; the first hit wins. Inputs with no hit get the fallback
/// summary with the input quoted as typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    table: ReplyTable,
    snapshot: FinancialSnapshot,
}

impl Resolver {
    pub fn new(table: ReplyTable, snapshot: FinancialSnapshot) -> Self {
        Self { table, snapshot }
    }

    pub fn table(&self) -> &ReplyTable {
        &self.table
    }

    pub fn resolve(&self, input: &str) -> String {
        let normalized = input.to_lowercase();

        match self.table.first_match(&normalized) {
            Some(entry) => entry.reply.to_string(),
            None => fallback_reply(input, &self.snapshot),
        }
    }
}

/// Resolve against the built-in reply table and sample snapshot.
pub fn resolve(input: &str) -> String {
    Resolver::default().resolve(input)
}
