//! Sample data for the overview, income and expense pages.

use crate::snapshot::FinancialSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn sign(&self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub id: u32,
    pub name: &'static str,
    pub date: &'static str,
    pub amount: u64,
    pub kind: TransactionKind,
    pub icon: &'static str,
}

/// Most recent first.
pub const RECENT_TRANSACTIONS: [Transaction; 5] = [
    Transaction { id: 1, name: "Salary", date: "8th Nov 2025", amount: 10_000, kind: TransactionKind::Income, icon: "💰" },
    Transaction { id: 2, name: "Rental", date: "1st Nov 2025", amount: 1_000, kind: TransactionKind::Income, icon: "🏠" },
    Transaction { id: 3, name: "Fruits", date: "17th Oct 2025", amount: 100, kind: TransactionKind::Expense, icon: "🍇" },
    Transaction { id: 4, name: "Interest From Saving", date: "8th Oct 2025", amount: 20_000, kind: TransactionKind::Income, icon: "🏦" },
    Transaction { id: 5, name: "Petrol", date: "8th Oct 2025", amount: 4_977, kind: TransactionKind::Expense, icon: "⛽" },
];

pub fn transactions_of(kind: TransactionKind) -> Vec<Transaction> {
    RECENT_TRANSACTIONS
        .iter()
        .filter(|t| t.kind == kind)
        .copied()
        .collect()
}

pub fn total_of(transactions: &[Transaction]) -> u64 {
    transactions.iter().map(|t| t.amount).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Balance,
    Income,
    Expenses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub amount: u64,
    pub kind: StatKind,
}

/// The three headline cards, in display order.
pub fn stat_cards(snapshot: &FinancialSnapshot) -> [StatCard; 3] {
    [
        StatCard { title: "Total Balance", amount: snapshot.balance, kind: StatKind::Balance },
        StatCard { title: "Total Income", amount: snapshot.income, kind: StatKind::Income },
        StatCard { title: "Total Expenses", amount: snapshot.expenses, kind: StatKind::Expenses },
    ]
}

/// Slices of the "Financial Overview" breakdown, in chart order.
pub fn overview_breakdown(snapshot: &FinancialSnapshot) -> [(&'static str, u64); 3] {
    [
        ("Total Balance", snapshot.balance),
        ("Total Expenses", snapshot.expenses),
        ("Total Income", snapshot.income),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_by_kind() {
        let income = transactions_of(TransactionKind::Income);
        let expense = transactions_of(TransactionKind::Expense);
        assert_eq!(income.len() + expense.len(), RECENT_TRANSACTIONS.len());
        assert!(income.iter().all(|t| t.kind == TransactionKind::Income));
        assert_eq!(
            expense.iter().map(|t| t.name).collect::<Vec<_>>(),
            vec!["Fruits", "Petrol"]
        );
    }

    #[test]
    fn test_page_totals() {
        assert_eq!(total_of(&transactions_of(TransactionKind::Income)), 31_000);
        assert_eq!(total_of(&transactions_of(TransactionKind::Expense)), 5_077);
        assert_eq!(total_of(&[]), 0);
    }

    #[test]
    fn test_stat_cards_follow_snapshot() {
        let cards = stat_cards(&FinancialSnapshot::SAMPLE);
        assert_eq!(cards[0].amount, 47_923);
        assert_eq!(cards[1].title, "Total Income");
        assert_eq!(cards[2].kind, StatKind::Expenses);
    }
}
