//! Headline totals shown on the overview page and quoted by the assistant.

use serde::{Deserialize, Serialize};

/// Fixed balance/income/expense totals, in whole US dollars.
///
/// These are sample constants. They are not derived from the transaction
/// list on the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub balance: u64,
    pub income: u64,
    pub expenses: u64,
}

impl FinancialSnapshot {
    pub const SAMPLE: FinancialSnapshot = FinancialSnapshot {
        balance: 47_923,
        income: 61_000,
        expenses: 13_077,
    };
}

impl Default for FinancialSnapshot {
    fn default() -> Self {
        Self::SAMPLE
    }
}

/// Format a whole-dollar amount with thousands separators, e.g. `$47,923`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_small_amounts() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(100), "$100");
        assert_eq!(format_usd(999), "$999");
    }

    #[test]
    fn test_format_usd_inserts_separators() {
        assert_eq!(format_usd(1_000), "$1,000");
        assert_eq!(format_usd(47_923), "$47,923");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_sample_snapshot_is_default() {
        assert_eq!(FinancialSnapshot::default(), FinancialSnapshot::SAMPLE);
        assert_eq!(FinancialSnapshot::SAMPLE.balance, 47_923);
    }
}
