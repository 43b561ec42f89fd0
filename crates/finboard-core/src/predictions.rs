//! Static "smart predictions" sample data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastPoint {
    pub month: &'static str,
    pub actual: Option<u64>,
    pub predicted: Option<u64>,
}

impl ForecastPoint {
    pub fn value(&self) -> u64 {
        self.actual.or(self.predicted).unwrap_or(0)
    }

    pub fn is_predicted(&self) -> bool {
        self.actual.is_none()
    }
}

pub const SPENDING_FORECAST: [ForecastPoint; 5] = [
    ForecastPoint { month: "Nov", actual: Some(8_500), predicted: None },
    ForecastPoint { month: "Dec", actual: None, predicted: Some(9_200) },
    ForecastPoint { month: "Jan", actual: None, predicted: Some(8_800) },
    ForecastPoint { month: "Feb", actual: None, predicted: Some(7_500) },
    ForecastPoint { month: "Mar", actual: None, predicted: Some(8_200) },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPrediction {
    pub category: &'static str,
    pub current: u64,
    pub predicted: u64,
    pub trend: Trend,
    pub percentage: i32,
}

/// Predicted spend that fills a category bar.
pub const CATEGORY_SCALE: u64 = 3_000;

impl CategoryPrediction {
    /// Share of [`CATEGORY_SCALE`], capped at 1.0.
    pub fn progress(&self) -> f64 {
        (self.predicted as f64 / CATEGORY_SCALE as f64).min(1.0)
    }
}

pub const CATEGORY_PREDICTIONS: [CategoryPrediction; 5] = [
    CategoryPrediction { category: "Food & Groceries", current: 2_500, predicted: 2_800, trend: Trend::Up, percentage: 12 },
    CategoryPrediction { category: "Transportation", current: 1_200, predicted: 1_100, trend: Trend::Down, percentage: -8 },
    CategoryPrediction { category: "Entertainment", current: 800, predicted: 950, trend: Trend::Up, percentage: 19 },
    CategoryPrediction { category: "Utilities", current: 600, predicted: 620, trend: Trend::Up, percentage: 3 },
    CategoryPrediction { category: "Shopping", current: 1_500, predicted: 1_300, trend: Trend::Down, percentage: -13 },
];

pub const SAVINGS_PROJECTION: [(&str, u64); 6] = [
    ("Nov", 4_500),
    ("Dec", 5_200),
    ("Jan", 6_100),
    ("Feb", 7_500),
    ("Mar", 8_800),
    ("Apr", 10_200),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: &'static str,
}

pub const ALERTS: [Alert; 3] = [
    Alert { kind: AlertKind::Warning, message: "Entertainment spending may exceed budget by 19% next month" },
    Alert { kind: AlertKind::Success, message: "On track to save $10,200 by April 2026" },
    Alert { kind: AlertKind::Info, message: "Transportation costs trending down - great job!" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthMetric {
    pub label: &'static str,
    pub percent: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetHealth {
    pub score: u16,
    pub label: &'static str,
    pub metrics: [HealthMetric; 3],
}

pub const BUDGET_HEALTH: BudgetHealth = BudgetHealth {
    score: 78,
    label: "Good",
    metrics: [
        HealthMetric { label: "Income Stability", percent: 92 },
        HealthMetric { label: "Expense Control", percent: 75 },
        HealthMetric { label: "Savings Rate", percent: 68 },
    ],
};

/// Last entry of the savings projection.
pub fn projected_savings_target() -> (&'static str, u64) {
    SAVINGS_PROJECTION[SAVINGS_PROJECTION.len() - 1]
}
