/// Month names for period labels, indexed by `month_index`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The reporting boundary every derived computation is evaluated against.
///
/// Passed by value into each pipeline call — never held as an ambient
/// global — so there is no hidden coupling between views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    /// No cutoff: use current quantities verbatim, include every transaction
    AllPeriods,
    /// A concrete month index in `0..=11` (0 = January)
    Month(u32),
}

impl MonthFilter {
    /// Whether a transaction tagged with `month_index` falls inside this filter.
    #[must_use]
    pub fn matches(&self, month_index: u32) -> bool {
        match self {
            MonthFilter::AllPeriods => true,
            MonthFilter::Month(m) => month_index == *m,
        }
    }

    /// Human-readable period label for headers and KPI captions.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            MonthFilter::AllPeriods => "All periods".to_string(),
            MonthFilter::Month(m) => MONTH_NAMES
                .get(*m as usize)
                .map(|name| (*name).to_string())
                .unwrap_or_else(|| format!("Month {m}")),
        }
    }
}

impl Default for MonthFilter {
    fn default() -> Self {
        MonthFilter::AllPeriods
    }
}

impl std::fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
