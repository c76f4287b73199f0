//! The canonical covenant field list

/// The fixed set of covenant fields extracted from offering documents.
///
/// The list is ordered and known at compile time; every extraction request
/// references exactly this set, and the spreadsheet template's label cells
/// are matched against these names verbatim.
pub struct FieldSpec;

/// Canonical field names, in the order they are presented to the
/// completion service.
const FIELD_NAMES: &[&str] = &[
    "Closing Date",
    "First Payment Date",
    "Day Count System",
    "Payment Frequency",
    "Payment Frequency Add. Description",
    "Description",
    "Rate Adjustment Frequency",
    "Initial Asset Balance",
    "Current Prepaid Balance",
    "Asset Amortization Type",
    "WA Fixed Rate",
    "Prepayment Type",
    "Fixed Prepayment Rate",
    "Default Rate",
    "Recoverable",
    "Original Term",
    "Loss Multiple",
    "Base Losses",
    "Remaining Term",
    "Discount Rate",
    "WA Original Amortization Term",
    "WA Original Balloon Payment Month",
    "WA Original Interest Only Period",
    "WA Original Interest Capitalization Period",
    "WALA",
    "Recoveries Lag",
];

impl FieldSpec {
    /// All canonical field names, in order.
    pub fn names() -> &'static [&'static str] {
        FIELD_NAMES
    }

    /// Number of canonical fields.
    pub fn len() -> usize {
        FIELD_NAMES.len()
    }

    /// Whether `name` is one of the canonical fields (exact match).
    pub fn contains(name: &str) -> bool {
        FIELD_NAMES.contains(&name)
    }

    /// The comma-separated field list embedded in extraction prompts.
    pub fn prompt_list() -> String {
        FIELD_NAMES.join(", ")
    }
}
