use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for stored loan applications ("SHS" + zero-padded sequence).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Borrower segment declared on the intake form. Free text on the wire; anything
/// outside the known labels collapses to `Unspecified`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BorrowerCategory {
    NewBorrower,
    RepeatBorrower,
    #[default]
    Unspecified,
}

impl BorrowerCategory {
    pub const fn label(self) -> &'static str {
        match self {
            BorrowerCategory::NewBorrower => "New Borrower",
            BorrowerCategory::RepeatBorrower => "Repeat Borrower",
            BorrowerCategory::Unspecified => "Unspecified",
        }
    }
}

impl From<String> for BorrowerCategory {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "new borrower" => BorrowerCategory::NewBorrower,
            "repeat borrower" => BorrowerCategory::RepeatBorrower,
            _ => BorrowerCategory::Unspecified,
        }
    }
}

impl From<BorrowerCategory> for String {
    fn from(value: BorrowerCategory) -> Self {
        value.label().to_string()
    }
}

/// Raw applicant submission. Every field is user supplied and untrusted; numeric
/// fields arrive as JSON numbers or string-encoded numbers and coerce leniently,
/// with anything non-numeric degrading to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub previous_loans: u32,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub business_income: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub electricity_bill: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub mobile_recharge: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub utility_payments: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub loan_amount: f64,
    #[serde(default)]
    pub category: BorrowerCategory,
}

impl ApplicationSubmission {
    /// Display name for record assembly; blank input collapses to the original
    /// dashboard's `--` placeholder.
    pub fn display_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "--".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Workflow state of an application. Seeded by the classification matrix at
/// creation, mutable afterwards only through the admin status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Approved,
    Pending,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Parse a status from the admin surface. Returns `None` for anything
    /// outside the allowed vocabulary so callers can reject before storage.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "approved" => Some(ApplicationStatus::Approved),
            "pending" => Some(ApplicationStatus::Pending),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

/// Fixed label set assigned by the two-threshold decision matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "High Need + Good Repayment")]
    HighNeedGoodRepayment,
    #[serde(rename = "Low Need + Poor Repayment")]
    LowNeedPoorRepayment,
    #[serde(rename = "Good Repayment + Lower Need - Manual Review")]
    GoodRepaymentLowerNeed,
    #[serde(rename = "High Need + Risky Repayment - Manual Review")]
    HighNeedRiskyRepayment,
    #[serde(rename = "Medium Scores - Manual Review Required")]
    MediumScores,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Classification::HighNeedGoodRepayment => "High Need + Good Repayment",
            Classification::LowNeedPoorRepayment => "Low Need + Poor Repayment",
            Classification::GoodRepaymentLowerNeed => {
                "Good Repayment + Lower Need - Manual Review"
            }
            Classification::HighNeedRiskyRepayment => {
                "High Need + Risky Repayment - Manual Review"
            }
            Classification::MediumScores => "Medium Scores - Manual Review Required",
        }
    }

    /// Workflow status the matrix seeds for this bucket. Only the two
    /// unambiguous corners decide automatically; the rest queue for review.
    pub const fn initial_status(self) -> ApplicationStatus {
        match self {
            Classification::HighNeedGoodRepayment => ApplicationStatus::Approved,
            Classification::LowNeedPoorRepayment => ApplicationStatus::Rejected,
            Classification::GoodRepaymentLowerNeed
            | Classification::HighNeedRiskyRepayment
            | Classification::MediumScores => ApplicationStatus::Pending,
        }
    }
}

/// Coerce a raw string into a non-negative amount. Shared by the JSON and CSV
/// intake paths so both degrade garbage to zero identically.
pub(crate) fn parse_amount(raw: &str) -> f64 {
    sanitize_amount(raw.trim().parse::<f64>().unwrap_or(0.0))
}

/// Saturate amounts into the modeled range: finite and non-negative.
pub(crate) fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn coerce_amount(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(number) => sanitize_amount(number.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(raw) => parse_amount(raw),
        _ => 0.0,
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value).round() as u32)
}
