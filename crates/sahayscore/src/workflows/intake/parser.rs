use std::io::Read;

use serde::Deserialize;

use crate::workflows::lending::applications::domain::{parse_amount, ApplicationSubmission};
use crate::workflows::lending::applications::BorrowerCategory;

/// Parse an applicant roster export into submissions. Numeric cells follow the
/// same lenient coercion as the JSON surface: blank or garbled values degrade
/// to zero instead of failing the row.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<ApplicationSubmission>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut submissions = Vec::new();

    for row in csv_reader.deserialize::<RosterRow>() {
        submissions.push(row?.into_submission());
    }

    Ok(submissions)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Loan Amount", default)]
    loan_amount: String,
    #[serde(rename = "Previous Loans", default)]
    previous_loans: String,
    #[serde(rename = "Business Income", default)]
    business_income: String,
    #[serde(rename = "Electricity Bill", default)]
    electricity_bill: String,
    #[serde(rename = "Mobile Recharge", default)]
    mobile_recharge: String,
    #[serde(rename = "Utility Payments", default)]
    utility_payments: String,
}

impl RosterRow {
    fn into_submission(self) -> ApplicationSubmission {
        ApplicationSubmission {
            name: self.name,
            previous_loans: parse_amount(&self.previous_loans).round() as u32,
            business_income: parse_amount(&self.business_income),
            electricity_bill: parse_amount(&self.electricity_bill),
            mobile_recharge: parse_amount(&self.mobile_recharge),
            utility_payments: parse_amount(&self.utility_payments),
            loan_amount: parse_amount(&self.loan_amount),
            category: BorrowerCategory::from(self.category),
        }
    }
}
