//! Bulk applicant intake from CSV roster exports.
//!
//! Field offices collect applicants on paper and hand the service a roster
//! export; each row becomes a regular submission and goes through the same
//! scoring path as the interactive form.

mod parser;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::workflows::lending::applications::ApplicationSubmission;

/// Reads roster CSV exports into scoring-ready submissions.
pub struct CsvApplicationImporter;

impl CsvApplicationImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApplicationSubmission>, CsvIntakeError> {
        Ok(parser::parse_rows(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicationSubmission>, CsvIntakeError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

/// Error raised while reading a roster export.
#[derive(Debug, thiserror::Error)]
pub enum CsvIntakeError {
    #[error("failed to read applicant roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant roster data: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::lending::applications::BorrowerCategory;

    const ROSTER: &str = "\
Name,Category,Loan Amount,Previous Loans,Business Income,Electricity Bill,Mobile Recharge,Utility Payments
Ramesh Kumar,Repeat Borrower,50000,3,75000,1200,200,0
Savita Devi,New Borrower,30000,,40000,800,150,200
";

    #[test]
    fn parses_roster_rows_into_submissions() {
        let submissions =
            CsvApplicationImporter::from_reader(ROSTER.as_bytes()).expect("roster parses");

        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[0].name, "Ramesh Kumar");
        assert_eq!(submissions[0].category, BorrowerCategory::RepeatBorrower);
        assert_eq!(submissions[0].previous_loans, 3);
        assert_eq!(submissions[0].business_income, 75000.0);
        assert_eq!(submissions[1].previous_loans, 0, "blank cell degrades to zero");
    }

    #[test]
    fn garbled_numeric_cells_degrade_to_zero() {
        let roster = "\
Name,Category,Loan Amount,Previous Loans,Business Income,Electricity Bill,Mobile Recharge,Utility Payments
Asha Patel,Street Vendor,n/a,two,-500,1e4,abc,
";
        let submissions =
            CsvApplicationImporter::from_reader(roster.as_bytes()).expect("roster parses");

        let submission = &submissions[0];
        assert_eq!(submission.category, BorrowerCategory::Unspecified);
        assert_eq!(submission.loan_amount, 0.0);
        assert_eq!(submission.previous_loans, 0);
        assert_eq!(submission.business_income, 0.0, "negative amounts saturate at zero");
        assert_eq!(submission.electricity_bill, 10000.0);
        assert_eq!(submission.mobile_recharge, 0.0);
        assert_eq!(submission.utility_payments, 0.0);
    }

    #[test]
    fn structurally_broken_csv_is_rejected() {
        let roster = "Name,Category\n\"unterminated";
        let error = CsvApplicationImporter::from_reader(roster.as_bytes())
            .expect_err("broken csv fails");
        assert!(matches!(error, CsvIntakeError::Csv(_)));
    }
}
