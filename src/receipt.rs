//! Printable plain-text receipt for a fee application

use std::fmt;

use crate::application::NewApplication;
use crate::money::format_rupees;

pub const BANK_NAME: &str = "National Bank of Pakistan";
pub const FORM_TITLE: &str = "Passport & Visa Fee Payment Form";
pub const FOOTER: &str =
    "Paid into the National Bank of Pakistan in cash for credit to Passport & Visa Fee Collection Account";

const WIDTH: usize = 64;

/// Receipt view over an application. Zero-valued fees are left out.
pub struct Receipt<'a> {
    application: &'a NewApplication,
    reference: Option<i64>,
}

impl<'a> Receipt<'a> {
    pub fn new(application: &'a NewApplication) -> Self {
        Self {
            application,
            reference: None,
        }
    }

    /// Print the stored row ID as the receipt reference
    pub fn with_reference(mut self, id: i64) -> Self {
        self.reference = Some(id);
        self
    }
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    let pad = WIDTH.saturating_sub(label.len() + value.len()).max(1);
    writeln!(f, "{}{}{}", label, " ".repeat(pad), value)
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let app = self.application;
        let rule = "=".repeat(WIDTH);
        let thin = "-".repeat(WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "{:^width$}", BANK_NAME, width = WIDTH)?;
        writeln!(f, "{:^width$}", FORM_TITLE, width = WIDTH)?;
        writeln!(f, "{}", rule)?;

        if let Some(id) = self.reference {
            line(f, "Reference No.:", &id.to_string())?;
        }
        line(f, "Case No.:", &app.case_no)?;
        line(f, "Application Date:", &app.application_date.to_string())?;
        if let Some(call_date) = app.call_date {
            line(f, "Call Date:", &call_date.to_string())?;
        }
        line(f, "Name:", &app.name)?;
        line(f, "N.I.C. No.:", &app.nic_no)?;
        line(f, "Address:", &app.address)?;
        line(f, "Service Type:", app.service_type.label())?;

        writeln!(f, "{}", thin)?;
        writeln!(f, "Fee Details (Rs.)")?;
        for (label, fee) in app.fees.items() {
            if !fee.is_zero() {
                line(f, label, &format_rupees(fee))?;
            }
        }
        writeln!(f, "{}", thin)?;
        line(f, "Bank Charges:", &format_rupees(app.bank_charges))?;
        line(f, "Total Amount:", &format_rupees(app.total_amount))?;
        writeln!(f, "{}", app.amount_in_words)?;
        writeln!(f, "{}", thin)?;
        writeln!(f, "NOT REFUNDABLE")?;
        writeln!(f, "{}", rule)?;
        write!(f, "{}", FOOTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FeeForm;

    fn application() -> NewApplication {
        FeeForm {
            case_no: "ISB-77".to_string(),
            application_date: "2024-05-02".to_string(),
            call_date: "2024-05-20".to_string(),
            name: "Sana Malik".to_string(),
            nic_no: "61101-1111111-2".to_string(),
            address: "Street 9, F-7, Islamabad".to_string(),
            service_type: "citizenship".to_string(),
            citizenship_fee: "100000".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_receipt_contents() {
        let app = application();
        let text = Receipt::new(&app).to_string();

        assert!(text.contains(BANK_NAME));
        assert!(text.contains(FORM_TITLE));
        assert!(text.contains("ISB-77"));
        assert!(text.contains("2024-05-20"));
        assert!(text.contains("Nationalization/Citizenship"));
        assert!(text.contains("Rs. 100000.00"));
        assert!(text.contains("Rs. 25.00"));
        assert!(text.contains("One Lakh Rupees Only"));
        assert!(text.contains("NOT REFUNDABLE"));
        assert!(text.ends_with(FOOTER));
        assert!(!text.contains("Reference No."));
    }

    #[test]
    fn test_receipt_omits_zero_fees() {
        let app = application();
        let text = Receipt::new(&app).to_string();
        assert!(text.lines().any(|l| l.starts_with("Citizenship Certificate Fee")));
        assert!(!text.lines().any(|l| l.starts_with("Visa Fee")));
        assert!(!text.lines().any(|l| l.starts_with("Renewal Fee")));
    }

    #[test]
    fn test_receipt_with_reference() {
        let app = application();
        let text = Receipt::new(&app).with_reference(42).to_string();
        let reference = text
            .lines()
            .find(|l| l.starts_with("Reference No.:"))
            .unwrap();
        assert!(reference.ends_with("42"));
        assert_eq!(reference.len(), WIDTH);
    }
}
