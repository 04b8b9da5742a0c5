use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sales invoice header as listed by `sls/sales-invoice-hd`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInvoiceHdDto {
    pub invoice_no: String,
    pub invoice_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub customer_name: String,
    #[serde(default)]
    pub sales_person_name: Option<String>,
    #[serde(default)]
    pub po_type: Option<String>,
    pub paid_status: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
}

impl SalesInvoiceHdDto {
    pub fn balance(&self) -> f64 {
        self.amount - self.paid_amount
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.balance() > 0.0 && self.due_date.is_some_and(|due| due < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdue_needs_balance_and_past_due_date() {
        let json = r#"{
            "invoiceNo": "INV-1", "invoiceDate": "2025-01-10", "dueDate": "2025-02-10",
            "customerName": "Acme", "paidStatus": "UNPAID", "amount": 100.0, "paidAmount": 20.0
        }"#;
        let mut row: SalesInvoiceHdDto = serde_json::from_str(json).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(row.balance(), 80.0);
        assert!(row.is_overdue(today));

        row.paid_amount = 100.0;
        assert!(!row.is_overdue(today));
    }
}
