use serde::{Deserialize, Serialize};

use crate::shared::period::MonthKey;

/// Row of `get-dashboard/getByPeriod`: sales of one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesByPeriodRow {
    pub period: MonthKey,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub invoice_count: u64,
    #[serde(default)]
    pub paid_amount: f64,
}

impl SalesByPeriodRow {
    pub fn outstanding(&self) -> f64 {
        (self.amount - self.paid_amount).max(0.0)
    }
}

/// Row of `get-dashboard/getBySalesPerson`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPersonRow {
    pub sales_person_name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub invoice_count: u64,
}

/// Headline figures shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_sales: f64,
    pub total_invoices: u64,
    pub paid_amount: f64,
    pub outstanding_amount: f64,
}

impl DashboardSummary {
    /// Fold monthly rows into card totals. `grand_total` from the envelope
    /// wins over the summed amount when the backend sends it.
    pub fn from_rows(rows: &[SalesByPeriodRow], grand_total: Option<f64>) -> Self {
        let summed: f64 = rows.iter().map(|r| r.amount).sum();
        let paid: f64 = rows.iter().map(|r| r.paid_amount).sum();
        let total_sales = grand_total.unwrap_or(summed);
        Self {
            total_sales,
            total_invoices: rows.iter().map(|r| r.invoice_count).sum(),
            paid_amount: paid,
            outstanding_amount: (total_sales - paid).max(0.0),
        }
    }
}
