use contracts::dashboards::d100_sales_dashboard::{SalesByPeriodRow, SalesPersonRow};
use contracts::shared::period::MonthKey;

use crate::shared::components::ChartSeries;

/// Sales and paid series over `months`; months without a row are zero.
pub fn monthly_series(
    months: &[MonthKey],
    rows: &[SalesByPeriodRow],
) -> (Vec<String>, Vec<ChartSeries>) {
    let lookup = |month: &MonthKey| rows.iter().find(|r| r.period == *month);

    let categories = months.iter().map(MonthKey::label).collect();
    let sales = months
        .iter()
        .map(|m| lookup(m).map_or(0.0, |r| r.amount))
        .collect();
    let paid = months
        .iter()
        .map(|m| lookup(m).map_or(0.0, |r| r.paid_amount))
        .collect();

    (
        categories,
        vec![
            ChartSeries {
                name: "Sales".to_string(),
                values: sales,
            },
            ChartSeries {
                name: "Paid".to_string(),
                values: paid,
            },
        ],
    )
}

/// Sales persons by amount, largest first, at most `limit` rows.
pub fn top_sales_persons(rows: &[SalesPersonRow], limit: usize) -> Vec<SalesPersonRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(month: MonthKey, amount: f64, paid: f64) -> SalesByPeriodRow {
        SalesByPeriodRow {
            period: month,
            amount,
            invoice_count: 1,
            paid_amount: paid,
        }
    }

    #[test]
    fn gaps_are_filled_with_zero() {
        let jan = MonthKey::new(2025, 1).unwrap();
        let feb = jan.next();
        let mar = feb.next();
        let (categories, series) =
            monthly_series(&[jan, feb, mar], &[row(mar, 30.0, 10.0), row(jan, 10.0, 10.0)]);

        assert_eq!(categories, vec![jan.label(), feb.label(), mar.label()]);
        assert_eq!(series[0].values, vec![10.0, 0.0, 30.0]);
        assert_eq!(series[1].values, vec![10.0, 0.0, 10.0]);
    }

    #[test]
    fn top_sales_persons_are_sorted_and_capped() {
        let people: Vec<SalesPersonRow> = [("Ann", 5.0), ("Bob", 50.0), ("Cy", 20.0)]
            .into_iter()
            .map(|(name, amount)| SalesPersonRow {
                sales_person_name: name.to_string(),
                amount,
                invoice_count: 1,
            })
            .collect();
        let top = top_sales_persons(&people, 2);
        let names: Vec<&str> = top.iter().map(|r| r.sales_person_name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Cy"]);
    }
}
