//! Turns option-endpoint rows into `{value, label, count}` entries for
//! the faceted filters.

use contracts::shared::options::{FilterOption, OptionRow};

/// `id` becomes the value (falling back to `name`), `name` the label
/// (falling back to `id`). Rows with neither are skipped.
pub fn to_options(rows: &[OptionRow]) -> Vec<FilterOption> {
    rows.iter()
        .filter_map(|row| {
            let id = row.id.as_deref().map(str::trim).filter(|s| !s.is_empty());
            let name = row.name.as_deref().map(str::trim).filter(|s| !s.is_empty());
            let value = id.or(name)?;
            let label = name.or(id)?;
            let option = FilterOption::new(value, label);
            Some(match row.count {
                Some(count) => option.with_count(count),
                None => option,
            })
        })
        .collect()
}

/// Endpoints that return plain names (`["Alice", "Bob"]`).
pub fn names_to_options<S: AsRef<str>>(names: &[S]) -> Vec<FilterOption> {
    names
        .iter()
        .map(|n| n.as_ref().trim())
        .filter(|n| !n.is_empty())
        .map(|n| FilterOption::new(n, n))
        .collect()
}

/// Selected values first (in selection order), then the rest as returned.
///
/// A selected value the backend no longer offers is kept as an option of
/// its own so the user can still deselect it.
pub fn with_selected_first(options: Vec<FilterOption>, selected: &[String]) -> Vec<FilterOption> {
    let mut head: Vec<FilterOption> = selected
        .iter()
        .map(|value| {
            options
                .iter()
                .find(|o| &o.value == value)
                .cloned()
                .unwrap_or_else(|| FilterOption::new(value.as_str(), value.as_str()))
        })
        .collect();
    head.extend(options.into_iter().filter(|o| !selected.contains(&o.value)));
    head
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: Option<&str>, name: Option<&str>, count: Option<u64>) -> OptionRow {
        OptionRow {
            id: id.map(Into::into),
            name: name.map(Into::into),
            count,
        }
    }

    #[test]
    fn rows_map_to_options() {
        let options = to_options(&[
            row(Some("RT"), Some("Retail"), Some(12)),
            row(None, Some("Export"), None),
            row(Some("7"), None, Some(1)),
            row(None, Some("  "), Some(3)),
        ]);
        assert_eq!(
            options,
            vec![
                FilterOption::new("RT", "Retail").with_count(12),
                FilterOption::new("Export", "Export"),
                FilterOption::new("7", "7").with_count(1),
            ]
        );
    }

    #[test]
    fn plain_names() {
        let options = names_to_options(&["Alice", "", "Bob"]);
        assert_eq!(
            options.iter().map(|o| o.label.as_str()).collect::<Vec<_>>(),
            vec!["Alice", "Bob"]
        );
    }

    #[test]
    fn selected_values_lead() {
        let options = names_to_options(&["A", "B", "C"]);
        let ordered = with_selected_first(options, &["C".to_string(), "Z".to_string()]);
        let values: Vec<&str> = ordered.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["C", "Z", "A", "B"]);
    }
}
