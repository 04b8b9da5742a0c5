use serde::{Deserialize, Serialize};

/// Stock position of one item in one warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDto {
    pub item_code: String,
    pub item_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub warehouse: Option<String>,
    #[serde(default)]
    pub qty_on_hand: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default)]
    pub reorder_level: Option<f64>,
}

impl InventoryItemDto {
    pub fn stock_value(&self) -> f64 {
        self.qty_on_hand * self.unit_cost
    }

    pub fn needs_reorder(&self) -> bool {
        self.reorder_level
            .is_some_and(|level| self.qty_on_hand <= level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_value_and_reorder() {
        let json = r#"{"itemCode": "SKU-1", "itemName": "Cable", "qtyOnHand": 4, "unitCost": 2.5, "reorderLevel": 5}"#;
        let item: InventoryItemDto = serde_json::from_str(json).unwrap();
        assert_eq!(item.stock_value(), 10.0);
        assert!(item.needs_reorder());

        let without_level = InventoryItemDto {
            reorder_level: None,
            ..item
        };
        assert!(!without_level.needs_reorder());
    }
}
