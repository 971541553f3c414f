use serde::{Deserialize, Serialize};

/// The only category tag counted as money coming in.
pub const INCOME_CATEGORY: &str = "income";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub amount: f64,
    pub description: String,
    pub category: String,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.flow() == Flow::Inflow
    }

    pub fn flow(&self) -> Flow {
        Flow::of_category(&self.category)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Inflow,
    Outflow,
}

impl Flow {
    pub fn of_category(category: &str) -> Self {
        if category == INCOME_CATEGORY {
            Flow::Inflow
        } else {
            Flow::Outflow
        }
    }

    /// CSS class used for list rows and chart segments.
    pub fn class(self) -> &'static str {
        match self {
            Flow::Inflow => "income",
            Flow::Outflow => "expense",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Flow::Inflow => "➕",
            Flow::Outflow => "➖",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_income_tag_is_inflow() {
        assert_eq!(Transaction::new(1.0, "", "income").flow(), Flow::Inflow);
        assert_eq!(Transaction::new(1.0, "", "Income").flow(), Flow::Outflow);
        assert_eq!(Transaction::new(1.0, "", "food").flow(), Flow::Outflow);
        assert_eq!(Transaction::new(1.0, "", "").flow(), Flow::Outflow);
        assert_eq!(Flow::of_category(INCOME_CATEGORY), Flow::Inflow);
        assert!(!Transaction::new(1.0, "", "income ").is_income());
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let tx = Transaction::new(12.5, "Coffee", "food");
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "amount": 12.5, "description": "Coffee", "category": "food" })
        );
    }
}
