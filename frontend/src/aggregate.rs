use std::collections::HashMap;

use crate::model::Transaction;

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Totals derived from the full transaction list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub income_total: f64,
    pub expense_total: f64,
    pub balance: f64,
    /// In the order each category first appears.
    pub category_totals: Vec<CategoryTotal>,
}

impl Summary {
    /// Share of income in all money moved, 0 for an empty ledger.
    ///
    /// Stays within `[0, 100]` even when a total has overflowed to infinity.
    pub fn income_percent(&self) -> f64 {
        let (income, expense) = (self.income_total, self.expense_total);
        if !(income > 0.0 || expense > 0.0) {
            return 0.0;
        }
        let ratio = match (income.is_infinite(), expense.is_infinite()) {
            (true, true) => 0.5,
            (true, false) => 1.0,
            (false, true) => 0.0,
            // halving keeps the sum finite for any two finite totals
            (false, false) => (income / 2.0) / (income / 2.0 + expense / 2.0),
        };
        (ratio * 100.0).clamp(0.0, 100.0)
    }

    pub fn max_category_amount(&self) -> f64 {
        self.category_totals
            .iter()
            .map(|c| c.amount)
            .fold(0.0, f64::max)
    }
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income_total = 0.0;
    let mut expense_total = 0.0;
    let mut category_totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for tx in transactions {
        if tx.is_income() {
            income_total += tx.amount;
        } else {
            expense_total += tx.amount;
        }

        match positions.get(tx.category.as_str()) {
            Some(&idx) => category_totals[idx].amount += tx.amount,
            None => {
                positions.insert(tx.category.as_str(), category_totals.len());
                category_totals.push(CategoryTotal {
                    category: tx.category.clone(),
                    amount: tx.amount,
                });
            }
        }
    }

    Summary {
        income_total,
        expense_total,
        balance: income_total - expense_total,
        category_totals,
    }
}
