//! Row-level projections the list and breakdown components render verbatim.

use crate::aggregate::Summary;
use crate::chart::category_bars;
use crate::config::AppConfig;
use crate::format::format_currency;
use crate::model::Transaction;

pub const EMPTY_LIST_MESSAGE: &str = "No transactions yet.";
pub const EMPTY_BREAKDOWN_MESSAGE: &str = "Add a transaction to see the breakdown.";

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    /// Position in the ledger; the row's delete control sends this.
    pub index: usize,
    pub class: &'static str,
    pub symbol: &'static str,
    pub amount: String,
    pub description: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub class: &'static str,
    pub amount: String,
    pub bar_style: String,
}

pub fn transaction_rows(transactions: &[Transaction], symbol: &str) -> Vec<TransactionRow> {
    transactions
        .iter()
        .enumerate()
        .map(|(index, tx)| {
            let flow = tx.flow();
            TransactionRow {
                index,
                class: flow.class(),
                symbol: flow.symbol(),
                amount: format_currency(tx.amount, symbol),
                description: tx.description.clone(),
                category: format!("({})", tx.category),
            }
        })
        .collect()
}

pub fn category_rows(summary: &Summary, config: &AppConfig, symbol: &str) -> Vec<CategoryRow> {
    category_bars(summary, config)
        .into_iter()
        .map(|bar| CategoryRow {
            class: bar.flow.class(),
            amount: format_currency(bar.amount, symbol),
            bar_style: format!("width: {}%", bar.width_percent),
            category: bar.category,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::summarize;

    fn ledger() -> Vec<Transaction> {
        vec![
            Transaction::new(50.0, "Lunch", "expense"),
            Transaction::new(200.0, "Salary", "income"),
            Transaction::new(1250.5, "", "rent"),
        ]
    }

    #[test]
    fn one_row_per_transaction_tagged_by_flow() {
        let rows = transaction_rows(&ledger(), "₹");
        assert_eq!(rows.len(), 3);
        let classes: Vec<_> = rows.iter().map(|r| r.class).collect();
        assert_eq!(classes, ["expense", "income", "expense"]);
        assert_eq!(rows[1].symbol, "➕");
        assert_eq!(rows[0].symbol, "➖");
        assert_eq!(rows[2].amount, "₹ 1,250.50");
        assert_eq!(rows[0].description, "Lunch");
        assert_eq!(rows[0].category, "(expense)");
    }

    #[test]
    fn delete_controls_carry_their_position() {
        let rows = transaction_rows(&ledger(), "₹");
        let indices: Vec<_> = rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn rows_reindex_after_removal() {
        let mut list = ledger();
        list.remove(0);
        let rows = transaction_rows(&list, "₹");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].description, "Salary");
    }

    #[test]
    fn projection_is_idempotent() {
        let list = ledger();
        assert_eq!(transaction_rows(&list, "$"), transaction_rows(&list, "$"));
        let summary = summarize(&list);
        let config = AppConfig::default();
        assert_eq!(
            category_rows(&summary, &config, "$"),
            category_rows(&summary, &config, "$")
        );
    }

    #[test]
    fn empty_ledger_projects_no_rows() {
        assert!(transaction_rows(&[], "₹").is_empty());
        assert!(category_rows(&summarize(&[]), &AppConfig::default(), "₹").is_empty());
    }

    #[test]
    fn category_rows_label_and_scale() {
        let summary = summarize(&ledger());
        let rows = category_rows(&summary, &AppConfig::default(), "₹");
        let names: Vec<_> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, ["expense", "income", "rent"]);
        assert_eq!(rows[1].class, "income");
        assert_eq!(rows[1].amount, "₹ 200.00");
        assert_eq!(rows[2].bar_style, "width: 100%");
        assert_eq!(rows[0].bar_style, "width: 5%");
    }
}
