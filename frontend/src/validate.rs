use crate::error::ValidationError;
use crate::model::Transaction;

/// Raw values from the entry form, before any checking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionDraft {
    pub amount: String,
    pub description: String,
    pub category: String,
}

impl TransactionDraft {
    pub fn new(
        amount: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// Accepts a draft whose amount is a finite number above zero.
///
/// Description and category are passed through as typed.
pub fn validate(draft: &TransactionDraft) -> Result<Transaction, ValidationError> {
    let amount = parse_amount(&draft.amount)?;
    Ok(Transaction::new(
        amount,
        draft.description.clone(),
        draft.category.clone(),
    ))
}

fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }
    let amount: f64 = text.parse().map_err(|_| ValidationError::NotANumber)?;
    // "inf" and "NaN" parse as f64 but are not amounts
    if !amount.is_finite() {
        return Err(ValidationError::NotANumber);
    }
    if amount <= 0.0 {
        return Err(ValidationError::NotPositive);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_trimmed_positive_amounts() {
        let tx = validate(&TransactionDraft::new("  50 ", "Lunch", "expense")).unwrap();
        assert_eq!(tx, Transaction::new(50.0, "Lunch", "expense"));

        let tx = validate(&TransactionDraft::new("0.01", "", "")).unwrap();
        assert_eq!(tx.amount, 0.01);
    }

    #[test]
    fn empty_amount_is_rejected() {
        assert_eq!(
            validate(&TransactionDraft::new("   ", "x", "income")),
            Err(ValidationError::EmptyAmount)
        );
    }

    #[test]
    fn non_numbers_are_rejected() {
        for text in ["abc", "12abc", "1,000", "inf", "NaN", "--5"] {
            assert_eq!(
                validate(&TransactionDraft::new(text, "", "expense")),
                Err(ValidationError::NotANumber),
                "{text}"
            );
        }
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        for text in ["0", "-0", "-5", "0.0"] {
            assert_eq!(
                validate(&TransactionDraft::new(text, "", "expense")),
                Err(ValidationError::NotPositive),
                "{text}"
            );
        }
    }

    #[test]
    fn description_and_category_are_not_checked() {
        let tx = validate(&TransactionDraft::new("3", "", "  weird tag ")).unwrap();
        assert_eq!(tx.description, "");
        assert_eq!(tx.category, "  weird tag ");
    }
}
