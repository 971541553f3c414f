use yew::prelude::*;

use crate::model::Transaction;
use crate::view::{transaction_rows, EMPTY_LIST_MESSAGE};

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
    /// Receives the position of the row to delete.
    pub on_delete: Callback<usize>,
    pub currency_symbol: String,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    let rows = transaction_rows(&props.transactions, &props.currency_symbol);
    html! {
        <section class="card">
            <h3>{"Transactions"}</h3>
            if rows.is_empty() {
                <p class="muted">{ EMPTY_LIST_MESSAGE }</p>
            } else {
                <ul id="transaction-list">
                    { for rows.into_iter().map(|row| {
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let index = row.index;
                            Callback::from(move |_: MouseEvent| on_delete.emit(index))
                        };
                        html! {
                            <li key={row.index} class={row.class}>
                                <div class="transaction-left">
                                    <span class="symbol">{ row.symbol }</span>
                                    <span class="amount">{ row.amount }</span>
                                    <span class="desc">{ row.description }</span>
                                </div>
                                <div class="transaction-right">
                                    <span class="category">{ row.category }</span>
                                    <button class="delete-btn" aria-label="Delete" onclick={on_delete}>{"❌"}</button>
                                </div>
                            </li>
                        }
                    }) }
                </ul>
            }
        </section>
    }
}
