use yew::prelude::*;

use super::icons::icon_plus;
use crate::model::INCOME_CATEGORY;
use crate::validate::TransactionDraft;

const DEFAULT_CATEGORY: &str = "expense";
const SUGGESTED_CATEGORIES: [&str; 6] = [
    INCOME_CATEGORY,
    "expense",
    "food",
    "transport",
    "shopping",
    "bills",
];

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    /// Answers whether the draft was accepted.
    pub on_submit: Callback<TransactionDraft, bool>,
    pub error: Option<String>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let form_amount = use_state(|| "".to_string());
    let form_description = use_state(|| "".to_string());
    let form_category = use_state(|| DEFAULT_CATEGORY.to_string());

    let on_submit = {
        let form_amount = form_amount.clone();
        let form_description = form_description.clone();
        let form_category = form_category.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = TransactionDraft::new(
                (*form_amount).clone(),
                (*form_description).clone(),
                (*form_category).clone(),
            );
            if on_submit.emit(draft) {
                form_amount.set("".to_string());
                form_description.set("".to_string());
                form_category.set(DEFAULT_CATEGORY.to_string());
            }
        })
    };

    html! {
        <form class="card transaction-form" onsubmit={on_submit}>
            <input
                id="amount"
                placeholder="Amount"
                inputmode="decimal"
                value={(*form_amount).clone()}
                oninput={{
                    let form_amount = form_amount.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                            form_amount.set(input.value());
                        }
                    })
                }}
            />
            <input
                id="description"
                placeholder="Description"
                value={(*form_description).clone()}
                oninput={{
                    let form_description = form_description.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                            form_description.set(input.value());
                        }
                    })
                }}
            />
            <input
                id="category"
                list="category-options"
                placeholder="Category"
                value={(*form_category).clone()}
                oninput={{
                    let form_category = form_category.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                            form_category.set(input.value());
                        }
                    })
                }}
            />
            <datalist id="category-options">
                { for SUGGESTED_CATEGORIES.iter().map(|c| html! { <option value={*c} /> }) }
            </datalist>
            <button type="submit" class="primary">
                { icon_plus() }
                {"Add"}
            </button>
            if let Some(msg) = &props.error {
                <p class="form-error">{ msg.clone() }</p>
            }
        </form>
    }
}
