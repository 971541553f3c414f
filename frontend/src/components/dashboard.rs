use tracing::{error, warn};
use yew::prelude::*;

use super::charts::{CategoryBreakdown, PieChart, SummaryBars};
use super::icons::{icon_credit_card, icon_log_out, icon_trending_up, icon_wallet};
use super::transaction_form::TransactionForm;
use super::transaction_list::TransactionList;
use super::LedgerHandle;
use crate::aggregate::summarize;
use crate::config::{AppConfig, Settings, CURRENCIES};
use crate::error::LedgerError;
use crate::format::format_currency;
use crate::identity::alert;
use crate::model::Transaction;
use crate::validate::TransactionDraft;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub ledger: LedgerHandle,
    pub email: String,
    pub on_toggle_theme: Callback<MouseEvent>,
    /// Receives a currency code from [`CURRENCIES`].
    pub on_select_currency: Callback<String>,
    pub on_sign_out: Callback<MouseEvent>,
}

fn report_fatal(err: &LedgerError) {
    error!(error = %err, "ledger could not be saved");
    alert(&format!("Your change could not be saved: {}", err));
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let settings = use_context::<Settings>().unwrap_or_default();
    let config = use_memo(|_| AppConfig::default(), ());
    let transactions = use_state({
        let ledger = props.ledger.clone();
        move || ledger.borrow().list().to_vec()
    });
    let form_error = use_state(|| None::<String>);

    // Returns true when the draft was stored, so the form can reset.
    let on_submit = {
        let ledger = props.ledger.clone();
        let transactions = transactions.clone();
        let form_error = form_error.clone();
        Callback::from(move |draft: TransactionDraft| {
            let result = ledger.borrow_mut().submit(&draft);
            match result {
                Ok(_) => {
                    transactions.set(ledger.borrow().list().to_vec());
                    form_error.set(None);
                    true
                }
                Err(LedgerError::Validation(reason)) => {
                    form_error.set(Some(reason.to_string()));
                    false
                }
                Err(err) => {
                    report_fatal(&err);
                    false
                }
            }
        })
    };

    let on_delete = {
        let ledger = props.ledger.clone();
        let transactions = transactions.clone();
        Callback::from(move |index: usize| {
            let result = ledger.borrow_mut().remove_at(index);
            match result {
                Ok(_) => transactions.set(ledger.borrow().list().to_vec()),
                Err(err @ LedgerError::InvalidIndex { .. }) => {
                    warn!(error = %err, "ignoring stale delete");
                }
                Err(err) => report_fatal(&err),
            }
        })
    };

    let on_currency_change = {
        let on_select_currency = props.on_select_currency.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_select_currency.emit(select.value());
            }
        })
    };

    let list: &[Transaction] = &transactions;
    let summary = summarize(list);
    let symbol = settings.currency_symbol.clone();

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Pocket Ledger"}</h1>
                <div class="header-actions">
                    <span class="muted">{ props.email.clone() }</span>
                    <select class="currency-select" aria-label="Currency" onchange={on_currency_change}>
                        { for CURRENCIES.iter().map(|(code, symbol)| html! {
                            <option value={*code} selected={settings.currency_code() == Some(*code)}>
                                { format!("{} {}", symbol, code) }
                            </option>
                        }) }
                    </select>
                    <button class="icon-button" aria-label="Toggle theme" onclick={props.on_toggle_theme.clone()}>
                        { settings.theme.toggle_icon() }
                    </button>
                    <button class="icon-button" aria-label="Sign out" onclick={props.on_sign_out.clone()}>
                        { icon_log_out() }
                    </button>
                </div>
            </header>

            <main class="app-main">
                <section class="stats">
                    <StatCard title="Total Income" amount={summary.income_total} icon={StatIcon::TrendingUp} currency_symbol={symbol.clone()} />
                    <StatCard title="Total Expenses" amount={summary.expense_total} icon={StatIcon::CreditCard} currency_symbol={symbol.clone()} />
                    <StatCard title="Balance" amount={summary.balance} icon={StatIcon::Wallet} currency_symbol={symbol.clone()} />
                </section>

                <TransactionForm on_submit={on_submit} error={(*form_error).clone()} />

                <section class="charts">
                    <SummaryBars summary={summary.clone()} config={(*config).clone()} />
                    <PieChart income_percent={summary.income_percent()} />
                </section>

                <CategoryBreakdown summary={summary.clone()} config={(*config).clone()} currency_symbol={symbol.clone()} />

                <TransactionList transactions={(*transactions).clone()} on_delete={on_delete} currency_symbol={symbol} />
            </main>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    TrendingUp,
    CreditCard,
    Wallet,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    amount: f64,
    icon: StatIcon,
    currency_symbol: String,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <div>
                <p class="stat-title">{ props.title }</p>
                <h3 class="stat-amount">{ format_currency(props.amount, &props.currency_symbol) }</h3>
            </div>
            <div class="stat-icon">
                {
                    match props.icon {
                        StatIcon::TrendingUp => icon_trending_up(),
                        StatIcon::CreditCard => icon_credit_card(),
                        StatIcon::Wallet => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}
