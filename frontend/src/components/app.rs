use tracing::{error, info, warn};
use yew::prelude::*;

use super::dashboard::Dashboard;
use super::{BrowserLedger, LedgerHandle};
use crate::config::{AppConfig, Settings, Theme};
use crate::error::Result;
use crate::identity::{alert, AuthStatus, Gate, IdentityWidget};
use crate::storage::{browser_or_memory, LedgerStorage};

fn open_ledger() -> LedgerHandle {
    let storage = LedgerStorage::new(browser_or_memory(), &AppConfig::default());
    LedgerHandle::new(BrowserLedger::open(storage))
}

fn apply_theme(theme: Theme) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        if let Err(err) = body.class_list().toggle_with_force("dark", theme.is_dark()) {
            warn!(?err, "could not switch theme class");
        }
    }
}

fn with_widget(action: &'static str, run: impl FnOnce(&IdentityWidget) -> Result<()>) {
    if let Err(err) = IdentityWidget::detect().and_then(|widget| run(&widget)) {
        error!(error = %err, action, "identity widget call failed");
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let ledger = use_state(open_ledger);
    let settings = use_state({
        let ledger = (*ledger).clone();
        move || ledger.borrow().storage().load_settings()
    });
    let auth_status = use_state(|| AuthStatus::Checking);

    {
        let auth_status = auth_status.clone();
        use_effect_with_deps(
            move |_| {
                let on_change = {
                    let auth_status = auth_status.clone();
                    Callback::from(move |status: AuthStatus| auth_status.set(status))
                };
                let subscription = IdentityWidget::detect().and_then(|widget| {
                    let subscription = widget.subscribe(on_change)?;
                    widget.init()?;
                    Ok(subscription)
                });
                let subscription = match subscription {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        error!(error = %err, "identity widget failed to start");
                        auth_status.set(AuthStatus::Unavailable(err.to_string()));
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            |status: &AuthStatus| {
                info!(gate = ?status.gate(), "auth status changed");
                if let AuthStatus::Unavailable(reason) = status {
                    alert(&format!(
                        "Sign-in is unavailable, so the ledger cannot be opened.\n{}",
                        reason
                    ));
                }
                || ()
            },
            (*auth_status).clone(),
        );
    }

    use_effect_with_deps(
        |theme: &Theme| {
            apply_theme(*theme);
            || ()
        },
        settings.theme,
    );

    let persist_settings = {
        let settings = settings.clone();
        let ledger = ledger.clone();
        Callback::from(move |next: Settings| {
            if let Err(err) = ledger.borrow().storage().save_settings(&next) {
                warn!(error = %err, "could not persist settings");
            }
            settings.set(next);
        })
    };

    let on_toggle_theme = {
        let settings = settings.clone();
        let persist_settings = persist_settings.clone();
        Callback::from(move |_: MouseEvent| {
            let next = settings.with_theme(settings.theme.toggled());
            info!(theme = ?next.theme, "theme changed");
            persist_settings.emit(next);
        })
    };

    let on_select_currency = {
        let settings = settings.clone();
        Callback::from(move |code: String| {
            let next = settings.with_currency(&code);
            info!(currency = %code, "currency changed");
            persist_settings.emit(next);
        })
    };

    let on_sign_in = Callback::from(|_: MouseEvent| with_widget("open", |w| w.open()));
    let on_sign_out = Callback::from(|_: MouseEvent| with_widget("logout", |w| w.logout()));

    match auth_status.gate() {
        Gate::Loading => html! {
            <div class="gate gate-loading">{"Checking session..."}</div>
        },
        Gate::Inert => html! {},
        Gate::SignIn => html! {
            <AuthScreen on_sign_in={on_sign_in} />
        },
        Gate::App => {
            let email = auth_status
                .user()
                .and_then(|user| user.email.clone())
                .unwrap_or_default();
            html! {
                <ContextProvider<Settings> context={(*settings).clone()}>
                    <Dashboard
                        ledger={(*ledger).clone()}
                        email={email}
                        on_toggle_theme={on_toggle_theme}
                        on_select_currency={on_select_currency}
                        on_sign_out={on_sign_out}
                    />
                </ContextProvider<Settings>>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AuthScreenProps {
    on_sign_in: Callback<MouseEvent>,
}

#[function_component(AuthScreen)]
fn auth_screen(props: &AuthScreenProps) -> Html {
    html! {
        <div class="gate gate-sign-in">
            <div class="card">
                <h1>{"Pocket Ledger"}</h1>
                <p class="muted">{"Sign in to track your income and expenses."}</p>
                <button class="primary" onclick={props.on_sign_in.clone()}>{"Sign in"}</button>
            </div>
        </div>
    }
}
