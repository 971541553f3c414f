use serde::{Deserialize, Serialize};

/// Static knobs for storage, logging and chart geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub transactions_key: &'static str,
    pub settings_key: &'static str,
    pub log_filter: &'static str,
    /// Height in pixels of a full summary bar.
    pub bar_track_height: f64,
    /// Summary bars never scale against less than this total.
    pub bar_scale_floor: f64,
    pub bar_min_height: f64,
    /// Percent width given to the smallest visible category bar.
    pub category_bar_min_width: f64,
    pub default_currency_symbol: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transactions_key: "transactions",
            settings_key: "settings",
            log_filter: "pocket_ledger=info",
            bar_track_height: 180.0,
            bar_scale_floor: 100.0,
            bar_min_height: 4.0,
            category_bar_min_width: 5.0,
            default_currency_symbol: "₹",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button: the sun offers a way back to light.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Currencies offered in the header selector, as (code, symbol).
pub const CURRENCIES: [(&str, &str); 5] = [
    ("INR", "₹"),
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
];

pub fn currency_symbol_for(code: &str) -> &'static str {
    CURRENCIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(CURRENCIES[0].1)
}

/// User preferences persisted next to the ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_theme")]
    pub theme: Theme,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_theme() -> Theme {
    Theme::Light
}

fn default_currency_symbol() -> String {
    AppConfig::default().default_currency_symbol.to_string()
}

impl Settings {
    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }

    pub fn with_currency(&self, code: &str) -> Self {
        Self {
            currency_symbol: currency_symbol_for(code).to_string(),
            ..self.clone()
        }
    }

    /// Code of the selected currency, if it is one of [`CURRENCIES`].
    pub fn currency_code(&self) -> Option<&'static str> {
        CURRENCIES
            .iter()
            .find(|(_, symbol)| *symbol == self.currency_symbol)
            .map(|(code, _)| *code)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.currency_symbol, "₹");
    }

    #[test]
    fn currency_choice_maps_to_symbol() {
        let settings = Settings::default();
        assert_eq!(settings.currency_code(), Some("INR"));

        let dollars = settings.with_currency("USD");
        assert_eq!(dollars.currency_symbol, "$");
        assert_eq!(dollars.currency_code(), Some("USD"));
        assert_eq!(dollars.theme, settings.theme);

        assert_eq!(settings.with_currency("XYZ").currency_symbol, "₹");
        let custom = Settings {
            currency_symbol: "CHF".to_string(),
            ..Settings::default()
        };
        assert_eq!(custom.currency_code(), None);
    }

    #[test]
    fn default_config_matches_chart_geometry() {
        let config = AppConfig::default();
        assert_eq!(config.transactions_key, "transactions");
        assert_eq!(config.bar_track_height, 180.0);
        assert_eq!(config.bar_scale_floor, 100.0);
    }
}
