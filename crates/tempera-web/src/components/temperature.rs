use leptos::prelude::*;
use tempera::{Delta, RangeClassifier, RangeConfig, TemperatureCell};

/// Unit suffix shown after the temperature.
pub const UNIT_SYMBOL: &str = "℉";

/// Text rendered for a temperature, e.g. `68℉`.
pub fn display_text(temperature: i64) -> String {
    format!("{temperature}{UNIT_SYMBOL}")
}

/// The two buttons of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increase,
    Decrease,
}

impl Action {
    pub fn delta(self) -> Delta {
        match self {
            Action::Increase => Delta::UP,
            Action::Decrease => Delta::DOWN,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Increase => "Up",
            Action::Decrease => "Down",
        }
    }
}

fn build_classifier(config: &RangeConfig) -> RangeClassifier {
    RangeClassifier::new(config).unwrap_or_else(|e| {
        log::error!("invalid threshold table, using the standard one: {e}");
        RangeClassifier::default()
    })
}

/// A temperature readout with "Down" and "Up" buttons.
///
/// The readout carries the CSS class of its current range (`very-hot`,
/// `hot`, `warm`, `mild` or `cool`).
#[component]
pub fn Temperature(#[prop(optional)] config: Option<RangeConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let classifier = build_classifier(&config);
    let temperature = RwSignal::new(TemperatureCell::from_config(&config));

    // Applied to whatever the cell holds when the update runs, never to a
    // value read during an earlier render.
    let change_temp = move |action: Action| {
        temperature.update(|cell| {
            cell.apply_delta(action.delta());
        });
    };

    let temp_range = move || {
        classifier
            .classify(temperature.with(TemperatureCell::get))
            .as_str()
    };

    view! {
        <div class="Temperature">
            <button on:click=move |_| change_temp(Action::Decrease)>
                {Action::Decrease.label()}
            </button>
            <span class=temp_range>
                {move || display_text(temperature.with(TemperatureCell::get))}
            </span>
            <button on:click=move |_| change_temp(Action::Increase)>
                {Action::Increase.label()}
            </button>
        </div>
    }
}
