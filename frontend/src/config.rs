use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_core::config::{count_or, log_fallbacks, OptionFields};
use storefront_core::{ConfigError, DispatchConfig, DispatchOptions};

use crate::utils::readiness::ReadinessPoll;

/// Fallback ids used by older theme templates.
pub const FALLBACK_COUNTDOWN_ID: &str = "ddw-countdown";
pub const FALLBACK_ESTIMATE_ID: &str = "ddw-estimate";

/// Ids of the elements the dispatch widget writes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTargets {
    pub countdown_id: String,
    pub estimate_id: String,
    pub dispatch_date_id: String,
    pub timer_delivery_estimate_id: String,
    pub estimate_accordion_id: String,
    pub tracked_note_id: String,
    pub express_date_id: String,
}

impl Default for RenderTargets {
    fn default() -> Self {
        Self {
            countdown_id: "express-timer".into(),
            estimate_id: "standard-delivery-estimate".into(),
            dispatch_date_id: "dispatch-date".into(),
            timer_delivery_estimate_id: "timer-delivery-estimate".into(),
            estimate_accordion_id: "ddw-estimate-accordion".into(),
            tracked_note_id: "ddw-tracked-note".into(),
            express_date_id: "ddw-express-date".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetOptions {
    pub dispatch: DispatchConfig,
    pub targets: RenderTargets,
    pub poll: ReadinessPoll,
}

impl WidgetOptions {
    pub fn resolve(value: &Value) -> (Self, Vec<ConfigError>) {
        let (dispatch_options, mut errors) = DispatchOptions::from_value(value);
        let (dispatch, dispatch_errors) = DispatchConfig::resolve(&dispatch_options);
        errors.extend(dispatch_errors);

        let mut fields = match OptionFields::from_value(value) {
            Ok(fields) => fields,
            // already reported by DispatchOptions::from_value
            Err(_) => return (Self::default(), errors),
        };

        let defaults = RenderTargets::default();
        let mut id = |key: &'static str, default: String| -> String {
            fields
                .get::<String>(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
        };
        let targets = RenderTargets {
            countdown_id: id("countdownId", defaults.countdown_id),
            estimate_id: id("estimateId", defaults.estimate_id),
            dispatch_date_id: id("dispatchDateId", defaults.dispatch_date_id),
            timer_delivery_estimate_id: id(
                "timerDeliveryEstimateId",
                defaults.timer_delivery_estimate_id,
            ),
            estimate_accordion_id: id("estimateAccordionId", defaults.estimate_accordion_id),
            tracked_note_id: id("trackedNoteId", defaults.tracked_note_id),
            express_date_id: id("expressDateId", defaults.express_date_id),
        };

        let interval = fields.get::<f64>("pollIntervalMs");
        let attempts = fields.get::<f64>("pollMaxAttempts");
        errors.extend(fields.into_errors());

        let poll = ReadinessPoll {
            interval_ms: count_or(
                interval,
                "pollIntervalMs",
                ReadinessPoll::DEFAULT_INTERVAL_MS,
                &mut errors,
            ),
            max_attempts: count_or(
                attempts,
                "pollMaxAttempts",
                ReadinessPoll::DEFAULT_MAX_ATTEMPTS,
                &mut errors,
            ),
        };

        (
            Self {
                dispatch,
                targets,
                poll,
            },
            errors,
        )
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;
    use wasm_bindgen::JsValue;

    /// Optional page global: `window.__DISPATCH_TIMER_CONFIG = { courierMin: 3, ... }`
    const GLOBAL_CONFIG_KEY: &str = "__DISPATCH_TIMER_CONFIG";

    fn get_from_window_config() -> Option<JsValue> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &GLOBAL_CONFIG_KEY.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        Some(any)
    }

    fn js_to_json(value: &JsValue) -> Value {
        js_sys::JSON::stringify(value)
            .ok()
            .and_then(|text| text.as_string())
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or(Value::Null)
    }

    /// Constructor options win; otherwise the page global is used.
    pub fn load(options: &JsValue) -> WidgetOptions {
        let raw = if options.is_undefined() || options.is_null() {
            get_from_window_config()
        } else {
            Some(options.clone())
        };
        let value = raw.as_ref().map(js_to_json).unwrap_or(Value::Null);

        let (resolved, errors) = WidgetOptions::resolve(&value);
        log_fallbacks(&errors);
        resolved
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::load;
