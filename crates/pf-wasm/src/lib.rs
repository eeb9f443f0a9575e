//! WebAssembly bindings for PatternFilter
//!
//! Exposes the engine to JavaScript as the `EngineCore` class. This layer
//! only validates argument types and converts results; all matching happens
//! in `pf-core`.

use wasm_bindgen::prelude::*;
use pf_core::{FilterError, MatchResult, MatchStrategy, PatternFilter};

const STRING_EXPECTED: &str = "String expected";

#[wasm_bindgen]
pub struct EngineCore {
    filter: PatternFilter,
}

#[wasm_bindgen]
impl EngineCore {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EngineCore {
        init_logging();
        EngineCore {
            filter: PatternFilter::new(),
        }
    }

    /// Create an engine pinned to one strategy: "auto", "naive" or "automaton".
    #[wasm_bindgen(js_name = withStrategy)]
    pub fn with_strategy(name: &str) -> Result<EngineCore, JsValue> {
        let strategy = MatchStrategy::from_name(name)
            .ok_or_else(|| type_error(FilterError::InvalidArgument("Unknown strategy")))?;
        init_logging();
        Ok(EngineCore {
            filter: PatternFilter::with_strategy(strategy),
        })
    }

    #[wasm_bindgen(js_name = addBlockPattern)]
    pub fn add_block_pattern(&self, pattern: JsValue) -> Result<(), JsValue> {
        let pattern = expect_string(&pattern)?;
        self.filter.add_pattern(pattern);
        Ok(())
    }

    #[wasm_bindgen(js_name = removeBlockPattern)]
    pub fn remove_block_pattern(&self, pattern: JsValue) -> Result<u32, JsValue> {
        let pattern = expect_string(&pattern)?;
        Ok(self.filter.remove_pattern(pattern) as u32)
    }

    pub fn clear(&self) {
        self.filter.clear();
    }

    #[wasm_bindgen(js_name = checkUrl)]
    pub fn check_url(&self, url: JsValue) -> Result<JsValue, JsValue> {
        let url = expect_string(&url)?;
        Ok(result_to_js(&self.filter.check_url(url)))
    }

    #[wasm_bindgen(js_name = patternCount)]
    pub fn pattern_count(&self) -> u32 {
        self.filter.len() as u32
    }
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Forwards engine log records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&message),
            _ => web_sys::console::warn_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger once per module instance.
fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

fn expect_string(value: &JsValue) -> Result<String, JsValue> {
    value
        .as_string()
        .ok_or_else(|| type_error(FilterError::InvalidArgument(STRING_EXPECTED)))
}

fn type_error(err: FilterError) -> JsValue {
    js_sys::TypeError::new(&err.to_string()).into()
}

fn result_to_js(result: &MatchResult) -> JsValue {
    let js_result = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&js_result, &"blocked".into(), &JsValue::from(result.blocked));

    if let (Some(pattern), Some(reason)) = (&result.matched_pattern, result.reason()) {
        let _ = js_sys::Reflect::set(&js_result, &"reason".into(), &JsValue::from_str(&reason));
        let _ = js_sys::Reflect::set(
            &js_result,
            &"matchedPattern".into(),
            &JsValue::from_str(&pattern.to_string()),
        );
    }

    js_result.into()
}
