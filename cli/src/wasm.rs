// WebAssembly bindings for the voice calculator
use crate::config::Config;
use crate::engine::{self, Calculator};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct VoiceCalculatorWasm {
    calculator: Calculator,
}

impl Default for VoiceCalculatorWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl VoiceCalculatorWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Build a calculator from TOML configuration text (only `[format]` is used)
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<VoiceCalculatorWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
        Ok(Self {
            calculator: config.calculator(),
        })
    }

    /// Interpret one utterance
    /// Returns JSON string of the calculation result
    #[wasm_bindgen]
    pub fn process(&self, text: &str) -> Result<String, JsValue> {
        let result = self.calculator.process(text);
        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Interpret one utterance into a plain JS object
    /// `{ input, parsed, result, category, error? }`
    #[wasm_bindgen]
    pub fn process_to_object(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.calculator.process(text);
        let object = Object::new();
        Reflect::set(&object, &"input".into(), &result.input.as_str().into())?;
        Reflect::set(&object, &"parsed".into(), &result.parsed.as_str().into())?;
        Reflect::set(&object, &"result".into(), &result.result.as_str().into())?;
        Reflect::set(&object, &"category".into(), &result.category.as_str().into())?;
        if let Some(error) = &result.error {
            Reflect::set(&object, &"error".into(), &error.as_str().into())?;
        }
        Ok(object.into())
    }

    /// Returns JSON string of the example catalog
    #[wasm_bindgen]
    pub fn examples(&self) -> Result<String, JsValue> {
        serde_json::to_string(&engine::example_commands())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize examples: {}", e)))
    }
}
