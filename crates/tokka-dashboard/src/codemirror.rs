//! CodeMirror 5 binding
//!
//! The widget is loaded as a global script by `index.html`. It is created
//! lazily from the `config-editor` textarea the first time the dashboard
//! writes to it, so a missing textarea or script only disables the editor.

use std::cell::OnceCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::{ids, RenderError};
use crate::editor::EditorSurface;

/// Delay before a layout refresh, letting the browser apply pending
/// visibility changes first
pub const REFRESH_DELAY_MS: u32 = 50;

/// Global the CodeMirror script defines
const CODEMIRROR_GLOBAL: &str = "CodeMirror";

// Imports catch JS exceptions; they surface as `RenderError`.
#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    type CodeMirrorInstance;

    #[wasm_bindgen(catch, js_namespace = CodeMirror, js_name = fromTextArea)]
    fn from_text_area(
        textarea: &web_sys::HtmlTextAreaElement,
        options: &JsValue,
    ) -> Result<CodeMirrorInstance, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setValue)]
    fn set_value(this: &CodeMirrorInstance, text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = getValue)]
    fn get_value(this: &CodeMirrorInstance) -> Result<String, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setSize)]
    fn set_size(this: &CodeMirrorInstance, width: &str, height: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    fn refresh(this: &CodeMirrorInstance) -> Result<(), JsValue>;
}

/// [`EditorSurface`] backed by a CodeMirror instance
#[derive(Debug, Default)]
pub struct CodeMirrorEditor {
    instance: OnceCell<CodeMirrorInstance>,
}

impl CodeMirrorEditor {
    pub fn new() -> Self {
        Self::default()
    }

    fn instance(&self) -> Result<&CodeMirrorInstance, RenderError> {
        if let Some(instance) = self.instance.get() {
            return Ok(instance);
        }
        let created = create_instance()?;
        Ok(self.instance.get_or_init(|| created))
    }
}

fn create_instance() -> Result<CodeMirrorInstance, RenderError> {
    let loaded = js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(CODEMIRROR_GLOBAL))
        .map_err(RenderError::js)?;
    if !loaded {
        return Err(RenderError::Dom("CodeMirror script not loaded".to_string()));
    }

    let textarea = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ids::CONFIG_EDITOR))
        .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        .ok_or_else(|| RenderError::MissingElement(ids::CONFIG_EDITOR.to_string()))?;

    let options = js_sys::Object::new();
    let set = |key: &str, value: JsValue| {
        js_sys::Reflect::set(&options, &JsValue::from_str(key), &value)
            .map(|_| ())
            .map_err(RenderError::js)
    };
    set("mode", "application/json".into())?;
    set("theme", "monokai".into())?;
    set("lineNumbers", true.into())?;
    set("indentUnit", JsValue::from_f64(2.0))?;
    set("tabSize", JsValue::from_f64(2.0))?;
    set("matchBrackets", true.into())?;
    set("autoCloseBrackets", true.into())?;

    from_text_area(&textarea, &options).map_err(RenderError::js)
}

impl EditorSurface for CodeMirrorEditor {
    fn set_value(&mut self, text: &str) -> Result<(), RenderError> {
        self.instance()?.set_value(text).map_err(RenderError::js)
    }

    fn value(&self) -> Result<String, RenderError> {
        self.instance()?.get_value().map_err(RenderError::js)
    }

    fn set_size(&mut self, width: &str, height: &str) -> Result<(), RenderError> {
        self.instance()?.set_size(width, height).map_err(RenderError::js)
    }

    fn refresh(&mut self) -> Result<(), RenderError> {
        let instance = self.instance()?.clone();
        Timeout::new(REFRESH_DELAY_MS, move || {
            if let Err(e) = instance.refresh() {
                log::warn!("config editor refresh failed: {:?}", e);
            }
        })
        .forget();
        Ok(())
    }
}
