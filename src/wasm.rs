//! WASM bindings for the trace-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Structured results are JSON strings; failures come back as
//! `{"error": {...}}` and are also logged to the browser console.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::case::{CaseData, NodeCategory};
use crate::layout::LayoutConfig;
use crate::output::{DetailOutput, GraphOutput, LoadingOutput};
use crate::respond::{ResponseProvider, ScriptedResponder, FALLBACK_RESPONSE};
use crate::view::{CaseView, CaseViewConfig, EntryForm, LoadingProgress, ViewError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

const SERIALIZE_FAILED: &str = r#"{"error":{"kind":"output","message":"serialization failed"}}"#;

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| SERIALIZE_FAILED.to_string())
}

fn error_json(kind: &str, message: String) -> String {
    console_error(&format!("{kind} error: {message}"));
    to_json(&GraphOutput::error(kind, message))
}

fn view_error_json(e: ViewError) -> String {
    let kind = match e {
        ViewError::Case(_) | ViewError::NoOverlayOpen => "case",
        ViewError::Layout(_) => "layout",
    };
    error_json(kind, e.to_string())
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Lay out a case given as JSON (`{name, summary, nodes}`) with the default
/// layout constants.
#[wasm_bindgen]
pub fn layout_case_json(case_json: &str) -> String {
    let data: CaseData = match serde_json::from_str(case_json) {
        Ok(data) => data,
        Err(e) => return error_json("input", e.to_string()),
    };
    match CaseView::new(&data, &LayoutConfig::default()) {
        Ok(view) => to_json(&view.graph_output()),
        Err(e) => view_error_json(e),
    }
}

/// The demo case for a case-view query string such as `?name=X&db=1`.
#[wasm_bindgen]
pub fn demo_case_json(query: &str) -> String {
    let config = match CaseViewConfig::from_query(query) {
        Ok(config) => config,
        Err(e) => return error_json("config", e.to_string()),
    };
    match CaseView::from_config(&config, &LayoutConfig::default()) {
        Ok(view) => to_json(&view.graph_output()),
        Err(e) => view_error_json(e),
    }
}

/// Validated case-view config read from `window.location.search`.
#[wasm_bindgen]
pub fn case_view_query_from_location() -> String {
    let search = match web_sys::window().map(|w| w.location().search()) {
        Some(Ok(search)) => search,
        Some(Err(e)) => return error_json("config", format!("cannot read location: {e:?}")),
        None => return error_json("config", "no window".to_string()),
    };
    match CaseViewConfig::from_query(&search) {
        Ok(config) => to_json(&config),
        Err(e) => error_json("config", e.to_string()),
    }
}

/// One scripted answer for a node category.
#[wasm_bindgen]
pub fn scripted_response(category: &str, query: &str) -> String {
    if category.parse::<NodeCategory>().is_err() {
        console_log(&format!("no scripted answers for category '{category}'"));
    }
    ScriptedResponder::demo()
        .respond(category, query)
        .unwrap_or_else(|_| FALLBACK_RESPONSE.to_string())
}

/// Case-view URL for the entry form. `files_json` is a JSON array of file
/// names.
#[wasm_bindgen]
pub fn entry_url(case_name: &str, files_json: &str, database_enhanced: bool) -> String {
    let files: Vec<String> = match serde_json::from_str(files_json) {
        Ok(files) => files,
        Err(e) => return error_json("input", e.to_string()),
    };
    let form = EntryForm {
        case_name: case_name.to_string(),
        files,
        database_enhanced,
    };
    match form.build_url() {
        Ok(url) => url,
        Err(e) => error_json("config", e.to_string()),
    }
}

/// Loading-screen state after `elapsed_ms` of animation.
#[wasm_bindgen]
pub fn loading_state(elapsed_ms: u32) -> String {
    let mut progress = LoadingProgress::new();
    progress.advance(u64::from(elapsed_ms));
    to_json(&LoadingOutput::from(&progress))
}

/// One open case page. Holds the detail overlay selection and the chat
/// transcripts between calls from the widget.
#[wasm_bindgen]
pub struct CaseSession {
    view: CaseView,
    responder: ScriptedResponder,
}

#[wasm_bindgen]
impl CaseSession {
    /// Demo case session for a case-view query string. Returns `undefined`
    /// on invalid input after logging the error.
    pub fn open(query: &str) -> Option<CaseSession> {
        let config = match CaseViewConfig::from_query(query) {
            Ok(config) => config,
            Err(e) => {
                console_error(&format!("config error: {e}"));
                return None;
            }
        };
        match CaseView::from_config(&config, &LayoutConfig::default()) {
            Ok(view) => Some(CaseSession {
                view,
                responder: ScriptedResponder::demo(),
            }),
            Err(e) => {
                console_error(&format!("case error: {e}"));
                None
            }
        }
    }

    pub fn graph(&self) -> String {
        to_json(&self.view.graph_output())
    }

    /// Open the overlay for `id` and return its content and transcript.
    #[wasm_bindgen(js_name = openDetails)]
    pub fn open_details(&mut self, id: &str) -> String {
        if let Err(e) = self.view.open_details(id) {
            return error_json("case", e.to_string());
        }
        self.details()
    }

    #[wasm_bindgen(js_name = closeDetails)]
    pub fn close_details(&mut self) {
        self.view.close_details();
    }

    /// Ask about the open node; returns the updated overlay.
    pub fn ask(&mut self, input: &str) -> String {
        if let Err(e) = self.view.ask(&mut self.responder, input) {
            return view_error_json(e);
        }
        self.details()
    }
}

impl CaseSession {
    fn details(&self) -> String {
        match self.view.selected() {
            Some(node) => to_json(&DetailOutput::new(node, self.view.chat(&node.id))),
            None => view_error_json(ViewError::NoOverlayOpen),
        }
    }
}
