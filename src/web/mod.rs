//! Browser host: wasm entry points and DOM wiring.
//!
//! **Startup**: [`start`] runs when the module is instantiated. It reads an
//! optional inline `<script type="application/toml" id="folio-options">`
//! block and mounts once the document has parsed. Pages that set
//! `autostart = false` mount later through [`start_with_options`].
//!
//! **Runtime**: one [`PageController`] is shared by every listener. Timers
//! and animation frames it requests are handed to the browser after each
//! event.

mod listeners;
mod page;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document};

pub use page::WebPage;

use crate::controller::PageController;
use crate::error::FolioError;
use crate::options::Options;
use crate::page::markup::OPTIONS_ID;

/// Module start hook.
///
/// # Errors
///
/// Fails only when there is no window or document to bind to.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    let page = WebPage::new()?;
    let options = inline_options(page.document());
    if !options.autostart {
        log::info!("autostart disabled, waiting for startWithOptions");
        return Ok(());
    }
    when_ready(page, options)?;
    Ok(())
}

/// Mount with options supplied as JSON. Missing fields keep their defaults.
///
/// # Errors
///
/// Fails when `json` does not parse or there is no document.
#[wasm_bindgen(js_name = startWithOptions)]
pub fn start_with_options(json: &str) -> Result<(), JsValue> {
    init_logging();
    let options = Options::from_json_str(json)?;
    let page = WebPage::new()?;
    when_ready(page, options)?;
    Ok(())
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialized when both entry points run.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn inline_options(document: &Document) -> Options {
    let Some(block) = document.get_element_by_id(OPTIONS_ID) else {
        return Options::default();
    };
    let text = block.text_content().unwrap_or_default();
    match Options::from_toml_str(&text) {
        Ok(options) => {
            log::debug!("using inline options from #{OPTIONS_ID}");
            options
        }
        Err(e) => {
            log::warn!("ignoring inline options: {e}");
            Options::default()
        }
    }
}

/// Mount now if the document has parsed, otherwise on `DOMContentLoaded`.
fn when_ready(page: WebPage, options: Options) -> Result<(), FolioError> {
    if page.document().ready_state() != "loading" {
        mount(page, options);
        return Ok(());
    }

    let document = page.document().clone();
    let callback = Closure::once_into_js(move || mount(page, options));
    let listen = AddEventListenerOptions::new();
    listen.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &listen,
    )?;
    Ok(())
}

fn mount(page: WebPage, options: Options) {
    let controller = Rc::new(RefCell::new(PageController::new(page, options)));
    listeners::bind(&controller);
    listeners::flush(&controller);
    log::info!("folio mounted");
}
