//! Interactive behaviors for the landing page, compiled to WebAssembly.
//!
//! The page markup is static; this crate attaches listeners and visibility
//! watches to it and toggles marker classes, inline styles, and image
//! sources in response. Each behavior is a pure state machine that returns
//! [`action::Action`]s, plus a `bind` function that feeds it browser events
//! and applies those actions through [`dom::apply`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`modal`] | Dialog and backdrop open/close |
//! | [`scroll`] | Smooth scroll for the hero button and nav links |
//! | [`tabs`] | Exclusive tab/panel activation |
//! | [`hover`] | Nav link hover fade |
//! | [`sticky`] | Sticky nav bar once the header leaves view |
//! | [`reveal`] | One-shot section fade-in |
//! | [`lazy`] | Lazy image source swap |
//! | [`carousel`] | Slider with dots and arrow keys |
//! | [`action`] | `Action` / `Target` emitted by the behaviors |
//! | [`dom`] | Registry, listener/watch handles, action application |
//! | [`page`] | Mount order and handle ownership |
//! | [`config`] | Inline JSON configuration |
//! | [`consts`] | Selectors, marker classes, defaults |

pub mod action;
pub mod carousel;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod hover;
pub mod input;
pub mod lazy;
pub mod modal;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod sticky;
pub mod tabs;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::Config;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::DomError;
use crate::page::Page;

thread_local! {
    static MOUNTED: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Entry point run when the module loads.
///
/// # Errors
///
/// Throws when the page lacks an element a behavior requires.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let document = document()?;
    let config = read_config(&document);
    init_logging(&config);
    mount(&document, &config)?;
    Ok(())
}

/// Replace the mounted page using an explicit JSON configuration.
///
/// # Errors
///
/// Throws on invalid configuration or a failed mount.
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(json: &str) -> Result<(), JsValue> {
    let config = Config::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    log::set_max_level(config.level().unwrap_or(log::Level::Info).to_level_filter());
    mount(&document()?, &config)?;
    Ok(())
}

/// Detach every listener and watch.
#[wasm_bindgen]
pub fn unmount() {
    let previous = MOUNTED.with(|slot| slot.borrow_mut().take());
    if previous.is_some() {
        log::info!("page unmounted");
    }
}

fn mount(document: &Document, config: &Config) -> Result<(), DomError> {
    unmount();
    let page = Page::mount(document, config)?;
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

fn document() -> Result<Document, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)?.document().ok_or(DomError::NoDocument)
}

/// Config from the inline JSON block, or defaults when it is absent or invalid.
fn read_config(document: &Document) -> Config {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return Config::default();
    };
    match Config::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(&format!("ignoring page config: {err}").into());
            Config::default()
        }
    }
}

fn init_logging(config: &Config) {
    let level = config.level().unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
}
