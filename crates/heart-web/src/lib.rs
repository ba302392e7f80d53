#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod overlay;
mod session;
mod snow;
mod tiles;
mod timers;

use constants::{CONFIRM_BUTTON_ID, POPUP_LAYER_ID};
use session::StageSession;
use timers::WindowScheduler;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let popup_layer = dom::element_by_id(&document, POPUP_LAYER_ID)?;

    // At most one stage at a time; a new confirm tears the previous one down.
    let current: Rc<RefCell<Option<StageSession>>> = Rc::new(RefCell::new(None));
    let doc = document.clone();
    dom::add_click_listener(&document, CONFIRM_BUTTON_ID, move || {
        overlay::hide(&doc);
        audio::play_from_start(&doc);

        if let Some(previous) = current.borrow_mut().take() {
            previous.teardown();
        }

        let doc_close = doc.clone();
        match StageSession::start(&doc, popup_layer.clone(), move || overlay::show(&doc_close)) {
            Ok(session) => {
                *current.borrow_mut() = Some(session);
                if let Err(e) = snow::start_snowfall(&doc, WindowScheduler) {
                    log::error!("[snow] start error: {:?}", e);
                }
            }
            Err(e) => log::error!("[stage] start error: {:?}", e),
        }
    });
    Ok(())
}
