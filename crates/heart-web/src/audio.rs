use crate::constants::BG_MUSIC_ID;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Rewind the background track and start it. Browsers may refuse playback
/// without a user gesture; that is logged and otherwise ignored.
pub fn play_from_start(document: &web::Document) {
    let Some(el) = document.get_element_by_id(BG_MUSIC_ID) else {
        log::warn!("[audio] missing #{}", BG_MUSIC_ID);
        return;
    };
    let audio = match el.dyn_into::<web::HtmlAudioElement>() {
        Ok(a) => a,
        Err(_) => {
            log::warn!("[audio] #{} is not an <audio> element", BG_MUSIC_ID);
            return;
        }
    };
    audio.set_current_time(0.0);
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] autoplay blocked, waiting for interaction: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[audio] play error: {:?}", e),
    }
}
