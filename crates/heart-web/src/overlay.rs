use crate::constants::{BACKDROP_HIDDEN_STYLE, BACKDROP_SHOWN_STYLE, START_BACKDROP_ID};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_BACKDROP_ID) {
        let _ = el.set_attribute("style", BACKDROP_SHOWN_STYLE);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_BACKDROP_ID) {
        let _ = el.set_attribute("style", BACKDROP_HIDDEN_STYLE);
    }
}
