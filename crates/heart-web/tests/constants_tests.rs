// Host-side tests for DOM hook constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_distinct() {
    let ids = [CONFIRM_BUTTON_ID, START_BACKDROP_ID, BG_MUSIC_ID, POPUP_LAYER_ID];
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn class_names_are_valid_css_identifiers() {
    for class in [
        STAGE_CLASS,
        INSTRUCTION_CLASS,
        CONTAINER_CLASS,
        HINT_CLASS,
        FLATTENED_CLASS,
        TILE_CLASS,
        VISIBLE_CLASS,
        SNOW_CONTAINER_CLASS,
        SNOWFLAKE_CLASS,
    ] {
        assert!(!class.is_empty());
        assert!(
            class.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
            "bad class {class}"
        );
    }
}

#[test]
fn density_attribute_is_a_data_attribute() {
    assert!(DENSITY_ATTR.starts_with("data-"));
}

#[test]
fn backdrop_styles_toggle_display() {
    assert!(BACKDROP_SHOWN_STYLE.contains("display:flex"));
    assert!(BACKDROP_HIDDEN_STYLE.contains("display:none"));
}

#[test]
fn px_formats_css_lengths() {
    assert_eq!(px(120.0), "120px");
    assert_eq!(px(12.5), "12.5px");
    assert_eq!(px(-3.0), "-3px");
}
