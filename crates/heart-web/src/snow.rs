use crate::constants::{SNOWFLAKE_CLASS, SNOWFLAKE_GLYPH, SNOW_CONTAINER_CLASS};
use crate::dom;
use crate::timers::WindowScheduler;
use heart_core::content::{SnowBurst, SnowflakeSpec};
use heart_core::{Scheduler, SNOWFLAKE_COUNT, SNOWFLAKE_LIFETIME_MS, SNOWFLAKE_SPAWN_INTERVAL_MS};
use rand::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Drop a short burst of snowflakes over the page, one every spawn interval.
/// The burst's layer is removed with its last flake.
pub fn start_snowfall(document: &web::Document, scheduler: WindowScheduler) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let layer = dom::append_div(document, &body, SNOW_CONTAINER_CLASS, None)?;
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    let burst = Rc::new(Cell::new(SnowBurst::new(SNOWFLAKE_COUNT)));

    for i in 0..SNOWFLAKE_COUNT {
        let document = document.clone();
        let layer = layer.clone();
        let rng = rng.clone();
        let burst = burst.clone();
        scheduler.schedule(
            i * SNOWFLAKE_SPAWN_INTERVAL_MS,
            Box::new(move || {
                let spec = SnowflakeSpec::random(&mut *rng.borrow_mut());
                match spawn_flake(&document, &layer, spec) {
                    Ok(flake) => scheduler.schedule(
                        SNOWFLAKE_LIFETIME_MS,
                        Box::new(move || {
                            flake.remove();
                            retire_flake(&layer, &burst);
                        }),
                    ),
                    Err(e) => {
                        log::error!("[snow] flake error: {:?}", e);
                        retire_flake(&layer, &burst);
                    }
                }
            }),
        );
    }
    Ok(())
}

fn spawn_flake(
    document: &web::Document,
    layer: &web::HtmlElement,
    spec: SnowflakeSpec,
) -> anyhow::Result<web::HtmlElement> {
    let flake = dom::append_div(document, layer, SNOWFLAKE_CLASS, Some(SNOWFLAKE_GLYPH))?;
    dom::set_style(&flake, "left", &format!("{}vw", spec.left_vw));
    dom::set_style(&flake, "animation-duration", &format!("{}s", spec.fall_sec));
    dom::set_style(&flake, "font-size", &format!("{}px", spec.font_px));
    Ok(flake)
}

fn retire_flake(layer: &web::HtmlElement, burst: &Cell<SnowBurst>) {
    let mut state = burst.get();
    let last = state.flake_done();
    burst.set(state);
    if last {
        layer.remove();
        log::debug!("[snow] burst finished");
    }
}
