//! One presentation of the heart stage, from confirm tap to close.
//!
//! A [`StageSession`] owns its DOM subtree, tiles, animator and event
//! listeners. Dropping the previous session's listener and cancelling its
//! pending writes is done through [`StageSession::teardown`], so there is no
//! process-wide cleanup slot.

use crate::constants::{
    CONTAINER_CLASS, DENSITY_ATTR, FLATTENED_CLASS, FULL_VIEWPORT_HEIGHT, FULL_VIEWPORT_WIDTH,
    HINT_CLASS, INSTRUCTION_CLASS, STAGE_CLASS, px,
};
use crate::dom;
use crate::tiles::{self, DomTile};
use crate::timers::WindowScheduler;
use heart_core::{
    compute_heart_layout, container_size, content, presentation_config, AssembleOptions,
    CurveLayout, Interaction, PresentationConfig, ResizeAction, Scheduler, Size, Stage,
    StageCopy, StagedAnimator,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct StageSession {
    inner: Rc<SessionInner>,
}

struct SessionInner {
    popup_layer: web::Element,
    stage_el: web::HtmlElement,
    container: web::HtmlElement,
    instruction: web::HtmlElement,
    hint: web::HtmlElement,
    tiles: Vec<DomTile>,
    layout: CurveLayout,
    stage: RefCell<Stage>,
    animator: RefCell<StagedAnimator<WindowScheduler>>,
    resize_listener: RefCell<Option<Closure<dyn FnMut()>>>,
    click_listener: RefCell<Option<Closure<dyn FnMut()>>>,
    on_close: Box<dyn Fn()>,
    closed: Cell<bool>,
    started_at: Instant,
}

impl StageSession {
    /// Build the stage inside `popup_layer` and start the scatter-to-heart
    /// cascade. `on_close` runs after the second tap tears the stage down.
    pub fn start(
        document: &web::Document,
        popup_layer: web::Element,
        on_close: impl Fn() + 'static,
    ) -> anyhow::Result<Self> {
        popup_layer.set_inner_html("");
        let stage_el = dom::append_div(document, &popup_layer, STAGE_CLASS, None)?;
        let mut stage = Stage::new();
        stage.start();
        let copy = stage.copy();
        let instruction =
            dom::append_div(document, &stage_el, INSTRUCTION_CLASS, Some(copy.instruction))?;
        let container = dom::append_div(document, &stage_el, CONTAINER_CLASS, None)?;
        let hint = dom::append_div(document, &stage_el, HINT_CLASS, Some(copy.hint))?;

        let viewport = dom::viewport_size()?;
        let config = presentation_config(viewport.width, viewport.height);
        let layout = compute_heart_layout(config.tile_count);
        let labels = layout.arrange(&content::blessings(config.tile_count));
        let fills = layout.arrange(&content::tile_fills(config.tile_count));
        let tiles = tiles::create_tiles(document, &container, &labels, &fills)?;

        let inner = Rc::new(SessionInner {
            popup_layer,
            stage_el,
            container,
            instruction,
            hint,
            tiles,
            layout,
            stage: RefCell::new(stage),
            animator: RefCell::new(StagedAnimator::new(WindowScheduler, rand::random())),
            resize_listener: RefCell::new(None),
            click_listener: RefCell::new(None),
            on_close: Box::new(on_close),
            closed: Cell::new(false),
            started_at: Instant::now(),
        });

        inner.apply_density(&config);
        inner.fit_container(&config, viewport);
        let weak = Rc::downgrade(&inner);
        let options = AssembleOptions::scatter(config.base_delay_ms, config.step_delay_ms);
        inner.animator.borrow_mut().position_as_heart(
            &inner.tiles,
            dom::element_size(&inner.container),
            &inner.layout,
            &options,
            Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.on_assembled();
                }
            })),
        );

        wire_resize(&inner)?;
        wire_click(&inner)?;

        log::info!(
            "[stage] started density={} tiles={} viewport={}x{}",
            config.density,
            inner.tiles.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self { inner })
    }

    /// Remove listeners, drop pending tile writes and clear the popup layer.
    /// Safe to call more than once.
    pub fn teardown(&self) {
        self.inner.teardown();
    }
}

impl SessionInner {
    fn apply_density(&self, config: &PresentationConfig) {
        let _ = self
            .stage_el
            .set_attribute(DENSITY_ATTR, config.density.as_str());
    }

    fn fit_container(&self, config: &PresentationConfig, viewport: Size) {
        let size = container_size(viewport, config);
        dom::set_style(&self.container, "width", &px(size.width));
        dom::set_style(&self.container, "height", &px(size.height));
    }

    fn show_copy(&self, copy: StageCopy) {
        self.instruction.set_text_content(Some(copy.instruction));
        self.hint.set_text_content(Some(copy.hint));
    }

    fn on_assembled(&self) {
        if self.closed.get() {
            return;
        }
        let assembled = self.stage.borrow_mut().mark_assembled();
        if assembled {
            let copy = self.stage.borrow().copy();
            self.show_copy(copy);
            log::info!(
                "[stage] assembled after {} ms",
                self.started_at.elapsed().as_millis()
            );
        }
    }

    fn spread(&self, viewport: Size) {
        dom::set_style(&self.container, "width", FULL_VIEWPORT_WIDTH);
        dom::set_style(&self.container, "height", FULL_VIEWPORT_HEIGHT);
        self.animator
            .borrow_mut()
            .spread_across_screen(&self.tiles, viewport);
    }

    fn on_resize(&self) {
        let viewport = match dom::viewport_size() {
            Ok(v) => v,
            Err(e) => {
                log::error!("[stage] resize error: {:?}", e);
                return;
            }
        };
        let config = presentation_config(viewport.width, viewport.height);
        self.apply_density(&config);
        let action = self.stage.borrow().resize_action();
        match action {
            ResizeAction::RefitHeart => {
                self.fit_container(&config, viewport);
                self.animator.borrow_mut().position_as_heart(
                    &self.tiles,
                    dom::element_size(&self.container),
                    &self.layout,
                    &AssembleOptions::instant(),
                    None,
                );
            }
            ResizeAction::RespreadGrid => self.spread(viewport),
            ResizeAction::Nothing => {}
        }
    }

    fn on_click(&self) {
        let interaction = self.stage.borrow_mut().interact();
        match interaction {
            Interaction::Ignored => log::debug!("[stage] tap ignored while assembling"),
            Interaction::Flatten => {
                let _ = self.stage_el.class_list().add_1(FLATTENED_CLASS);
                let copy = self.stage.borrow().copy();
                self.show_copy(copy);
                match dom::viewport_size() {
                    Ok(viewport) => self.spread(viewport),
                    Err(e) => log::error!("[stage] flatten error: {:?}", e),
                }
            }
            Interaction::Close => {
                self.teardown();
                (self.on_close)();
            }
        }
    }

    fn teardown(&self) {
        if self.closed.replace(true) {
            return;
        }
        if let Some(listener) = self.resize_listener.borrow_mut().take() {
            if let Some(window) = web::window() {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
        if let Some(listener) = self.click_listener.borrow_mut().take() {
            let _ = self
                .stage_el
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
            // teardown usually runs inside this listener; free it after the event
            WindowScheduler.schedule(0, Box::new(move || drop(listener)));
        }
        self.animator.borrow().cancel_pending();
        self.stage.borrow_mut().reset();
        self.popup_layer.set_inner_html("");
        log::info!("[stage] closed");
    }
}

fn wire_resize(inner: &Rc<SessionInner>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let weak: Weak<SessionInner> = Rc::downgrade(inner);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(inner) = weak.upgrade() {
            inner.on_resize();
        }
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    *inner.resize_listener.borrow_mut() = Some(closure);
    Ok(())
}

fn wire_click(inner: &Rc<SessionInner>) -> anyhow::Result<()> {
    let weak: Weak<SessionInner> = Rc::downgrade(inner);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(inner) = weak.upgrade() {
            inner.on_click();
        }
    }) as Box<dyn FnMut()>);
    inner
        .stage_el
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    *inner.click_listener.borrow_mut() = Some(closure);
    Ok(())
}
