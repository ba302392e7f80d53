use crate::constants::{px, TILE_CLASS, VISIBLE_CLASS};
use crate::dom;
use heart_core::TileSurface;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A `.tile` element positioned absolutely inside the heart container.
#[derive(Clone)]
pub struct DomTile {
    el: web::HtmlElement,
    // inline `transition` value to restore after a suppressed write
    saved_transition: Rc<RefCell<Option<String>>>,
}

impl DomTile {
    pub fn create(
        document: &web::Document,
        container: &web::Element,
        label: &str,
        fill: &str,
    ) -> anyhow::Result<Self> {
        let el = dom::append_div(document, container, TILE_CLASS, Some(label))?;
        dom::set_style(&el, "background", fill);
        Ok(Self {
            el,
            saved_transition: Rc::new(RefCell::new(None)),
        })
    }
}

/// One tile per label, in visual order.
pub fn create_tiles(
    document: &web::Document,
    container: &web::Element,
    labels: &[&str],
    fills: &[&str],
) -> anyhow::Result<Vec<DomTile>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let fill = fills.get(i % fills.len().max(1)).copied().unwrap_or_default();
            DomTile::create(document, container, label, fill)
        })
        .collect()
}

impl TileSurface for DomTile {
    fn set_position(&self, left: f64, top: f64) {
        dom::set_style(&self.el, "left", &px(left));
        dom::set_style(&self.el, "top", &px(top));
    }

    fn set_size(&self, size: Option<(f64, f64)>) {
        match size {
            Some((w, h)) => {
                dom::set_style(&self.el, "width", &px(w));
                dom::set_style(&self.el, "height", &px(h));
            }
            None => {
                let style = self.el.style();
                let _ = style.remove_property("width");
                let _ = style.remove_property("height");
            }
        }
    }

    fn set_visible(&self, visible: bool) {
        let classes = self.el.class_list();
        let _ = if visible {
            classes.add_1(VISIBLE_CLASS)
        } else {
            classes.remove_1(VISIBLE_CLASS)
        };
    }

    fn set_transitions_suppressed(&self, suppressed: bool) {
        let style = self.el.style();
        if suppressed {
            let previous = style.get_property_value("transition").unwrap_or_default();
            *self.saved_transition.borrow_mut() = Some(previous);
            let _ = style.set_property("transition", "none");
        } else {
            match self.saved_transition.borrow_mut().take() {
                Some(previous) if !previous.is_empty() => {
                    let _ = style.set_property("transition", &previous);
                }
                _ => {
                    let _ = style.remove_property("transition");
                }
            }
        }
    }

    fn commit_layout(&self) {
        // reading offsetWidth forces a synchronous reflow
        let _ = self.el.offset_width();
    }
}
