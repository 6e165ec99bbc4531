pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_BREAKPOINT_PX
}

/// Open/closed flag per footer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    open: Vec<bool>,
}

impl AccordionState {
    /// Everything collapsed on mobile, everything expanded on desktop.
    pub fn layout(sections: usize, mobile: bool) -> Self {
        Self {
            open: vec![!mobile; sections],
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn sections(&self) -> &[bool] {
        &self.open
    }

    /// Mobile only: flips `index` and closes every other section. Returns
    /// whether anything changed.
    pub fn toggle(&mut self, index: usize, mobile: bool) -> bool {
        if !mobile || index >= self.open.len() {
            return false;
        }
        let opening = !self.open[index];
        for (i, open) in self.open.iter_mut().enumerate() {
            *open = i == index && opening;
        }
        true
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event};

    use super::*;
    use crate::utils::dom;

    const SECTION: &str = ".footer-section";
    const TRIGGER: &str = ".accordion-trigger";
    const CONTENT: &str = ".accordion-content";
    const OPEN_CLASS: &str = "is-open";

    struct Section {
        trigger: Element,
        content: Element,
    }

    struct Accordion {
        sections: Vec<Section>,
        state: RefCell<AccordionState>,
        resize_timer: RefCell<Option<Timeout>>,
    }

    impl Accordion {
        fn mobile_now() -> bool {
            dom::viewport_width().map(is_mobile).unwrap_or(false)
        }

        fn apply(&self) {
            let state = self.state.borrow();
            for (index, section) in self.sections.iter().enumerate() {
                let open = state.is_open(index);
                let _ = section
                    .trigger
                    .set_attribute("aria-expanded", if open { "true" } else { "false" });
                let classes = section.content.class_list();
                let _ = if open {
                    classes.add_1(OPEN_CLASS)
                } else {
                    classes.remove_1(OPEN_CLASS)
                };
            }
        }

        fn relayout(&self) {
            let layout = AccordionState::layout(self.sections.len(), Self::mobile_now());
            *self.state.borrow_mut() = layout;
            self.apply();
        }

        fn toggle(&self, index: usize) {
            let changed = self.state.borrow_mut().toggle(index, Self::mobile_now());
            if changed {
                self.apply();
            }
        }
    }

    /// Collapsible footer sections on narrow viewports.
    #[wasm_bindgen(js_name = initFooterAccordion)]
    pub fn init_footer_accordion() {
        let Ok(document) = dom::document() else {
            return;
        };
        let sections: Vec<Section> = dom::query_all(&document, SECTION)
            .into_iter()
            .filter_map(|section| {
                let trigger = section.query_selector(TRIGGER).ok().flatten()?;
                let content = section.query_selector(CONTENT).ok().flatten()?;
                Some(Section { trigger, content })
            })
            .collect();
        if sections.is_empty() {
            return;
        }

        let accordion = Rc::new(Accordion {
            state: RefCell::new(AccordionState::layout(sections.len(), Accordion::mobile_now())),
            sections,
            resize_timer: RefCell::new(None),
        });
        accordion.apply();

        for (index, section) in accordion.sections.iter().enumerate() {
            let target = Rc::clone(&accordion);
            let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| target.toggle(index));
            if section
                .trigger
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("Footer accordion could not bind section {index}");
            }
            on_click.forget();
        }

        let Ok(window) = dom::window() else {
            return;
        };
        let target = Rc::clone(&accordion);
        let on_resize = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let relayout = Rc::clone(&target);
            // replacing the pending timeout drops, and so cancels, the old one
            *target.resize_timer.borrow_mut() =
                Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || relayout.relayout()));
        });
        if window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Footer accordion could not watch resizes");
        }
        on_resize.forget();
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::init_footer_accordion;
