use std::collections::BTreeSet;

use crate::utils::format::escape_html;

pub const ALL: &str = "All";
pub const NUMERIC: &str = "#";

/// Bucket for a brand name: upper-cased first character, `#` for digits.
pub fn first_char(name: &str) -> Option<String> {
    let first = name.trim().chars().next()?;
    if first.is_ascii_digit() {
        return Some(NUMERIC.to_string());
    }
    Some(first.to_uppercase().collect())
}

/// Buttons to offer: `All`, `#`, then every A–Z initial that occurs.
pub fn alphabet_letters<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let initials: BTreeSet<char> = names
        .into_iter()
        .filter_map(first_char)
        .filter_map(|bucket| {
            let mut chars = bucket.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_uppercase() => Some(c),
                _ => None,
            }
        })
        .collect();

    [ALL.to_string(), NUMERIC.to_string()]
        .into_iter()
        .chain(initials.into_iter().map(String::from))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterFilter {
    All,
    Initial(String),
}

impl LetterFilter {
    pub fn from_letter(letter: &str) -> Self {
        if letter == ALL {
            LetterFilter::All
        } else {
            LetterFilter::Initial(letter.to_string())
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            LetterFilter::All => true,
            LetterFilter::Initial(letter) => first_char(name).as_deref() == Some(letter.as_str()),
        }
    }
}

pub fn button_markup(letter: &str, active: bool) -> String {
    let class = if active {
        "alphabet-letter active"
    } else {
        "alphabet-letter"
    };
    let letter = escape_html(letter);
    format!(r#"<button class="{class}" data-letter="{letter}">{letter}</button>"#)
}

/// Splits a nav label just after its first `&`, e.g. `Home &` / ` Garden`.
pub fn split_after_ampersand(text: &str) -> Option<(&str, &str)> {
    let index = text.find('&')?;
    Some(text.split_at(index + 1))
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use anyhow::Result;
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event};

    use super::*;
    use crate::utils::dom;

    const CONTAINER: &str = ".brands-alphabet";
    const BRAND_LINKS: &str = ".brand-items li a";
    const BRAND_ITEMS: &str = ".brand-items li";
    const LETTER_BUTTON: &str = ".alphabet-letter";
    const NAV_ACTIONS: &str = ".navPages-list > .navPages-item > .navPages-action";
    const NAV_ICON: &str = ".navPages-action-moreIcon";
    const BOUND_MARKER: &str = "data-alphabet-bound";
    const TAB_REINIT_MS: u32 = 100;

    fn filter_brands(document: &Document, filter: &LetterFilter) {
        for item in dom::query_all(document, BRAND_ITEMS) {
            let Ok(Some(link)) = item.query_selector("a") else {
                continue;
            };
            let name = link.text_content().unwrap_or_default();
            dom::set_displayed(&item, filter.matches(&name));
        }
    }

    fn on_letter_click(event: Event) {
        let Some(button) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(LETTER_BUTTON).ok().flatten())
        else {
            return;
        };
        let Ok(document) = dom::document() else {
            return;
        };
        for other in dom::query_all(&document, LETTER_BUTTON) {
            let _ = other.class_list().remove_1("active");
        }
        let _ = button.class_list().add_1("active");

        let letter = button.get_attribute("data-letter").unwrap_or_default();
        filter_brands(&document, &LetterFilter::from_letter(&letter));
    }

    fn add_line_breaks_after_ampersands(document: &Document) {
        for item in dom::query_all(document, NAV_ACTIONS) {
            let text = item.text_content().unwrap_or_default();
            let Some((first, second)) = split_after_ampersand(&text) else {
                continue;
            };
            let icon = item.query_selector(NAV_ICON).ok().flatten();
            item.set_inner_html(&format!(
                "{}<br>{}",
                escape_html(first),
                escape_html(second)
            ));
            if let Some(icon) = icon {
                let _ = item.append_child(&icon);
            }
        }
    }

    fn init() -> Result<()> {
        let document = dom::document()?;
        let Some(container) = document.query_selector(CONTAINER).ok().flatten() else {
            return Ok(());
        };

        let names: Vec<String> = dom::query_all(&document, BRAND_LINKS)
            .iter()
            .map(|link| link.text_content().unwrap_or_default())
            .collect();
        if names.is_empty() {
            return Ok(());
        }

        let markup: String = alphabet_letters(names.iter().map(String::as_str))
            .iter()
            .map(|letter| button_markup(letter, letter == ALL))
            .collect();
        container.set_inner_html(&markup);

        if !container.has_attribute(BOUND_MARKER) {
            let handler = Closure::<dyn FnMut(Event)>::new(on_letter_click);
            container
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
                .map_err(|_| anyhow::anyhow!("could not bind alphabet clicks"))?;
            handler.forget();
            let _ = container.set_attribute(BOUND_MARKER, "");
        }

        filter_brands(&document, &LetterFilter::All);
        add_line_breaks_after_ampersands(&document);
        Ok(())
    }

    fn run_init() {
        if let Err(err) = init() {
            log::warn!("Brand navigation init failed: {err:#}");
        }
    }

    /// Builds the alphabet filter and re-builds it when the brands tab opens.
    #[wasm_bindgen(js_name = initBrandNavigation)]
    pub fn init_brand_navigation() {
        run_init();

        let Ok(document) = dom::document() else {
            return;
        };
        let on_tab_click = Closure::<dyn FnMut(Event)>::new(|event: Event| {
            let is_brands_tab = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.matches(r#"[data-tab="brands"]"#).unwrap_or(false));
            if is_brands_tab {
                Timeout::new(TAB_REINIT_MS, run_init).forget();
            }
        });
        if document
            .add_event_listener_with_callback("click", on_tab_click.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Brand navigation could not watch the brands tab");
        }
        on_tab_click.forget();
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::init_brand_navigation;
