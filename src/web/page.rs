//! [`Page`] over the live DOM.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FocusOptions, HtmlElement, HtmlIFrameElement, Node, Performance,
    ScrollBehavior, ScrollToOptions, SvgElement, Window,
};

use crate::error::FolioError;
use crate::page::Page;

/// Locale used when the browser does not report one.
const FALLBACK_LOCALE: &str = "en-US";

/// The browser window and document.
pub struct WebPage {
    window: Window,
    document: Document,
    performance: Option<Performance>,
    locale: String,
}

impl WebPage {
    /// Bind to the global window.
    pub fn new() -> Result<Self, FolioError> {
        let window = web_sys::window().ok_or(FolioError::NoDocument)?;
        let document = window.document().ok_or(FolioError::NoDocument)?;
        let locale = window
            .navigator()
            .language()
            .unwrap_or_else(|| FALLBACK_LOCALE.to_owned());
        Ok(Self {
            performance: window.performance(),
            window,
            document,
            locale,
        })
    }

    /// The global window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn style_of(node: &Element) -> Option<web_sys::CssStyleDeclaration> {
        if let Some(html) = node.dyn_ref::<HtmlElement>() {
            Some(html.style())
        } else {
            node.dyn_ref::<SvgElement>().map(SvgElement::style)
        }
    }
}

impl Page for WebPage {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            log::debug!("invalid selector {selector:?}");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query_within(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&self, node: &Element, class: &str, on: bool) {
        let classes = node.class_list();
        let result = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(e) = result {
            log::debug!("class {class:?} update failed: {e:?}");
        }
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(style) = Self::style_of(node) else {
            return;
        };
        if let Err(e) = style.set_property(property, value) {
            log::debug!("style {property}: {value} rejected: {e:?}");
        }
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_source(&self, node: &Element, url: &str) {
        if let Some(frame) = node.dyn_ref::<HtmlIFrameElement>() {
            frame.set_src(url);
        } else if let Err(e) = node.set_attribute("src", url) {
            log::debug!("src update failed: {e:?}");
        }
    }

    fn focus(&self, node: &Element) {
        let Some(html) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        if let Err(e) = html.focus_with_options(&options) {
            log::debug!("focus failed: {e:?}");
        }
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node.as_ref();
        ancestor.contains(Some(node))
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn viewport_top(&self, node: &Element) -> f64 {
        node.get_bounding_client_rect().top()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn now(&self) -> f64 {
        self.performance.as_ref().map_or(0.0, Performance::now)
    }

    fn format_count(&self, value: f64) -> String {
        js_sys::Number::from(value)
            .to_locale_string(&self.locale)
            .into()
    }
}
