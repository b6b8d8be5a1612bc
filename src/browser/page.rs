//! Element lookup against the page markup.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::FolioError;

/// Handles to the window and document the behaviors bind against.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    /// # Errors
    ///
    /// Returns [`FolioError::MissingElement`] outside a browser document.
    pub fn current() -> Result<Self, FolioError> {
        let window = web_sys::window().ok_or_else(|| FolioError::missing("window"))?;
        let document = window.document().ok_or_else(|| FolioError::missing("document"))?;
        Ok(Self { window, document })
    }

    pub fn body(&self) -> Result<HtmlElement, FolioError> {
        self.document.body().ok_or_else(|| FolioError::missing("body"))
    }

    pub fn by_id(&self, id: &str) -> Result<Element, FolioError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| FolioError::missing(&format!("#{id}")))
    }

    pub fn html_by_id(&self, id: &str) -> Result<HtmlElement, FolioError> {
        as_html(&self.by_id(id)?).ok_or_else(|| FolioError::missing(&format!("#{id} (html)")))
    }

    pub fn select(&self, selector: &str) -> Result<Element, FolioError> {
        self.document
            .query_selector(selector)?
            .ok_or_else(|| FolioError::missing(selector))
    }

    /// All elements matching `selector`, in document order. May be empty.
    pub fn select_all(&self, selector: &str) -> Result<Vec<Element>, FolioError> {
        select_all_in(&self.document.document_element().ok_or_else(|| FolioError::missing("html"))?, selector)
    }
}

/// Elements under `root` matching `selector`, in document order.
pub fn select_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, FolioError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

pub fn as_html(el: &Element) -> Option<HtmlElement> {
    el.dyn_ref::<HtmlElement>().cloned()
}
