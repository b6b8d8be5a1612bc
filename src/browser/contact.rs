//! Contact form submission and HTTP delivery.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::on;
use super::page::Page;
use crate::config::SiteConfig;
use crate::contact::{ContactRequest, ContactSender, SimulatedSender, SubmitGate, submit};
use crate::error::FolioError;
use crate::status::{StatusArea, StatusMessage, StatusView};

/// POSTs the request as JSON to a form relay.
#[derive(Clone, Debug)]
pub struct HttpSender {
    endpoint: String,
}

impl HttpSender {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl ContactSender for HttpSender {
    async fn send(&self, request: ContactRequest) -> Result<(), FolioError> {
        let resp = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&request)
            .map_err(|e| FolioError::Delivery(e.to_string()))?
            .send()
            .await
            .map_err(|e| FolioError::Delivery(e.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(FolioError::Delivery(format!("relay returned {status}")));
        }
        log::info!("contact request delivered to {}", self.endpoint);
        Ok(())
    }
}

/// Delivery chosen from the site config.
#[derive(Clone, Debug)]
pub enum Delivery {
    Simulated(SimulatedSender),
    Http(HttpSender),
}

impl Delivery {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        match &config.contact_endpoint {
            Some(url) => Self::Http(HttpSender::new(url.clone())),
            None => Self::Simulated(SimulatedSender),
        }
    }
}

impl ContactSender for Delivery {
    async fn send(&self, request: ContactRequest) -> Result<(), FolioError> {
        match self {
            Self::Simulated(sender) => sender.send(request).await,
            Self::Http(sender) => sender.send(request).await,
        }
    }
}

/// Validate and deliver on submit, then show the outcome for a while.
pub fn bind(page: &Page, config: &SiteConfig) -> Result<(), FolioError> {
    let form = page
        .by_id("contact-form")?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| FolioError::missing("form#contact-form"))?;
    let message_el = page.by_id("form-message")?;

    let sender = Rc::new(Delivery::from_config(config));
    let area = Rc::new(RefCell::new(StatusArea::new(config.status_clear_ms)));
    let gate = Rc::new(RefCell::new(SubmitGate::default()));
    let document = page.document.clone();
    let form_el = form.clone();

    on(&form, "submit", move |event: Event| {
        event.prevent_default();
        if !gate.borrow_mut().try_begin() {
            log::debug!("contact submit ignored; delivery in flight");
            return;
        }
        let request = read_request(&document);
        let sender = Rc::clone(&sender);
        let area = Rc::clone(&area);
        let gate = Rc::clone(&gate);
        let message_el = message_el.clone();
        let form = form_el.clone();
        spawn_local(async move {
            let outcome = submit(sender.as_ref(), request).await;
            show(&area, &message_el, &outcome.status);
            if outcome.reset_form {
                form.reset();
            }
            gate.borrow_mut().finish();
        });
    })
}

fn read_request(document: &Document) -> ContactRequest {
    ContactRequest {
        name: field_value(document, "name"),
        email: field_value(document, "email"),
        subject: field_value(document, "subject"),
        message: field_value(document, "message"),
    }
}

fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(text) = el.dyn_ref::<HtmlTextAreaElement>() {
        text.value()
    } else {
        String::new()
    }
}

fn show(area: &Rc<RefCell<StatusArea>>, el: &Element, message: &StatusMessage) {
    let delay_ms = area.borrow_mut().show(message);
    render(el, area.borrow().view());

    let area = Rc::clone(area);
    let el = el.clone();
    Timeout::new(delay_ms, move || {
        area.borrow_mut().expire();
        render(&el, area.borrow().view());
    })
    .forget();
}

fn render(el: &Element, view: &StatusView) {
    el.set_text_content(Some(&view.text));
    el.set_class_name(&view.class_name);
}
