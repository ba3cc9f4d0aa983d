//! `web-sys` implementation of the host traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with `hydrate`. DOM calls that can throw are logged and
//! otherwise ignored: a helper that cannot touch the page degrades to doing
//! nothing rather than breaking the rest of the page's scripts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::consts::{
    COUNTER_CLASS, COUNTER_NORMAL_COLOR, COUNTER_OVER_LIMIT_COLOR, INVALID_CLASS, LOADING_OVERLAY_CLASS,
    TOAST_CONTAINER_CLASS, VALID_CLASS,
};
use crate::host::{ClickEvent, Element, Field, FieldEvent, Form, Label, Page, Subscription, ToastSurface};
use crate::ui::counter::CounterTone;
use crate::ui::toast::{Toast, ToastId};
use crate::ui::validate::Validity;

fn warn_on_err(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

/// Attach `callback` for `event`; the subscription removes it and frees the closure.
fn listen(target: &EventTarget, event: &'static str, callback: impl FnMut(Event) + 'static) -> Subscription {
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("attaching {event} listener failed: {err:?}");
        return Subscription::detached();
    }
    let target = target.clone();
    Subscription::new(move || {
        warn_on_err(
            target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref()),
            "removing listener",
        );
    })
}

fn elements_of(list: Result<NodeList, JsValue>) -> Vec<web_sys::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

fn is_form_control(el: &web_sys::Element) -> bool {
    el.is_instance_of::<HtmlInputElement>()
        || el.is_instance_of::<HtmlTextAreaElement>()
        || el.is_instance_of::<HtmlSelectElement>()
}

// =============================================================
// Fields and forms
// =============================================================

pub struct BrowserField {
    el: web_sys::Element,
}

impl BrowserField {
    fn wrap(el: web_sys::Element) -> Rc<dyn Field> {
        Rc::new(Self { el })
    }
}

impl Field for BrowserField {
    fn id(&self) -> Option<String> {
        Some(self.el.id()).filter(|id| !id.is_empty())
    }

    fn name(&self) -> Option<String> {
        self.el.get_attribute("name").filter(|n| !n.is_empty())
    }

    fn value(&self) -> String {
        if let Some(input) = self.el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(textarea) = self.el.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else if let Some(select) = self.el.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(textarea) = self.el.dyn_ref::<HtmlTextAreaElement>() {
            textarea.set_value(value);
        } else if let Some(select) = self.el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn is_required(&self) -> bool {
        self.el.has_attribute("required")
    }

    fn max_length(&self) -> Option<usize> {
        self.el.get_attribute("maxlength")?.trim().parse().ok()
    }

    fn is_submittable(&self) -> bool {
        if self.el.has_attribute("disabled") {
            return false;
        }
        let Some(input) = self.el.dyn_ref::<HtmlInputElement>() else {
            return true;
        };
        match input.type_().as_str() {
            "submit" | "button" | "reset" | "file" | "image" => false,
            "checkbox" | "radio" => input.checked(),
            _ => true,
        }
    }

    fn validity(&self) -> Option<Validity> {
        let classes = self.el.class_list();
        if classes.contains(INVALID_CLASS) {
            Some(Validity::Invalid)
        } else if classes.contains(VALID_CLASS) {
            Some(Validity::Valid)
        } else {
            None
        }
    }

    fn set_validity(&self, validity: Validity) {
        let (add, remove) = match validity {
            Validity::Valid => (VALID_CLASS, INVALID_CLASS),
            Validity::Invalid => (INVALID_CLASS, VALID_CLASS),
        };
        let classes = self.el.class_list();
        warn_on_err(classes.remove_1(remove), "clearing validity class");
        warn_on_err(classes.add_1(add), "setting validity class");
    }

    fn on(&self, event: FieldEvent, mut callback: Box<dyn FnMut()>) -> Subscription {
        let name = match event {
            FieldEvent::Input => "input",
            FieldEvent::Blur => "blur",
        };
        listen(self.el.as_ref(), name, move |_event: Event| callback())
    }
}

pub struct BrowserForm {
    form: HtmlFormElement,
}

impl Form for BrowserForm {
    fn id(&self) -> String {
        self.form.id()
    }

    fn fields(&self) -> Vec<Rc<dyn Field>> {
        elements_of(self.form.query_selector_all("input, textarea, select"))
            .into_iter()
            .map(BrowserField::wrap)
            .collect()
    }

    fn on_submit(&self, mut callback: Box<dyn FnMut()>) -> Subscription {
        listen(self.form.as_ref(), "submit", move |_event: Event| callback())
    }
}

// =============================================================
// Elements and labels
// =============================================================

pub struct BrowserElement {
    el: web_sys::Element,
}

impl BrowserElement {
    fn wrap(el: web_sys::Element) -> Rc<dyn Element> {
        Rc::new(Self { el })
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.el.dyn_ref::<HtmlElement>() {
            warn_on_err(html.style().set_property(property, value), "setting style");
        }
    }
}

impl Element for BrowserElement {
    fn id(&self) -> Option<String> {
        Some(self.el.id()).filter(|id| !id.is_empty())
    }

    fn text_content(&self) -> String {
        self.el.text_content().unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.el.get_attribute(name)
    }

    fn set_hidden(&self, hidden: bool) {
        self.set_style("display", if hidden { "none" } else { "" });
    }

    fn is_hidden(&self) -> bool {
        self.el
            .dyn_ref::<HtmlElement>()
            .and_then(|html| html.style().get_property_value("display").ok())
            .is_some_and(|display| display == "none")
    }

    fn fade_out(&self, duration_ms: u32) {
        self.set_style("transition", &format!("opacity {duration_ms}ms"));
        self.set_style("opacity", "0");
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.el.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn remove(&self) {
        self.el.remove();
    }

    fn on_click(&self, mut callback: Box<dyn FnMut(&mut ClickEvent)>) -> Subscription {
        listen(self.el.as_ref(), "click", move |event: Event| {
            let mut click = ClickEvent::default();
            callback(&mut click);
            if click.default_prevented {
                event.prevent_default();
            }
        })
    }
}

pub struct BrowserLabel {
    el: HtmlElement,
}

impl Label for BrowserLabel {
    fn set_text(&self, text: &str) {
        self.el.set_text_content(Some(text));
    }

    fn set_tone(&self, tone: CounterTone) {
        let color = match tone {
            CounterTone::Normal => COUNTER_NORMAL_COLOR,
            CounterTone::OverLimit => COUNTER_OVER_LIMIT_COLOR,
        };
        warn_on_err(self.el.style().set_property("color", color), "setting counter color");
    }
}

// =============================================================
// Toasts
// =============================================================

pub struct BrowserToasts {
    document: Document,
    container: web_sys::Element,
    nodes: RefCell<HashMap<ToastId, web_sys::Element>>,
}

impl ToastSurface for BrowserToasts {
    fn mount(&self, toast: &Toast) {
        let node = match self.document.create_element("div") {
            Ok(node) => node,
            Err(err) => {
                log::warn!("creating toast failed: {err:?}");
                return;
            }
        };
        node.set_class_name(&toast.severity.toast_class());
        node.set_text_content(Some(&toast.message));
        if let Err(err) = self.container.append_child(&node) {
            log::warn!("mounting toast failed: {err:?}");
            return;
        }
        self.nodes.borrow_mut().insert(toast.id, node);
    }

    fn begin_exit(&self, id: ToastId, exit_ms: u32) {
        let nodes = self.nodes.borrow();
        if let Some(html) = nodes.get(&id).and_then(|n| n.dyn_ref::<HtmlElement>()) {
            warn_on_err(
                html.style().set_property("animation", &format!("slideOut {exit_ms}ms ease")),
                "starting toast exit",
            );
        }
    }

    fn unmount(&self, id: ToastId) {
        if let Some(node) = self.nodes.borrow_mut().remove(&id) {
            node.remove();
        }
    }
}

// =============================================================
// Page
// =============================================================

pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    /// The window's document, if there is one.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn query_all(&self, selector: &str) -> Vec<web_sys::Element> {
        elements_of(self.document.query_selector_all(selector))
    }

    fn append_to_body(&self, node: &web_sys::Element) -> bool {
        let Some(body) = self.document.body() else {
            return false;
        };
        match body.append_child(node) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("appending to body failed: {err:?}");
                false
            }
        }
    }

    fn find_or_create_toast_container(&self) -> Option<web_sys::Element> {
        let selector = format!(".{TOAST_CONTAINER_CLASS}");
        if let Ok(Some(existing)) = self.document.query_selector(&selector) {
            return Some(existing);
        }
        let container = self.document.create_element("div").ok()?;
        container.set_class_name(TOAST_CONTAINER_CLASS);
        self.append_to_body(&container).then_some(container)
    }
}

impl Page for BrowserPage {
    fn form(&self, id: &str) -> Option<Rc<dyn Form>> {
        let form = self.document.get_element_by_id(id)?.dyn_into::<HtmlFormElement>().ok()?;
        Some(Rc::new(BrowserForm { form }))
    }

    fn field(&self, id: &str) -> Option<Rc<dyn Field>> {
        let el = self.document.get_element_by_id(id)?;
        is_form_control(&el).then(|| BrowserField::wrap(el))
    }

    fn element(&self, id: &str) -> Option<Rc<dyn Element>> {
        self.document.get_element_by_id(id).map(BrowserElement::wrap)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Rc<dyn Element>> {
        self.query_all(&format!(".{class}")).into_iter().map(BrowserElement::wrap).collect()
    }

    fn elements_with_attribute(&self, attribute: &str) -> Vec<Rc<dyn Element>> {
        self.query_all(&format!("[{attribute}]")).into_iter().map(BrowserElement::wrap).collect()
    }

    fn required_fields(&self) -> Vec<Rc<dyn Field>> {
        self.query_all("[required]")
            .into_iter()
            .filter(is_form_control)
            .map(BrowserField::wrap)
            .collect()
    }

    fn textareas(&self) -> Vec<Rc<dyn Field>> {
        self.query_all("textarea").into_iter().map(BrowserField::wrap).collect()
    }

    fn counter_label(&self, field_id: &str) -> Option<Rc<dyn Label>> {
        let parent = self.document.get_element_by_id(field_id)?.parent_element()?;
        let small = self.document.create_element("small").ok()?;
        small.set_class_name(COUNTER_CLASS);
        parent.append_child(&small).ok()?;
        let el = small.dyn_into::<HtmlElement>().ok()?;
        Some(Rc::new(BrowserLabel { el }))
    }

    fn toast_surface(&self) -> Option<Rc<dyn ToastSurface>> {
        let container = self.find_or_create_toast_container()?;
        Some(Rc::new(BrowserToasts {
            document: self.document.clone(),
            container,
            nodes: RefCell::new(HashMap::new()),
        }))
    }

    fn append_overlay(&self, id: &str) {
        let Ok(overlay) = self.document.create_element("div") else {
            return;
        };
        overlay.set_class_name(LOADING_OVERLAY_CLASS);
        overlay.set_id(id);
        overlay.set_inner_html(r#"<div class="spinner"></div>"#);
        self.append_to_body(&overlay);
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
