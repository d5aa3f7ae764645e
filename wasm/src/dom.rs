//! Browser DOM implementation of the view surface

use shared::render::{ChartSeries, ViewNode};
use shared::view::ViewSurface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element, HtmlInputElement, HtmlSelectElement, Node};

/// [`ViewSurface`] writing straight into the page.
///
/// Missing elements are skipped; DOM exceptions are logged to the console.
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Surface over the current window's document
    pub fn from_window() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        Ok(Self::new(document))
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn toggle_class(&self, id: &str, class: &str, on: bool) {
        if let Some(element) = self.element(id) {
            if let Err(e) = element.class_list().toggle_with_force(class, on) {
                warn(id, &e);
            }
        }
    }

    fn build(&self, node: &ViewNode) -> Result<Node, JsValue> {
        match node {
            ViewNode::Text { text } => Ok(self.document.create_text_node(text).into()),
            ViewNode::Element {
                tag,
                class,
                href,
                children,
            } => {
                let element = self.document.create_element(tag)?;
                if let Some(class) = class {
                    element.set_class_name(class);
                }
                if let Some(href) = href {
                    element.set_attribute("href", href)?;
                }
                for child in children {
                    element.append_child(&self.build(child)?)?;
                }
                Ok(element.into())
            }
        }
    }
}

fn warn(id: &str, error: &JsValue) {
    console::warn_2(&JsValue::from_str(&format!("#{}:", id)), error);
}

impl ViewSurface for DomSurface {
    fn value(&self, id: &str) -> Option<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        element.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
    }

    fn set_value(&mut self, id: &str, value: &str) {
        let Some(element) = self.element(id) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.element(id) {
            element.set_class_name(class);
        }
    }

    fn set_hidden(&mut self, id: &str, hidden: bool) {
        self.toggle_class(id, "hidden", hidden);
    }

    fn set_active(&mut self, id: &str, active: bool) {
        self.toggle_class(id, "active", active);
    }

    fn mount(&mut self, id: &str, nodes: Vec<ViewNode>) {
        let Some(container) = self.element(id) else {
            return;
        };
        container.set_inner_html("");
        for node in &nodes {
            let appended = self
                .build(node)
                .and_then(|child| container.append_child(&child));
            if let Err(e) = appended {
                warn(id, &e);
            }
        }
    }

    /// The page script draws the chart from the `data-series` attribute
    fn set_chart(&mut self, id: &str, series: &ChartSeries) {
        let Some(element) = self.element(id) else {
            return;
        };
        match serde_json::to_string(series) {
            Ok(json) => {
                if let Err(e) = element.set_attribute("data-series", &json) {
                    warn(id, &e);
                }
            }
            Err(e) => warn(id, &JsValue::from_str(&e.to_string())),
        }
    }
}
