use crate::constants::{
    CLASS_APP_CONTAINER, CLASS_CANVAS, CLASS_FILE, CLASS_FILE_INPUT, CLASS_FILE_LABEL,
    CLASS_HIDDEN, CLASS_LABEL, CLASS_PANEL, CLASS_PLAY_BUTTON,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements making up one mounted instance: the start panel (file picker,
/// "Or", Play) and the canvas the scene draws into once ready.
pub struct OverlayDom {
    pub root: web::Element,
    pub canvas: web::HtmlCanvasElement,
    pub panel: web::Element,
    pub file_input: web::HtmlInputElement,
    pub play_button: web::Element,
}

pub fn build(document: &web::Document, container: &web::Element) -> anyhow::Result<OverlayDom> {
    let root = dom::create_element(document, "div", CLASS_APP_CONTAINER)?;

    let canvas: web::HtmlCanvasElement = dom::create_element(document, "canvas", CLASS_CANVAS)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("canvas cast: {:?}", e))?;
    hide(&canvas);

    let panel = dom::create_element(document, "div", CLASS_PANEL)?;

    // The input sits inside its label so several instances never clash on ids
    let picker = dom::create_element(document, "div", CLASS_FILE_INPUT)?;
    let file_label = dom::create_element(document, "label", CLASS_FILE_LABEL)?;
    let file_input: web::HtmlInputElement = dom::create_element(document, "input", CLASS_FILE)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("input cast: {:?}", e))?;
    file_input.set_type("file");
    file_label.set_text_content(Some("Select file"));
    append(&file_label, &file_input)?;
    append(&picker, &file_label)?;

    let or_label = dom::create_element(document, "label", CLASS_LABEL)?;
    or_label.set_text_content(Some("Or"));

    let play_button = dom::create_element(document, "button", CLASS_PLAY_BUTTON)?;
    play_button.set_text_content(Some("Play"));

    append(&panel, &picker)?;
    append(&panel, &or_label)?;
    append(&panel, &play_button)?;
    append(&root, &canvas)?;
    append(&root, &panel)?;
    append(container, &root)?;

    Ok(OverlayDom {
        root,
        canvas,
        panel,
        file_input,
        play_button,
    })
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(CLASS_HIDDEN);
    // fallback for pages without the stylesheet
    _ = el.set_attribute("style", "");
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(CLASS_HIDDEN);
    _ = el.set_attribute("style", "display:none");
}

/// Swap the start panel for the canvas.
pub fn enter_ready(overlay: &OverlayDom) {
    hide(&overlay.panel);
    show(&overlay.canvas);
}

/// First selected file, if the user picked one.
pub fn selected_file(input: &web::HtmlInputElement) -> Option<web::File> {
    input.files().and_then(|files| files.get(0))
}

impl OverlayDom {
    pub fn remove(&self) {
        self.root.remove();
    }
}
