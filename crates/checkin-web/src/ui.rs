//! Applies a gate decision to the static host page.

use checkin_core::{CheckinConfig, CheckinGate};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::status;

/// Render one gate decision. Runs once per accepted attempt outcome.
pub fn render(document: &web::Document, gate: &CheckinGate, config: &CheckinConfig) {
    dom::set_text(document, "status-icon", status::status_icon(gate));
    dom::set_text(document, "status-text", &status::status_text(gate));
    dom::set_class(document, "status-text", status::status_class(gate));

    match status::error_text(gate) {
        Some(message) => {
            dom::set_text(document, "error-message", &message);
            dom::show(document, "error-box");
        }
        None => dom::hide(document, "error-box"),
    }

    match gate {
        CheckinGate::Open { distance_feet } => {
            log::info!("[gate] open, {:.0} ft from target", distance_feet);
            dom::hide(document, "out-of-range");
            mount_form_frame(document, &config.form_url);
            dom::show(document, "form-section");
        }
        CheckinGate::Closed { distance_feet } => {
            log::info!(
                "[gate] closed, {:.0} ft from target (radius {:.0})",
                distance_feet,
                config.radius_feet
            );
            dom::hide(document, "form-section");
            remove_form_frame(document);
            dom::set_text(
                document,
                "out-of-range-detail",
                &status::out_of_range_detail(config.radius_feet),
            );
            dom::show(document, "out-of-range");
        }
        CheckinGate::Pending | CheckinGate::Unavailable { .. } => {
            dom::hide(document, "form-section");
            remove_form_frame(document);
            dom::hide(document, "out-of-range");
        }
    }
}

/// Create the sandboxed form iframe the first time the gate opens; later
/// opens reuse it. The external form is never fetched while out of range.
fn mount_form_frame(document: &web::Document, form_url: &str) {
    if document.get_element_by_id("form-frame").is_some() {
        return;
    }
    let slot = match document.get_element_by_id("form-slot") {
        Some(el) => el,
        None => return,
    };
    let frame = match document.create_element("iframe") {
        Ok(el) => el,
        Err(e) => {
            log::error!("[gate] could not create form frame: {:?}", e);
            return;
        }
    };
    let _ = frame.set_attribute("id", "form-frame");
    let _ = frame.set_attribute(
        "sandbox",
        "allow-scripts allow-forms allow-same-origin allow-popups",
    );
    let _ = frame.set_attribute("style", "border:0;width:100%;height:600px");
    let _ = frame.set_attribute("title", "Check-in form");
    if let Some(iframe) = frame.dyn_ref::<web::HtmlIFrameElement>() {
        iframe.set_src(form_url);
    }
    let _ = slot.append_child(&frame);
}

fn remove_form_frame(document: &web::Document) {
    if let Some(frame) = document.get_element_by_id("form-frame") {
        frame.remove();
    }
}
