use vidctl_core::ControlState;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// True when the event landed on a control the user types into: a text
/// input, a textarea, or any element with editable content. Media
/// state must never change while the user is typing.
pub fn is_editable_target(target: Option<web::EventTarget>) -> bool {
    let Some(target) = target else {
        return false;
    };
    let Some(el) = target.dyn_ref::<web::Element>() else {
        return false;
    };
    let tag = el.local_name();
    if tag == "input" || tag == "textarea" {
        return true;
    }
    el.dyn_ref::<web::HtmlElement>()
        .map(|h| h.is_content_editable())
        .unwrap_or(false)
}

/// First video on the page that is playing, not ended, and has decoded
/// enough data to report meaningful state (`readyState > 2`).
pub fn find_active_video(document: &web::Document) -> Option<web::HtmlVideoElement> {
    let videos = document.get_elements_by_tag_name("video");
    for i in 0..videos.length() {
        let Some(el) = videos.item(i) else {
            continue;
        };
        let Ok(video) = el.dyn_into::<web::HtmlVideoElement>() else {
            continue;
        };
        if !video.paused() && !video.ended() && video.ready_state() > 2 {
            return Some(video);
        }
    }
    None
}

/// Push the control state onto the element: playback rate plus the
/// saturation CSS filter.
pub fn apply_control_state(state: &ControlState, video: &web::HtmlVideoElement) {
    video.set_playback_rate(state.speed);
    _ = video
        .style()
        .set_property("filter", &format!("saturate({})", state.saturation));
}
