use crate::constants::{
    mute_label, HELP_ELEMENT_ID, MUTE_BUTTON_ID, VOLUME_SLIDER_ID, VOLUME_SLIDER_MAX,
};
use deepdive_core::HudMode;
use web_sys as web;

const AUDIO_CONTROLS_STYLE: &str =
    "position: absolute; top: 20px; right: 20px; color: white; font-family: Arial;";

/// Rewrite the navigation help box for the current mode. No-op when the
/// page has no help element.
#[inline]
pub fn update_help(document: &web::Document, mode: HudMode) {
    if let Some(el) = document.get_element_by_id(HELP_ELEMENT_ID) {
        let html: String = mode
            .lines()
            .iter()
            .map(|line| format!("<div>{}</div>", line))
            .collect();
        el.set_inner_html(&html);
    }
}

/// Append the mute button and volume slider to the page body.
pub fn build_audio_controls(document: &web::Document, volume: f32) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let root = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let value = (volume as f64 * VOLUME_SLIDER_MAX).round();
    root.set_inner_html(&format!(
        concat!(
            r#"<div style="{}"><button id="{}">{}</button>"#,
            r#"<input id="{}" type="range" min="0" max="{}" value="{}"></div>"#,
        ),
        AUDIO_CONTROLS_STYLE,
        MUTE_BUTTON_ID,
        mute_label(false),
        VOLUME_SLIDER_ID,
        VOLUME_SLIDER_MAX,
        value
    ));
    body.append_child(&root)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(())
}

#[inline]
pub fn set_mute_label(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id(MUTE_BUTTON_ID) {
        el.set_text_content(Some(mute_label(muted)));
    }
}
