//! A-Frame attribute string formatting.
//!
//! The host framework takes component values as `key: value; key: value`
//! strings and vectors as space separated triples.

use crate::command::{AnimTarget, Animation, Easing, Material, Shader, Side};
use glam::Vec3;
use smallvec::SmallVec;

#[inline]
pub fn format_vec3(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

pub fn parse_vec3(s: &str) -> Option<Vec3> {
    let mut it = s.split_whitespace().map(|p| p.parse::<f32>());
    let x = it.next()?.ok()?;
    let y = it.next()?.ok()?;
    let z = it.next()?.ok()?;
    if it.next().is_some() {
        return None;
    }
    Some(Vec3::new(x, y, z))
}

pub fn easing_name(easing: Easing) -> &'static str {
    match easing {
        Easing::EaseInQuad => "easeInQuad",
        Easing::EaseInOutQuad => "easeInOutQuad",
        Easing::EaseOutElastic => "easeOutElastic",
    }
}

fn format_target(to: AnimTarget) -> String {
    match to {
        AnimTarget::Vec3(v) => format_vec3(v),
        AnimTarget::Scalar(s) => s.to_string(),
    }
}

pub fn animation_attr(anim: &Animation) -> String {
    let mut parts: SmallVec<[String; 6]> = SmallVec::new();
    parts.push(format!("property: {}", anim.property));
    parts.push(format!("to: {}", format_target(anim.to)));
    parts.push(format!("dur: {}", anim.dur_ms));
    parts.push(format!("easing: {}", easing_name(anim.easing)));
    if anim.looped {
        parts.push("loop: true".to_string());
    }
    if anim.alternate {
        parts.push("dir: alternate".to_string());
    }
    parts.join("; ")
}

pub fn material_attr(m: &Material) -> String {
    let mut parts: SmallVec<[String; 8]> = SmallVec::new();
    if let Some(shader) = m.shader {
        let name = match shader {
            Shader::Standard => "standard",
            Shader::Flat => "flat",
        };
        parts.push(format!("shader: {}", name));
    }
    if let Some(src) = m.src {
        parts.push(format!("src: {}", src));
    }
    if let Some(color) = m.color {
        parts.push(format!("color: {}", color));
    }
    if m.transparent {
        parts.push("transparent: true".to_string());
    }
    if let Some(opacity) = m.opacity {
        parts.push(format!("opacity: {}", opacity));
    }
    if let Some(side) = m.side {
        let name = match side {
            Side::Front => "front",
            Side::Back => "back",
            Side::Double => "double",
        };
        parts.push(format!("side: {}", name));
    }
    if let Some(metalness) = m.metalness {
        parts.push(format!("metalness: {}", metalness));
    }
    if let Some(roughness) = m.roughness {
        parts.push(format!("roughness: {}", roughness));
    }
    parts.join("; ")
}
