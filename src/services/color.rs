// src/services/color.rs
// Color spec parsing for overlay and background styles.
// Accepted forms: #rgb, #rrggbb, rgb(r, g, b), and a small named table.

use nannou::prelude::*;

pub fn parse_color(spec: &str) -> Option<Rgb<f32>> {
    let spec = spec.trim();
    parse_hex(spec)
        .or_else(|| parse_rgb_call(spec))
        .or_else(|| parse_named(spec))
}

/// Rendered alpha: an opacity of 50 maps to 0.5.
pub fn with_opacity(color: Rgb<f32>, opacity: f32) -> Rgba<f32> {
    rgba(color.red, color.green, color.blue, opacity / 100.0)
}

fn parse_hex(spec: &str) -> Option<Rgb<f32>> {
    let re = regex::Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").ok()?;
    let caps = re.captures(spec)?;
    let digits = caps.get(1)?.as_str();

    let (r, g, b) = if digits.len() == 3 {
        // #abc is shorthand for #aabbcc
        let r = u8::from_str_radix(&digits[0..1], 16).ok()?;
        let g = u8::from_str_radix(&digits[1..2], 16).ok()?;
        let b = u8::from_str_radix(&digits[2..3], 16).ok()?;
        (r * 17, g * 17, b * 17)
    } else {
        (
            u8::from_str_radix(&digits[0..2], 16).ok()?,
            u8::from_str_radix(&digits[2..4], 16).ok()?,
            u8::from_str_radix(&digits[4..6], 16).ok()?,
        )
    };

    Some(channels_to_rgb(r, g, b))
}

fn parse_rgb_call(spec: &str) -> Option<Rgb<f32>> {
    let re =
        regex::Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").ok()?;
    let caps = re.captures(spec)?;

    let mut channels = [0u8; 3];
    for (slot, capture) in channels.iter_mut().zip(1usize..=3) {
        let value: u32 = caps.get(capture)?.as_str().parse().ok()?;
        if value > 255 {
            return None;
        }
        *slot = value as u8;
    }

    Some(channels_to_rgb(channels[0], channels[1], channels[2]))
}

fn parse_named(spec: &str) -> Option<Rgb<f32>> {
    let (r, g, b) = match spec.to_ascii_lowercase().as_str() {
        "white" => (255, 255, 255),
        "black" => (0, 0, 0),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "cyan" => (0, 255, 255),
        "magenta" => (255, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "gray" | "grey" => (128, 128, 128),
        _ => return None,
    };
    Some(channels_to_rgb(r, g, b))
}

fn channels_to_rgb(r: u8, g: u8, b: u8) -> Rgb<f32> {
    rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}
