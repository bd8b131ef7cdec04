// src/views/background.rs
//
// A simple module to manage background state

use nannou::prelude::*;

use crate::services::parse_color;

pub struct BackgroundManager {
    current_color: Rgb<f32>,
}

impl Default for BackgroundManager {
    fn default() -> Self {
        Self {
            current_color: rgb(0.0, 0.0, 0.0),
        }
    }
}

impl BackgroundManager {
    pub fn new(spec: &str) -> Self {
        let mut manager = Self::default();
        manager.set_color(spec);
        manager
    }

    pub fn set_color(&mut self, spec: &str) {
        match parse_color(spec) {
            Some(color) => self.current_color = color,
            None => println!("Unrecognized background color '{}', keeping current", spec),
        }
    }

    pub fn draw(&self, draw: &Draw) {
        draw.background().color(self.current_color);
    }

    pub fn get_current_color(&self) -> Rgb<f32> {
        self.current_color
    }
}
