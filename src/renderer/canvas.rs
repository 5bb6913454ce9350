//! Browser canvas backend (`CanvasRenderingContext2d`)

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    font: String,
}

impl CanvasSurface {
    /// Grab the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement, font: &str) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            font: font.to_string(),
        })
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(&self.font);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
