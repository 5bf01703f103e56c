//! Canvas 2D renderer

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::{BodyKind, Sprite, Stage};
use crate::ui::{Anchor, Display, Widget};

/// Sprite images, loaded by the browser in the background
struct Images {
    sky: Option<HtmlImageElement>,
    whale: Option<HtmlImageElement>,
    bear: Option<HtmlImageElement>,
}

fn load_image(src: &str) -> Option<HtmlImageElement> {
    let img = HtmlImageElement::new().ok()?;
    img.set_src(src);
    Some(img)
}

/// Usable once decoded
fn ready(img: &Option<HtmlImageElement>) -> Option<&HtmlImageElement> {
    img.as_ref().filter(|i| i.complete() && i.natural_width() > 0)
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    images: Images,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            images: Images {
                sky: load_image("assets/sky-background.png"),
                whale: load_image("assets/whale.png"),
                bear: load_image("assets/bear-obstacle.png"),
            },
        })
    }

    /// Draw one frame. The world layer is only shown during a run.
    pub fn render(&self, stage: &dyn Stage, display: &Display, draw_world: bool) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("#000");
        ctx.fill_rect(0.0, 0.0, WORLD_WIDTH as f64, WORLD_HEIGHT as f64);

        if draw_world {
            self.draw_background(stage.background_offset());
            for sprite in stage.sprites() {
                self.draw_sprite(&sprite);
            }
        }

        for widget in display.widgets() {
            self.draw_widget(widget);
        }
    }

    fn draw_background(&self, offset: f32) {
        let ctx = &self.ctx;
        let Some(sky) = ready(&self.images.sky) else {
            ctx.set_fill_style_str("#87ceeb");
            ctx.fill_rect(0.0, 0.0, WORLD_WIDTH as f64, WORLD_HEIGHT as f64);
            return;
        };

        // Tile horizontally, scrolled left by the offset
        let w = WORLD_WIDTH as f64;
        let shift = (offset as f64).rem_euclid(w);
        for i in 0..2 {
            let x = i as f64 * w - shift;
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                sky,
                x,
                0.0,
                w,
                WORLD_HEIGHT as f64,
            );
        }
    }

    fn draw_sprite(&self, sprite: &Sprite) {
        let ctx = &self.ctx;
        let x = (sprite.pos.x - sprite.size.x / 2.0) as f64;
        let y = (sprite.pos.y - sprite.size.y / 2.0) as f64;
        let (w, h) = (sprite.size.x as f64, sprite.size.y as f64);

        let image = match sprite.kind {
            BodyKind::Player => ready(&self.images.whale),
            BodyKind::Obstacle => ready(&self.images.bear),
        };
        match image {
            Some(img) => {
                let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h);
            }
            None => {
                ctx.set_fill_style_str(match sprite.kind {
                    BodyKind::Player => "#3a7bd5",
                    BodyKind::Obstacle => "#8b5a2b",
                });
                ctx.fill_rect(x, y, w, h);
            }
        }

        if let Some(tint) = sprite.tint {
            let _ = ctx.set_global_composite_operation("multiply");
            ctx.set_fill_style_str(&format!("#{:06x}", tint));
            ctx.fill_rect(x, y, w, h);
            let _ = ctx.set_global_composite_operation("source-over");
        }
    }

    fn draw_widget(&self, widget: &Widget) {
        let ctx = &self.ctx;
        let size = widget.style.font_size as f64;
        ctx.set_font(&format!("{}px sans-serif", size));
        ctx.set_text_baseline("middle");

        // Same box the hit test uses
        let (min, max) = widget.bounds();
        let (x, y) = (min.x as f64, min.y as f64);
        let (width, height) = ((max.x - min.x) as f64, (max.y - min.y) as f64);

        if let Some(bg) = widget.style.background {
            ctx.set_fill_style_str(bg);
            ctx.fill_rect(x, y, width, height);
        }
        ctx.set_fill_style_str(widget.style.color);
        let mid_y = y + height / 2.0;
        let _ = match widget.anchor {
            Anchor::TopLeft => {
                ctx.set_text_align("left");
                ctx.fill_text(&widget.text, x, mid_y)
            }
            Anchor::Center => {
                ctx.set_text_align("center");
                ctx.fill_text(&widget.text, x + width / 2.0, mid_y)
            }
        };
    }
}
