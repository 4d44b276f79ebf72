use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::raster::Polygon;
use crate::error::{LandingError, LandingResult};

pub fn context_2d(canvas: &HtmlCanvasElement) -> LandingResult<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")?
        .ok_or(LandingError::NoCanvasContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| LandingError::NoCanvasContext)
}

/// Resizes the backing store to the element's layout size times
/// `pixel_ratio`. Returns the layout size in CSS pixels.
pub fn fit_to_element(canvas: &HtmlCanvasElement, pixel_ratio: f64) -> (f64, f64) {
    let width = f64::from(canvas.client_width().max(0));
    let height = f64::from(canvas.client_height().max(0));

    let backing_width = (width * pixel_ratio).round() as u32;
    let backing_height = (height * pixel_ratio).round() as u32;
    if canvas.width() != backing_width {
        canvas.set_width(backing_width);
    }
    if canvas.height() != backing_height {
        canvas.set_height(backing_height);
    }
    (width, height)
}

pub fn paint(
    ctx: &CanvasRenderingContext2d,
    polygons: &[Polygon],
    width: f64,
    height: f64,
    pixel_ratio: f64,
) -> LandingResult<()> {
    ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_line_width(0.5);
    ctx.set_line_join("round");

    for polygon in polygons {
        let Some(([x0, y0], rest)) = polygon.points.split_first() else {
            continue;
        };
        ctx.begin_path();
        ctx.move_to(*x0, *y0);
        for [x, y] in rest {
            ctx.line_to(*x, *y);
        }
        ctx.close_path();

        let fill = polygon.fill.to_css();
        ctx.set_fill_style_str(&fill);
        ctx.fill();
        // Hairline in the face colour hides anti-aliasing seams between faces.
        ctx.set_stroke_style_str(&fill);
        ctx.stroke();
    }
    Ok(())
}
