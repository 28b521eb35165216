use std::fmt::Write as _;

use crate::{
    foundation::core::{Affine, Canvas, Size},
    render::presenter::{GeometryWrite, Placement, Presenter},
    slides::content::VisualContent,
    transform::engine::InstanceTransform,
};

/// Presenter that composes each frame into a standalone SVG document.
#[derive(Clone, Debug)]
pub struct SvgScene {
    canvas: Canvas,
    fill: String,
    background: Option<String>,
    body: String,
    frames: Vec<String>,
}

impl SvgScene {
    /// Scene for `canvas` drawing vector content with `fill`.
    pub fn new(canvas: Canvas, fill: impl Into<String>) -> Self {
        Self {
            canvas,
            fill: fill.into(),
            background: None,
            body: String::new(),
            frames: Vec::new(),
        }
    }

    /// Paint a solid background rectangle behind every frame.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Completed frame documents, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Remove and return completed frames.
    pub fn take_frames(&mut self) -> Vec<String> {
        std::mem::take(&mut self.frames)
    }

    fn open_group(&mut self, transform: &InstanceTransform, content_size: Size) {
        let m = affine_attr(transform.to_affine(self.canvas, content_size));
        let _ = write!(
            self.body,
            r#"<g transform="{m}" opacity="{}">"#,
            transform.clamped_opacity()
        );
    }
}

fn affine_attr(a: Affine) -> String {
    let [a, b, c, d, e, f] = a.as_coeffs();
    format!("matrix({a} {b} {c} {d} {e} {f})")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

impl Presenter for SvgScene {
    fn begin_frame(&mut self) {
        self.body.clear();
    }

    fn place(&mut self, placement: &Placement<'_>) {
        self.open_group(&placement.transform, placement.content.size());
        match placement.content {
            VisualContent::Vector(v) => {
                let _ = write!(
                    self.body,
                    r#"<path d="{}" fill="{}"/>"#,
                    escape_attr(&v.path_d),
                    escape_attr(&self.fill)
                );
            }
            VisualContent::Image(img) => {
                let _ = write!(
                    self.body,
                    r#"<image href="{}" width="{}" height="{}"/>"#,
                    escape_attr(&img.source.to_string_lossy()),
                    img.width,
                    img.height
                );
            }
        }
        self.body.push_str("</g>");
    }

    fn write_geometry(&mut self, write: &GeometryWrite<'_>) {
        self.open_group(&write.transform, write.view_box.size());
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="{}"/>"#,
            escape_attr(write.path_d),
            escape_attr(&self.fill)
        );
        self.body.push_str("</g>");
    }

    fn end_frame(&mut self) {
        let (w, h) = (self.canvas.width, self.canvas.height);
        let background = self
            .background
            .as_deref()
            .map(|c| format!(r#"<rect width="{w}" height="{h}" fill="{}"/>"#, escape_attr(c)))
            .unwrap_or_default();
        self.frames.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{background}{}</svg>"#,
            self.body
        ));
        self.body.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
