// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — SVG Builder
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Minimal deterministic SVG writer. Coordinates are emitted with two
//! decimals so that identical inputs always produce byte-identical
//! documents.

use std::fmt::Write as _;

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// An SVG document under construction.
#[derive(Debug)]
pub struct SvgDoc {
    width: u32,
    height: u32,
    body: String,
}

fn fmt_coord(v: f64) -> String {
    format!("{v:.2}")
}

/// Escapes the XML special characters of text content.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl SvgDoc {
    pub fn new(width: u32, height: u32, background: &str) -> Self {
        let mut doc = Self {
            width,
            height,
            body: String::new(),
        };
        doc.rect(0.0, 0.0, width as f64, height as f64, background, None);
        doc
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: Option<&str>) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            fmt_coord(x),
            fmt_coord(y),
            fmt_coord(w),
            fmt_coord(h),
            fill
        );
        if let Some(s) = stroke {
            let _ = write!(self.body, r#" stroke="{s}""#);
        }
        self.body.push_str("/>\n");
    }

    pub fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        width: f64,
        dash: Option<&str>,
    ) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
            fmt_coord(x1),
            fmt_coord(y1),
            fmt_coord(x2),
            fmt_coord(y2),
            stroke,
            width
        );
        if let Some(d) = dash {
            let _ = write!(self.body, r#" stroke-dasharray="{d}""#);
        }
        self.body.push_str("/>\n");
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64, dash: Option<&str>) {
        if points.len() < 2 {
            return;
        }
        self.body.push_str("<polyline points=\"");
        for (i, (x, y)) in points.iter().enumerate() {
            if i > 0 {
                self.body.push(' ');
            }
            let _ = write!(self.body, "{},{}", fmt_coord(*x), fmt_coord(*y));
        }
        let _ = write!(
            self.body,
            r#"" fill="none" stroke="{stroke}" stroke-width="{width}""#
        );
        if let Some(d) = dash {
            let _ = write!(self.body, r#" stroke-dasharray="{d}""#);
        }
        self.body.push_str("/>\n");
    }

    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        anchor: Anchor,
        fill: &str,
        font_family: &str,
    ) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" text-anchor="{}" fill="{}">{}</text>"#,
            fmt_coord(x),
            fmt_coord(y),
            font_family,
            size,
            anchor.as_svg(),
            fill,
            escape(content)
        );
        self.body.push('\n');
    }

    /// Vertical text, rotated 90 degrees counter-clockwise around its
    /// anchor point.
    pub fn vtext(&mut self, x: f64, y: f64, content: &str, size: f64, fill: &str, font: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" text-anchor="middle" fill="{}" transform="rotate(-90 {} {})">{}</text>"#,
            fmt_coord(x),
            fmt_coord(y),
            font,
            size,
            fill,
            fmt_coord(x),
            fmt_coord(y),
            escape(content)
        );
        self.body.push('\n');
    }

    /// Registers a rectangular clip path under `id`.
    pub fn def_clip_rect(&mut self, id: &str, x: f64, y: f64, w: f64, h: f64) {
        let _ = write!(
            self.body,
            r#"<defs><clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
            id,
            fmt_coord(x),
            fmt_coord(y),
            fmt_coord(w),
            fmt_coord(h)
        );
        self.body.push('\n');
    }

    /// Opens a group clipped to a previously registered clip path.
    /// Always pair with [`SvgDoc::end_group`].
    pub fn begin_clipped(&mut self, id: &str) {
        let _ = write!(self.body, r##"<g clip-path="url(#{id})">"##);
        self.body.push('\n');
    }

    pub fn end_group(&mut self) {
        self.body.push_str("</g>\n");
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            self.width, self.height, self.width, self.height, self.body
        )
    }
}
