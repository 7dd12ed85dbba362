//! Minimal SVG accumulator for the calendar images.
//!
//! Elements are kept in insertion order and serialized once; nothing is
//! updated in place.

use crate::core::layout::{CELL_SIZE, Canvas};

/// Fill of the month labels.
pub const TEXT_STYLE: &str = "text { fill: #8b949e; font-family: sans-serif; font-size: 12px; }";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Element {
    Cell {
        x: u32,
        y: u32,
        fill: String,
        title: String,
    },
    Text {
        x: u32,
        y: u32,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgImage {
    canvas: Canvas,
    elements: Vec<Element>,
}

/// Fresh, empty image for the given canvas.
pub fn new_image(canvas: Canvas) -> SvgImage {
    SvgImage {
        canvas,
        elements: Vec::new(),
    }
}

impl SvgImage {
    /// Append one day square with its tooltip.
    pub fn push_cell(&mut self, x: u32, y: u32, fill: &str, title: &str) {
        self.elements.push(Element::Cell {
            x,
            y,
            fill: fill.to_string(),
            title: title.to_string(),
        });
    }

    pub fn push_text(&mut self, x: u32, y: u32, text: &str) {
        self.elements.push(Element::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    pub fn cell_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Cell { .. }))
            .count()
    }

    pub fn text_count(&self) -> usize {
        self.elements.len() - self.cell_count()
    }

    /// Fill of the cell whose tooltip is `title`, if any.
    pub fn fill_for(&self, title: &str) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            Element::Cell { fill, title: t, .. } if t == title => Some(fill.as_str()),
            _ => None,
        })
    }

    pub fn to_svg(&self) -> String {
        let Canvas { width, height } = self.canvas;
        let mut s = String::new();

        s.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
        s.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" style=\"background: transparent\">\n"
        ));
        s.push_str(&format!(
            "<defs><style type=\"text/css\">{TEXT_STYLE}</style></defs>\n"
        ));

        for e in &self.elements {
            match e {
                Element::Cell { x, y, fill, title } => {
                    s.push_str(&format!(
                        "<rect x=\"{x}\" y=\"{y}\" width=\"{CELL_SIZE}\" height=\"{CELL_SIZE}\" fill=\"{}\"><title>{}</title></rect>\n",
                        svg_escape(fill),
                        svg_escape(title)
                    ));
                }
                Element::Text { x, y, text } => {
                    s.push_str(&format!(
                        "<text x=\"{x}\" y=\"{y}\">{}</text>\n",
                        svg_escape(text)
                    ));
                }
            }
        }

        s.push_str("</svg>\n");
        s
    }
}

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
