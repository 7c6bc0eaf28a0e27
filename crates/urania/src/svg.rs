//! SVG serialization of a [`ChartSpec`].

use crate::rendering::primitives::{Color, Shape, Stroke, TextAnchor};
use crate::rendering::ChartSpec;
use std::fmt::Write;

/// XML 1.0 `Char`: tab, newline, carriage return and the non-control planes.
fn is_valid_xml_char(c: char) -> bool {
    matches!(
        c as u32,
        0x09 | 0x0A | 0x0D | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF
    )
}

/// Escape markup and drop characters XML cannot carry.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if !is_valid_xml_char(c) {
            continue;
        }
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn paint_attrs(attr: &str, color: Color) -> String {
    if color.a == 255 {
        format!(r#"{attr}="{}""#, color.to_hex())
    } else {
        format!(
            r#"{attr}="{}" {attr}-opacity="{:.3}""#,
            color.to_hex(),
            color.opacity()
        )
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut out = format!(
        r#"{} stroke-width="{:.2}""#,
        paint_attrs("stroke", stroke.color),
        stroke.width
    );
    if let Some(dash) = &stroke.dash_array {
        let dash: Vec<String> = dash.iter().map(|d| format!("{d}")).collect();
        let _ = write!(out, r#" stroke-dasharray="{}""#, dash.join(" "));
    }
    out
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

/// Render the spec as a standalone SVG document.
///
/// Bodies are emitted as `<g class="entity" data-index="…">` groups so a
/// host page can attach click handlers.
pub fn render(spec: &ChartSpec) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = spec.width,
        h = spec.height
    );
    svg.push_str(concat!(
        r#"<defs><filter id="glow" x="-20%" y="-20%" width="140%" height="140%">"#,
        r#"<feGaussianBlur stdDeviation="2" result="blur"/>"#,
        r#"<feComposite in="SourceGraphic" in2="blur" operator="over"/>"#,
        "</filter></defs>\n"
    ));

    for shape in &spec.shapes {
        write_shape(&mut svg, shape);
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_shape(svg: &mut String, shape: &Shape) {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let fill = fill
                .map(|c| paint_attrs("fill", c))
                .unwrap_or_else(|| r#"fill="none""#.to_string());
            let stroke = stroke.as_ref().map(stroke_attrs).unwrap_or_default();
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" {} {}/>"#,
                center.x, center.y, radius, fill, stroke
            );
        }
        Shape::Line { from, to, stroke } => {
            let _ = writeln!(
                svg,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                stroke_attrs(stroke)
            );
        }
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
            bold,
        } => {
            let weight = if *bold { r#" font-weight="bold""# } else { "" };
            let _ = writeln!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" dominant-baseline="middle" font-size="{}"{} {}>{}</text>"#,
                position.x,
                position.y,
                anchor_attr(*anchor),
                size,
                weight,
                paint_attrs("fill", *color),
                escape_xml(content)
            );
        }
        Shape::EntityGlyph {
            index,
            center,
            glyph,
            color,
            disc_fill,
            disc_radius,
            font_size,
            selected,
        } => {
            let class = if *selected { "entity selected" } else { "entity" };
            let stroke_width = if *selected { 2 } else { 1 };
            let _ = writeln!(svg, r#"<g class="{class}" data-index="{index}">"#);
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                center.x,
                center.y,
                disc_radius,
                disc_fill.to_hex(),
                color.to_hex(),
                stroke_width
            );
            let _ = writeln!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" dy="1" text-anchor="middle" dominant-baseline="middle" font-size="{}" font-weight="bold" fill="{}" filter="url(#glow)">{}</text>"#,
                center.x,
                center.y,
                font_size,
                color.to_hex(),
                escape_xml(glyph)
            );
            svg.push_str("</g>\n");
        }
    }
}
