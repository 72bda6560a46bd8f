//! SVG rendering of a meme canvas.
//!
//! Replays the draw effects produced by [`dispatch`](crate::dispatch) onto an
//! SVG document the size of the canvas. Useful for previews, snapshot tests,
//! and hosts without a raster canvas. Images are drawn as labelled
//! placeholder rectangles since the effects carry no pixel data.
//!
//! # Example
//!
//! ```
//! use memelayout::{AppState, Event, Size, dispatch, svg::render_effects_svg};
//!
//! let state = AppState::new(Size::new(400, 400));
//! let step = dispatch(&state, Event::ImageSelected {
//!     file_name: "cat.png".into(),
//!     width: 800,
//!     height: 400,
//! })
//! .unwrap();
//!
//! let svg = render_effects_svg(state.canvas, &step.effects);
//! assert!(svg.contains(r#"y="100.0" width="400.0" height="200.0""#));
//! ```

use crate::app::Effect;
use crate::fit::Size;

/// Font size used for the placeholder label inside an image rect.
const LABEL_PX: f64 = 12.0;

/// Render draw effects, in order, into a complete SVG document.
///
/// [`Effect::ClearCanvas`] discards everything drawn before it. Effects that
/// do not draw (controls, speech, voice lists) are ignored.
pub fn render_effects_svg(canvas: Size, effects: &[Effect]) -> String {
    let mut body = String::with_capacity(1024);

    for effect in effects {
        match effect {
            Effect::ClearCanvas => body.clear(),
            Effect::FillCanvas(color) => {
                body.push_str(&format!(
                    r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
                    canvas.width,
                    canvas.height,
                    color.css()
                ));
                body.push('\n');
            }
            Effect::DrawImage {
                file_name,
                placement,
            } => {
                body.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="image"/>"#,
                    placement.start_x, placement.start_y, placement.width, placement.height
                ));
                body.push('\n');
                body.push_str(&format!(
                    r#"<text x="{:.1}" y="{:.1}" class="image-label" text-anchor="middle">{}</text>"#,
                    placement.start_x + placement.width / 2.0,
                    placement.start_y + placement.height / 2.0 + LABEL_PX / 2.0,
                    escape_xml(file_name)
                ));
                body.push('\n');
            }
            Effect::StrokeText { text, at, style } => {
                body.push_str(&format!(
                    r#"<text x="{:.1}" y="{:.1}" style="font: {}" text-anchor="{}" fill="none" stroke="{}">{}</text>"#,
                    at.x,
                    at.y,
                    escape_xml(&style.font().to_string()),
                    style.align.text_anchor(),
                    style.stroke.css(),
                    escape_xml(text)
                ));
                body.push('\n');
            }
            Effect::SetControls(_)
            | Effect::SetImageAlt(_)
            | Effect::ShowVoiceOptions(_)
            | Effect::SetVolumeIcon(_)
            | Effect::Speak(_) => {}
        }
    }

    let mut svg = String::with_capacity(body.len() + 512);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    ));
    svg.push('\n');
    svg.push_str(
        r##"<style>
  .image { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .image-label { font-family: "DejaVu Sans Mono", monospace; font-size: 12px; fill: #fff; }
</style>
"##,
    );
    svg.push_str(&body);
    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppState, Event, dispatch};
    use crate::style::Color;

    fn meme(top: &str, bottom: &str) -> (AppState, Vec<Effect>) {
        let state = AppState::new(Size::new(400, 300));
        let t = dispatch(
            &state,
            Event::ImageSelected {
                file_name: "pic.png".into(),
                width: 200,
                height: 800,
            },
        )
        .unwrap();
        let mut effects = t.effects;
        let t = dispatch(
            &t.state,
            Event::FormSubmitted {
                top: top.into(),
                bottom: bottom.into(),
            },
        )
        .unwrap();
        effects.extend(t.effects);
        (t.state, effects)
    }

    #[test]
    fn empty_canvas() {
        let svg = render_effects_svg(Size::new(10, 20), &[]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="10" height="20""#));
        assert!(svg.ends_with("</svg>\n"));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn full_meme() {
        let (state, effects) = meme("TOP", "BOTTOM");
        let svg = render_effects_svg(state.canvas, &effects);
        assert!(svg.contains(r##"width="400" height="300" fill="#000000""##));
        assert!(svg.contains(r#"x="162.5" y="0.0" width="75.0" height="300.0""#));
        assert!(svg.contains(">pic.png</text>"));
        assert!(svg.contains(r#"x="200.0" y="50.0" style="font: 50px arial""#));
        assert!(svg.contains(r##"stroke="#ffffff">TOP</text>"##));
        assert!(svg.contains(r#"y="270.0""#));
    }

    #[test]
    fn one_element_per_line() {
        let (state, effects) = meme("A", "B");
        let svg = render_effects_svg(state.canvas, &effects);
        let body: Vec<&str> = svg
            .lines()
            .skip_while(|l| *l != "</style>")
            .skip(1)
            .collect();
        assert_eq!(body.len(), 6);
        assert!(body[..5].iter().all(|l| l.starts_with('<') && l.ends_with('>')));
        assert_eq!(body[5], "</svg>");
    }

    #[test]
    fn clear_discards_earlier_drawing() {
        let effects = [
            Effect::FillCanvas(Color::white()),
            Effect::ClearCanvas,
            Effect::FillCanvas(Color::black()),
        ];
        let svg = render_effects_svg(Size::new(5, 5), &effects);
        assert!(!svg.contains("#ffffff"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn caption_text_is_escaped() {
        let (state, effects) = meme("<b>&", "\"q\"");
        let svg = render_effects_svg(state.canvas, &effects);
        assert!(svg.contains("&lt;b&gt;&amp;"));
        assert!(svg.contains("&quot;q&quot;"));
        assert!(!svg.contains("<b>"));
    }
}
