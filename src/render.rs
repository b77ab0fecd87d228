use crate::point::LabeledPoint;

// Format a point as an ASCII glyph for the terminal: one character per
// pixel, width pixels per row, '#' where the pixel is lit. The final line
// names the true label. Only needs coordinate access, so it works for any
// width that divides the point's dimensionality.
pub fn render_glyph(point: &LabeledPoint, width: usize) -> String {
    let mut out = String::with_capacity(point.dims() + point.dims() / width + 16);
    for i in 0..point.dims() {
        out.push(if point.get(i) > 0.0 { '#' } else { ' ' });
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out.push_str(&format!("Label: {}", point.label()));
    out
}
