//! Small presentation helpers shared by the view layers.

/// Format an amount with a currency symbol and two decimals: `$1200.99`.
pub fn currency(amount: f64, symbol: &str) -> String {
    format!("{symbol}{amount:.2}")
}

/// Inline style that pins an element absolutely at the given edges,
/// e.g. `[("bottom", "5px"), ("right", "5px")]`.
pub fn pin_style(edges: &[(&str, &str)]) -> String {
    let mut style = String::from("position: absolute;");
    for (edge, offset) in edges {
        style.push_str(&format!(" {edge}: {offset};"));
    }
    style
}
