//! Property names → output attribute names.

/// Convert a hyphenated property name to medial-capital form:
/// `background-color` → `backgroundColor`, `-webkit-box` → `WebkitBox`.
pub fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper = false;

    for c in property.trim().chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}
