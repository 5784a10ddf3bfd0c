pub mod product_code;

/// Request structs are `rename_all = "camelCase"`; validation errors are
/// keyed by the Rust field name, so report them under the JSON key instead.
pub fn json_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }

    name
}
