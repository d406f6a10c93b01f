//! Generated element lists.

/// Element names `e0`, `e1`, ... `e{n-1}`.
pub fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("e{i}")).collect()
}

/// `e0, e1, ..., e{n-1}` as source text.
pub fn numbered_elements(n: usize) -> String {
    numbered(n).join(", ")
}

/// `transformation, e0, ..., e{n-1}` as source text.
pub fn numbered_invocation(transformation: &str, n: usize) -> String {
    if n == 0 {
        transformation.to_string()
    } else {
        format!("{}, {}", transformation, numbered_elements(n))
    }
}
