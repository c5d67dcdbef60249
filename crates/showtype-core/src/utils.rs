/// Strip the namespace from a class identifier.
///
/// Returns the trailing run of identifier characters (alphanumeric or `_`).
/// Identifiers without such a tail are returned unchanged.
///
/// # Examples
/// ```
/// use showtype_core::utils::short_class_name;
/// assert_eq!(short_class_name("App\\Model\\User"), "User");
/// assert_eq!(short_class_name("\\Closure"), "Closure");
/// assert_eq!(short_class_name("fn-array_map"), "array_map");
/// ```
pub fn short_class_name(class_id: &str) -> &str {
    let start = class_id
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_identifier_char(*c))
        .last()
        .map(|(i, _)| i);

    match start {
        Some(i) => &class_id[i..],
        None => class_id,
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
