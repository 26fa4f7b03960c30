use std::borrow::Cow;

/// First `max_chars` characters of `name`, with an ellipsis when anything was cut.
pub fn short_label(name: &str, max_chars: usize) -> Cow<'_, str> {
    match name.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &name[..cut])),
        None => Cow::Borrowed(name),
    }
}
