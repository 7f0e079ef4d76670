//! UTF-8 aware editing helpers for the prompt buffers.

/// Byte position of the previous character boundary, 0 at the start.
pub fn prev_char_boundary(buffer: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let pos = pos.min(buffer.len());
    let mut prev = pos - 1;
    while prev > 0 && !buffer.is_char_boundary(prev) {
        prev -= 1;
    }
    prev
}

/// Remove the last character of the buffer, multi-byte safe.
pub fn delete_char(buffer: &mut String) {
    buffer.pop();
}

/// Remove trailing whitespace plus the last word of the buffer.
pub fn delete_word(buffer: &mut String) {
    let mut pos = buffer.len();

    while pos > 0 {
        let prev = prev_char_boundary(buffer, pos);
        if let Some(ch) = buffer[prev..pos].chars().next()
            && !ch.is_whitespace()
        {
            break;
        }
        pos = prev;
    }

    while pos > 0 {
        let prev = prev_char_boundary(buffer, pos);
        if let Some(ch) = buffer[prev..pos].chars().next()
            && ch.is_whitespace()
        {
            break;
        }
        pos = prev;
    }

    buffer.truncate(pos);
}
