use super::Rejection;
use crate::{FieldCursor, NotificationSink, StateSink, MAX_MESSAGE_LEN};

/// `$SOARIM,<text>*cc` — free text for the pilot, commas included.
pub(super) fn decode(
    line: &mut FieldCursor<'_>,
    _state: &mut dyn StateSink,
    notify: &mut dyn NotificationSink,
) -> Result<(), Rejection> {
    notify.add_message(truncate(line.rest(), MAX_MESSAGE_LEN));
    Ok(())
}

/// Cuts `text` down to at most `max` bytes, on a char boundary.
fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }

    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}
