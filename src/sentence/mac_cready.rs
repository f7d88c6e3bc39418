use super::Rejection;
use crate::{FieldCursor, NotificationSink, StateSink};

/// `$PZAN4,1.5,+,20,39,45*cc` — only the MacCready value is of interest; the
/// remaining fields are ignored.
pub(super) fn decode(
    line: &mut FieldCursor<'_>,
    state: &mut dyn StateSink,
    _notify: &mut dyn NotificationSink,
) -> Result<(), Rejection> {
    if let Some(mc) = line.read_f64() {
        let time = state.clock();
        state.provide_mac_cready(mc, time);
    }

    Ok(())
}
