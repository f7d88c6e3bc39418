use super::Rejection;
use crate::{FieldCursor, FlightMode, NotificationSink, StateSink};

/// `$PZAN5,VA,MUEHL,123.4,KM,T,234*cc` — the first field is the switch state
/// code; the navigation fields after it are ignored.
pub(super) fn decode(
    line: &mut FieldCursor<'_>,
    state: &mut dyn StateSink,
    _notify: &mut dyn NotificationSink,
) -> Result<(), Rejection> {
    state.provide_flight_mode(FlightMode::from_code(line.read()));
    Ok(())
}
