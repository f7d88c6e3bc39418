use super::Rejection;
use crate::{units, FieldCursor, NotificationSink, StateSink};

/// `$PZAN2,<true airspeed km/h>,<vario>*cc`
///
/// The raw vario value is offset by 10000 and scaled by 100, so 10500 is a
/// 5 m/s climb and 9750 a 2.5 m/s sink. Both fields are optional.
pub(super) fn decode(
    line: &mut FieldCursor<'_>,
    state: &mut dyn StateSink,
    _notify: &mut dyn NotificationSink,
) -> Result<(), Rejection> {
    if let Some(vtas) = line.read_f64() {
        state.provide_true_airspeed(units::km_h_to_m_s(vtas));
    }

    if let Some(wnet) = line.read_f64() {
        state.provide_total_energy_vario((wnet - 10000.0) / 100.0);
    }

    Ok(())
}
