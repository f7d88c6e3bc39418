use super::Rejection;
use crate::{units, FieldCursor, NotificationSink, StateSink, Wind};

/// `$PZAN3` — external wind, in two firmware generations without a version
/// marker:
///
/// - old: `$PZAN3,+,026,V,321,035,A,321,035,V*cc`
/// - new: `$PZAN3,+,026,A,321,035,V[,A]*cc`
///
/// Direction and speed are mandatory; which of the trailing fields is the
/// validity flag depends on the dialect and is resolved by lookahead. A `V,V`
/// tail means no usable wind at all. A first `V` followed by something other
/// than a flag character belongs to the longer old-dialect tail; skip one
/// field and read the flag after it. Keep the branch order as is: not every
/// shipped firmware's tail layout is documented, only that this resolution
/// handles them.
pub(super) fn decode(
    line: &mut FieldCursor<'_>,
    state: &mut dyn StateSink,
    _notify: &mut dyn NotificationSink,
) -> Result<(), Rejection> {
    line.skip(3);

    let direction = line.read_i32().ok_or(Rejection::MissingField)?;
    let speed = line.read_i32().ok_or(Rejection::MissingField)?;

    let mut okay = line.read_first_char();
    if okay == Some('V') {
        okay = line.read_first_char();
        if okay == Some('V') {
            return Ok(());
        }

        if okay != Some('A') {
            line.skip(1);
            okay = line.read_first_char();
        }
    }

    if okay == Some('A') {
        state.provide_external_wind(Wind::new(
            f64::from(direction),
            units::km_h_to_m_s(f64::from(speed)),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::testing::{frame, Recorder, Update};
    use crate::{decode, units, Rejection, Wind};

    fn wind(bearing: f64, speed_km_h: f64) -> Update {
        Update::ExternalWind(Wind::new(bearing, units::km_h_to_m_s(speed_km_h)))
    }

    #[test]
    fn test_flag_valid_directly() {
        let mut sink = Recorder::default();
        let line = frame("PZAN3,+,026,V,321,035,A,321,035,V");
        decode(&line, &mut sink, &mut Recorder::default()).unwrap();
        assert_eq!(sink.updates, [wind(321.0, 35.0)]);
    }

    #[test]
    fn test_new_dialect_flag_after_lookahead() {
        let mut sink = Recorder::default();
        let line = frame("PZAN3,+,026,A,321,035,V,A");
        decode(&line, &mut sink, &mut Recorder::default()).unwrap();
        assert_eq!(sink.updates, [wind(321.0, 35.0)]);
    }

    #[test]
    fn test_double_invalid_flag_short_circuits() {
        let mut sink = Recorder::default();
        let line = frame("PZAN3,+,026,A,321,035,V,V");
        decode(&line, &mut sink, &mut Recorder::default()).unwrap();
        assert!(sink.updates.is_empty());
    }

    #[test]
    fn test_old_dialect_skip_and_reread_valid() {
        let mut sink = Recorder::default();
        let line = frame("PZAN3,+,026,V,321,035,V,298,017,A");
        decode(&line, &mut sink, &mut Recorder::default()).unwrap();
        // the wind fields are still the first pair; only the flag moved
        assert_eq!(sink.updates, [wind(321.0, 35.0)]);
    }

    #[test]
    fn test_old_dialect_skip_and_reread_invalid() {
        let mut sink = Recorder::default();
        let line = frame("PZAN3,+,026,V,321,035,V,298,017,V");
        decode(&line, &mut sink, &mut Recorder::default()).unwrap();
        assert!(sink.updates.is_empty());
    }

    #[test]
    fn test_truncated_tail_yields_no_update() {
        let mut sink = Recorder::default();
        let line = frame("PZAN3,+,026,A,321,035,V");
        decode(&line, &mut sink, &mut Recorder::default()).unwrap();
        assert!(sink.updates.is_empty());
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let mut sink = Recorder::default();
        let line = frame("PZAN3,+,026");
        assert_eq!(
            decode(&line, &mut sink, &mut Recorder::default()),
            Err(Rejection::MissingField)
        );
        assert!(sink.updates.is_empty());

        let line = frame("PZAN3,+,026,A,321");
        assert_eq!(
            decode(&line, &mut sink, &mut Recorder::default()),
            Err(Rejection::MissingField)
        );
        assert!(sink.updates.is_empty());
    }

    #[test]
    fn test_unparseable_direction_rejected() {
        let mut sink = Recorder::default();
        let line = frame("PZAN3,+,026,A,north,035,A");
        assert_eq!(
            decode(&line, &mut sink, &mut Recorder::default()),
            Err(Rejection::MissingField)
        );
    }
}
