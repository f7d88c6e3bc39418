use snafu::Snafu;

use crate::{checksum, FieldCursor, NotificationSink, StateSink};

mod airspeed;
mod flight_mode;
mod mac_cready;
mod message;
mod wind;

/// Why a sentence was dropped without being decoded.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Snafu)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejection {
    #[snafu(display("framing or checksum invalid"))]
    InvalidChecksum,
    #[snafu(display("sentence type not recognized"))]
    UnknownType,
    #[snafu(display("required field missing or unparseable"))]
    MissingField,
}

type Decoder = fn(
    &mut FieldCursor<'_>,
    &mut dyn StateSink,
    &mut dyn NotificationSink,
) -> Result<(), Rejection>;

/// Registry of known sentence types. Adding a sentence means adding a row
/// here; dispatch itself never changes.
const DECODERS: [(&str, Decoder); 5] = [
    ("$SOARIM", message::decode),
    ("$PZAN2", airspeed::decode),
    ("$PZAN3", wind::decode),
    ("$PZAN4", mac_cready::decode),
    ("$PZAN5", flight_mode::decode),
];

/// Decodes one complete sentence, pushing any quantities it carries into
/// `state` and any message text into `notify`.
///
/// `Ok(())` means the sentence was a known type and was handled, even if
/// every optional field turned out to be absent. `Err` means the sentence was
/// dropped whole: nothing was pushed into either sink beyond what a decoder
/// emitted before hitting a missing required field — and decoders only emit
/// after all their required fields are in hand, so in practice nothing.
///
/// Stateless: decoding the same line twice produces the same sink calls.
pub fn decode(
    line: &str,
    state: &mut dyn StateSink,
    notify: &mut dyn NotificationSink,
) -> Result<(), Rejection> {
    if !checksum::verify(line) {
        return Err(Rejection::InvalidChecksum);
    }

    let mut line = FieldCursor::new(line);

    let sentence_type = line.read();
    let decoder = DECODERS
        .iter()
        .find_map(|(token, decoder)| (*token == sentence_type).then_some(*decoder))
        .ok_or(Rejection::UnknownType)?;

    decoder(&mut line, state, notify)
}
