/// Computes the NMEA checksum of a sentence body: the XOR fold of every byte
/// between `$` and `*` (both exclusive).
pub fn checksum(body: &[u8]) -> u8 {
    body.iter().fold(0, |sum, byte| sum ^ byte)
}

/// Verifies the framing and checksum of a complete sentence.
///
/// The line must start with `$` and carry a `*hh` tail (two hex digits, either
/// case). A trailing `\r\n` or `\n` is tolerated. Anything else fails.
pub fn verify(line: &str) -> bool {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(body) = line.strip_prefix('$') else {
        return false;
    };

    let Some((body, tail)) = body.rsplit_once('*') else {
        return false;
    };

    let Ok(stated) = u8::from_str_radix(tail, 16) else {
        return false;
    };

    // from_str_radix accepts "+f" and arbitrary widths; the wire format is
    // exactly two hex digits
    if tail.len() != 2 || !tail.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    checksum(body.as_bytes()) == stated
}
