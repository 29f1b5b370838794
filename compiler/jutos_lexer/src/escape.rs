//! String literal scanning and escape decoding.

/// Why a string literal body could not be scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StringError {
    Unterminated,
    InvalidEscape(char),
}

/// Scan a string literal body that starts right after its opening `quote`.
///
/// On success returns the decoded contents and the number of bytes consumed,
/// closing quote included. On failure returns the error and the number of
/// bytes that belong to the broken literal.
pub(crate) fn scan_string(rest: &str, quote: char) -> Result<(String, usize), (StringError, usize)> {
    let mut value = String::new();
    let mut pos = 0;

    while let Some(c) = rest[pos..].chars().next() {
        if c == quote {
            return Ok((value, pos + c.len_utf8()));
        }
        if c != '\\' {
            value.push(c);
            pos += c.len_utf8();
            continue;
        }

        let after = &rest[pos + 1..];
        let Some(escape) = after.chars().next() else {
            break;
        };
        match decode_escape(after) {
            Some((decoded, len)) => {
                value.push(decoded);
                pos += 1 + len;
            }
            None => {
                return Err((
                    StringError::InvalidEscape(escape),
                    pos + 1 + escape.len_utf8(),
                ))
            }
        }
    }

    Err((StringError::Unterminated, rest.len()))
}

/// Decode the escape whose text (after the backslash) begins `after`.
///
/// Returns the character and how many bytes of `after` the escape spans.
fn decode_escape(after: &str) -> Option<(char, usize)> {
    let first = after.chars().next()?;
    let simple = match first {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    };
    if let Some(decoded) = simple {
        return Some((decoded, 1));
    }

    match first {
        // \xHH
        'x' => {
            let digits = after.get(1..3)?;
            let code = hex_value(digits)?;
            char::from_u32(code).map(|c| (c, 3))
        }
        // \u{H..H}
        'u' if after[1..].starts_with('{') => {
            let close = after[2..].find('}')?;
            let digits = &after[2..2 + close];
            if digits.is_empty() || digits.len() > 6 {
                return None;
            }
            let code = hex_value(digits)?;
            char::from_u32(code).map(|c| (c, close + 3))
        }
        // \uHHHH
        'u' => {
            let digits = after.get(1..5)?;
            let code = hex_value(digits)?;
            char::from_u32(code).map(|c| (c, 5))
        }
        _ => None,
    }
}

fn hex_value(digits: &str) -> Option<u32> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
