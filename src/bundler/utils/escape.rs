//! Backslash escape decoding for user supplied text.
//!
//! Descriptions and inline README text arrive from the command line, where
//! newlines and tabs are awkward to type. Both accept regex-style escapes:
//!
//! | Escape        | Result                                   |
//! |---------------|------------------------------------------|
//! | `\n` `\r` `\t`| newline, carriage return, tab            |
//! | `\f` `\v`     | form feed, vertical tab                  |
//! | `\a` `\b` `\e`| bell, backspace, escape                  |
//! | `\0`..`\7`    | octal byte, up to three digits           |
//! | `\xHH`        | two hex digits                           |
//! | `\uHHHH`      | four hex digits (BMP scalar value)       |
//! | `\cX`         | control character `X & 0x1f`             |
//! | `\<punct>`    | the punctuation character itself         |
//!
//! Any other escape is rejected rather than silently passed through.

use std::{iter::Peekable, str::Chars};

/// Decodes every backslash escape in `input`.
///
/// Returns a description of the first bad escape on failure.
pub fn unescape(input: &str) -> Result<String, String> {
    if !input.contains('\\') {
        return Ok(input.to_string());
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let escape = chars
            .next()
            .ok_or_else(|| "illegal \\ at end of text".to_string())?;

        let decoded = match escape {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'f' => '\u{0C}',
            'v' => '\u{0B}',
            'a' => '\u{07}',
            'b' => '\u{08}',
            'e' => '\u{1B}',
            '0'..='7' => decode_octal(escape, &mut chars),
            'x' => decode_hex(&mut chars, 2, 'x')?,
            'u' => decode_hex(&mut chars, 4, 'u')?,
            'c' => decode_control(&mut chars)?,
            other if is_word_char(other) => {
                return Err(format!("unrecognized escape sequence \\{other}"));
            }
            other => other,
        };
        out.push(decoded);
    }

    Ok(out)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn decode_octal(first: char, chars: &mut Peekable<Chars<'_>>) -> char {
    let mut value = first.to_digit(8).unwrap_or(0);
    for _ in 0..2 {
        match chars.peek().and_then(|c| c.to_digit(8)) {
            Some(digit) => {
                value = value * 8 + digit;
                chars.next();
            }
            None => break,
        }
    }
    // Three octal digits can exceed a byte; only the low byte is kept.
    char::from((value & 0xFF) as u8)
}

fn decode_hex(chars: &mut Peekable<Chars<'_>>, digits: usize, kind: char) -> Result<char, String> {
    let mut value = 0u32;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| format!("insufficient hex digits after \\{kind}"))?;
        value = value * 16 + digit;
    }
    char::from_u32(value).ok_or_else(|| format!("\\{kind}{value:X} is not a valid character"))
}

fn decode_control(chars: &mut Peekable<Chars<'_>>) -> Result<char, String> {
    let letter = chars
        .next()
        .ok_or_else(|| "missing control character after \\c".to_string())?;
    let upper = letter.to_ascii_uppercase();
    if !('@'..='_').contains(&upper) {
        return Err(format!("unrecognized control character \\c{letter}"));
    }
    Ok(char::from(upper as u8 - b'@'))
}
