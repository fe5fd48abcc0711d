//! Escape sequence processing for string literal content.

/// An escape sequence that could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidEscape {
    /// Byte offset of the escape char within the content.
    pub offset: u32,
    /// Byte length of the whole sequence.
    pub len: u32,
    pub sequence: String,
}

/// Result of [`unescape`]: the resolved value plus every sequence that was
/// replaced by U+FFFD.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Unescaped {
    pub value: String,
    pub errors: Vec<InvalidEscape>,
}

#[inline]
fn resolve_simple_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

fn offset_of(i: usize) -> u32 {
    u32::try_from(i).unwrap_or(u32::MAX)
}

/// Resolve escapes introduced by `escape` in `content`.
///
/// Supported: `\n \t \r \0 \\ \" \'`, `\uXXXX` and `\u{X..}`; a doubled
/// escape char always stands for itself. Anything else is an error.
pub fn unescape(content: &str, escape: char) -> Unescaped {
    if !content.contains(escape) {
        return Unescaped {
            value: content.to_owned(),
            errors: Vec::new(),
        };
    }

    let mut out = Unescaped {
        value: String::with_capacity(content.len()),
        errors: Vec::new(),
    };
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != escape {
            out.value.push(c);
            continue;
        }
        let Some((j, esc)) = chars.next() else {
            out.errors.push(InvalidEscape {
                offset: offset_of(i),
                len: offset_of(c.len_utf8()),
                sequence: c.to_string(),
            });
            out.value.push('\u{FFFD}');
            break;
        };

        if esc == escape {
            out.value.push(escape);
            continue;
        }
        if let Some(resolved) = resolve_simple_escape(esc) {
            out.value.push(resolved);
            continue;
        }

        let mut end = j + esc.len_utf8();
        let resolved = if esc == 'u' {
            let braced = chars.peek().is_some_and(|&(_, c)| c == '{');
            let mut hex = String::new();
            if braced {
                chars.next();
                end += 1;
                while let Some(&(k, c)) = chars.peek() {
                    chars.next();
                    end = k + c.len_utf8();
                    if c == '}' {
                        break;
                    }
                    hex.push(c);
                }
            } else {
                for _ in 0..4 {
                    match chars.peek() {
                        Some(&(k, c)) if c.is_ascii_hexdigit() => {
                            chars.next();
                            end = k + 1;
                            hex.push(c);
                        }
                        _ => break,
                    }
                }
                if hex.len() != 4 {
                    hex.clear();
                }
            }
            u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
        } else {
            None
        };

        if let Some(resolved) = resolved {
            out.value.push(resolved);
        } else {
            out.errors.push(InvalidEscape {
                offset: offset_of(i),
                len: offset_of(end - i),
                sequence: content.get(i..end).unwrap_or_default().to_owned(),
            });
            out.value.push('\u{FFFD}');
        }
    }
    out
}
