//! JSON with comments
//!
//! Configuration files may contain `//` and `/* */` comments and trailing
//! commas. They are removed here so the rest can go through `serde_json`.
//! Newlines are kept, so parse errors still point at the right line.

/// Strip comments and trailing commas outside of string literals.
#[must_use]
pub fn strip_jsonc(input: &str) -> String {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                },
                '"' => in_string = false,
                _ => {},
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            },
            '/' if chars.peek() == Some(&'/') => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            },
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push(' ');
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            },
            '}' | ']' => {
                drop_trailing_comma(&mut out);
                out.push(c);
            },
            _ => out.push(c),
        }
    }

    out
}

fn drop_trailing_comma(out: &mut String) {
    let trimmed = out.trim_end();
    if trimmed.ends_with(',') {
        let comma = trimmed.len() - 1;
        out.remove(comma);
    }
}
