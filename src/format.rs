//! Positional template substitution
//!
//! Replaces `{0}`, `{1}`, ... placeholders in a template with the
//! corresponding entries of an argument slice. This is a pure string
//! primitive: no escaping, quoting, or SQL-injection defense happens here.
//! Callers control the argument values (internally-sourced identifiers and
//! pre-formatted literals, never raw user text).

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("template references argument {{{index}}} but only {supplied} argument(s) were supplied")]
    MissingArgument { index: usize, supplied: usize },
}

/// Substitute positional placeholders in `template` from `args`.
///
/// Scans left to right; each `{i}` is replaced with `args[i]`. A placeholder
/// index with no matching argument is a defect and fails loudly. Extra
/// entries in `args` are permitted and ignored. Brace sequences that are not
/// a `{digits}` placeholder pass through literally.
///
/// # Example
/// ```
/// use clickmeta::format::format_positional;
///
/// let sql = format_positional("{0} = {1}", &["ENGINE", "Atomic"]).unwrap();
/// assert_eq!(sql, "ENGINE = Atomic");
/// ```
pub fn format_positional(template: &str, args: &[&str]) -> Result<String, FormatError> {
    let mut result = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        let mut digits = String::new();
        while let Some(&next_ch) = chars.peek() {
            if next_ch.is_ascii_digit() {
                digits.push(next_ch);
                chars.next();
            } else {
                break;
            }
        }

        let closed = chars.peek() == Some(&'}');
        match digits.parse::<usize>() {
            Ok(index) if closed => {
                chars.next(); // consume '}'
                match args.get(index) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(FormatError::MissingArgument {
                            index,
                            supplied: args.len(),
                        })
                    }
                }
            }
            // Not a positional placeholder ('{x', '{}', unterminated, or an
            // index too large to parse) - emit what was consumed literally.
            _ => {
                result.push('{');
                result.push_str(&digits);
            }
        }
    }

    Ok(result)
}
