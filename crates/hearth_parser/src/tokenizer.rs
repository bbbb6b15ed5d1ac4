//! Shell-style tokenization.
//!
//! Splits a command line into arguments on whitespace, with single or
//! double quotes grouping a token (quotes stripped). An argument
//! containing spaces can therefore be quoted.

/// Tokenizes a line into shell-style arguments.
///
/// - Whitespace separates tokens
/// - `'...'` and `"..."` group characters into one token; the quotes
///   themselves are stripped
/// - A quoted run abuts adjacent unquoted characters into a single
///   token (`a"b c"d` is one token `ab cd`)
/// - An unterminated quote consumes to end of line; tokenization never
///   fails
#[must_use]
pub fn split(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut has_token = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            // Quoted run: collect to the matching quote
            '\'' | '"' => {
                has_token = true;
                while let Some(&c) = chars.peek() {
                    chars.next();
                    if c == ch {
                        break;
                    }
                    current.push(c);
                }
            }
            c if c.is_whitespace() => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        tokens.push(current);
    }
    tokens
}
