use crate::buffer::reserve;
use anyhow::Result;

/// Characters that separate tokens: space, tab, carriage return, newline and bell.
pub const TOKEN_DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Initial number of token slots; storage grows geometrically from there.
pub const TOKEN_BUFSIZE: usize = 64;

/// Split a line into its argument vector.
///
/// Runs of delimiters count as one separator and never produce empty tokens.
/// Tokens borrow from `line`, so the vector cannot outlive it.
pub fn split_line(line: &str) -> Result<Vec<&str>> {
    let mut tokens = Vec::new();
    reserve(&mut tokens, 0, TOKEN_BUFSIZE)?;

    for token in line.split(TOKEN_DELIMITERS).filter(|t| !t.is_empty()) {
        reserve(&mut tokens, 1, TOKEN_BUFSIZE)?;
        tokens.push(token);
    }
    Ok(tokens)
}
