//! Whitespace tokenization of message text.

use std::str::SplitWhitespace;

/// Forward-only cursor over the whitespace-delimited tokens of a message.
///
/// Tokens borrow from the underlying text; each read advances the cursor
/// destructively. The dispatcher consumes the routing keyword, then hands
/// the remaining stream to the owning module, which reads its sub-command
/// and any further arguments from the same cursor.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    /// Tokenize `text`. Runs of whitespace delimit exactly once, so empty
    /// or all-whitespace input yields no tokens.
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    /// True if no tokens remain. Does not advance the cursor.
    pub fn is_empty(&self) -> bool {
        self.inner.clone().next().is_none()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }
}
