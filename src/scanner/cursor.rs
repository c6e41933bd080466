/// Read position over the source text with derived line/column.
///
/// `index` is a byte offset; `column` counts characters so that multi-byte
/// input still reports the column a reader would see.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    index: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current character without consuming it; `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character `n` positions ahead of the cursor.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consume the current character, updating line and column.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.index += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.index..]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.source.len()
    }
}
