//! Input string tokenizer
//!
//! Splits the input into literal characters and `<name>` escapes.
//! Scanning is cursor based: each step consumes either a complete
//! bracketed escape or exactly one character, so it always advances.

use log::trace;

/// One unit of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Single literal character
    Literal(char),
    /// Payload of a `<name>` escape, brackets excluded
    Escape(&'a str),
}

/// Lazy left-to-right token stream over an input string
pub struct Tokens<'a> {
    input: &'a str,
    /// Byte offset of the next unconsumed character
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Try to match `<` [^>]+ `>` at the cursor.
    /// Returns the payload and the byte length of the whole escape.
    fn escape_at_cursor(&self) -> Option<(&'a str, usize)> {
        let input = self.input;
        let rest = &input[self.pos..];
        let body = rest.strip_prefix('<')?;
        let close = body.find('>')?;
        if close == 0 {
            // `<>` has no name
            return None;
        }
        Some((&body[..close], close + 2))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((name, len)) = self.escape_at_cursor() {
            self.pos += len;
            trace!("escape <{}>", name);
            return Some(Token::Escape(name));
        }

        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        trace!("literal {:?}", c);
        Some(Token::Literal(c))
    }
}

/// Tokenize an input string
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens::new(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<Token<'_>> {
        tokenize(input).collect()
    }

    #[test]
    fn test_literals_and_escape() {
        assert_eq!(
            collect("ab<enter>"),
            vec![Token::Literal('a'), Token::Literal('b'), Token::Escape("enter")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_unclosed_escape_degrades_to_literals() {
        assert_eq!(
            collect("a<b"),
            vec![Token::Literal('a'), Token::Literal('<'), Token::Literal('b')]
        );
    }

    #[test]
    fn test_empty_brackets_are_literals() {
        assert_eq!(collect("<>"), vec![Token::Literal('<'), Token::Literal('>')]);
    }

    #[test]
    fn test_escape_payload_runs_to_first_close() {
        // `[^>]+` may contain another `<`
        assert_eq!(collect("<a<b>c"), vec![Token::Escape("a<b"), Token::Literal('c')]);
        assert_eq!(
            collect("<x>>"),
            vec![Token::Escape("x"), Token::Literal('>')]
        );
    }

    #[test]
    fn test_adjacent_escapes() {
        assert_eq!(
            collect("ls<gt>/dev/null<enter>"),
            vec![
                Token::Literal('l'),
                Token::Literal('s'),
                Token::Escape("gt"),
                Token::Literal('/'),
                Token::Literal('d'),
                Token::Literal('e'),
                Token::Literal('v'),
                Token::Literal('/'),
                Token::Literal('n'),
                Token::Literal('u'),
                Token::Literal('l'),
                Token::Literal('l'),
                Token::Escape("enter"),
            ]
        );
    }

    #[test]
    fn test_multibyte_and_newline_literals() {
        assert_eq!(
            collect("é\n"),
            vec![Token::Literal('é'), Token::Literal('\n')]
        );
    }

    #[test]
    fn test_stream_is_exhausted_once() {
        let mut tokens = tokenize("a");
        assert_eq!(tokens.next(), Some(Token::Literal('a')));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }
}
