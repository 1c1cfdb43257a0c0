use crate::token::Token;

const COMMENT_OPEN: &[u8] = b"@$#";
const COMMENT_CLOSE: &[u8] = b"#$@";
const BIN_LITERAL: &[u8] = b"{Bin}";

pub struct Lexer<'a> {
    source: &'a [u8],
    cursor: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source: source.as_bytes(),
            cursor: 0,
        }
    }

    /// Scan the whole source into tokens. Lexing never fails; the same
    /// source always yields the same sequence.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    /// Get the next token. This consumes input.
    fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.eat(COMMENT_OPEN) {
                self.skip_comment();
                continue;
            }
            if self.eat(BIN_LITERAL) {
                return Some(Token::Bin);
            }

            let ch = *self.source.get(self.cursor)?;
            self.cursor += 1;

            // '_' is a real token even though it reads like spacing.
            if ch == b'_' {
                return Some(Token::Delim);
            }
            if ch.is_ascii_whitespace() {
                continue;
            }
            return Some(Token::from_char(ch as char));
        }
    }

    /// Skip to just past the closing marker. An unterminated comment
    /// consumes the rest of the input. Comments do not nest.
    fn skip_comment(&mut self) {
        while self.cursor < self.source.len() {
            if self.eat(COMMENT_CLOSE) {
                return;
            }
            self.cursor += 1;
        }
    }

    /// Consume `marker` if the input starts with it at the cursor.
    fn eat(&mut self, marker: &[u8]) -> bool {
        if self.source[self.cursor..].starts_with(marker) {
            self.cursor += marker.len();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize()
    }

    #[test]
    fn literals_and_operators() {
        assert_eq!(
            lex("+-!&|^?*."),
            vec![
                Token::True,
                Token::False,
                Token::Not,
                Token::And,
                Token::Or,
                Token::Xor,
                Token::Branch,
                Token::Loop,
                Token::OutByte,
            ]
        );
    }

    #[test]
    fn delimiter_is_a_token_but_whitespace_is_not() {
        assert_eq!(
            lex("+ _\t-\n_"),
            vec![Token::True, Token::Delim, Token::False, Token::Delim]
        );
    }

    #[test]
    fn bin_literal_is_atomic() {
        assert_eq!(lex("+{Bin}-"), vec![Token::True, Token::Bin, Token::False]);
        // A partial marker is just ordinary unknown characters.
        assert_eq!(
            lex("{Bi}"),
            vec![
                Token::Unknown('{'),
                Token::Unknown('B'),
                Token::Unknown('i'),
                Token::Unknown('}'),
            ]
        );
    }

    #[test]
    fn comments_are_stripped() {
        assert_eq!(lex("@$# ignored + - #$@+"), vec![Token::True]);
        assert_eq!(lex("+@$# one #$@-@$# two #$@"), vec![Token::True, Token::False]);
    }

    #[test]
    fn unterminated_comment_eats_the_rest() {
        assert_eq!(lex("@$# + -"), Vec::<Token>::new());
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(
            lex("+a-"),
            vec![Token::True, Token::Unknown('a'), Token::False]
        );
    }

    #[test]
    fn tokenizing_is_deterministic() {
        let source = "+-?+_-_*!_.++++++++{Bin}@$# c #$@";
        assert_eq!(lex(source), lex(source));
    }
}
