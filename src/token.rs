/// Atomic unit of a Blin program.
///
/// ***Note that characters outside the symbol set still lex***: they are
/// carried through as [`Token::Unknown`] and only rejected at execution time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Token {
    /// `+`, the true literal
    True,
    /// `-`, the false literal
    False,
    /// `!`, logical negation
    Not,
    /// `&`, logical AND
    And,
    /// `|`, logical OR
    Or,
    /// `^`, logical XOR (inequality)
    Xor,
    /// `?`, branch
    Branch,
    /// `*`, loop
    Loop,
    /// `.`, byte output
    OutByte,
    /// `_`, block delimiter
    Delim,
    /// `{Bin}`, binary dump
    Bin,
    /// Anything else
    Unknown(char),
}

impl Token {
    pub fn from_char(ch: char) -> Self {
        match ch {
            '+' => Token::True,
            '-' => Token::False,
            '!' => Token::Not,
            '&' => Token::And,
            '|' => Token::Or,
            '^' => Token::Xor,
            '?' => Token::Branch,
            '*' => Token::Loop,
            '.' => Token::OutByte,
            '_' => Token::Delim,
            ch => Token::Unknown(ch),
        }
    }

    /// Whether this token is a `+`/`-` Boolean literal.
    pub fn is_literal(self) -> bool {
        matches!(self, Token::True | Token::False)
    }
}
