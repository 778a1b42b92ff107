//! Converts a source string into a lazy sequence of tokens. No token
//! owns its text — each carries a `(start, length)` slice into the
//! source the scanner was built from.
pub mod token;

use token::{Token, TokenType};

/// The two ways scanning a single token can fail. Carries no source
/// slice because, per the diagnostics format (spec §6), scanner-reported
/// errors show no `at '<lexeme>'` location — only the message and line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScannerError {
    UnexpectedCharacter { line: i32, character: char },
    UnterminatedString { line: i32 },
}

impl std::fmt::Display for ScannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, .. } => {
                write!(f, "Unexpected character '{character}'.")
            }
            Self::UnterminatedString { .. } => write!(f, "Unterminated string."),
        }
    }
}

impl ScannerError {
    pub fn line(&self) -> i32 {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}

pub struct Scanner<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: i32,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Returns the next token, or an `EOF` token repeatedly once the
    /// source is exhausted.
    pub fn scan_token(&mut self) -> Result<Token, ScannerError> {
        self.skip_whitespace();
        self.start = self.current;

        if self.is_at_end() {
            return Ok(self.make_token(TokenType::Eof));
        }

        let c = self.advance().unwrap();

        if Self::is_alpha(c) {
            return Ok(self.identifier());
        }
        if c.is_ascii_digit() {
            return Ok(self.number());
        }

        match c {
            '(' => Ok(self.make_token(TokenType::LeftParen)),
            ')' => Ok(self.make_token(TokenType::RightParen)),
            '{' => Ok(self.make_token(TokenType::LeftBrace)),
            '}' => Ok(self.make_token(TokenType::RightBrace)),
            ';' => Ok(self.make_token(TokenType::Semicolon)),
            ',' => Ok(self.make_token(TokenType::Comma)),
            '.' => Ok(self.make_token(TokenType::Dot)),
            '-' => Ok(self.make_token(TokenType::Minus)),
            '+' => Ok(self.make_token(TokenType::Plus)),
            '/' => Ok(self.make_token(TokenType::Slash)),
            '*' => Ok(self.make_token(TokenType::Star)),
            '!' => {
                let ty = self.pick_token_type('=', TokenType::BangEqual, TokenType::Bang);
                Ok(self.make_token(ty))
            }
            '=' => {
                let ty = self.pick_token_type('=', TokenType::EqualEqual, TokenType::Equal);
                Ok(self.make_token(ty))
            }
            '<' => {
                let ty = self.pick_token_type('=', TokenType::LessEqual, TokenType::Less);
                Ok(self.make_token(ty))
            }
            '>' => {
                let ty = self.pick_token_type('=', TokenType::GreaterEqual, TokenType::Greater);
                Ok(self.make_token(ty))
            }
            '"' => self.string(),
            _ => Err(ScannerError::UnexpectedCharacter {
                line: self.line,
                character: c,
            }),
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn is_alpha(c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }

    /// Consumes spaces, tabs, carriage returns and line feeds, and `//`
    /// comments through end of line. A `/` not followed by another `/`
    /// is left alone for `scan_token` to classify as `Slash`.
    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\r' | '\t') => {
                    self.advance();
                }
                Some('\n') => {
                    self.line += 1;
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    while self.peek() != Some('\n') && !self.is_at_end() {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    fn identifier(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if Self::is_alpha(c) || c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        self.make_token(self.identifier_type())
    }

    /// A keyword trie flattened into a `match` on the first character,
    /// falling back to `Identifier` whenever the rest of the lexeme
    /// doesn't match one of the reserved words.
    fn identifier_type(&self) -> TokenType {
        let lexeme = &self.source[self.start..self.current];
        let first = lexeme.as_bytes()[0] as char;

        match first {
            'a' => self.check_keyword(1, "nd", TokenType::And),
            'c' => self.check_keyword(1, "lass", TokenType::Class),
            'e' => self.check_keyword(1, "lse", TokenType::Else),
            'f' if lexeme.len() > 1 => match lexeme.as_bytes()[1] {
                b'a' => self.check_keyword(2, "lse", TokenType::False),
                b'o' => self.check_keyword(2, "r", TokenType::For),
                b'u' => self.check_keyword(2, "n", TokenType::Fun),
                _ => TokenType::Identifier,
            },
            'i' => self.check_keyword(1, "f", TokenType::If),
            'n' => self.check_keyword(1, "il", TokenType::Nil),
            'o' => self.check_keyword(1, "r", TokenType::Or),
            'p' => self.check_keyword(1, "rint", TokenType::Print),
            'r' => self.check_keyword(1, "eturn", TokenType::Return),
            's' => self.check_keyword(1, "uper", TokenType::Super),
            't' if lexeme.len() > 1 => match lexeme.as_bytes()[1] {
                b'h' => self.check_keyword(2, "is", TokenType::This),
                b'r' => self.check_keyword(2, "ue", TokenType::True),
                _ => TokenType::Identifier,
            },
            'v' => self.check_keyword(1, "ar", TokenType::Var),
            'w' => self.check_keyword(1, "hile", TokenType::While),
            _ => TokenType::Identifier,
        }
    }

    /// `rest` is the remainder of the keyword after the characters
    /// already matched by the caller, starting at offset `start` within
    /// the current lexeme. Only matches if the whole lexeme is exactly
    /// that long.
    fn check_keyword(&self, start: usize, rest: &str, ty: TokenType) -> TokenType {
        let lexeme_start = self.start + start;
        let lexeme_end = lexeme_start + rest.len();
        if self.current - self.start == start + rest.len()
            && lexeme_end <= self.source.len()
            && &self.source[lexeme_start..lexeme_end] == rest
        {
            ty
        } else {
            TokenType::Identifier
        }
    }

    fn number(&mut self) -> Token {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && matches!(self.peek_next(), Some(c) if c.is_ascii_digit()) {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenType::Number)
    }

    /// Consumes up to the closing `"`, tracking embedded newlines.
    /// Reaching end-of-source first is the failure mode (the source
    /// material this crate is derived from inverts this check; see
    /// DESIGN.md).
    fn string(&mut self) -> Result<Token, ScannerError> {
        while self.peek() != Some('"') && !self.is_at_end() {
            if self.peek() == Some('\n') {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(ScannerError::UnterminatedString { line: self.line });
        }

        self.advance(); // closing quote
        Ok(self.make_token(TokenType::String))
    }

    fn peek(&self) -> Option<char> {
        self.source.as_bytes().get(self.current).map(|&b| b as char)
    }

    fn peek_next(&self) -> Option<char> {
        self.source
            .as_bytes()
            .get(self.current + 1)
            .map(|&b| b as char)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += 1;
        Some(c)
    }

    fn pick_token_type(&mut self, expected: char, if_ty: TokenType, else_ty: TokenType) -> TokenType {
        if self.peek() == Some(expected) {
            self.current += 1;
            if_ty
        } else {
            else_ty
        }
    }

    fn make_token(&self, ty: TokenType) -> Token {
        Token::new(ty, self.start, (self.current - self.start) as u32, self.line)
    }
}

#[cfg(test)]
mod tests;
