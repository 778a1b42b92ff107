use crate::scanner::{
    Scanner, ScannerError,
    token::{Token, TokenType},
};

/// Errors surfaced while driving the token stream: either a message
/// already formatted with `[line N] Error ...` or a raw lexical failure
/// passed through from the scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserError {
    TokenError(String),
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenError(error) => write!(f, "{error}"),
        }
    }
}

/// Drives the scanner one token ahead of the parser's point of
/// reference. `panic_mode` suppresses every error report after the
/// first until a fresh, successfully-parsed token resets the parser's
/// footing; `had_error` is sticky for the lifetime of a single compile
/// and is never cleared by `panic_mode` resetting.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    source: &'a str,
    pub current: Option<Token>,
    pub previous: Option<Token>,
    pub had_error: bool,
    pub panic_mode: bool,
}

impl<'a> Parser<'a> {
    pub fn new(scanner: Scanner<'a>, source: &'a str) -> Self {
        Self {
            scanner,
            source,
            current: None,
            previous: None,
            had_error: false,
            panic_mode: false,
        }
    }

    /// Consumes the next token. If the scanner reports a run of
    /// consecutive lexical errors before a valid token turns up, only
    /// the first is reported — the rest are swallowed by panic mode,
    /// exactly like the later calls would be if a parser-level error
    /// fired while already panicking.
    pub fn advance(&mut self) -> Result<(), ParserError> {
        self.previous = self.current.take();

        let mut pending = None;
        loop {
            match self.scanner.scan_token() {
                Ok(token) => {
                    self.current = Some(token);
                    break;
                }
                Err(e) => {
                    if let Err(err) = self.error_at_current_scan(e) {
                        pending.get_or_insert(err);
                    }
                }
            }
        }

        match pending {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Conditionally consumes the current token if it matches `other_ty`.
    pub fn consume(&mut self, other_ty: TokenType, message: &str) -> Result<(), ParserError> {
        let matches = self
            .current
            .as_ref()
            .is_some_and(|token| token.ty == other_ty);

        if matches {
            self.advance()?;
            return Ok(());
        }

        self.error_at_current(message)
    }

    pub fn error_at_previous(&mut self, message: &str) -> Result<(), ParserError> {
        let token = self.previous.expect("previous token must be set by the time an error fires");
        self.error_at(&token, message)
    }

    pub fn error_at_current(&mut self, message: &str) -> Result<(), ParserError> {
        let token = self.current.expect("current token must be set by the time an error fires");
        self.error_at(&token, message)
    }

    /// The scanner failure has no token of its own, only a line and a
    /// message, so it bypasses `error_at`'s `at '<lexeme>'` clause.
    fn error_at_current_scan(&mut self, error: ScannerError) -> Result<(), ParserError> {
        if self.panic_mode {
            return Ok(());
        }
        self.panic_mode = true;
        self.had_error = true;
        Err(ParserError::TokenError(format!(
            "[line {}] Error: {error}\n",
            error.line()
        )))
    }

    /// Reports an error at `token`, unless a prior error already put the
    /// parser in panic mode — in which case it's swallowed silently so a
    /// single mistake doesn't cascade into a wall of misleading follow-on
    /// errors.
    fn error_at(&mut self, token: &Token, message: &str) -> Result<(), ParserError> {
        if self.panic_mode {
            return Ok(());
        }
        self.panic_mode = true;
        self.had_error = true;

        let mut err_msg = format!("[line {}] Error", token.line);
        match token.ty {
            TokenType::Eof => err_msg.push_str(" at end"),
            TokenType::Error => {}
            _ => err_msg.push_str(&format!(" at '{}'", token.as_str(self.source))),
        }
        err_msg.push_str(&format!(": {message}\n"));
        Err(ParserError::TokenError(err_msg))
    }
}
