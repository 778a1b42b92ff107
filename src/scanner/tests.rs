use crate::scanner::{Scanner, ScannerError, token::TokenType};

#[test]
fn skip_whitespace_and_comments() {
    let source = "   \n // a comment\n   ";
    let mut scanner = Scanner::new(source);
    let token = scanner.scan_token().unwrap();
    assert_eq!(token.ty, TokenType::Eof);
}

#[test]
fn single_character_tokens() {
    let source = "(){};,.-+/*! = ><";
    let token_tys = [
        TokenType::LeftParen,
        TokenType::RightParen,
        TokenType::LeftBrace,
        TokenType::RightBrace,
        TokenType::Semicolon,
        TokenType::Comma,
        TokenType::Dot,
        TokenType::Minus,
        TokenType::Plus,
        TokenType::Slash,
        TokenType::Star,
        TokenType::Bang,
        TokenType::Equal,
        TokenType::Greater,
        TokenType::Less,
        TokenType::Eof,
    ];
    let mut scanner = Scanner::new(source);
    for expected in token_tys {
        let token = scanner.scan_token().unwrap();
        assert_eq!(token.ty, expected);
    }
}

#[test]
fn double_character_tokens() {
    let source = "!===>=<=";
    let token_tys = [
        TokenType::BangEqual,
        TokenType::EqualEqual,
        TokenType::GreaterEqual,
        TokenType::LessEqual,
        TokenType::Eof,
    ];
    let mut scanner = Scanner::new(source);
    for expected in token_tys {
        let token = scanner.scan_token().unwrap();
        assert_eq!(token.ty, expected);
    }
}

#[test]
fn slash_vs_comment() {
    let source = "1 / 2 // three\n";
    let mut scanner = Scanner::new(source);
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::Number);
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::Slash);
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::Number);
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::Eof);
}

#[test]
fn number_tokens() {
    let source = "1 1.23 0.00 123.1923 0.123";
    let mut scanner = Scanner::new(source);
    let mut total = 0;
    loop {
        let token = scanner.scan_token().unwrap();
        if token.ty == TokenType::Eof {
            break;
        }
        assert_eq!(token.ty, TokenType::Number);
        total += 1;
    }
    assert_eq!(total, 5);
}

#[test]
fn number_does_not_consume_trailing_dot_without_digit() {
    let source = "1.";
    let mut scanner = Scanner::new(source);
    let number = scanner.scan_token().unwrap();
    assert_eq!(number.ty, TokenType::Number);
    assert_eq!(number.as_str(source), "1");
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::Dot);
}

#[test]
fn string_tokens() {
    let source = "\"hello\" \"world\"";
    let mut scanner = Scanner::new(source);
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::String);
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::String);
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::Eof);
}

#[test]
fn multiline_string_tracks_line_number() {
    let source = "\"a\nb\"";
    let mut scanner = Scanner::new(source);
    let token = scanner.scan_token().unwrap();
    assert_eq!(token.ty, TokenType::String);
    assert_eq!(token.line, 1);
    assert_eq!(scanner.scan_token().unwrap().line, 2);
}

/// Reaching end-of-input before the closing quote is the error; this is
/// the corrected reading of the source's inverted check (see DESIGN.md).
#[test]
fn unterminated_string_is_an_error() {
    let source = "\"unterminated";
    let mut scanner = Scanner::new(source);
    let result = scanner.scan_token();
    assert_eq!(result, Err(ScannerError::UnterminatedString { line: 1 }));
}

#[test]
fn terminated_string_is_not_an_error() {
    let source = "\"terminated\"";
    let mut scanner = Scanner::new(source);
    assert!(scanner.scan_token().is_ok());
}

#[test]
fn unexpected_character_is_an_error() {
    let mut scanner = Scanner::new("@");
    let result = scanner.scan_token();
    assert_eq!(
        result,
        Err(ScannerError::UnexpectedCharacter {
            line: 1,
            character: '@'
        })
    );
}

#[test]
fn keywords_and_identifiers() {
    let source = "and or class if else false for fun \
    true nil print return super this _this _class another_variable_name while var";

    let token_tys = [
        TokenType::And,
        TokenType::Or,
        TokenType::Class,
        TokenType::If,
        TokenType::Else,
        TokenType::False,
        TokenType::For,
        TokenType::Fun,
        TokenType::True,
        TokenType::Nil,
        TokenType::Print,
        TokenType::Return,
        TokenType::Super,
        TokenType::This,
        TokenType::Identifier,
        TokenType::Identifier,
        TokenType::Identifier,
        TokenType::While,
        TokenType::Var,
        TokenType::Eof,
    ];
    let mut scanner = Scanner::new(source);
    for expected in token_tys {
        let token = scanner.scan_token().unwrap();
        assert_eq!(token.ty, expected);
    }
}

/// Concatenating every token's lexeme plus the whitespace between
/// scan points reconstructs the original source (spec invariant).
#[test]
fn scanning_reconstructs_source() {
    let source = "1 + (2 * 3) - nil";
    let mut scanner = Scanner::new(source);
    let mut last_end = 0;
    let mut rebuilt = String::new();
    loop {
        let token = scanner.scan_token().unwrap();
        rebuilt.push_str(&source[last_end..token.start]);
        rebuilt.push_str(token.as_str(source));
        last_end = token.start + token.length as usize;
        if token.ty == TokenType::Eof {
            break;
        }
    }
    assert_eq!(rebuilt, source);
}
