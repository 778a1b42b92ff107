use crate::{
    compiler::{Compiler, CompilerError},
    scanner::token::TokenType,
};

/// Ordering matters: the discriminant is compared numerically to decide
/// whether an infix operator binds tighter than the expression being
/// built up so far.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    None,
    Assignment, // =
    Or,         // or
    And,        // and
    Equality,   // == !=
    Comparison, // < > <= >=
    Term,       // + -
    Factor,     // * /
    Unary,      // ! -
    Call,       // . ()
    Primary,
}

impl From<u8> for Precedence {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Assignment,
            2 => Self::Or,
            3 => Self::And,
            4 => Self::Equality,
            5 => Self::Comparison,
            6 => Self::Term,
            7 => Self::Factor,
            8 => Self::Unary,
            9 => Self::Call,
            _ => Self::Primary,
        }
    }
}

pub type ParseFn<'a> = Option<fn(&mut Compiler<'a>) -> Result<(), CompilerError>>;

/// One row of the Pratt table: how to parse a token kind as the start
/// of an expression, how to parse it as an infix continuation, and how
/// tightly it binds as an infix operator.
#[derive(Clone, Copy)]
pub struct ParseRule<'a> {
    pub prefix: ParseFn<'a>,
    pub infix: ParseFn<'a>,
    pub precedence: Precedence,
}

impl<'a> ParseRule<'a> {
    const RULE_COUNT: usize = 40;

    /// Indexed by `TokenType as usize`, so this array's order must track
    /// the enum's declaration order exactly.
    fn get_rules() -> [ParseRule<'a>; Self::RULE_COUNT] {
        let none = ParseRule {
            prefix: None,
            infix: None,
            precedence: Precedence::None,
        };

        let mut rules = [none; Self::RULE_COUNT];

        rules[TokenType::LeftParen as usize] = ParseRule {
            prefix: Some(Compiler::grouping),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::Minus as usize] = ParseRule {
            prefix: Some(Compiler::unary),
            infix: Some(Compiler::binary),
            precedence: Precedence::Term,
        };
        rules[TokenType::Plus as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Term,
        };
        rules[TokenType::Slash as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Factor,
        };
        rules[TokenType::Star as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Factor,
        };
        rules[TokenType::Bang as usize] = ParseRule {
            prefix: Some(Compiler::unary),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::BangEqual as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Equality,
        };
        rules[TokenType::EqualEqual as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Equality,
        };
        rules[TokenType::Greater as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Comparison,
        };
        rules[TokenType::GreaterEqual as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Comparison,
        };
        rules[TokenType::Less as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Comparison,
        };
        rules[TokenType::LessEqual as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Comparison,
        };
        rules[TokenType::Number as usize] = ParseRule {
            prefix: Some(Compiler::number),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::False as usize] = ParseRule {
            prefix: Some(Compiler::literal),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::Nil as usize] = ParseRule {
            prefix: Some(Compiler::literal),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::True as usize] = ParseRule {
            prefix: Some(Compiler::literal),
            infix: None,
            precedence: Precedence::None,
        };

        rules
    }

    /// Looks up the rule for `ty`. Token kinds this language has no
    /// grammar production for (identifiers, strings, keywords outside
    /// the literal set, statement-only tokens) default to an all-`None`
    /// rule, which `parse_precedence` turns into "Expected expression."
    pub fn get_parse_rule(ty: TokenType) -> ParseRule<'a> {
        let rules = Self::get_rules();
        rules[ty as usize]
    }
}
