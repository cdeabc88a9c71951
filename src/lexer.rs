use crate::error::{QueryError, QueryResult};
use crate::quote;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Keywords
    Select,
    Delete,
    Update,
    From,
    Where,
    Set,
    Order,
    By,
    Count,
    This,

    // Logical
    And,
    Or,
    Not,

    // Comparison
    Between,
    Like,
    In,

    // Boolean
    True,
    False,

    // Sort direction
    Asc,
    Desc,

    // Pagination
    Skip,
    Limit,

    // Literals and identifiers
    Identifier(String),
    Integer(i64),
    Float(f64),
    String(String),
    Placeholder(String), // ?N or :name bind parameters

    // Operators
    Equal,         // =
    LessThan,      // <
    LessThanEq,    // <=
    GreaterThan,   // >
    GreaterThanEq, // >=

    // Delimiters
    Comma,      // ,
    Dot,        // .
    LeftParen,  // (
    RightParen, // )

    // Special
    Eof,
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            input: chars,
            position: 0,
            current_char,
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        // Skip -- comments
        while let Some(ch) = self.current_char {
            if ch == '\n' {
                self.advance();
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        // Skip /* */ comments
        self.advance(); // skip /
        self.advance(); // skip *
        while let Some(ch) = self.current_char {
            if ch == '*' && self.peek() == Some('/') {
                self.advance();
                self.advance();
                break;
            }
            self.advance();
        }
    }

    fn read_number(&mut self) -> QueryResult<Token> {
        let mut num_str = String::new();
        let mut has_dot = false;

        if self.current_char == Some('-') {
            num_str.push('-');
            self.advance();
        }

        while let Some(ch) = self.current_char {
            if ch.is_numeric() {
                num_str.push(ch);
                self.advance();
            } else if ch == '.' && !has_dot {
                // Decimal point only if followed by a digit, otherwise it is
                // a path separator
                if let Some(next) = self.peek() {
                    if next.is_numeric() {
                        has_dot = true;
                        num_str.push(ch);
                        self.advance();
                    } else {
                        break;
                    }
                } else {
                    break;
                }
            } else {
                break;
            }
        }

        if has_dot {
            num_str
                .parse::<f64>()
                .map(Token::Float)
                .map_err(|_| QueryError::SyntaxError(format!("Invalid decimal number: {}", num_str)))
        } else {
            num_str
                .parse::<i64>()
                .map(Token::Integer)
                .map_err(|_| QueryError::SyntaxError(format!("Invalid integer number: {}", num_str)))
        }
    }

    /// Read a quoted string literal. The delimiters are dropped; backslash
    /// escapes inside the span are kept verbatim.
    fn read_string(&mut self) -> QueryResult<Token> {
        let rest: String = self.input[self.position..].iter().collect();

        match quote::first_quoted(&rest) {
            Some(quoted) => {
                self.position += quoted.end;
                self.current_char = self.input.get(self.position).copied();
                Ok(Token::String(quoted.content))
            }
            None => Err(QueryError::SyntaxError(format!(
                "Unterminated string literal: {}",
                rest
            ))),
        }
    }

    fn read_identifier(&mut self) -> Token {
        let mut ident = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Check for keywords (case-insensitive)
        match ident.to_uppercase().as_str() {
            "SELECT" => Token::Select,
            "DELETE" => Token::Delete,
            "UPDATE" => Token::Update,
            "FROM" => Token::From,
            "WHERE" => Token::Where,
            "SET" => Token::Set,
            "ORDER" => Token::Order,
            "BY" => Token::By,
            "COUNT" => Token::Count,
            "THIS" => Token::This,
            "AND" => Token::And,
            "OR" => Token::Or,
            "NOT" => Token::Not,
            "BETWEEN" => Token::Between,
            "LIKE" => Token::Like,
            "IN" => Token::In,
            "TRUE" => Token::True,
            "FALSE" => Token::False,
            "ASC" => Token::Asc,
            "DESC" => Token::Desc,
            "SKIP" => Token::Skip,
            "LIMIT" => Token::Limit,
            _ => Token::Identifier(ident),
        }
    }

    fn read_placeholder(&mut self) -> QueryResult<Token> {
        if self.current_char == Some('?') {
            // ?N positional style, kept with its marker
            self.advance();
            let mut digits = String::new();

            while let Some(ch) = self.current_char {
                if ch.is_ascii_digit() {
                    digits.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }

            if digits.is_empty() {
                return Err(QueryError::SyntaxError(
                    "Expected position digits after '?'".to_string(),
                ));
            }

            return Ok(Token::Placeholder(format!("?{}", digits)));
        }

        // :name style, stored without the marker
        self.advance(); // skip :
        let mut name = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if name.is_empty() {
            return Err(QueryError::SyntaxError(
                "Expected parameter name after ':'".to_string(),
            ));
        }

        Ok(Token::Placeholder(name))
    }

    pub fn next_token(&mut self) -> QueryResult<Token> {
        loop {
            self.skip_whitespace();

            match self.current_char {
                None => return Ok(Token::Eof),

                // Comments
                Some('-') if self.peek() == Some('-') => {
                    self.skip_line_comment();
                    continue;
                }
                Some('/') if self.peek() == Some('*') => {
                    self.skip_block_comment();
                    continue;
                }

                _ => break,
            }
        }

        let token = match self.current_char {
            None => Token::Eof,

            Some(ch) if ch.is_numeric() => {
                return self.read_number();
            }

            Some('-') if self.peek().is_some_and(|ch| ch.is_numeric()) => {
                return self.read_number();
            }

            Some('\'') | Some('"') => {
                return self.read_string();
            }

            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                return Ok(self.read_identifier());
            }

            Some('?') | Some(':') => {
                return self.read_placeholder();
            }

            Some('=') => {
                self.advance();
                Token::Equal
            }

            Some('<') => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    Token::LessThanEq
                } else {
                    Token::LessThan
                }
            }

            Some('>') => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    Token::GreaterThanEq
                } else {
                    Token::GreaterThan
                }
            }

            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some('.') => {
                self.advance();
                Token::Dot
            }
            Some('(') => {
                self.advance();
                Token::LeftParen
            }
            Some(')') => {
                self.advance();
                Token::RightParen
            }

            Some(ch) => {
                return Err(QueryError::SyntaxError(format!(
                    "Unexpected character: {}",
                    ch
                )));
            }
        };

        Ok(token)
    }

    pub fn tokenize(&mut self) -> QueryResult<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            if token == Token::Eof {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }

        Ok(tokens)
    }
}
