use foldcalc::interpreter::{
    lexer::{TokenKind, tokenize},
    token::Token,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(Token::kind).collect()
}

fn texts(source: &str) -> Vec<String> {
    tokenize(source).iter().map(|t| t.text().to_string()).collect()
}

#[test]
fn operators_and_parentheses() {
    use TokenKind::{LParen, Minus, Percent, Plus, RParen, Slash, Star};

    assert_eq!(kinds("+-*/%()"), [Plus, Minus, Star, Slash, Percent, LParen, RParen]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(texts(" 1 +\t2\n* x "), ["1", "+", "2", "*", "x"]);
    assert!(tokenize("   ").is_empty());
    assert!(tokenize("").is_empty());
}

#[test]
fn multi_digit_and_decimal_numbers() {
    assert_eq!(texts("123+4.56-7,89"), ["123", "+", "4.56", "-", "7,89"]);
    assert_eq!(kinds("23.56"), [TokenKind::Number]);
}

#[test]
fn second_decimal_point_ends_the_number() {
    assert_eq!(texts("1.5.3"), ["1.5", ".", "3"]);
    assert_eq!(kinds("1.5.3"), [TokenKind::Number, TokenKind::Variable, TokenKind::Number]);
}

#[test]
fn variables_take_following_letters() {
    assert_eq!(texts("x+xy*abc"), ["x", "+", "xy", "*", "abc"]);
    assert_eq!(kinds("xy"), [TokenKind::Variable]);
}

#[test]
fn class_change_ends_literal() {
    assert_eq!(texts("2x3"), ["2", "x", "3"]);
    assert_eq!(texts("x2"), ["x", "2"]);
}

#[test]
fn other_characters_start_variables() {
    assert_eq!(kinds("#"), [TokenKind::Variable]);
    assert_eq!(texts("$ab"), ["$ab"]);
}

#[test]
fn tokenizing_is_deterministic() {
    let source = "1*2.0/(0.2/2+3.9*1)-4.5/3.0";
    assert_eq!(tokenize(source), tokenize(source));
}

#[test]
fn malformed_input_still_tokenizes() {
    assert_eq!(texts("2/"), ["2", "/"]);
    assert_eq!(texts("((1"), ["(", "(", "1"]);
}

#[test]
fn number_tokens_round_trip_values() {
    let token = Token::number(0.1 + 0.2);
    assert_eq!(token.kind(), TokenKind::Number);
    assert_eq!(token.text().parse::<f64>().unwrap(), 0.1 + 0.2);
    assert_eq!(Token::number(4.0).text(), "4");
}
