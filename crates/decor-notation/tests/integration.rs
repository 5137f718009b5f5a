use decor_notation::{parse, reset_ids, strip, Kind, LexError, Series, Token};
use serial_test::serial;

// Token ids come from a process-wide counter, so every test that creates
// tokens runs serially with the one asserting on ids.

#[test]
#[serial]
fn test_series_debug_string() {
    reset_ids();
    let series = parse("@F(Grey37)[${Glyph}:@I${Key}@i]@f").unwrap();

    let want = concat!(
        r#"001:START:FGCOLOR:"Grey37" + 002:TEXT:"[" + 003:VAR:"Glyph" + "#,
        r#"004:TEXT:":" + 005:START:ITALIC + 006:VAR:"Key" + "#,
        r#"007:STOP:ITALIC + 008:TEXT:"]" + 009:STOP:FGCOLOR"#,
    );
    assert_eq!(series.to_string(), want);
    assert_eq!(series.ids().first().map(String::as_str), Some("001"));
}

#[test]
#[serial]
fn test_variables_detected() {
    let series = parse("@Bplain@b").unwrap();
    assert!(!series.contains_kind(Kind::Variable));

    let series = parse("hello ${name}").unwrap();
    assert!(series.contains_kind(Kind::Variable));
}

#[test]
#[serial]
fn test_prompt_notation() {
    let series = parse("@B@F{44}@Iuser@i@F{Orchid1}@@@F{Green3}host@f@b").unwrap();

    let want = Series::build([
        Token::start(Kind::Bold),
        Token::foreground("44"),
        Token::start(Kind::Italic),
        Token::literal("user"),
        Token::stop(Kind::Italic),
        Token::foreground("Orchid1"),
        Token::literal("@"),
        Token::foreground("Green3"),
        Token::literal("host"),
        Token::stop(Kind::ForegroundColor),
        Token::stop(Kind::Bold),
    ]);

    assert_eq!(series, want);
    assert_eq!(strip("@B@F{44}@Iuser@i@F{Orchid1}@@@F{Green3}host@f@b").unwrap(), "user@host");
}

#[test]
#[serial]
fn test_boundaries() {
    assert_eq!(parse("").unwrap(), Series::new());
    assert!(matches!(parse("@"), Err(LexError::SigilAtEnd { sigil: '@' })));
    assert!(matches!(
        parse("${"),
        Err(LexError::UnterminatedVariable { pos: 0 })
    ));
}
