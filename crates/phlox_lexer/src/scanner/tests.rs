#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use phlox_tokens::TokenKind;

use crate::{tokenize, LexError};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .iter()
        .map(phlox_tokens::Token::kind)
        .collect()
}

fn round_trips(source: &str) {
    assert_eq!(tokenize(source).unwrap().source(), source);
}

#[test]
fn open_tag_absorbs_one_whitespace_char() {
    let stream = tokenize("<?php  echo 1;").unwrap();
    assert_eq!(stream.get(0).unwrap().kind(), TokenKind::OpenTag);
    assert_eq!(stream.get(0).unwrap().content(), "<?php ");
    assert_eq!(stream.get(1).unwrap().content(), " ");
}

#[test]
fn open_tag_absorbs_newline() {
    let stream = tokenize("<?php\necho 1;").unwrap();
    assert_eq!(stream.get(0).unwrap().content(), "<?php\n");
    assert_eq!(stream.get(1).unwrap().kind(), TokenKind::Keyword);
}

#[test]
fn open_tag_absorbs_crlf_pair() {
    let stream = tokenize("<?php\r\necho 1;").unwrap();
    assert_eq!(stream.get(0).unwrap().content(), "<?php\r\n");
}

#[test]
fn bare_open_tag_at_eof() {
    let stream = tokenize("<?php").unwrap();
    assert_eq!(stream.len(), 1);
    assert_eq!(stream.get(0).unwrap().content(), "<?php");
}

#[test]
fn open_tag_requires_boundary() {
    // "<?phpx" is markup, not an open tag.
    let stream = tokenize("<?phpx").unwrap();
    assert_eq!(stream.len(), 1);
    assert_eq!(stream.get(0).unwrap().kind(), TokenKind::InlineHtml);
}

#[test]
fn echo_tag_is_not_an_open_tag() {
    let stream = tokenize("<?= 123;").unwrap();
    assert_eq!(stream.get(0).unwrap().kind(), TokenKind::EchoTag);
    assert_eq!(stream.get(0).unwrap().content(), "<?=");
}

#[test]
fn leading_markup_keeps_open_tag_off_position_zero() {
    let stream = tokenize("  <?php echo 1;").unwrap();
    assert_eq!(stream.get(0).unwrap().kind(), TokenKind::InlineHtml);
    assert_eq!(stream.get(1).unwrap().kind(), TokenKind::OpenTag);
}

#[test]
fn declare_statement_token_kinds() {
    assert_eq!(
        kinds("<?php declare(strict_types=1);"),
        vec![
            TokenKind::OpenTag,
            TokenKind::Keyword,
            TokenKind::Punct,
            TokenKind::Ident,
            TokenKind::Punct,
            TokenKind::Number,
            TokenKind::Punct,
            TokenKind::Punct,
        ]
    );
}

#[test]
fn keywords_keep_original_casing() {
    let stream = tokenize("<?php DeClArE(STRICT_TYPES=0);").unwrap();
    assert_eq!(stream.get(1).unwrap().kind(), TokenKind::Keyword);
    assert_eq!(stream.get(1).unwrap().content(), "DeClArE");
    assert_eq!(stream.get(3).unwrap().kind(), TokenKind::Ident);
    assert_eq!(stream.get(3).unwrap().content(), "STRICT_TYPES");
}

#[test]
fn line_comment_excludes_newline() {
    let stream = tokenize("<?php // note\necho 1;").unwrap();
    assert_eq!(stream.get(1).unwrap().kind(), TokenKind::Comment);
    assert_eq!(stream.get(1).unwrap().content(), "// note");
    assert_eq!(stream.get(2).unwrap().content(), "\n");
}

#[test]
fn hash_comment_and_block_comment() {
    let stream = tokenize("<?php # a\n/* b */ /** c */").unwrap();
    let comments: Vec<&str> = stream
        .iter()
        .filter(|t| t.kind() == TokenKind::Comment)
        .map(phlox_tokens::Token::content)
        .collect();
    assert_eq!(comments, vec!["# a", "/* b */", "/** c */"]);
}

#[test]
fn line_comment_stops_before_close_tag() {
    let stream = tokenize("<?php // x ?>rest").unwrap();
    assert_eq!(stream.get(1).unwrap().content(), "// x ");
    assert_eq!(stream.get(2).unwrap().kind(), TokenKind::CloseTag);
    assert_eq!(stream.get(3).unwrap().kind(), TokenKind::InlineHtml);
}

#[test]
fn strings_honor_escapes() {
    let stream = tokenize(r#"<?php 'a\'b' . "c\"d";"#).unwrap();
    let strings: Vec<&str> = stream
        .iter()
        .filter(|t| t.kind() == TokenKind::Str)
        .map(phlox_tokens::Token::content)
        .collect();
    assert_eq!(strings, vec![r"'a\'b'", r#""c\"d""#]);
}

#[test]
fn variables_and_operators() {
    let stream = tokenize("<?php $a ??= $b <=> $c;").unwrap();
    assert_eq!(stream.get(1).unwrap().kind(), TokenKind::Variable);
    assert_eq!(stream.get(1).unwrap().content(), "$a");
    assert_eq!(stream.get(3).unwrap().content(), "??=");
    assert_eq!(stream.get(7).unwrap().content(), "<=>");
}

#[test]
fn numbers_cover_int_float_hex() {
    let stream = tokenize("<?php 42 1_000 4.5 1e10 0xFF .5;").unwrap();
    let numbers: Vec<&str> = stream
        .iter()
        .filter(|t| t.kind() == TokenKind::Number)
        .map(phlox_tokens::Token::content)
        .collect();
    assert_eq!(numbers, vec!["42", "1_000", "4.5", "1e10", "0xFF", ".5"]);
}

#[test]
fn unterminated_string_is_an_error() {
    assert_eq!(
        tokenize("<?php 'oops"),
        Err(LexError::UnterminatedString { offset: 6 })
    );
}

#[test]
fn unterminated_block_comment_is_an_error() {
    assert_eq!(
        tokenize("<?php /* oops"),
        Err(LexError::UnterminatedComment { offset: 6 })
    );
}

#[test]
fn null_byte_is_an_error() {
    assert_eq!(
        tokenize("<?php \0"),
        Err(LexError::NullByte { offset: 6 })
    );
}

#[test]
fn error_offset_accessor() {
    let err = tokenize("<?php 'oops").unwrap_err();
    assert_eq!(err.offset(), 6);
}

#[test]
fn html_php_html_round_trip() {
    round_trips("<a><?php echo 'x'; ?></a><?= $y ?>tail");
}

#[test]
fn realistic_file_round_trips() {
    round_trips(
        "<?php\n\ndeclare(strict_types=1);\n\nnamespace App;\n\nuse Foo\\Bar;\n\nfinal class A\n{\n    public function run(int $n): int\n    {\n        // double it\n        return $n * 2;\n    }\n}\n",
    );
}

#[test]
fn messy_directive_round_trips() {
    round_trips("<?php            DECLARE  (    strict_types=1   )   ;");
    round_trips("<?php /**/ /**/ deClarE  (STRICT_TYPES=1)    ?>Test");
}
