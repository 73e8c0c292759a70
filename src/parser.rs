use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::token::{rest, take_while};
use winnow::ModalResult;
use winnow::Parser;

use crate::lines::OffsetLines;
use crate::{Error, ErrorKind};

/// Everything extracted from a message, before footer-token normalization:
/// type, scope, breaking bang, title, trimmed body, and raw footer entries.
#[derive(Debug)]
pub(crate) struct Message<'a> {
    pub(crate) ty: &'a str,
    pub(crate) scope: Option<&'a str>,
    pub(crate) bang: bool,
    pub(crate) title: &'a str,
    pub(crate) body: &'a str,
    pub(crate) footers: Vec<(&'a str, &'a str)>,
}

// <message>  ::= <header>, ["\n", <body-lines>], [<footer-block>]
pub(crate) fn message(input: &str) -> Result<Message<'_>, Error> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::new(ErrorKind::EmptyMessage));
    }

    let (first, rest) = match input.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (input, ""),
    };

    let (ty, scope, bang, title) = header
        .parse(first)
        .map_err(|_| Error::new(ErrorKind::MalformedHeader))?;

    let (body, footers) = match footer_start(rest) {
        Some(at) => (&rest[..at], footer_block(&rest[at..])),
        None => (rest, Vec::new()),
    };

    Ok(Message {
        ty,
        scope,
        bang,
        title,
        body: body.trim(),
        footers,
    })
}

// <word>       ::= [0-9A-Za-z_]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// <token-char> ::= <word> | "-"
fn is_token_char(c: char) -> bool {
    is_word_char(c) || c == '-'
}

/// Parsed pieces of the header line: type, scope, breaking bang, subject.
pub(crate) type Header<'a> = (&'a str, Option<&'a str>, bool, &'a str);

// <header>   ::= <type>, ["(", <scope>, ")"], ["!"], ": ", <subject>
pub(crate) fn header<'a>(i: &mut &'a str) -> ModalResult<Header<'a>> {
    let ty = type_.parse_next(i)?;
    let scope = opt(delimited('(', scope, ')')).parse_next(i)?;
    let bang = opt('!').parse_next(i)?;
    let subject = preceded(": ", subject).parse_next(i)?;
    Ok((ty, scope, bang.is_some(), subject))
}

// <type>     ::= <word>+
pub(crate) fn type_<'a>(i: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., is_word_char).parse_next(i)
}

// <scope>    ::= <token-char>+
pub(crate) fn scope<'a>(i: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., is_token_char).parse_next(i)
}

// <subject>  ::= <any char except newline>+
fn subject<'a>(i: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c != '\n').parse_next(i)
}

// <token>    ::= "BREAKING CHANGE" | <token-char>+
//
// The literal must be tried first: a token-char run stops at the space and
// would never reach "CHANGE". `BREAKING-CHANGE` is an ordinary token run.
fn token<'a>(i: &mut &'a str) -> ModalResult<&'a str> {
    alt(("BREAKING CHANGE", take_while(1.., is_token_char))).parse_next(i)
}

// <separator> ::= ": " | " #"
fn separator<'a>(i: &mut &'a str) -> ModalResult<&'a str> {
    alt((": ", " #")).parse_next(i)
}

// <footer-line> ::= <token>, <separator>, <value: rest of line>
//
// The value may be empty. Acceptance is decided entirely by token and
// separator, so this same parser decides where the footer block starts.
fn footer_line<'a>(i: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
    let (t, _sep, value) = (token, separator, rest).parse_next(i)?;
    Ok((t, value))
}

/// Byte offset of the first line that opens a footer block, if any.
///
/// Lines before it are body; that line and everything after it are footer
/// lines. The decision is made once and is authoritative: later lines that
/// fail to parse are continuations, never body.
fn footer_start(rest: &str) -> Option<usize> {
    OffsetLines::new(rest)
        .find(|&(_, line)| footer_line.parse(line).is_ok())
        .map(|(at, _)| at)
}

/// Walk the footer block, folding each line into either a new entry or the
/// value of the most recent one.
///
/// Values stay subslices of `block`: a continuation line extends the
/// previous value across the `\n` that separates them, so a multi-line value
/// reads back exactly as it appeared in the source. A stray non-matching
/// line with no entry before it is dropped.
fn footer_block(block: &str) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, std::ops::Range<usize>)> = Vec::new();
    for (at, line) in OffsetLines::new(block) {
        let end = at + line.len();
        if let Ok((t, value)) = footer_line.parse(line) {
            entries.push((t, end - value.len()..end));
        } else if let Some((_, span)) = entries.last_mut() {
            span.end = end;
        }
    }
    entries
        .into_iter()
        .map(|(t, span)| (t, &block[span]))
        .collect()
}
