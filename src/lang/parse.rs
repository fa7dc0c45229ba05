use crate::lang::*;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{multispace0, satisfy},
    combinator::{all_consuming, map as nommap, recognize, value, verify},
    error::ParseError,
    multi::{many0, many0_count, separated_list0, separated_list1},
    sequence::{pair, preceded, terminated, tuple},
};

pub type IResult<I, O, E = nom::error::VerboseError<I>> = Result<(I, O), nom::Err<E>>;

////////// PARSER COMBINATORS //////////

pub fn wsl<'a, F, O, E>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    E: ParseError<&'a str>,
    F: FnMut(&'a str) -> IResult<&'a str, O, E> + 'a,
{
    preceded(multispace0, inner)
}

pub fn wsr<'a, F, O, E>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    E: ParseError<&'a str>,
    F: FnMut(&'a str) -> IResult<&'a str, O, E> + 'a,
{
    terminated(inner, multispace0)
}

pub fn ws<'a, F, O, E>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    E: ParseError<&'a str> + 'a,
    F: FnMut(&'a str) -> IResult<&'a str, O, E> + 'a,
    O: 'a,
{
    wsl(wsr(inner))
}

////////// STATEMENT-LEVEL PARSERS //////////

/// Parses the entirety of `i` as a sequence of statements.
pub fn source(i: &str) -> IResult<&str, Vec<Statement>> {
    all_consuming(terminated(many0(statement), multispace0))(i)
}

pub fn statement(i: &str) -> IResult<&str, Statement> {
    terminated(alt((facts, rule)), ws(tag(".")))(i)
}

pub fn facts(i: &str) -> IResult<&str, Statement> {
    let facts_keyword = alt((keyword("facts"), keyword("fact")));
    nommap(preceded(facts_keyword, separated_list0(conjunction, atom)), Statement::Facts)(i)
}

pub fn rule(i: &str) -> IResult<&str, Statement> {
    let body = separated_list0(conjunction, atom);
    let (i, (mode, body, _, head)) = tuple((mode, body, arrow, head))(i)?;
    Ok((i, Statement::Rule { mode, body, head }))
}

////////// (SUB)EXPRESSION-LEVEL PARSERS //////////

pub fn mode(i: &str) -> IResult<&str, Mode> {
    alt((value(Mode::Imperative, keyword("must")), value(Mode::Permissive, keyword("may"))))(i)
}

pub fn conjunction(i: &str) -> IResult<&str, &str> {
    ws(alt((tag(","), tag("∧"))))(i)
}

pub fn disjunction(i: &str) -> IResult<&str, &str> {
    ws(alt((tag("|"), tag("∨"))))(i)
}

pub fn arrow(i: &str) -> IResult<&str, &str> {
    ws(alt((tag("=>"), tag("⇒"), tag("⊢"))))(i)
}

pub fn id_suffix(i: &str) -> IResult<&str, &str> {
    recognize(many0_count(satisfy(|c| c.is_alphanumeric() || c == '_' || c == '-')))(i)
}

pub fn identifier(i: &str) -> IResult<&str, &str> {
    let fst = satisfy(|c| c.is_alphanumeric() || c == '_');
    ws(recognize(pair(fst, id_suffix)))(i)
}

/// Matches `word` only as a whole identifier, so `must` does not match `mustard`.
pub fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    verify(identifier, move |s: &str| s == word)
}

pub fn bottom(i: &str) -> IResult<&str, Head> {
    value(Head::Bottom, alt((ws(tag("⊥")), keyword(BOTTOM_WORD))))(i)
}

/// Any identifier but the reserved `false`.
pub fn atom(i: &str) -> IResult<&str, Atom> {
    let not_bottom = verify(identifier, |s: &str| s != BOTTOM_WORD);
    nommap(not_bottom, |s: &str| Atom::new(s))(i)
}

/// Zero disjuncts are accepted here, and rejected by `Rule::new`.
pub fn head(i: &str) -> IResult<&str, Head> {
    let disjuncts = nommap(separated_list1(disjunction, atom), Head::Disjunction);
    let empty = nommap(multispace0, |_| Head::Disjunction(vec![]));
    alt((bottom, disjuncts, empty))(i)
}
