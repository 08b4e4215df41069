use crate::types::{ColumnSpec, DataType, Position};
use super::common::{identifier, string_literal, unsigned, ws};
use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{char, multispace1},
    combinator::{map, opt, recognize, value},
    multi::{many0, many1},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

#[derive(Debug, Clone)]
enum Flag {
    NotNull,
    Null,
    Default(String),
    AutoIncrement,
    PrimaryKey,
}

fn type_keyword(input: &str) -> IResult<&str, DataType> {
    map(
        recognize(pair(
            take_while1(|c: char| c.is_ascii_alphabetic()),
            take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        )),
        |s: &str| DataType::from(s),
    )(input)
}

#[derive(Debug, Clone, Copy)]
enum TypeArgs<'a> {
    Size(u32),
    Raw(&'a str),
}

// Everything up to the closing parenthesis, quoted strings included: 10,2 or 'a','b'
fn raw_args(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((
        recognize(string_literal),
        take_while1(|c: char| c != ')' && c != '\''),
    ))))(input)
}

fn type_args(input: &str) -> IResult<&str, TypeArgs<'_>> {
    preceded(
        ws(char('(')),
        alt((
            map(terminated(ws(unsigned), char(')')), TypeArgs::Size),
            map(terminated(raw_args, char(')')), TypeArgs::Raw),
        )),
    )(input)
}

// DEFAULT 'text' or DEFAULT bare_token
fn default_value(input: &str) -> IResult<&str, String> {
    preceded(
        pair(tag_no_case("DEFAULT"), multispace1),
        alt((
            string_literal,
            map(take_while1(|c: char| !c.is_whitespace()), |s: &str| s.to_string()),
        )),
    )(input)
}

fn flag(input: &str) -> IResult<&str, Flag> {
    ws(alt((
        value(Flag::NotNull, tuple((tag_no_case("NOT"), multispace1, tag_no_case("NULL")))),
        value(Flag::Null, tag_no_case("NULL")),
        map(default_value, Flag::Default),
        value(Flag::AutoIncrement, tag_no_case("AUTO_INCREMENT")),
        value(Flag::PrimaryKey, tuple((tag_no_case("PRIMARY"), multispace1, tag_no_case("KEY")))),
    )))(input)
}

/// `name TYPE[(args)] [NOT NULL|NULL] [DEFAULT v] [AUTO_INCREMENT] [PRIMARY KEY]`
///
/// A single integer argument is the size. Any other argument list
/// (`DECIMAL(10,2)`, `ENUM('a','b')`) is kept verbatim in a `Raw` type.
/// Flags may come in any order; the last NULL/NOT NULL wins.
pub fn column_definition(input: &str) -> IResult<&str, ColumnSpec> {
    let (input, name) = ws(identifier)(input)?;
    let (input, data_type) = ws(type_keyword)(input)?;
    let (input, args) = opt(type_args)(input)?;
    let (input, flags) = many0(flag)(input)?;

    let (data_type, size) = match args {
        None => (data_type, None),
        Some(TypeArgs::Size(n)) => (data_type, Some(n)),
        Some(TypeArgs::Raw(raw)) => (DataType::Raw(format!("{data_type}({})", raw.trim())), None),
    };

    let mut spec = ColumnSpec::new(name, data_type);
    spec.size = size;
    for flag in flags {
        match flag {
            Flag::NotNull => spec.nullable = false,
            Flag::Null => spec.nullable = true,
            Flag::Default(v) => spec.default_value = Some(v),
            Flag::AutoIncrement => spec.auto_increment = true,
            Flag::PrimaryKey => spec.primary_key = true,
        }
    }

    Ok((input, spec))
}

/// `FIRST`, `LAST` or `AFTER column`
pub fn position(input: &str) -> IResult<&str, Position> {
    ws(alt((
        value(Position::First, tag_no_case("FIRST")),
        value(Position::Last, tag_no_case("LAST")),
        map(
            preceded(pair(tag_no_case("AFTER"), multispace1), identifier),
            Position::After,
        ),
    )))(input)
}
