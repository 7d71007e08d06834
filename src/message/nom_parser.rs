//! Nom-based IRC line parser.
//!
//! A line has the shape
//!
//! ```text
//! [:sender[!user@host] ]COMMAND[ param...][ :trailing]
//! ```
//!
//! The sender keeps only the nickname (everything from the first `!` is
//! dropped), the trailing part starts at the first ` :` and may contain
//! spaces, and the middle part is split on single spaces.

use nom::{
    bytes::complete::{tag, take_till, take_until},
    character::complete::char,
    combinator::opt,
    error::{context, VerboseError},
    sequence::{preceded, terminated},
    IResult,
};

use crate::error::MessageParseError;

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Parse the sender prefix (after `:`, up to and including the first space).
fn parse_prefix(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        terminated(preceded(char(':'), take_till(|c| c == ' ')), char(' ')),
    )(input)
}

/// Parse the command-and-params segment, consuming the ` :` marker if any.
fn parse_middle(input: &str) -> ParseResult<&str, Option<&str>> {
    context(
        "parsing command and params",
        opt(terminated(take_until(" :"), tag(" :"))),
    )(input)
}

/// Borrowed view of a parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Sender nickname, empty for prefix-less lines.
    pub sender: &'a str,
    /// The command name or numeric.
    pub command: &'a str,
    /// Middle parameters.
    pub params: Vec<&'a str>,
    /// Trailing free text, empty when absent.
    pub trailing: &'a str,
}

impl<'a> ParsedLine<'a> {
    /// Parse one terminator-stripped line.
    pub fn parse(input: &'a str) -> Result<Self, MessageParseError> {
        if input.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        let (rest, sender) = if input.starts_with(':') {
            let (rest, prefix) = parse_prefix(input)
                .map_err(|_| MessageParseError::MissingSpace(input.to_string()))?;
            let nick = prefix.split('!').next().unwrap_or(prefix);
            (rest, nick)
        } else {
            (input, "")
        };

        let (middle, trailing) = match parse_middle(rest) {
            Ok((trailing, Some(middle))) => (middle, trailing),
            _ => (rest, ""),
        };

        let mut parts = middle.split(' ');
        let command = match parts.next() {
            Some(command) if !command.is_empty() => command,
            _ => return Err(MessageParseError::MissingCommand),
        };

        Ok(ParsedLine {
            sender,
            command,
            params: parts.collect(),
            trailing,
        })
    }
}
