//! Parsing of the line-oriented command language
//!
//! ```text
//! a "Weber Street" (2,-1) (2,2) (5,5)
//! c "Weber Street" (2,1) (2,2)
//! r "Weber Street"
//! g
//! ```

use std::sync::LazyLock;

use regex::Regex;
use streetgraph_core::{CoordinateOutOfRange, Point};
use thiserror::Error;

static NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 ]").expect("valid regex"));
static VERTEX_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9,()\- ]").expect("valid regex"));
static VERTEX_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("valid regex"));

/// Malformed command input. The command is skipped, the loop continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid input")]
    InvalidInput,
    #[error("Invalid character in street name")]
    InvalidStreetName,
    #[error("{0} command has too many arguments")]
    TooManyArguments(char),
    #[error("Invalid arguments")]
    InvalidArguments,
    #[error("Invalid character in vertices")]
    InvalidVertexCharacter,
    #[error("Parenthesis missing")]
    MissingParenthesis,
    #[error("Vertices format did not match. Should be separated by ,")]
    VertexFormat,
    #[error(transparent)]
    CoordinateOutOfRange(#[from] CoordinateOutOfRange),
    #[error("Invalid vertices")]
    InvalidVertices,
    #[error("The command you entered was not found \"{0}\"")]
    UnknownCommand(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, points: Vec<Point> },
    Change { name: String, points: Vec<Point> },
    Remove { name: String },
    Generate,
    Exit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, args) = match line.split_once(' ') {
        Some((verb, args)) => (verb, args.trim()),
        None => (line, ""),
    };

    let command = match verb {
        "a" => {
            let (name, points) = parse_street(args, 'a')?;
            Command::Add { name, points }
        }
        "c" => {
            let (name, points) = parse_street(args, 'c')?;
            Command::Change { name, points }
        }
        "r" => {
            let (name, _) = parse_street(args, 'r')?;
            Command::Remove { name }
        }
        "g" if args.is_empty() => Command::Generate,
        "g" => return Err(ParseError::InvalidArguments),
        "exit" => Command::Exit,
        _ => return Err(ParseError::UnknownCommand(line.to_string())),
    };

    Ok(Some(command))
}

/// Street name and, unless `verb` is `r`, its vertices.
///
/// A missing vertex list parses to an empty one; the store decides whether
/// that is acceptable.
fn parse_street(args: &str, verb: char) -> Result<(String, Vec<Point>), ParseError> {
    if args.is_empty() {
        return Err(ParseError::InvalidInput);
    }
    let words = split_words(args)?;
    let Some((name, rest)) = words.split_first() else {
        return Err(ParseError::InvalidInput);
    };

    let name = name.to_lowercase();
    if NAME_CHARS.is_match(&name) {
        return Err(ParseError::InvalidStreetName);
    }

    if rest.is_empty() {
        return Ok((name, Vec::new()));
    }
    if verb == 'r' {
        return Err(ParseError::TooManyArguments('r'));
    }

    Ok((name, parse_vertices(&rest.concat())?))
}

/// Parses `(x,y)(x,y)...` with whitespace already removed.
fn parse_vertices(text: &str) -> Result<Vec<Point>, ParseError> {
    if VERTEX_CHARS.is_match(text) {
        return Err(ParseError::InvalidVertexCharacter);
    }

    let opening = text.matches('(').count();
    let closing = text.matches(')').count();
    if opening != closing {
        return Err(ParseError::MissingParenthesis);
    }

    let points = VERTEX_GROUP
        .captures_iter(text)
        .map(|group| parse_vertex(&group[1]))
        .collect::<Result<Vec<_>, _>>()?;

    if points.is_empty() || points.len() != opening {
        return Err(ParseError::InvalidVertices);
    }
    Ok(points)
}

fn parse_vertex(group: &str) -> Result<Point, ParseError> {
    let coordinates = group
        .split(',')
        .map(|part| part.trim().parse::<i64>().map_err(|_| ParseError::VertexFormat))
        .collect::<Result<Vec<_>, _>>()?;
    let [x, y] = coordinates[..] else {
        return Err(ParseError::VertexFormat);
    };
    Ok(Point::try_new(x, y)?)
}

/// Shell-style word splitting: whitespace separates words, single and
/// double quotes group them, backslash escapes outside single quotes.
fn split_words(input: &str) -> Result<Vec<String>, ParseError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' | '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some(c) if c == ch => break,
                        Some('\\') if ch == '"' => match chars.next() {
                            Some(escaped @ ('"' | '\\')) => current.push(escaped),
                            Some(other) => {
                                current.push('\\');
                                current.push(other);
                            }
                            None => return Err(ParseError::InvalidInput),
                        },
                        Some(c) => current.push(c),
                        None => return Err(ParseError::InvalidInput),
                    }
                }
            }
            '\\' => {
                let escaped = chars.next().ok_or(ParseError::InvalidInput)?;
                current.push(escaped);
                in_word = true;
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
