use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err, delimited, opt, preceded, repeat};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use super::{PropertyPath, Segment};

// -- Segments ---------------------------------------------------------------

fn key(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| !matches!(c, '.' | '[' | ']'))
        .map(|s: &str| Segment::Key(s.to_owned()))
        .context(StrContext::Expected(StrContextValue::Description(
            "path segment",
        )))
        .parse_next(input)
}

fn index(input: &mut &str) -> ModalResult<Segment> {
    delimited('[', digit1.try_map(str::parse::<usize>), ']')
        .map(Segment::Index)
        .parse_next(input)
}

/// `.key` or `[n]` following an earlier segment.
fn accessor(input: &mut &str) -> ModalResult<Segment> {
    alt((preceded('.', cut_err(key)), index)).parse_next(input)
}

fn accessors(input: &mut &str) -> ModalResult<Vec<Segment>> {
    repeat(0.., accessor).parse_next(input)
}

// -- Paths ------------------------------------------------------------------

/// `head ( "[]" tail )?` where the tail is mapped over each list element.
pub(super) fn property_path(input: &mut &str) -> ModalResult<PropertyPath> {
    let first = alt((key, index)).parse_next(input)?;
    let mut head = vec![first];
    head.extend(accessors.parse_next(input)?);
    let expand = opt(preceded("[]", accessors)).parse_next(input)?;
    Ok(PropertyPath { head, expand })
}
