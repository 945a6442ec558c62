//! Helpers over `std::any::type_name` output
//!
//! Type names are the canonical identity of capabilities and the source of
//! symbolic instance names, so the parsing here has to agree everywhere.

use crate::constants::{PATH_SEPARATOR, TRAIT_OBJECT_PREFIX};

/// Location of the outermost generic argument list of a type name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericSpan {
    /// Byte offset of the opening `<`
    pub open: usize,
    /// Byte offset of the matching `>`
    pub close: usize,
    /// Number of top-level type arguments
    pub arity: usize,
}

/// Find the first generic argument list in `name`
///
/// Returns `None` for non-generic names and for names whose brackets do not
/// balance.
pub fn generic_span(name: &str) -> Option<GenericSpan> {
    let open = name.find('<')?;
    let mut depth = 0usize;
    let mut commas = 0usize;
    let mut previous = '\0';

    for (offset, ch) in name[open..].char_indices() {
        match ch {
            '<' | '(' | '[' => depth += 1,
            // `->` inside fn pointer types is not a closing bracket
            '>' if previous == '-' => {}
            '>' | ')' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(GenericSpan {
                        open,
                        close: open + offset,
                        arity: commas + 1,
                    });
                }
            }
            ',' if depth == 1 => commas += 1,
            _ => {}
        }
        previous = ch;
    }
    None
}

/// Erase the type arguments of a generic name
///
/// `dyn app::IDict<i32, alloc::string::String>` becomes `dyn app::IDict<,>`.
/// Non-generic names are returned unchanged.
pub fn erase_type_arguments(name: &str) -> String {
    match generic_span(name) {
        Some(span) => format!(
            "{}<{}>{}",
            &name[..span.open],
            ",".repeat(span.arity - 1),
            &name[span.close + 1..]
        ),
        None => name.to_string(),
    }
}

/// Short, identifier-safe name of a type
///
/// Drops the module path and the `dyn` prefix; generic types keep their
/// arity as a suffix (`app::Value<i32>` becomes `Value_1`).
pub fn short_type_name(name: &str) -> String {
    let span = generic_span(name);
    let base = span.map_or(name, |span| &name[..span.open]);
    let base = base.strip_prefix(TRAIT_OBJECT_PREFIX).unwrap_or(base);
    let last = base.rsplit(PATH_SEPARATOR).next().unwrap_or(base);

    let mut short: String = last
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { '_' })
        .collect();
    if let Some(span) = span {
        short.push('_');
        short.push_str(&span.arity.to_string());
    }
    short
}

/// Expression path for a type name
///
/// Inserts the turbofish so the name can prefix an associated function call
/// (`app::Value<i32>` becomes `app::Value::<i32>`).
pub fn expression_path(name: &str) -> String {
    match generic_span(name) {
        Some(span) if !name[..span.open].ends_with(PATH_SEPARATOR) => {
            format!("{}{}{}", &name[..span.open], PATH_SEPARATOR, &name[span.open..])
        }
        _ => name.to_string(),
    }
}
