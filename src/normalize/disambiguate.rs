use crate::core::canonical::CanonicalAmount;

/// Which separator characters appear in a sanitized string.
///
/// The layout decides how each separator is interpreted:
///
/// | Layout      | `.`                       | `,`                       |
/// |-------------|---------------------------|---------------------------|
/// | `Mixed`     | thousands                 | decimal (first one)       |
/// | `DotOnly`   | decimal if last group 1–2 digits, else thousands | — |
/// | `CommaOnly` | —                         | same rule as `DotOnly`    |
/// | `Plain`     | —                         | —                         |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorLayout {
    Mixed,
    DotOnly,
    CommaOnly,
    Plain,
}

impl SeparatorLayout {
    pub fn detect(s: &str) -> Self {
        match (s.contains('.'), s.contains(',')) {
            (true, true) => SeparatorLayout::Mixed,
            (true, false) => SeparatorLayout::DotOnly,
            (false, true) => SeparatorLayout::CommaOnly,
            (false, false) => SeparatorLayout::Plain,
        }
    }
}

/// Length range of a trailing group that is read as a fraction.
const MAX_FRACTION_DIGITS: usize = 2;

fn is_fraction_group(segment: &str) -> bool {
    (1..=MAX_FRACTION_DIGITS).contains(&segment.len())
        && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve a single separator kind: a trailing 1–2 digit group is a
/// fraction and is dropped; anything else means every separator groups
/// thousands.
fn resolve_single(s: &str, sep: char) -> CanonicalAmount {
    match s.rsplit_once(sep) {
        Some((integer_part, last)) if is_fraction_group(last) => {
            log::trace!("{:?}: trailing {:?} read as fraction after {:?}", s, last, sep);
            CanonicalAmount::from_digits_of(integer_part)
        }
        _ => {
            log::trace!("{:?}: {:?} read as thousands separator", s, sep);
            CanonicalAmount::from_digits_of(s)
        }
    }
}

/// Reduce an already-sanitized string to its canonical integer string.
pub fn extract_integer(s: &str) -> CanonicalAmount {
    if s.is_empty() {
        return CanonicalAmount::zero();
    }

    match SeparatorLayout::detect(s) {
        SeparatorLayout::Mixed => {
            let without_dots = s.replace('.', "");
            let integer_part = without_dots
                .split_once(',')
                .map_or(without_dots.as_str(), |(left, _)| left);
            log::trace!("{:?}: mixed separators, integer part {:?}", s, integer_part);
            CanonicalAmount::from_digits_of(integer_part)
        }
        SeparatorLayout::DotOnly => resolve_single(s, '.'),
        SeparatorLayout::CommaOnly => resolve_single(s, ','),
        SeparatorLayout::Plain => CanonicalAmount::from_digits_of(s),
    }
}
