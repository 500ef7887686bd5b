//! Replacement templates with positional group placeholders
//!
//! Supported placeholders:
//! - `$1`..`$99`: capture group by index
//! - `${n}`: capture group by index, delimited
//! - `$&`: the whole match
//! - `$$`: a literal `$`
//!
//! A two-digit reference such as `$12` means group 12 only when the pattern
//! has at least 12 groups; otherwise it is group 1 followed by a literal `2`.
//! Any other `$` is kept as-is.

use regex::Captures;

use crate::rule::InvalidRuleError;

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim
    Literal(String),
    /// Capture group index (0 is the whole match)
    Group(usize),
}

/// A replacement template whose group references were checked against
/// the pattern it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template for a pattern with `group_count` capture groups
    /// (not counting the implicit whole-match group)
    pub fn parse(source: &str, group_count: usize) -> Result<Self, InvalidRuleError> {
        let bytes = source.as_bytes();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = 0;

        while let Some(found) = source[rest..].find('$') {
            let dollar = rest + found;
            literal.push_str(&source[rest..dollar]);

            let next = bytes.get(dollar + 1).copied();
            let consumed = match next {
                Some(b'$') => {
                    literal.push('$');
                    2
                }
                Some(b'&') => {
                    flush(&mut literal, &mut segments);
                    segments.push(Segment::Group(0));
                    2
                }
                Some(b'{') => match parse_braced(&source[dollar + 2..]) {
                    Some((group, len)) => {
                        check_group(group, group_count)?;
                        flush(&mut literal, &mut segments);
                        segments.push(Segment::Group(group));
                        2 + len
                    }
                    None => {
                        literal.push('$');
                        1
                    }
                },
                Some(d @ b'1'..=b'9') => {
                    let first = usize::from(d - b'0');
                    let two_digit = bytes
                        .get(dollar + 2)
                        .filter(|b| b.is_ascii_digit())
                        .map(|b| first * 10 + usize::from(b - b'0'))
                        .filter(|group| *group <= group_count);

                    flush(&mut literal, &mut segments);
                    match two_digit {
                        Some(group) => {
                            segments.push(Segment::Group(group));
                            3
                        }
                        None => {
                            check_group(first, group_count)?;
                            segments.push(Segment::Group(first));
                            2
                        }
                    }
                }
                _ => {
                    literal.push('$');
                    1
                }
            };

            rest = dollar + consumed;
        }

        literal.push_str(&source[rest..]);
        flush(&mut literal, &mut segments);

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parsed segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Expand the template for one match into `dst`
    ///
    /// Groups that did not participate in the match expand to nothing.
    pub fn expand(&self, caps: &Captures<'_>, dst: &mut String) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => dst.push_str(text),
                Segment::Group(group) => {
                    if let Some(m) = caps.get(*group) {
                        dst.push_str(m.as_str());
                    }
                }
            }
        }
    }
}

fn flush(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

fn check_group(group: usize, group_count: usize) -> Result<(), InvalidRuleError> {
    if group > group_count {
        return Err(InvalidRuleError::UnknownGroup {
            group,
            available: group_count,
        });
    }
    Ok(())
}

/// Parse `n}` after `${`, returning the group and bytes consumed
fn parse_braced(rest: &str) -> Option<(usize, usize)> {
    let close = rest.find('}')?;
    let digits = &rest[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let group = digits.parse().ok()?;
    Some((group, close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn expand(pattern: &str, template: &str, text: &str) -> String {
        let regex = Regex::new(pattern).unwrap();
        let template = Template::parse(template, regex.captures_len() - 1).unwrap();
        let caps = regex.captures(text).unwrap();
        let mut out = String::new();
        template.expand(&caps, &mut out);
        out
    }

    #[test]
    fn test_literal_only() {
        let template = Template::parse("driver.unlockDevice()", 0).unwrap();
        assert_eq!(
            template.segments(),
            &[Segment::Literal("driver.unlockDevice()".to_string())]
        );
    }

    #[test]
    fn test_positional_groups() {
        assert_eq!(expand(r"(\w+)-(\w+)", "$2-$1", "left-right"), "right-left");
    }

    #[test]
    fn test_group_followed_by_identifier_chars() {
        assert_eq!(
            expand(r#""([^"]+)""#, "timer_$1_end", r#""t1""#),
            "timer_t1_end"
        );
    }

    #[test]
    fn test_braced_group() {
        assert_eq!(expand(r"(\d)", "${1}0", "7"), "70");
    }

    #[test]
    fn test_whole_match_and_escaped_dollar() {
        assert_eq!(expand(r"\d+", "$$$&", "42"), "$42");
    }

    #[test]
    fn test_two_digit_reference_falls_back_to_one_digit() {
        assert_eq!(expand(r"(a)", "$10", "a"), "a0");
    }

    #[test]
    fn test_two_digit_reference() {
        let pattern = "(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)(k)(l)";
        assert_eq!(expand(pattern, "$12$1", "abcdefghijkl"), "la");
    }

    #[test]
    fn test_stray_dollar_is_literal() {
        assert_eq!(expand("x", "$x ${} $", "x"), "$x ${} $");
    }

    #[test]
    fn test_zero_is_literal() {
        assert_eq!(expand("(x)", "$0", "x"), "$0");
    }

    #[test]
    fn test_multiline_template() {
        assert_eq!(
            expand(r"tap\((\d+)\)", "new TouchAction(driver)\n  .tap($1)\n  .perform()", "tap(5)"),
            "new TouchAction(driver)\n  .tap(5)\n  .perform()"
        );
    }

    #[test]
    fn test_unknown_group_rejected() {
        let result = Template::parse("$3", 2);
        assert!(matches!(
            result,
            Err(InvalidRuleError::UnknownGroup {
                group: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn test_unknown_braced_group_rejected() {
        assert!(Template::parse("${4}", 1).is_err());
    }

    #[test]
    fn test_optional_group_not_matched_expands_empty() {
        assert_eq!(expand(r"a(b)?c", "[$1]", "ac"), "[]");
    }
}
