//! Selection language parser
//!
//! Turns one block of selection text into an ordered list of
//! [`OverlaySpec`] values. Pure function of its inputs; no state, no I/O.

use crate::error::ParseError;
use crate::spec::OverlaySpec;
use std::collections::HashMap;

/// Strength used when a line carries no explicit weights
pub const DEFAULT_STRENGTH: f32 = 1.0;

/// Separator between a name and its strength suffixes
pub const WEIGHT_SEPARATOR: char = ':';

/// Parse selection text with the default strength and separator
pub fn parse_selection(
    text: &str,
    names: &HashMap<String, String>,
) -> Result<Vec<OverlaySpec>, ParseError> {
    parse_selection_with(text, names, DEFAULT_STRENGTH, WEIGHT_SEPARATOR)
}

/// Parse selection text
///
/// Each non-empty line yields one spec, in line order. `names` maps short
/// names to full identifiers; unmapped names pass through literally so that
/// resolution failures surface during validation rather than here.
pub fn parse_selection_with(
    text: &str,
    names: &HashMap<String, String>,
    default_strength: f32,
    separator: char,
) -> Result<Vec<OverlaySpec>, ParseError> {
    let mut specs = Vec::new();

    for line in text.lines() {
        if let Some(description) = description_from_line(line) {
            specs.push(parse_description(
                description,
                names,
                default_strength,
                separator,
            )?);
        }
    }

    Ok(specs)
}

/// Strip whitespace, a trailing `#` comment, and the optional
/// `<lora:` / `<lyco:` wrapper from a line
///
/// The trailing `>` and the tag prefix are stripped independently; stray
/// angle brackets elsewhere are left alone. An empty remainder means the
/// line contributes nothing.
fn description_from_line(line: &str) -> Option<&str> {
    let mut rest = line.trim();

    if let Some(idx) = rest.find('#') {
        rest = rest[..idx].trim_end();
    }

    rest = rest.strip_suffix('>').unwrap_or(rest);
    for prefix in ["<lora:", "<lyco:"] {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped;
            break;
        }
    }

    (!rest.is_empty()).then_some(rest)
}

/// Apply the weight grammar to one description
///
/// Strengths are read right-to-left: at most two numeric suffixes are
/// consumed, and everything to their left is the name. Once a separator is
/// found its tail must be numeric.
fn parse_description(
    description: &str,
    names: &HashMap<String, String>,
    default_strength: f32,
    separator: char,
) -> Result<OverlaySpec, ParseError> {
    let invalid = |value: &str| ParseError::InvalidStrength {
        description: description.to_string(),
        value: value.to_string(),
    };

    let (name, strength_model, strength_encoder) = match description.rsplit_once(separator) {
        None => (description, default_strength, default_strength),
        Some((head, tail)) => {
            let last: f32 = tail.trim().parse().map_err(|_| invalid(tail))?;
            match head.rsplit_once(separator) {
                // name:model:encoder -- the earlier number drives the model side
                Some((name, mid)) => {
                    let model: f32 = mid.trim().parse().map_err(|_| invalid(mid))?;
                    (name, model, last)
                }
                None => (head, last, last),
            }
        }
    };

    let resolved = names.get(name).cloned().unwrap_or_else(|| name.to_string());
    Ok(OverlaySpec::new(resolved, strength_model, strength_encoder))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<OverlaySpec> {
        parse_selection(text, &HashMap::new()).unwrap()
    }

    #[test]
    fn test_bare_name_uses_default_strength() {
        let specs = parse("foo");
        assert_eq!(specs, vec![OverlaySpec::new("foo", 1.0, 1.0)]);
    }

    #[test]
    fn test_single_strength_covers_both_sides() {
        let specs = parse("foo:0.7");
        assert_eq!(specs, vec![OverlaySpec::new("foo", 0.7, 0.7)]);
    }

    #[test]
    fn test_two_strengths() {
        let specs = parse("foo:0.6:0.3");
        assert_eq!(specs, vec![OverlaySpec::new("foo", 0.6, 0.3)]);
    }

    #[test]
    fn test_tagged_line_with_comment() {
        let specs = parse("<lora:foo:0.5>  # comment");
        assert_eq!(specs, vec![OverlaySpec::new("foo", 0.5, 0.5)]);
    }

    #[test]
    fn test_lyco_tag() {
        let specs = parse("<lyco:foo:0.4>");
        assert_eq!(specs, vec![OverlaySpec::new("foo", 0.4, 0.4)]);
    }

    #[test]
    fn test_tag_halves_stripped_independently() {
        assert_eq!(parse("<lora:foo:0.5"), vec![OverlaySpec::new("foo", 0.5, 0.5)]);
        assert_eq!(parse("foo:0.5>"), vec![OverlaySpec::new("foo", 0.5, 0.5)]);
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\t\n").is_empty());
        assert!(parse("# just a comment\n  # another").is_empty());
        assert!(parse("<lora:>").is_empty());
    }

    #[test]
    fn test_line_order_preserved() {
        let specs = parse("b:0.1\na\nc:0.2:0.3");
        assert_eq!(
            specs,
            vec![
                OverlaySpec::new("b", 0.1, 0.1),
                OverlaySpec::new("a", 1.0, 1.0),
                OverlaySpec::new("c", 0.2, 0.3),
            ]
        );
    }

    #[test]
    fn test_extra_separators_stay_in_name() {
        // Only the two rightmost numeric fields are strengths.
        let specs = parse("styles:variant:0.6:0.3");
        assert_eq!(specs, vec![OverlaySpec::new("styles:variant", 0.6, 0.3)]);
    }

    #[test]
    fn test_path_like_name() {
        let specs = parse("styles/abstract.safetensors:0.8");
        assert_eq!(
            specs,
            vec![OverlaySpec::new("styles/abstract.safetensors", 0.8, 0.8)]
        );
    }

    #[test]
    fn test_negative_and_exponent_strengths() {
        let specs = parse("foo:-1\nbar:1e-2");
        assert_eq!(specs[0].strength_model, -1.0);
        assert_eq!(specs[1].strength_model, 0.01);
    }

    #[test]
    fn test_non_numeric_strength_is_error() {
        assert!(matches!(
            parse_selection("foo:high", &HashMap::new()),
            Err(ParseError::InvalidStrength { .. })
        ));
        // A found separator commits the tail to being numeric.
        assert!(parse_selection("a:b:0.5", &HashMap::new()).is_err());
        assert!(parse_selection("foo:", &HashMap::new()).is_err());
    }

    #[test]
    fn test_short_name_resolution() {
        let mut names = HashMap::new();
        names.insert("foo".to_string(), "styles/foo.safetensors".to_string());

        let specs = parse_selection("foo:0.5\nunmapped", &names).unwrap();
        assert_eq!(specs[0].name, "styles/foo.safetensors");
        assert_eq!(specs[1].name, "unmapped");
    }

    #[test]
    fn test_custom_default_and_separator() {
        let specs = parse_selection_with("foo@0.5\nbar", &HashMap::new(), 0.8, '@').unwrap();
        assert_eq!(specs[0], OverlaySpec::new("foo", 0.5, 0.5));
        assert_eq!(specs[1], OverlaySpec::new("bar", 0.8, 0.8));
    }

    #[test]
    fn test_specs_start_without_resources() {
        let specs = parse("foo:0.5");
        assert!(!specs[0].is_loaded());
    }
}
