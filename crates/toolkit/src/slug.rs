use crate::{Result, ToolkitError};

/// Turn `s` into a URL-friendly slug.
///
/// Input is lower-cased, every run of characters outside `[a-z0-9]` becomes a
/// single `-`, and leading or trailing dashes are dropped.
///
/// ```
/// use checkin_toolkit::slugify;
///
/// assert_eq!(slugify("Now is the time!").unwrap(), "now-is-the-time");
/// assert!(slugify("¡¿?!").is_err());
/// ```
pub fn slugify(s: &str) -> Result<String> {
    if s.is_empty() {
        return Err(ToolkitError::EmptySlugInput);
    }

    let mut slug = String::with_capacity(s.len());
    let mut pending_dash = false;

    for c in s.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        return Err(ToolkitError::EmptySlug);
    }

    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        let cases = [
            ("now is the time", "now-is-the-time"),
            ("  Mixed CASE  ", "mixed-case"),
            ("Site #12 -- North Pit", "site-12-north-pit"),
            ("hello, world & friends", "hello-world-friends"),
            ("café latte", "caf-latte"),
            ("already-a-slug", "already-a-slug"),
        ];

        for (input, expected) in cases {
            assert_eq!(slugify(input).unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_slugify_empty_input() {
        assert!(matches!(slugify(""), Err(ToolkitError::EmptySlugInput)));
    }

    #[test]
    fn test_slugify_nothing_left() {
        assert!(matches!(slugify("!!! ---"), Err(ToolkitError::EmptySlug)));
        assert!(matches!(slugify("日本語"), Err(ToolkitError::EmptySlug)));
    }
}
