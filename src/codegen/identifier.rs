//! Base name to component identifier.

/// Characters that separate words in a base name. Runs of them count once.
fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | ' ')
}

/// Derive a capitalized, ASCII-alphanumeric identifier from a base name.
///
/// Words are split on `-`, `_`, `.` and spaces, each word gets an uppercase
/// first character and a lowercase remainder, the words are joined, and
/// anything left that is not an ASCII letter or digit is dropped.
///
/// ```
/// assert_eq!(svgicon::to_identifier("my-icon_v2.final"), "MyIconV2Final");
/// assert_eq!(svgicon::to_identifier("ARROW left"), "ArrowLeft");
/// ```
pub fn to_identifier(base_name: &str) -> String {
    base_name
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .flat_map(capitalize)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn capitalize(word: &str) -> impl Iterator<Item = char> + '_ {
    let mut chars = word.chars();
    let first = chars.next().into_iter().flat_map(char::to_uppercase);
    first.chain(chars.flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators() {
        assert_eq!(to_identifier("home-filled"), "HomeFilled");
        assert_eq!(to_identifier("my.icon_v2 final"), "MyIconV2Final");
        assert_eq!(to_identifier("a--b__c..d  e"), "ABCDE");
    }

    #[test]
    fn casing_is_normalized_per_word() {
        assert_eq!(to_identifier("HomeFilled"), "Homefilled");
        assert_eq!(to_identifier("SHOUTY_name"), "ShoutyName");
    }

    #[test]
    fn leading_and_trailing_separators() {
        assert_eq!(to_identifier("-_home_-"), "Home");
        assert_eq!(to_identifier(" . "), "");
        assert_eq!(to_identifier(""), "");
    }

    #[test]
    fn other_characters_are_stripped() {
        assert_eq!(to_identifier("arrow(1)+copy"), "Arrow1copy");
        assert_eq!(to_identifier("café-menu"), "CafMenu");
        // a non-ASCII first letter is dropped after capitalizing, so the
        // rest of the word stays lowercase
        assert_eq!(to_identifier("écran"), "cran");
    }

    #[test]
    fn digits_pass_through() {
        assert_eq!(to_identifier("24-hours"), "24Hours");
        assert_eq!(to_identifier("icon_2x"), "Icon2x");
    }
}
