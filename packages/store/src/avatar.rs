//! Avatar initials derived from a student's display name.

/// What an avatar shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Initials {
    /// Blank name: render the generic user icon.
    Placeholder,
    Text(String),
}

/// Derive avatar initials from a display name.
///
/// A single space-delimited token yields its first character. Anything longer
/// yields the first character followed by the last character of the trimmed
/// name, so `"Jane Doe"` becomes `"Je"`.
pub fn initials(name: &str) -> Initials {
    let trimmed = name.trim();
    let Some(first) = trimmed.chars().next() else {
        return Initials::Placeholder;
    };

    if !trimmed.contains(' ') {
        return Initials::Text(first.to_string());
    }

    let mut text = String::with_capacity(8);
    text.push(first);
    if let Some(last) = trimmed.chars().next_back() {
        text.push(last);
    }
    Initials::Text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_use_placeholder() {
        assert_eq!(initials(""), Initials::Placeholder);
        assert_eq!(initials("   "), Initials::Placeholder);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(initials("Bob"), Initials::Text("B".into()));
        assert_eq!(initials("  bob  "), Initials::Text("b".into()));
    }

    #[test]
    fn test_multiple_tokens_use_last_char_of_full_name() {
        assert_eq!(initials("Jane Doe"), Initials::Text("Je".into()));
        assert_eq!(initials(" Mary Ann Smith "), Initials::Text("Mh".into()));
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(initials("Émile Zoë"), Initials::Text("Éë".into()));
    }
}
