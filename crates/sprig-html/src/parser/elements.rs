//! Element classification tables.

/// Void elements: never given children, with or without a trailing `/`.
pub const VOID_ELEMENTS: [&str; 17] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "menuitem", "meta", "param", "source", "track", "wbr",
];

/// Raw-text elements: their body is captured verbatim up to the matching
/// `</name`, without looking for markup.
pub const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "textarea"];

/// Whether `tag_name` is a void element. Case-sensitive: `BR` is not.
#[must_use]
pub fn is_self_closing_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

/// Whether `tag_name` is a raw-text element. Case-sensitive.
#[must_use]
pub fn is_raw_text_element(tag_name: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements_are_exact_matches() {
        for tag in VOID_ELEMENTS {
            assert!(is_self_closing_element(tag), "{tag}");
        }
        assert!(!is_self_closing_element("BR"));
        assert!(!is_self_closing_element("div"));
        assert!(!is_self_closing_element("img "));
        assert!(!is_self_closing_element(""));
    }

    #[test]
    fn test_raw_text_elements() {
        assert!(is_raw_text_element("script"));
        assert!(is_raw_text_element("textarea"));
        assert!(!is_raw_text_element("style"));
        assert!(!is_raw_text_element("SCRIPT"));
    }
}
