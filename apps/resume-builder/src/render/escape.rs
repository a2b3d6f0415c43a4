//! Escaping of user text for LaTeX.
//!
//! Both functions map one character at a time, so the replacement emitted for
//! one reserved character is never itself re-escaped. Text without reserved
//! characters comes back unchanged.

/// Escapes text for use as visible LaTeX content.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a URL for use as an `\href` target.
///
/// hyperref reads the target almost verbatim: only `%` and `#` need a backslash.
/// Characters that would unbalance the argument or end it early are
/// percent-encoded. `_`, `&` and `~` stay as they are so the link still resolves.
pub fn escape_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.trim().chars() {
        match c {
            '%' => out.push_str(r"\%"),
            '#' => out.push_str(r"\#"),
            '\\' => out.push_str(r"\%5C"),
            '{' => out.push_str(r"\%7B"),
            '}' => out.push_str(r"\%7D"),
            ' ' => out.push_str(r"\%20"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_each_reserved_character() {
        let cases = [
            ("&", r"\&"),
            ("%", r"\%"),
            ("$", r"\$"),
            ("#", r"\#"),
            ("_", r"\_"),
            ("{", r"\{"),
            ("}", r"\}"),
            ("~", r"\textasciitilde{}"),
            ("^", r"\textasciicircum{}"),
            ("\\", r"\textbackslash{}"),
        ];
        for (input, expected) in cases {
            assert_eq!(escape_latex(input), expected, "escaping {input:?}");
        }
    }

    #[test]
    fn test_backslash_replacement_is_not_reescaped() {
        assert_eq!(escape_latex(r"C:\dir"), r"C:\textbackslash{}dir");
        assert_eq!(escape_latex(r"\{x\}"), r"\textbackslash{}\{x\textbackslash{}\}");
    }

    #[test]
    fn test_safe_text_unchanged() {
        assert_eq!(escape_latex(""), "");
        let plain = "Improved throughput by 3x (Rust, gRPC) - see notes.";
        assert_eq!(escape_latex(plain), plain);
        assert_eq!(escape_latex(&escape_latex(plain)), plain);
    }

    #[test]
    fn test_mixed_sentence() {
        assert_eq!(
            escape_latex("Improved performance by Z% & saved $5_000 #1"),
            r"Improved performance by Z\% \& saved \$5\_000 \#1"
        );
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(escape_latex("Zürich – café"), "Zürich – café");
    }

    #[test]
    fn test_url_keeps_link_characters() {
        assert_eq!(
            escape_url("https://example.com/a_b?x=1&y=~z"),
            "https://example.com/a_b?x=1&y=~z"
        );
    }

    #[test]
    fn test_url_escapes_structure_breaking_characters() {
        assert_eq!(
            escape_url("https://example.com/p%20q#frag"),
            r"https://example.com/p\%20q\#frag"
        );
        assert_eq!(escape_url("https://x.com/{a}\\b c"), r"https://x.com/\%7Ba\%7D\%5Cb\%20c");
        assert_eq!(escape_url("  https://x.com  "), "https://x.com");
        assert_eq!(escape_url(""), "");
    }
}
