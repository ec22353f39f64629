//! Domain helpers shared by the rules.

/// Lowercases `domain` and strips one leading `www.`.
pub fn clean_domain(domain: &str) -> String {
    let lower = domain.to_lowercase();
    match lower.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}

/// Name used for similarity checks: text before the last `.`, or the whole string
/// when there is no `.` past the first character.
pub fn name_without_tld(domain: &str) -> &str {
    match domain.rfind('.') {
        Some(idx) if idx > 0 => &domain[..idx],
        _ => domain,
    }
}

/// Name used for the character heuristics: text before the last `.`, empty when
/// the domain has no `.` at all.
pub fn name_before_last_dot(domain: &str) -> &str {
    match domain.rfind('.') {
        Some(idx) => &domain[..idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_single_www() {
        assert_eq!(clean_domain("WWW.Google.com"), "google.com");
        assert_eq!(clean_domain("www.www.example.org"), "www.example.org");
        assert_eq!(clean_domain("wwwexample.org"), "wwwexample.org");
    }

    #[test]
    fn name_without_tld_cases() {
        assert_eq!(name_without_tld("google.com"), "google");
        assert_eq!(name_without_tld("stc.com.sa"), "stc.com");
        assert_eq!(name_without_tld("localhost"), "localhost");
        assert_eq!(name_without_tld(".com"), ".com");
        assert_eq!(name_without_tld(""), "");
    }

    #[test]
    fn name_before_last_dot_cases() {
        assert_eq!(name_before_last_dot("my-shop1.net"), "my-shop1");
        assert_eq!(name_before_last_dot("localhost"), "");
        assert_eq!(name_before_last_dot(".com"), "");
    }
}
