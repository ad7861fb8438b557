//! `Authorization` header parsing.
//!
//! Two schemes are accepted, both carrying the same opaque token:
//! - `Bearer <token>`
//! - `Token token=<token>` (the value may be double-quoted)
//!
//! Scheme names compare case-insensitively. Anything else yields `None`.

pub fn parse_authorization(header: &str) -> Option<&str> {
    let (scheme, rest) = header.trim().split_once(char::is_whitespace)?;
    let rest = rest.trim();

    let token = if scheme.eq_ignore_ascii_case("bearer") {
        rest
    } else if scheme.eq_ignore_ascii_case("token") {
        let (key, value) = rest.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("token") {
            return None;
        }
        let value = value.trim();
        value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value)
    } else {
        return None;
    };

    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::parse_authorization;

    #[test]
    fn bearer_scheme() {
        assert_eq!(parse_authorization("Bearer abc123"), Some("abc123"));
        assert_eq!(parse_authorization("bearer   abc123 "), Some("abc123"));
    }

    #[test]
    fn token_scheme_plain_and_quoted() {
        assert_eq!(parse_authorization("Token token=abc123"), Some("abc123"));
        assert_eq!(parse_authorization("Token token=\"abc123\""), Some("abc123"));
        assert_eq!(parse_authorization("TOKEN token = abc123"), Some("abc123"));
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(parse_authorization(""), None);
        assert_eq!(parse_authorization("Bearer"), None);
        assert_eq!(parse_authorization("Bearer "), None);
        assert_eq!(parse_authorization("Basic dXNlcjpwYXNz"), None);
        assert_eq!(parse_authorization("Token abc123"), None);
        assert_eq!(parse_authorization("Token key=abc123"), None);
        assert_eq!(parse_authorization("Token token=\"\""), None);
        assert_eq!(parse_authorization("Bearer two tokens"), None);
    }
}
