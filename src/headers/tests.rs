//! Tests for the header collection.

#[cfg(test)]
mod tests {
    use crate::headers::{default_headers, Error, Headers};

    #[test]
    fn test_parse_single_header() {
        let mut headers = Headers::new();
        let data = b"Host: localhost:42069\r\n\r\n";
        let (n, done) = headers.parse_line(data).unwrap();
        assert_eq!(n, 23);
        assert!(!done);
        assert_eq!(headers.get("host"), Some("localhost:42069"));
    }

    #[test]
    fn test_parse_header_with_extra_whitespace() {
        let mut headers = Headers::new();
        let data = b"       Host: localhost:42069       \r\n\r\n";
        let (n, done) = headers.parse_line(data).unwrap();
        assert_eq!(n, 37);
        assert!(!done);
        assert_eq!(headers.get("Host"), Some("localhost:42069"));
    }

    #[test]
    fn test_parse_terminator() {
        let mut headers = Headers::new();
        let (n, done) = headers.parse_line(b"\r\nbody").unwrap();
        assert_eq!(n, 0);
        assert!(done);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_parse_incomplete_line() {
        let mut headers = Headers::new();
        let (n, done) = headers.parse_line(b"Host: local").unwrap();
        assert_eq!(n, 0);
        assert!(!done);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_space_before_colon_is_invalid_name() {
        let mut headers = Headers::new();
        let result = headers.parse_line(b"       Host : localhost:42069       \r\n\r\n");
        assert_eq!(result, Err(Error::InvalidHeaderName("Host ".to_string())));
    }

    #[test]
    fn test_invalid_character_in_name() {
        let mut headers = Headers::new();
        let result = headers.parse_line(b"H\xc2\xa9st: localhost:42069\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidHeaderName(_))));
    }

    #[test]
    fn test_missing_colon() {
        let mut headers = Headers::new();
        let result = headers.parse_line(b"NoColonHere\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedHeader(ref l)) if l == "NoColonHere"));
    }

    #[test]
    fn test_empty_name() {
        let mut headers = Headers::new();
        let result = headers.parse_line(b": value\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidHeaderName(_))));
    }

    #[test]
    fn test_duplicate_headers_are_merged() {
        let mut headers = Headers::new();
        let data = b"Foo: bar\r\nFOO: baz\r\n\r\n";
        let (first, _) = headers.parse_line(data).unwrap();
        let (second, _) = headers.parse_line(&data[first..]).unwrap();
        let (_, done) = headers.parse_line(&data[first + second..]).unwrap();
        assert!(done);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.keys().collect::<Vec<_>>(), vec!["foo"]);
        assert_eq!(headers.get("foo"), Some("bar, baz"));
    }

    #[test]
    fn test_value_with_colons() {
        let mut headers = Headers::new();
        headers.parse_line(b"X-Test: value:with:colons\r\n").unwrap();
        assert_eq!(headers.get("x-test"), Some("value:with:colons"));
    }

    #[test]
    fn test_set_appends() {
        let mut headers = Headers::new();
        headers.set("Accept", "text/html");
        headers.set("accept", "application/json");
        assert_eq!(headers.get("ACCEPT"), Some("text/html, application/json"));
    }

    #[test]
    fn test_overwrite_replaces() {
        let mut headers = Headers::new();
        headers.set("Content-Type", "plain/text");
        headers.overwrite("content-type", "text/html");
        assert_eq!(headers.get("Content-Type"), Some("text/html"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut headers = Headers::new();
        headers.set("Content-Length", "10");
        assert_eq!(headers.delete("CONTENT-LENGTH"), Some("10".to_string()));
        assert!(!headers.contains("content-length"));
        assert_eq!(headers.delete("content-length"), None);
    }

    #[test]
    fn test_iteration_keeps_insertion_order_and_spelling() {
        let mut headers = Headers::new();
        headers.set("X-B", "2");
        headers.set("X-A", "1");
        headers.set("x-b", "3");
        let pairs: Vec<_> = headers.iter().collect();
        assert_eq!(pairs, vec![("X-B", "2, 3"), ("X-A", "1")]);
    }

    #[test]
    fn test_default_headers() {
        let headers = default_headers(42);
        let pairs: Vec<_> = (&headers).into_iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("Connection", "close"),
                ("Content-Length", "42"),
                ("Content-Type", "plain/text"),
            ]
        );
    }
}
