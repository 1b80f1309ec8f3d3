const TOROB_BASE_URL: &str = "https://torob.com";

/// Link to the Torob search page for `query`.
pub fn search_url(query: &str) -> String {
    format!("{}/search/?query={}", TOROB_BASE_URL, url_encode(query))
}

fn url_encode(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ascii_query() {
        assert_eq!(
            search_url("galaxy a56 site:torob.com"),
            "https://torob.com/search/?query=galaxy%20a56%20site%3Atorob.com"
        );
    }

    #[test]
    fn test_persian_query_is_percent_encoded() {
        // "گوشی" is four two-byte code points
        assert_eq!(url_encode("گوشی"), "%DA%AF%D9%88%D8%B4%DB%8C");
    }

    #[test]
    fn test_unreserved_chars_pass_through() {
        assert_eq!(url_encode("A-z_0.9~"), "A-z_0.9~");
    }
}
