//! Row tokenizer and encoding handling for the exhibitor feed.
//!
//! The feed is a comma-separated table where fields may be wrapped in double
//! quotes, quoted fields may contain literal commas, and a doubled quote
//! inside a field escapes a literal quote. Tokenizing is best-effort: stray
//! or unbalanced quotes are kept literally, never raised as errors.

/// Split one raw feed line into trimmed, unquoted fields.
///
/// - The separator only splits outside a quoted span.
/// - Each field is whitespace-trimmed; one outer matching pair of double
///   quotes is then stripped.
/// - A doubled `""` inside the field collapses to a single `"`.
///
/// # Example
/// ```
/// use expomap::split_fields;
///
/// let fields = split_fields(r#"17.2,A01,Acme,Normal,"Sedan, Luxury Edition",,"#);
/// assert_eq!(fields[4], "Sedan, Luxury Edition");
/// ```
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                fields.push(clean_field(&current));
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(clean_field(&current));

    fields
}

/// Trim a raw field, strip one outer quote pair, and un-escape doubled quotes.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let unwrapped = if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };
    unwrapped.replace("\"\"", "\"")
}

/// Detect the encoding of raw bytes using chardet.
///
/// Normalized toward the encodings an exhibitor feed actually ships in:
/// UTF-8 and the Chinese legacy families.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "gb2312" | "gbk" | "gb18030" | "euc-cn" => "gb18030".to_string(),
        "big5" | "big5-hkscs" => "big5".to_string(),
        other => other.to_string(),
    }
}

/// Decode raw bytes using the detected encoding, lossily on bad sequences.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding {
        "gb18030" => encoding_rs::GB18030.decode(bytes).0.to_string(),
        "big5" => encoding_rs::BIG5.decode(bytes).0.to_string(),
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Detect and decode in one step; the fetch path works on raw bytes.
pub fn decode_bytes(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    decode_content(bytes, &encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_are_trimmed() {
        let fields = split_fields("17.2, A01 ,Acme Motors");
        assert_eq!(fields, vec!["17.2", "A01", "Acme Motors"]);
    }

    #[test]
    fn test_quoted_comma_stays_one_field() {
        let fields = split_fields(r#"17.2,A01,Acme,Normal,"Sedan, Luxury Edition",,note"#);
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[4], "Sedan, Luxury Edition");
        assert_eq!(fields[6], "note");
    }

    #[test]
    fn test_escaped_quote_collapses() {
        let fields = split_fields(r#"17.2,A01,"5.0""L Engine""#);
        assert_eq!(fields[2], "5.0\"L Engine");
    }

    #[test]
    fn test_outer_quotes_stripped_once() {
        let fields = split_fields(r#""17.2","A01","Acme""#);
        assert_eq!(fields, vec!["17.2", "A01", "Acme"]);
    }

    #[test]
    fn test_stray_quote_kept_literally() {
        // Unbalanced quote: the rest of the line is swallowed into one field,
        // content drifts, but nothing errors.
        let fields = split_fields(r#"17.2,A"01,Acme"#);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], "17.2");
        assert_eq!(fields[1], "A\"01,Acme");
    }

    #[test]
    fn test_empty_and_missing_fields() {
        let fields = split_fields("17.2,,Acme,Key,,,");
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[1], "");
        assert_eq!(fields[5], "");
    }

    #[test]
    fn test_blank_line_is_one_empty_field() {
        assert_eq!(split_fields(""), vec![""]);
        assert_eq!(split_fields("   "), vec![""]);
    }

    #[test]
    fn test_trailing_carriage_return_absorbed() {
        let fields = split_fields("17.2,A01,Acme\r");
        assert_eq!(fields[2], "Acme");
    }

    #[test]
    fn test_decode_bytes_ascii_feed() {
        let text = "Hall,Booth,BrandName,Category,ModelName,Tag,Note";
        assert_eq!(decode_bytes(text.as_bytes()), text);
    }

    #[test]
    fn test_decode_content_utf8() {
        let text = "展馆,展位,品牌";
        assert_eq!(decode_content(text.as_bytes(), "utf-8"), text);
    }

    #[test]
    fn test_decode_gb18030() {
        // "首发" in GB18030
        let bytes: &[u8] = &[0xCA, 0xD7, 0xB7, 0xA2];
        let decoded = decode_content(bytes, "gb18030");
        assert_eq!(decoded, "首发");
    }

    #[test]
    fn test_decode_unknown_encoding_falls_back_lossy() {
        let decoded = decode_content(b"plain ascii", "koi8-r");
        assert_eq!(decoded, "plain ascii");
    }
}
