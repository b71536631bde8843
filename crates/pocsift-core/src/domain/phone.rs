/// Pulls the first phone-shaped run of digits out of free text, dropping
/// common separators: `"555-1234 call anytime"` yields `"5551234"`.
///
/// A single space is tolerated only after a closing parenthesis so area codes
/// written as `(703) 555-0100` stay intact.
pub fn extract_phone_digits(text: &str) -> Option<String> {
    let start = text.find(|ch: char| ch.is_ascii_digit())?;

    let mut out = String::new();
    let mut prev = '\0';
    for ch in text[start..].chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '-' | '.' | '(' | ')' | '/' => {}
            ' ' if prev == ')' => {}
            _ => break,
        }
        prev = ch;
    }

    Some(out)
}
