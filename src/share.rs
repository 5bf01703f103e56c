//! Share-to-X message formatting

/// Tweet intent endpoint
pub const SHARE_ENDPOINT: &str = "https://twitter.com/intent/tweet";

/// Post text embedding the player's best score
pub fn share_message(high_score: u64) -> String {
    format!(
        "Join the $WIP community! Show us your highest score. Let's whale out and beat these bears! 🐋🔥 My high score: {} #WIPRUNNER  Join us: https://x.com/TheWhaleWip",
        high_score
    )
}

/// Full intent URL with the message as the `text` query parameter
pub fn share_url(high_score: u64) -> String {
    format!(
        "{}?text={}",
        SHARE_ENDPOINT,
        encode_uri_component(&share_message(high_score))
    )
}

/// Percent-encode like JavaScript's `encodeURIComponent`
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
