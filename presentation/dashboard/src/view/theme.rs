use business::domain::purchase::value_objects::ColorToken;

/// Maps a semantic color slot to an ANSI-colored status dot.
pub fn status_dot(color: ColorToken) -> &'static str {
    match color {
        ColorToken::Warning => "\x1b[33m●\x1b[0m",
        ColorToken::Success => "\x1b[32m●\x1b[0m",
        ColorToken::Danger => "\x1b[31m●\x1b[0m",
        ColorToken::Neutral => "\x1b[90m●\x1b[0m",
    }
}
