/// `2450` -> `"2,450"`.
#[must_use]
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole stars for the rounded rating, followed by the exact value.
#[must_use]
pub fn format_rating_stars(rating: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let stars = rating.clamp(0.0, 5.0).round() as usize;
    format!("{} ({rating})", "★".repeat(stars))
}

/// Rounded percentage, `0..=100`.
#[must_use]
pub fn round_percent(percent: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = percent.clamp(0.0, 100.0).round() as u8;
    rounded
}

/// First `max_chars` characters, with an ellipsis when something was cut.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}
