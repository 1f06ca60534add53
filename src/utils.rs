/// Formats an optional f64 to 2 decimal places, or returns "—" if None or non-finite.
pub fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{x:.2}"),
        _ => "—".to_owned(),
    }
}

/// Shortens `s` to at most `max` characters, marking the cut with "…".
pub fn truncate_label(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_owned();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_opt() {
        assert_eq!(fmt_opt(Some(1.234)), "1.23");
        assert_eq!(fmt_opt(None), "—");
        assert_eq!(fmt_opt(Some(f64::NAN)), "—");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Nintendo", 20), "Nintendo");
        assert_eq!(truncate_label("Electronic Arts", 8), "Electro…");
    }
}
