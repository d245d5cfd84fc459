use super::api::Thumbnails;
use super::VideoSummary;

/// Growth since the campaign baseline, as `+X.X%`.
///
/// Only positive growth yields a value: a missing or non-positive baseline,
/// or a live count at or below it, produces `None` rather than `0%` or a
/// negative badge.
pub fn growth_percentage(baseline: Option<&str>, live: u64) -> Option<String> {
    let baseline = parse_leading_int(baseline?)?;
    if baseline <= 0 {
        return None;
    }
    let baseline = baseline as u64;
    if live <= baseline {
        return None;
    }
    let growth = (live - baseline) as f64 / baseline as f64 * 100.0;
    Some(format!("+{growth:.1}%"))
}

/// Leading integer of `text`, ignoring surrounding whitespace and anything
/// after the digits (`"1500 subs"` is 1500). `None` when no digits lead.
/// Digit runs beyond the `i64` range saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Count fields arrive as strings; anything unparsable counts as zero.
pub fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(parse_leading_int)
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0)
}

/// Highest resolution available: maxres, high, medium, default.
pub(crate) fn best_thumbnail(thumbnails: &Thumbnails) -> Option<String> {
    [
        &thumbnails.maxres,
        &thumbnails.high,
        &thumbnails.medium,
        &thumbnails.default,
    ]
    .into_iter()
    .flatten()
    .map(|thumb| thumb.url.clone())
    .find(|url| !url.is_empty())
}

/// The video to feature: an active live broadcast wins over the most recent
/// upload.
pub fn featured_video(live: Option<String>, uploads: &[VideoSummary]) -> Option<String> {
    live.or_else(|| uploads.first().map(|video| video.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::super::api::Thumbnail;
    use super::*;

    #[test]
    fn growth_is_formatted_with_one_decimal() {
        assert_eq!(
            growth_percentage(Some("1000"), 1500).as_deref(),
            Some("+50.0%")
        );
        assert_eq!(growth_percentage(Some("3"), 4).as_deref(), Some("+33.3%"));
        assert_eq!(
            growth_percentage(Some("1000"), 1001).as_deref(),
            Some("+0.1%")
        );
    }

    #[test]
    fn no_growth_without_positive_increase() {
        assert_eq!(growth_percentage(Some("1000"), 900), None);
        assert_eq!(growth_percentage(Some("1000"), 1000), None);
        assert_eq!(growth_percentage(None, 1500), None);
        assert_eq!(growth_percentage(Some("0"), 1500), None);
        assert_eq!(growth_percentage(Some("-10"), 1500), None);
        assert_eq!(growth_percentage(Some("abc"), 1500), None);
        assert_eq!(growth_percentage(Some(""), 1500), None);
    }

    #[test]
    fn baseline_parses_like_a_leading_integer() {
        assert_eq!(parse_leading_int(" 1500 subs"), Some(1500));
        assert_eq!(parse_leading_int("12.9"), Some(12));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("k12"), None);
        assert_eq!(
            growth_percentage(Some("1,000"), 1500).as_deref(),
            Some("+149900.0%")
        );
    }

    #[test]
    fn oversized_digit_runs_saturate() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999999"), Some(-i64::MAX));
        assert_eq!(growth_percentage(Some("99999999999999999999999"), 1500), None);
        assert_eq!(parse_count(Some("99999999999999999999999")), i64::MAX as u64);
    }

    #[test]
    fn counts_default_to_zero() {
        assert_eq!(parse_count(Some("12345")), 12345);
        assert_eq!(parse_count(Some("n/a")), 0);
        assert_eq!(parse_count(None), 0);
    }

    fn thumbs(maxres: bool, high: bool, medium: bool, default: bool) -> Thumbnails {
        let make = |present: bool, name: &str| {
            present.then(|| Thumbnail {
                url: format!("https://i.ytimg.com/{name}.jpg"),
            })
        };
        Thumbnails {
            maxres: make(maxres, "maxres"),
            high: make(high, "high"),
            medium: make(medium, "medium"),
            default: make(default, "default"),
        }
    }

    #[test]
    fn thumbnail_preference_holds_for_every_combination() {
        for mask in 0u8..16 {
            let (maxres, high, medium, default) =
                (mask & 8 != 0, mask & 4 != 0, mask & 2 != 0, mask & 1 != 0);
            let expected = if maxres {
                Some("maxres")
            } else if high {
                Some("high")
            } else if medium {
                Some("medium")
            } else if default {
                Some("default")
            } else {
                None
            };
            let got = best_thumbnail(&thumbs(maxres, high, medium, default));
            assert_eq!(
                got,
                expected.map(|name| format!("https://i.ytimg.com/{name}.jpg")),
                "mask {mask:04b}"
            );
        }
    }

    fn video(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_owned(),
            title: format!("video {id}"),
            thumbnail: None,
            published_at: None,
        }
    }

    #[test]
    fn live_broadcast_beats_recent_uploads() {
        let uploads = vec![video("newest"), video("older")];
        assert_eq!(
            featured_video(Some("live1".to_owned()), &uploads).as_deref(),
            Some("live1")
        );
        assert_eq!(featured_video(None, &uploads).as_deref(), Some("newest"));
        assert_eq!(featured_video(None, &[]), None);
        assert_eq!(
            featured_video(Some("live1".to_owned()), &[]).as_deref(),
            Some("live1")
        );
    }
}
