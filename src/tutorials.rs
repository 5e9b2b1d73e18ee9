//! Tutorial gallery helpers.

use crate::models::Tutorial;

/// URL the player should embed: the explicit embed URL, else the YouTube
/// embed for the video id, else nothing.
pub fn embed_source(tutorial: &Tutorial) -> Option<String> {
    if let Some(url) = tutorial.embed_url.as_deref().filter(|u| !u.is_empty()) {
        return Some(url.to_string());
    }
    tutorial
        .youtube_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(|id| format!("https://www.youtube.com/embed/{id}"))
}

/// Tutorials in `category`, ignoring case. A blank category keeps all.
pub fn filter_by_category<'a>(tutorials: &'a [Tutorial], category: &str) -> Vec<&'a Tutorial> {
    let wanted = category.trim();
    tutorials
        .iter()
        .filter(|t| wanted.is_empty() || t.category.eq_ignore_ascii_case(wanted))
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories(tutorials: &[Tutorial]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for t in tutorials {
        if !seen.contains(&t.category.as_str()) {
            seen.push(&t.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tutorials;
    use crate::models::enums::Difficulty;

    fn tutorial(youtube_id: Option<&str>, embed_url: Option<&str>) -> Tutorial {
        Tutorial {
            id: "t".into(),
            title: "Recovery position".into(),
            description: String::new(),
            duration: "3:00".into(),
            difficulty: Difficulty::Beginner,
            youtube_id: youtube_id.map(str::to_string),
            embed_url: embed_url.map(str::to_string),
            channel: "St John".into(),
            views: "10K".into(),
            category: "Basics".into(),
        }
    }

    #[test]
    fn embed_url_wins() {
        let t = tutorial(Some("abc123"), Some("https://player.example/v/1"));
        assert_eq!(embed_source(&t).as_deref(), Some("https://player.example/v/1"));
    }

    #[test]
    fn youtube_id_becomes_embed() {
        let t = tutorial(Some("abc123"), None);
        assert_eq!(
            embed_source(&t).as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn no_source_is_none() {
        assert!(embed_source(&tutorial(None, None)).is_none());
        assert!(embed_source(&tutorial(Some(""), Some(""))).is_none());
    }

    #[test]
    fn catalog_tutorials_all_embed() {
        assert!(tutorials().iter().all(|t| embed_source(t).is_some()));
    }

    #[test]
    fn category_filter_ignores_case() {
        let burns = filter_by_category(tutorials(), "burns");
        assert_eq!(burns.len(), 1);
        assert_eq!(burns[0].title, "Burn Treatment and First Aid");

        assert_eq!(filter_by_category(tutorials(), "").len(), tutorials().len());
        assert!(filter_by_category(tutorials(), "Poisoning").is_empty());
    }

    #[test]
    fn categories_are_distinct() {
        let all = categories(tutorials());
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], "CPR");
    }
}
