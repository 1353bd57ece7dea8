use std::rc::Rc;

use log::{error, info};

use crate::content::SiteContent;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("site content is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse_content(raw: &str) -> Result<SiteContent, ContentError> {
    Ok(serde_json::from_str(raw)?)
}

fn load() -> Rc<SiteContent> {
    match parse_content(SITE_JSON) {
        Ok(content) => {
            info!(
                "Loaded site content: {} slides, {} faq entries",
                content.hero.slides.len(),
                content.faq.len()
            );
            Rc::new(content)
        }
        Err(e) => {
            // Empty content keeps every section on its render-nothing path
            error!("{}", e);
            Rc::new(SiteContent::default())
        }
    }
}

thread_local! {
    static CONTENT: Rc<SiteContent> = load();
}

/// Parsed once per page load, shared by every page after that.
pub fn site_content() -> Rc<SiteContent> {
    CONTENT.with(Rc::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ServiceCategory, SimulatedOutcome};

    #[test]
    fn bundled_content_parses() {
        let content = parse_content(SITE_JSON).unwrap();
        assert_eq!(content.hero.slides.len(), 4);
        assert_eq!(content.hero.auto_play_interval_ms, 5000);
        assert!(!content.faq.is_empty());
        for category in ServiceCategory::ALL {
            assert!(content.service_page(category).is_some(), "{:?}", category);
        }
        let stats = &content.statistics;
        assert_eq!(stats.items.len(), 4);
        assert_eq!((stats.count_duration_ms, stats.stagger_ms, stats.frame_ms), (2000, 200, 16));
        assert_eq!(stats.items[3].suffix.as_deref(), Some("%"));
        assert_eq!(content.contact_form.submit_delay_ms, 1500);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let content = parse_content(r#"{ "hero": { "slides": [] } }"#).unwrap();
        assert_eq!(content.hero.auto_play_interval_ms, 5000);
        assert!(content.hero.show_controls);
        assert_eq!(content.contact_form.submit_delay_ms, 1500);
        assert_eq!(content.contact_form.simulated_outcome, SimulatedOutcome::Succeed);
        assert!(content.testimonials.is_empty());
        assert!(content.statistics.items.is_empty());
        assert_eq!(content.statistics.count_duration_ms, 2000);
    }

    #[test]
    fn slide_without_background_uses_fallback() {
        let content = parse_content(
            r#"{ "hero": { "default_background": "/assets/x.jpg", "slides": [
                { "title": "t", "subtitle": "s", "description": "d" }
            ] } }"#,
        )
        .unwrap();
        let slide = &content.hero.slides[0];
        assert_eq!(slide.call_to_action, None);
        assert_eq!(slide.background_or(&content.hero.default_background), "/assets/x.jpg");
    }

    #[test]
    fn malformed_content_is_an_error() {
        let err = parse_content("{ \"hero\": 3 }").unwrap_err();
        assert!(err.to_string().starts_with("site content is not valid"));
    }
}
