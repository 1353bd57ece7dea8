use serde::Deserialize;

fn default_interval_ms() -> u32 {
    5000
}

fn default_true() -> bool {
    true
}

fn default_submit_delay_ms() -> u32 {
    1500
}

fn default_count_duration_ms() -> u32 {
    2000
}

fn default_stagger_ms() -> u32 {
    200
}

fn default_frame_ms() -> u32 {
    16
}

fn default_background() -> String {
    "/assets/hero-default.jpg".to_string()
}

/// Everything the site renders that isn't markup.
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SiteContent {
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub service_pages: Vec<ServicePageCopy>,
    #[serde(default)]
    pub portfolio: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub statistics: StatisticsConfig,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub contact: ContactDetails,
    #[serde(default)]
    pub contact_form: ContactFormConfig,
}

impl SiteContent {
    pub fn service_page(&self, category: ServiceCategory) -> Option<&ServicePageCopy> {
        self.service_pages.iter().find(|page| page.category == category)
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct HeroConfig {
    #[serde(default = "default_interval_ms")]
    pub auto_play_interval_ms: u32,
    #[serde(default = "default_true")]
    pub show_controls: bool,
    #[serde(default = "default_background")]
    pub default_background: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            auto_play_interval_ms: default_interval_ms(),
            show_controls: true,
            default_background: default_background(),
            slides: Vec::new(),
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub call_to_action: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
}

impl Slide {
    pub fn background_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.background_image.as_deref().unwrap_or(fallback)
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    DigitalMarketing,
    WebDevelopment,
    UiUxDesign,
    AiIntegration,
    Cybersecurity,
    GlobalSolutions,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::DigitalMarketing,
        ServiceCategory::WebDevelopment,
        ServiceCategory::UiUxDesign,
        ServiceCategory::AiIntegration,
        ServiceCategory::Cybersecurity,
        ServiceCategory::GlobalSolutions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::DigitalMarketing => "Digital Marketing",
            ServiceCategory::WebDevelopment => "Web Development",
            ServiceCategory::UiUxDesign => "UI/UX Design",
            ServiceCategory::AiIntegration => "AI Integration",
            ServiceCategory::Cybersecurity => "Cybersecurity",
            ServiceCategory::GlobalSolutions => "Global Solutions",
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Service {
    pub category: ServiceCategory,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ServicePageCopy {
    pub category: ServiceCategory,
    pub headline: String,
    pub intro: String,
    #[serde(default)]
    pub offerings: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub title: String,
    pub client: String,
    pub category: String,
    pub image: String,
    pub summary: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

impl Project {
    /// Cover image first, then the gallery.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.image.as_str()).chain(self.gallery.iter().map(String::as_str))
    }

    pub fn image_count(&self) -> usize {
        1 + self.gallery.len()
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Statistic {
    pub label: String,
    pub value: u32,
    #[serde(default)]
    pub suffix: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct StatisticsConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub items: Vec<Statistic>,
    #[serde(default = "default_count_duration_ms")]
    pub count_duration_ms: u32,
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u32,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u32,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            items: Vec::new(),
            count_duration_ms: default_count_duration_ms(),
            stagger_ms: default_stagger_ms(),
            frame_ms: default_frame_ms(),
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub map_url: String,
    #[serde(default)]
    pub hours: Vec<OpeningHours>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum SimulatedOutcome {
    #[default]
    Succeed,
    Fail,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ContactFormConfig {
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u32,
    #[serde(default)]
    pub simulated_outcome: SimulatedOutcome,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            simulated_outcome: SimulatedOutcome::default(),
        }
    }
}
