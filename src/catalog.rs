use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of services a visitor can ask about.
///
/// Serialized as its display title, which is also the value the selection
/// control submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "Email Marketing")]
    EmailMarketing,
    #[serde(rename = "Social Media Marketing")]
    SocialMediaMarketing,
    #[serde(rename = "Google Ads")]
    GoogleAds,
    #[serde(rename = "Youtube Ads")]
    YoutubeAds,
    #[serde(rename = "Website Design & Hosting")]
    WebsiteDesignHosting,
    #[serde(rename = "Pamphlet Design")]
    PamphletDesign,
    #[serde(rename = "Google & Online Reviews")]
    OnlineReviews,
    #[serde(rename = "Visiting Cards")]
    VisitingCards,
    #[serde(rename = "Video Editing")]
    VideoEditing,
    #[serde(rename = "Voice Over for Promotions")]
    VoiceOver,
    #[serde(rename = "Flyers")]
    Flyers,
    #[serde(rename = "Practo Patient Stories")]
    PractoPatientStories,
    #[serde(rename = "Lybrate Marketing")]
    LybrateMarketing,
    #[serde(rename = "Just Dial Optimization")]
    JustDialOptimization,
}

impl Service {
    /// Catalog order, as shown in the selection control.
    pub const ALL: [Service; 14] = [
        Service::EmailMarketing,
        Service::SocialMediaMarketing,
        Service::GoogleAds,
        Service::YoutubeAds,
        Service::WebsiteDesignHosting,
        Service::PamphletDesign,
        Service::OnlineReviews,
        Service::VisitingCards,
        Service::VideoEditing,
        Service::VoiceOver,
        Service::Flyers,
        Service::PractoPatientStories,
        Service::LybrateMarketing,
        Service::JustDialOptimization,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Service::EmailMarketing => "Email Marketing",
            Service::SocialMediaMarketing => "Social Media Marketing",
            Service::GoogleAds => "Google Ads",
            Service::YoutubeAds => "Youtube Ads",
            Service::WebsiteDesignHosting => "Website Design & Hosting",
            Service::PamphletDesign => "Pamphlet Design",
            Service::OnlineReviews => "Google & Online Reviews",
            Service::VisitingCards => "Visiting Cards",
            Service::VideoEditing => "Video Editing",
            Service::VoiceOver => "Voice Over for Promotions",
            Service::Flyers => "Flyers",
            Service::PractoPatientStories => "Practo Patient Stories",
            Service::LybrateMarketing => "Lybrate Marketing",
            Service::JustDialOptimization => "Just Dial Optimization",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Service::EmailMarketing => "Targeted campaigns to engage and convert your audience.",
            Service::SocialMediaMarketing => {
                "Building a strong, interactive social media presence."
            }
            Service::GoogleAds => "Maximizing your ROI with powerful, data-driven Google Ads.",
            Service::YoutubeAds => {
                "Captivating video ads that reach millions of potential customers."
            }
            Service::WebsiteDesignHosting => "Stunning websites designed, built, and hosted for you.",
            Service::PamphletDesign => {
                "Creative pamphlets that effectively communicate your message."
            }
            Service::OnlineReviews => "Enhance your reputation with positive review management.",
            Service::VisitingCards => {
                "Professional visiting cards that make a lasting impression."
            }
            Service::VideoEditing => "Polished and engaging video content for your brand.",
            Service::VoiceOver => {
                "Compelling voice-overs that capture your audience's attention."
            }
            Service::Flyers => "Eye-catching flyers designed to promote your events and offers.",
            Service::PractoPatientStories => {
                "Build trust with authentic patient stories on Practo."
            }
            Service::LybrateMarketing => "Targeted marketing on Lybrate to reach new patients.",
            Service::JustDialOptimization => "Boost your visibility and leads from Just Dial.",
        }
    }

    /// Icon reference name from the lucide icon set.
    pub fn icon(self) -> &'static str {
        match self {
            Service::EmailMarketing => "mail",
            Service::SocialMediaMarketing => "megaphone",
            Service::GoogleAds => "bar-chart",
            Service::YoutubeAds => "youtube",
            Service::WebsiteDesignHosting => "layout-template",
            Service::PamphletDesign => "file-text",
            Service::OnlineReviews => "star",
            Service::VisitingCards => "contact",
            Service::VideoEditing => "film",
            Service::VoiceOver => "mic",
            Service::Flyers => "file-image",
            Service::PractoPatientStories => "heart-pulse",
            Service::LybrateMarketing => "activity",
            Service::JustDialOptimization => "phone",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownService(pub String);

impl fmt::Display for UnknownService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown service: {}", self.0)
    }
}

impl std::error::Error for UnknownService {}

impl FromStr for Service {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.title() == s)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

/// JSON shape of one catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl From<Service> for ServiceEntry {
    fn from(service: Service) -> Self {
        Self {
            title: service.title(),
            description: service.description(),
            icon: service.icon(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Tech Innovators Inc.",
        quote: "Sahasra Digitals transformed our online presence. Their strategies doubled our leads in just three months!",
    },
    Testimonial {
        name: "Lifestyle Co.",
        quote: "The best digital marketing team we have ever worked with. Highly professional and results-oriented.",
    },
    Testimonial {
        name: "Foodie Ventures",
        quote: "Our social media engagement has skyrocketed thanks to their creative campaigns. Incredible work!",
    },
];
