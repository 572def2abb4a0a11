//! Marketing tip catalog and the detail-dialog selection.

#[cfg(test)]
#[path = "marketing_test.rs"]
mod marketing_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    WhatsApp,
    GoogleBusiness,
    SocialMedia,
    General,
}

impl Platform {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::GoogleBusiness => "Google Business",
            Self::SocialMedia => "Social Media",
            Self::General => "General",
        }
    }

    /// CSS modifier for the platform badge colour.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::WhatsApp => "platform--whatsapp",
            Self::GoogleBusiness => "platform--google",
            Self::SocialMedia => "platform--social",
            Self::General => "platform--general",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Badge variant.
    #[must_use]
    pub fn variant(self) -> &'static str {
        match self {
            Self::High => "destructive",
            Self::Medium => "secondary",
            Self::Low => "outline",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketingTip {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub platform: Platform,
    pub difficulty: Difficulty,
    pub time_to_implement: &'static str,
    pub impact: Impact,
    pub icon: &'static str,
    pub steps: &'static [&'static str],
    pub tools: &'static [&'static str],
}

pub const MARKETING_TIPS: [MarketingTip; 6] = [
    MarketingTip {
        id: "1",
        title: "WhatsApp Business Catalog",
        description: "Create a product catalog to showcase your offerings directly in WhatsApp",
        platform: Platform::WhatsApp,
        difficulty: Difficulty::Easy,
        time_to_implement: "30 mins",
        impact: Impact::High,
        icon: "\u{1F4AC}",
        steps: &[
            "Download WhatsApp Business app",
            "Go to Settings > Business Tools > Catalog",
            "Add your products with photos and prices",
            "Share catalog link with customers",
            "Use catalog in status updates",
        ],
        tools: &["WhatsApp Business", "Phone camera", "Product photos"],
    },
    MarketingTip {
        id: "2",
        title: "Google Business Profile Optimization",
        description: "Optimize your Google Business Profile to attract local customers",
        platform: Platform::GoogleBusiness,
        difficulty: Difficulty::Medium,
        time_to_implement: "1 hour",
        impact: Impact::High,
        icon: "\u{1F4CD}",
        steps: &[
            "Claim your Google Business Profile",
            "Add complete business information",
            "Upload high-quality photos",
            "Encourage customer reviews",
            "Post regular updates and offers",
        ],
        tools: &["Google Business", "Camera", "Customer review system"],
    },
    MarketingTip {
        id: "3",
        title: "Customer Review Strategy",
        description: "Build a system to collect and showcase positive customer reviews",
        platform: Platform::General,
        difficulty: Difficulty::Easy,
        time_to_implement: "45 mins",
        impact: Impact::Medium,
        icon: "\u{2B50}",
        steps: &[
            "Ask satisfied customers for reviews",
            "Create QR codes linking to review pages",
            "Offer small incentives for reviews",
            "Respond to all reviews professionally",
            "Display positive reviews in store",
        ],
        tools: &["QR code generator", "Review management app", "Printed materials"],
    },
    MarketingTip {
        id: "4",
        title: "Local Community Engagement",
        description: "Connect with local community groups and events to build relationships",
        platform: Platform::SocialMedia,
        difficulty: Difficulty::Medium,
        time_to_implement: "2 hours",
        impact: Impact::High,
        icon: "\u{1F465}",
        steps: &[
            "Join local Facebook groups",
            "Participate in community events",
            "Sponsor local sports teams or events",
            "Collaborate with nearby businesses",
            "Share community news and events",
        ],
        tools: &["Facebook", "Instagram", "Local event platforms", "Networking"],
    },
    MarketingTip {
        id: "5",
        title: "WhatsApp Status Marketing",
        description: "Use WhatsApp Status to share daily offers and behind-the-scenes content",
        platform: Platform::WhatsApp,
        difficulty: Difficulty::Easy,
        time_to_implement: "15 mins daily",
        impact: Impact::Medium,
        icon: "\u{1F3AF}",
        steps: &[
            "Post daily offers in WhatsApp Status",
            "Share behind-the-scenes content",
            "Highlight customer testimonials",
            "Show new product arrivals",
            "Create urgency with limited-time offers",
        ],
        tools: &["WhatsApp Business", "Phone camera", "Graphic design app"],
    },
    MarketingTip {
        id: "6",
        title: "Google Posts for Visibility",
        description: "Use Google Posts to share updates directly in search results",
        platform: Platform::GoogleBusiness,
        difficulty: Difficulty::Easy,
        time_to_implement: "20 mins",
        impact: Impact::Medium,
        icon: "\u{1F4A1}",
        steps: &[
            "Access Google Business Profile",
            "Create posts about offers or events",
            "Use high-quality images",
            "Include clear call-to-action",
            "Post regularly to stay visible",
        ],
        tools: &["Google Business", "Canva for graphics", "Scheduling tools"],
    },
];

#[must_use]
pub fn tip_by_id(id: &str) -> Option<&'static MarketingTip> {
    MARKETING_TIPS.iter().find(|t| t.id == id)
}

/// Which tip's detail dialog is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarketingState {
    pub selected_id: Option<&'static str>,
}

impl MarketingState {
    pub fn open(&mut self, id: &'static str) {
        self.selected_id = Some(id);
    }

    pub fn close(&mut self) {
        self.selected_id = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static MarketingTip> {
        self.selected_id.and_then(tip_by_id)
    }
}
