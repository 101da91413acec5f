//! Static Page Content
//!
//! The literal content blocks the Home and About pages render. Array order is
//! display order; nothing here is ever mutated at runtime.

/// A shop category shown on the landing page, linking into the listing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

impl Category {
    /// Listing-page link filtered to this category. Category names only ever
    /// contain letters and spaces, so escaping spaces is all the encoding
    /// the query needs.
    pub fn link(&self) -> String {
        format!("/products?category={}", self.name.replace(' ', "%20"))
    }
}

/// A "why choose us" selling point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline figure on the About page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub icon: &'static str,
    pub figure: &'static str,
    pub label: &'static str,
}

/// One entry of the company timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
}

/// A company value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Value {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A rotating promotional banner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdSlide {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
}

const SHAWL_IMAGE: &str = "https://images.pexels.com/photos/7679720/pexels-photo-7679720.jpeg";

/// Shop categories, in display order
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Golden Shawl",
        image: SHAWL_IMAGE,
        description: "Premium golden shawls for special occasions",
    },
    Category {
        name: "Honor Shawl",
        image: SHAWL_IMAGE,
        description: "Elegant honor shawls for ceremonies",
    },
    Category {
        name: "Felicitation Shawl",
        image: SHAWL_IMAGE,
        description: "Beautiful felicitation shawls for awards",
    },
    Category {
        name: "Temple Shawl",
        image: SHAWL_IMAGE,
        description: "Sacred temple shawls for religious functions",
    },
];

/// "Why Choose KVT?" selling points
pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⭐",
        title: "Premium Quality",
        description: "Handcrafted with finest materials and attention to detail",
    },
    Feature {
        icon: "🚚",
        title: "Fast Delivery",
        description: "Quick and reliable delivery across Tamil Nadu",
    },
    Feature {
        icon: "🛡️",
        title: "Trusted Brand",
        description: "Serving customers since 2011 with excellence",
    },
    Feature {
        icon: "❤️",
        title: "Customer Love",
        description: "Thousands of satisfied customers across India",
    },
];

/// Achievement figures on the About page
pub const STATS: &[Stat] = &[
    Stat {
        icon: "🏆",
        figure: "13+",
        label: "Years of Excellence",
    },
    Stat {
        icon: "👥",
        figure: "10,000+",
        label: "Happy Customers",
    },
    Stat {
        icon: "📈",
        figure: "50+",
        label: "Cities Served",
    },
    Stat {
        icon: "❤️",
        figure: "4.8/5",
        label: "Customer Rating",
    },
];

/// Company journey, oldest first
pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: 2011,
        title: "The Beginning",
        description: "Started with our first Golden Shawl collection",
    },
    Milestone {
        year: 2013,
        title: "Expansion",
        description: "Introduced Honor Shawls and Felicitation Shawls",
    },
    Milestone {
        year: 2016,
        title: "Temple Collection",
        description: "Launched sacred Temple Shawls for religious functions",
    },
    Milestone {
        year: 2020,
        title: "Digital Presence",
        description: "Embraced e-commerce to reach customers nationwide",
    },
    Milestone {
        year: 2024,
        title: "Pan-India Vision",
        description: "Expanding our reach across all states of India",
    },
];

/// Company values on the About page
pub const VALUES: &[Value] = &[
    Value {
        icon: "🏆",
        title: "Quality First",
        description: "We never compromise on quality. Every product is crafted with the \
                      finest materials and attention to detail.",
    },
    Value {
        icon: "❤️",
        title: "Customer Love",
        description: "Our customers are at the heart of everything we do. Their \
                      satisfaction and trust drive our success.",
    },
    Value {
        icon: "📈",
        title: "Continuous Growth",
        description: "We constantly innovate and expand our offerings while staying true \
                      to our traditional roots.",
    },
];

/// Banners for the landing page slider
pub const AD_SLIDES: &[AdSlide] = &[
    AdSlide {
        headline: "Festive Season Sale",
        tagline: "Up to 30% off on Golden Shawls",
        image: SHAWL_IMAGE,
    },
    AdSlide {
        headline: "Temple Shawl Collection",
        tagline: "Sacred weaves for every ceremony",
        image: SHAWL_IMAGE,
    },
    AdSlide {
        headline: "Bulk Orders Welcome",
        tagline: "Felicitation shawls for schools and institutions",
        image: SHAWL_IMAGE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_links() {
        assert_eq!(
            CATEGORIES[0].link(),
            "/products?category=Golden%20Shawl"
        );
        // Every category name must survive the query encoding.
        for cat in CATEGORIES {
            assert!(cat.name.chars().all(|c| c.is_ascii_alphabetic() || c == ' '));
        }
    }

    #[test]
    fn test_category_names_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_milestones_ascend() {
        assert!(MILESTONES.windows(2).all(|w| w[0].year < w[1].year));
        assert_eq!(MILESTONES.first().map(|m| m.year), Some(2011));
    }

    #[test]
    fn test_sections_populated() {
        assert_eq!(CATEGORIES.len(), 4);
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(STATS.len(), 4);
        assert_eq!(MILESTONES.len(), 5);
        assert_eq!(VALUES.len(), 3);
        assert!(!AD_SLIDES.is_empty());
    }
}
