//! Static demo catalog. Everything here is fabricated display data defined at
//! build time; nothing is fetched from anywhere.

/// A model listed on the marketplace.
pub struct ModelListing {
    pub id: u32,
    pub name: &'static str,
    pub price: &'static str,
    pub version: &'static str,
    pub artifact_hash: &'static str,
    pub license: &'static str,
    pub description: &'static str,
}

/// One bar of the dashboard revenue chart.
pub struct RevenueBar {
    pub month: &'static str,
    pub amount_eth: f64,
}

pub struct CatalogConfig {
    pub models: &'static [ModelListing],
    pub revenue: &'static [RevenueBar],
    pub available_earnings: &'static str,
    pub profile_name: &'static str,
    pub profile_badge: &'static str,
}

pub const CATALOG: CatalogConfig = CatalogConfig {
    models: &[
        ModelListing {
            id: 1,
            name: "Sentiment Analyzer Pro",
            price: "0.8 ETH",
            version: "1.2.0",
            artifact_hash: "QmX4v93kTqPzW1mJh2cRfLnd8uYw6oBq5sHaGeK7a71f",
            license: "MIT",
            description: "Fine-tuned transformer scoring product reviews and social posts.",
        },
        ModelListing {
            id: 2,
            name: "VisionNet Edge",
            price: "1.4 ETH",
            version: "0.9.3",
            artifact_hash: "QmT8nRw2dVq6pLc4xKj9yFbE3mZsUo1iAhN5gD2eWvB7Hq",
            license: "Apache-2.0",
            description: "Compact object detector tuned for on-device inference.",
        },
        ModelListing {
            id: 3,
            name: "LLM Mini",
            price: "2.2 ETH",
            version: "2.0.1",
            artifact_hash: "QmPz5cYk8bXw3rNv7tLq2jFaM9sDo6uEhK1iGnW4mC0xSe",
            license: "MIT",
            description: "Small instruction-following language model for chat demos.",
        },
    ],
    revenue: &[
        RevenueBar { month: "Jan", amount_eth: 0.3 },
        RevenueBar { month: "Feb", amount_eth: 0.5 },
        RevenueBar { month: "Mar", amount_eth: 0.7 },
        RevenueBar { month: "Apr", amount_eth: 0.9 },
    ],
    available_earnings: "1.2 ETH",
    profile_name: "ModelChain User",
    profile_badge: "Verified Creator",
};

pub fn find_model(id: u32) -> Option<&'static ModelListing> {
    CATALOG.models.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in CATALOG.models.iter().enumerate() {
            for b in &CATALOG.models[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn find_model_resolves_known_and_unknown_ids() {
        assert_eq!(find_model(1).map(|m| m.name), Some("Sentiment Analyzer Pro"));
        assert!(find_model(999).is_none());
    }
}
