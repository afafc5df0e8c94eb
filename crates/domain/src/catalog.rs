//! Static ambiance/location catalog for the design wizard.
//!
//! Ambiance themes are grouped into categories; each location is tagged with
//! exactly one theme. The backend accepts any theme/location pair the wizard
//! produces, so this catalog is the single source of truth for what the
//! wizard may offer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grouping used by the wizard's first step to decide which locations are
/// offered on the second step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbianceCategory {
    Mystery,
    SciFi,
    Fantasy,
    Horror,
}

impl AmbianceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmbianceCategory::Mystery => "mystery",
            AmbianceCategory::SciFi => "sci_fi",
            AmbianceCategory::Fantasy => "fantasy",
            AmbianceCategory::Horror => "horror",
        }
    }
}

impl fmt::Display for AmbianceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ambiance theme offered on wizard step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AmbianceCategory,
    /// Preferred location preselected when this theme is chosen. `None`
    /// falls back to the first location of the category.
    pub default_location: Option<&'static str>,
}

/// A location offered on wizard step 2, tagged with exactly one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub theme: &'static str,
    /// Background asset shown behind the session view.
    pub image: &'static str,
}

pub const THEMES: &[Theme] = &[
    Theme {
        id: "mysterious",
        name: "Classic Mystery",
        category: AmbianceCategory::Mystery,
        default_location: Some("abandoned_mansion"),
    },
    Theme {
        id: "noir",
        name: "Noir Detective",
        category: AmbianceCategory::Mystery,
        default_location: None,
    },
    Theme {
        id: "futuristic",
        name: "Sci-Fi Adventure",
        category: AmbianceCategory::SciFi,
        default_location: Some("sci_fi_hangar"),
    },
    Theme {
        id: "underwater",
        name: "Deep Sea Exploration",
        category: AmbianceCategory::SciFi,
        default_location: Some("underwater_lab"),
    },
    Theme {
        id: "fantastic",
        name: "Fantasy Quest",
        category: AmbianceCategory::Fantasy,
        default_location: Some("ancient_tomb"),
    },
    // No locations have shipped for this category yet; the wizard treats the
    // resulting empty selection as an incomplete configuration.
    Theme {
        id: "haunted",
        name: "Supernatural Horror",
        category: AmbianceCategory::Horror,
        default_location: None,
    },
];

pub const LOCATIONS: &[Location] = &[
    Location {
        id: "abandoned_mansion",
        name: "Abandoned Mansion",
        theme: "mysterious",
        image: "images/abandoned_mansion.jpg",
    },
    Location {
        id: "ancient_library",
        name: "Ancient Library",
        theme: "mysterious",
        image: "images/ancient_library.jpg",
    },
    Location {
        id: "mysterious_observatory",
        name: "Mysterious Observatory",
        theme: "mysterious",
        image: "images/mysterious_observatory.jpg",
    },
    Location {
        id: "sci_fi_hangar",
        name: "Sci-Fi Hangar",
        theme: "futuristic",
        image: "images/sci_fi_hangar.jpg",
    },
    Location {
        id: "underwater_lab",
        name: "Underwater Laboratory",
        theme: "underwater",
        image: "images/underwater_lab.jpg",
    },
    Location {
        id: "ancient_tomb",
        name: "Ancient Tomb",
        theme: "fantastic",
        image: "images/ancient_tomb.jpg",
    },
];

/// Look up a theme by id.
pub fn theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

/// Look up a location by id.
pub fn location(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|l| l.id == id)
}

/// All locations belonging to a category, in catalog order.
pub fn locations_in(category: AmbianceCategory) -> impl Iterator<Item = &'static Location> {
    LOCATIONS
        .iter()
        .filter(move |l| theme(l.theme).map(|t| t.category) == Some(category))
}

/// Default location for a theme: the theme's own preference when it exists
/// in the catalog, otherwise the first location of the theme's category.
/// `None` means the category has no locations at all.
pub fn default_location_for(theme: &Theme) -> Option<&'static Location> {
    theme
        .default_location
        .and_then(location)
        .or_else(|| locations_in(theme.category).next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_location_is_tagged_with_a_known_theme() {
        for loc in LOCATIONS {
            assert!(
                theme(loc.theme).is_some(),
                "location {} references unknown theme {}",
                loc.id,
                loc.theme
            );
        }
    }

    #[test]
    fn explicit_defaults_exist_in_the_catalog() {
        for t in THEMES {
            if let Some(default) = t.default_location {
                let loc = location(default).expect("default location missing from catalog");
                assert_eq!(
                    theme(loc.theme).map(|owner| owner.category),
                    Some(t.category),
                    "default location {} belongs to another category",
                    default
                );
            }
        }
    }

    #[test]
    fn themes_without_preference_fall_back_to_first_category_location() {
        let noir = theme("noir").expect("noir theme");
        let fallback = default_location_for(noir).expect("mystery has locations");
        assert_eq!(fallback.id, "abandoned_mansion");
    }

    #[test]
    fn category_without_locations_yields_no_default() {
        let haunted = theme("haunted").expect("haunted theme");
        assert!(default_location_for(haunted).is_none());
    }
}
