use serde::{Deserialize, Serialize};

/// Color category of a status or tea-type badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BadgeColor {
    Red,
    Yellow,
    Purple,
    Blue,
    Green,
    #[default]
    Gray,
}

impl BadgeColor {
    /// BEM modifier used by the `badge` stylesheet
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeColor::Red => "badge--red",
            BadgeColor::Yellow => "badge--yellow",
            BadgeColor::Purple => "badge--purple",
            BadgeColor::Blue => "badge--blue",
            BadgeColor::Green => "badge--green",
            BadgeColor::Gray => "badge--gray",
        }
    }
}
