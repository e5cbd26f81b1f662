//! Trend direction and its single presentation mapping.

use serde::{Deserialize, Serialize};

/// Direction of change between two values.
///
/// A closed set: every consumer matches exhaustively, so a new direction is a
/// compile error at every call site rather than a silently unstyled card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// The value increased.
    Up,
    /// The value decreased.
    Down,
    /// The value is unchanged or the delta is undefined.
    Neutral,
}

impl Trend {
    /// Classifies a delta. `None` (undefined comparison) is neutral.
    #[must_use]
    pub fn of(delta: Option<f64>) -> Self {
        match delta {
            Some(d) if d > 0.0 => Self::Up,
            Some(d) if d < 0.0 => Self::Down,
            _ => Self::Neutral,
        }
    }

    /// The presentation attributes for this direction.
    #[must_use]
    pub const fn presentation(self) -> TrendPresentation {
        match self {
            Self::Up => TrendPresentation {
                icon: "trending-up",
                tone: "green",
                badge: BadgeVariant::Primary,
            },
            Self::Down => TrendPresentation {
                icon: "trending-down",
                tone: "red",
                badge: BadgeVariant::Destructive,
            },
            Self::Neutral => TrendPresentation {
                icon: "minus",
                tone: "yellow",
                badge: BadgeVariant::Secondary,
            },
        }
    }
}

/// Badge variants available to status and trend indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Emphasized badge.
    Primary,
    /// De-emphasized badge.
    Secondary,
    /// Negative badge.
    Destructive,
    /// Bordered, unfilled badge.
    Outline,
}

/// Icon name, color tone, and badge variant for one [`Trend`].
///
/// The mapping lives here and nowhere else; cards and tables consume it
/// instead of re-deriving styling from the direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPresentation {
    /// Icon identifier, e.g. `"trending-up"`.
    pub icon: &'static str,
    /// Color tone, e.g. `"green"`.
    pub tone: &'static str,
    /// Badge variant carrying the same signal.
    pub badge: BadgeVariant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_deltas_by_sign() {
        assert_eq!(Trend::of(Some(3.2)), Trend::Up);
        assert_eq!(Trend::of(Some(-0.1)), Trend::Down);
        assert_eq!(Trend::of(Some(0.0)), Trend::Neutral);
        assert_eq!(Trend::of(None), Trend::Neutral);
    }

    #[test]
    fn directions_and_badges_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Trend::Up).unwrap(), "up");
        assert_eq!(serde_json::to_value(Trend::Neutral).unwrap(), "neutral");
        assert_eq!(
            serde_json::to_value(BadgeVariant::Destructive).unwrap(),
            "destructive"
        );
    }

    #[test]
    fn each_direction_maps_to_one_consistent_presentation() {
        let up = Trend::Up.presentation();
        assert_eq!(up.icon, "trending-up");
        assert_eq!(up.tone, "green");
        assert_eq!(up.badge, BadgeVariant::Primary);

        let down = Trend::Down.presentation();
        assert_eq!(down.icon, "trending-down");
        assert_eq!(down.badge, BadgeVariant::Destructive);

        let neutral = Trend::Neutral.presentation();
        assert_eq!(neutral.icon, "minus");
        assert_eq!(neutral.tone, "yellow");
        assert_eq!(neutral.badge, BadgeVariant::Secondary);
    }
}
