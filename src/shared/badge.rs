use serde::Serialize;
use utoipa::ToSchema;

/// Visual emphasis of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Destructive,
    Warning,
    Success,
    Muted,
    Outline,
}

/// Display descriptor for an enumerated value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

impl Badge {
    pub fn new(label: &str, tone: BadgeTone) -> Self {
        Self {
            label: label.to_string(),
            tone,
        }
    }
}

/// Enumerations that render as a badge.
///
/// Implementations match exhaustively so a new variant fails to compile
/// until it has a descriptor.
pub trait HasBadge {
    fn badge(&self) -> Badge;
}
