use crate::models::{LimitedLenString1024, LimitedLenString8192};
use serde::Serialize;

/// Accent color of every card.
pub(crate) const THEME_COLOR: &str = "0078D7";

/// Legacy actionable message card, as accepted by Teams incoming webhooks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCard {
    /// Text shown in notifications. Required by the connector even though it repeats the title.
    pub summary: LimitedLenString1024,
    /// Hex color of the card's accent bar.
    pub theme_color: &'static str,
    /// Card title.
    pub title: LimitedLenString1024,
    /// Card body.
    pub sections: Vec<Section>,
    /// Buttons shown below the card body.
    pub potential_action: Vec<PotentialAction>,
}

/// A block of the card body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Heading of the section. Carries the error message as is.
    pub activity_title: String,
    /// Name/value table shown in the section.
    pub facts: Vec<Fact>,
}

/// One row of a section's fact table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fact {
    /// Label, e.g. `Environment:`.
    pub name: &'static str,
    /// Value. Serialized as `null` when absent.
    pub value: Option<LimitedLenString8192>,
}

/// Card action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum PotentialAction {
    /// Button opening a URI.
    OpenUri {
        /// Button label.
        name: &'static str,
        /// Where the button leads, per operating system.
        targets: Vec<Target>,
    },
}

/// URI target of a [`PotentialAction::OpenUri`] action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    /// Operating system the target applies to.
    pub os: &'static str,
    /// URI to open.
    pub uri: String,
}

impl Fact {
    pub(crate) fn new(name: &'static str, value: Option<String>) -> Self {
        Fact {
            name,
            value: value.map(Into::into),
        }
    }
}
