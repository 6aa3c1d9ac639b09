use serde::{Deserialize, Serialize};

/// Colour intent for badges and progress bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Displayable value produced for one table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellContent {
    Text {
        text: String,
    },
    Badge {
        label: String,
        tone: Tone,
    },
    Avatar {
        initial: String,
        primary: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        secondary: Option<String>,
    },
    Progress {
        percent: f64,
        tone: Tone,
    },
    Action {
        label: String,
    },
}

impl CellContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn blank() -> Self {
        Self::Text {
            text: String::new(),
        }
    }

    /// Flattens the cell into the single line used by the text renderer.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text { text } => text.clone(),
            Self::Badge { label, .. } => format!("[{label}]"),
            Self::Avatar {
                primary, secondary, ..
            } => match secondary {
                Some(secondary) => format!("{primary} <{secondary}>"),
                None => primary.clone(),
            },
            Self::Progress { percent, .. } => format!("{percent:.0}%"),
            Self::Action { label } => format!("<{label}>"),
        }
    }
}
