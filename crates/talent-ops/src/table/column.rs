use super::cell::{CellContent, Tone};
use super::value::{display_text, Row};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Renders a full row into the content of one cell.
pub type CellRenderer = Arc<dyn Fn(&Row) -> CellContent + Send + Sync>;

/// Column descriptor. Only columns with an accessor take part in search and sort.
#[derive(Clone)]
pub enum Column {
    /// Shows `row[accessor]` as text.
    Plain { header: String, accessor: String },
    /// Shows whatever the renderer produces for the row.
    Custom {
        header: String,
        accessor: Option<String>,
        render: CellRenderer,
    },
}

impl Column {
    pub fn plain(header: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self::Plain {
            header: header.into(),
            accessor: accessor.into(),
        }
    }

    pub fn custom<F>(header: impl Into<String>, accessor: Option<&str>, render: F) -> Self
    where
        F: Fn(&Row) -> CellContent + Send + Sync + 'static,
    {
        Self::Custom {
            header: header.into(),
            accessor: accessor.map(str::to_string),
            render: Arc::new(render),
        }
    }

    pub fn header(&self) -> &str {
        match self {
            Self::Plain { header, .. } | Self::Custom { header, .. } => header,
        }
    }

    pub fn accessor(&self) -> Option<&str> {
        match self {
            Self::Plain { accessor, .. } => Some(accessor),
            Self::Custom { accessor, .. } => accessor.as_deref(),
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.accessor().is_some()
    }

    pub fn render(&self, row: &Row) -> CellContent {
        match self {
            Self::Plain { accessor, .. } => {
                CellContent::text(row.get(accessor).map(display_text).unwrap_or_default())
            }
            Self::Custom { render, .. } => render(row),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain { header, accessor } => f
                .debug_struct("Plain")
                .field("header", header)
                .field("accessor", accessor)
                .finish(),
            Self::Custom {
                header, accessor, ..
            } => f
                .debug_struct("Custom")
                .field("header", header)
                .field("accessor", accessor)
                .finish_non_exhaustive(),
        }
    }
}

/// Badge showing the field text, coloured by exact value match.
pub fn badge_renderer(
    accessor: &str,
    tones: BTreeMap<String, Tone>,
    fallback: Tone,
) -> impl Fn(&Row) -> CellContent + Send + Sync + 'static {
    let accessor = accessor.to_string();
    move |row| {
        let label = row.text(&accessor).unwrap_or_default();
        let tone = tones.get(&label).copied().unwrap_or(fallback);
        CellContent::Badge { label, tone }
    }
}

/// Initial plus name, with an optional secondary line (usually an e-mail).
pub fn avatar_renderer(
    accessor: &str,
    secondary: Option<&str>,
) -> impl Fn(&Row) -> CellContent + Send + Sync + 'static {
    let accessor = accessor.to_string();
    let secondary = secondary.map(str::to_string);
    move |row| {
        let primary = row.text(&accessor).unwrap_or_default();
        let initial = primary.chars().next().map(String::from).unwrap_or_default();
        CellContent::Avatar {
            initial,
            primary,
            secondary: secondary.as_deref().and_then(|field| row.text(field)),
        }
    }
}

/// Percentage bar; values above `threshold` read as healthy.
pub fn progress_renderer(
    accessor: &str,
    threshold: f64,
) -> impl Fn(&Row) -> CellContent + Send + Sync + 'static {
    let accessor = accessor.to_string();
    move |row| {
        let percent = row
            .text(&accessor)
            .and_then(|text| text.trim().trim_end_matches('%').parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .unwrap_or(0.0);
        let tone = if percent > threshold {
            Tone::Success
        } else {
            Tone::Warning
        };
        CellContent::Progress { percent, tone }
    }
}

pub fn action_renderer(label: &str) -> impl Fn(&Row) -> CellContent + Send + Sync + 'static {
    let label = label.to_string();
    move |_| CellContent::Action {
        label: label.clone(),
    }
}

/// Declarative renderer used where closures cannot travel, e.g. JSON requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderSpec {
    Badge {
        #[serde(default)]
        tones: BTreeMap<String, Tone>,
        #[serde(default)]
        fallback: Tone,
    },
    Avatar {
        #[serde(default)]
        secondary: Option<String>,
    },
    Progress {
        #[serde(default = "default_progress_threshold")]
        threshold: f64,
    },
    Action {
        label: String,
    },
}

fn default_progress_threshold() -> f64 {
    80.0
}

/// Serializable column description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderSpec>,
}

impl ColumnSpec {
    pub fn into_column(self) -> Column {
        let ColumnSpec {
            header,
            accessor,
            render,
        } = self;

        match (accessor, render) {
            (Some(accessor), None) => Column::Plain { header, accessor },
            (None, None) => Column::custom(header, None, |_| CellContent::blank()),
            (accessor, Some(RenderSpec::Action { label })) => {
                Column::custom(header, accessor.as_deref(), action_renderer(&label))
            }
            (None, Some(_)) => Column::custom(header, None, |_| CellContent::blank()),
            (Some(accessor), Some(spec)) => {
                let render: CellRenderer = match spec {
                    RenderSpec::Badge { tones, fallback } => {
                        Arc::new(badge_renderer(&accessor, tones, fallback))
                    }
                    RenderSpec::Avatar { secondary } => {
                        Arc::new(avatar_renderer(&accessor, secondary.as_deref()))
                    }
                    RenderSpec::Progress { threshold } => {
                        Arc::new(progress_renderer(&accessor, threshold))
                    }
                    RenderSpec::Action { label } => Arc::new(action_renderer(&label)),
                };
                Column::Custom {
                    header,
                    accessor: Some(accessor),
                    render,
                }
            }
        }
    }
}
