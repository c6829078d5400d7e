// UI fragment view model
use serde::Serialize;

/// Typed description of a rendered UI fragment.
///
/// Custom components produce these instead of drawing anything themselves;
/// the host shell turns them into whatever its widget toolkit needs. The
/// variants cover only what the shipped components use.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Fragment {
    Empty,
    Heading { text: String },
    Text { text: String },
    TextInput { placeholder: String, value: String },
    Button { label: String, enabled: bool },
    List { items: Vec<Fragment> },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    Section { title: String, children: Vec<Fragment> },
}

impl Fragment {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn section(title: impl Into<String>, children: Vec<Fragment>) -> Self {
        Self::Section {
            title: title.into(),
            children,
        }
    }

    /// True when this fragment or any nested child contains `needle` in a
    /// text-bearing field. Test and host-side convenience.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Self::Empty => false,
            Self::Heading { text } | Self::Text { text } => text.contains(needle),
            Self::TextInput { placeholder, value } => {
                placeholder.contains(needle) || value.contains(needle)
            }
            Self::Button { label, .. } => label.contains(needle),
            Self::List { items } => items.iter().any(|item| item.contains_text(needle)),
            Self::Table { headers, rows } => {
                headers.iter().any(|h| h.contains(needle))
                    || rows.iter().flatten().any(|cell| cell.contains(needle))
            }
            Self::Section { title, children } => {
                title.contains(needle) || children.iter().any(|child| child.contains_text(needle))
            }
        }
    }
}
