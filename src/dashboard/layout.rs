use serde::Serialize;

use super::DashboardVariant;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetOption<V> {
    pub label: String,
    pub value: V,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    Checklist {
        id: &'static str,
        label: String,
        options: Vec<WidgetOption<String>>,
        value: Vec<String>,
    },
    RadioItems {
        id: &'static str,
        options: Vec<WidgetOption<i64>>,
        value: i64,
    },
}

impl Widget {
    pub fn id(&self) -> &'static str {
        match self {
            Widget::Checklist { id, .. } | Widget::RadioItems { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub tab: Option<Tab>,
    pub widgets: Vec<Widget>,
    pub figures: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub variant: DashboardVariant,
    pub heading: String,
    pub subtitle: Option<String>,
    /// Value of the tab selected on load, `None` when the page has no tabs.
    pub selected_tab: Option<String>,
    pub sections: Vec<Section>,
}

impl Layout {
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.sections.iter().flat_map(|s| s.widgets.iter())
    }

    pub fn figure_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().flat_map(|s| s.figures.iter().copied())
    }
}
