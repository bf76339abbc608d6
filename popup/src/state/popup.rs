//! Popup chrome state: active tab, list filter, import form.
//!
//! DESIGN
//! ======
//! Keeps transient form contents out of the storage cache so a refresh never
//! wipes what the user is typing.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

/// The three popup tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// Highlighted JSON of the whole snapshot.
    #[default]
    View,
    /// Filterable entry list with add/edit.
    Edit,
    /// Bulk JSON import form.
    Import,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::View, Tab::Edit, Tab::Import];

    pub fn label(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Import => "Import",
        }
    }

    /// DOM id of the tab's content panel.
    pub fn panel_id(self) -> &'static str {
        match self {
            Self::View => "view-tab",
            Self::Edit => "edit-tab",
            Self::Import => "import-tab",
        }
    }
}

/// UI state for tabs and form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupState {
    pub tab: Tab,
    pub filter: String,
    pub import_text: String,
    pub clear_before_import: bool,
}

impl PopupState {
    /// Return to the View tab with an empty import box. Applied only after a
    /// successful import; the clear-first checkbox keeps its value.
    pub fn finish_import(&mut self) {
        self.tab = Tab::View;
        self.import_text.clear();
    }

    pub fn clear_import_input(&mut self) {
        self.import_text.clear();
    }

    pub fn tab_class(&self, tab: Tab) -> &'static str {
        if self.tab == tab { "tab active" } else { "tab" }
    }

    pub fn panel_class(&self, tab: Tab) -> &'static str {
        if self.tab == tab {
            "tab-content active"
        } else {
            "tab-content"
        }
    }
}
