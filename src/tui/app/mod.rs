//! TUI application state: the model list, selection, popups, status toast.

use std::collections::HashSet;
use std::time::Instant;

use crate::core::purpose::{self, PurposeFlag};
use crate::core::record::ModelRecord;
use crate::core::store::{Store, StoreError};

use super::constants::TOAST_DURATION;
use super::form::FormState;

/// Pending confirmation before deleting a model (popup displayed).
pub struct ConfirmDelete {
    pub name: String,
    /// Edit form to go back to when the user cancels (delete started from the form).
    pub return_to: Option<FormState>,
}

/// Transient status line shown over the bottom bar.
pub struct Toast {
    pub message: String,
    pub is_error: bool,
    pub until: Instant,
}

pub struct App {
    pub(crate) store: Store,
    /// Model list as of the last refresh. Never written back directly.
    pub(crate) models: Vec<ModelRecord>,
    /// Decode or IO error from the last refresh (shown in the header).
    pub(crate) load_error: Option<String>,
    /// Purpose flags no model enables, recomputed on refresh.
    pub(crate) missing_purposes: Vec<PurposeFlag>,
    /// Index of the highlighted model in the list view.
    pub(crate) selected: usize,
    /// Names of models whose detail table is expanded.
    pub(crate) expanded: HashSet<String>,
    /// First visible line of the list view; adjusted while drawing.
    pub(crate) list_scroll: usize,
    /// Add or edit form popup.
    pub form: Option<FormState>,
    /// Delete confirmation popup.
    pub confirm_delete: Option<ConfirmDelete>,
    pub(crate) toast: Option<Toast>,
}

impl App {
    pub fn new(store: Store) -> Self {
        let mut app = Self {
            store,
            models: vec![],
            load_error: None,
            missing_purposes: vec![],
            selected: 0,
            expanded: HashSet::new(),
            list_scroll: 0,
            form: None,
            confirm_delete: None,
            toast: None,
        };
        app.refresh();
        app
    }

    /// Reload the list from the store. Called after every handled event.
    pub(crate) fn refresh(&mut self) {
        match self.store.try_load() {
            Ok(models) => {
                self.models = models;
                self.load_error = None;
            }
            Err(e) => {
                log::warn!("{}", e);
                self.models = vec![];
                self.load_error = Some(e.to_string());
            }
        }
        self.missing_purposes = purpose::missing(&self.models);
        self.expanded
            .retain(|name| self.models.iter().any(|m| &m.name == name));
        self.selected = self.selected.min(self.models.len().saturating_sub(1));
    }

    pub(crate) fn selected_model(&self) -> Option<&ModelRecord> {
        self.models.get(self.selected)
    }

    pub(crate) fn select_name(&mut self, name: &str) {
        if let Some(idx) = self.models.iter().position(|m| m.name == name) {
            self.selected = idx;
        }
    }

    pub(crate) fn toggle_expanded(&mut self) {
        let Some(name) = self.selected_model().map(|m| m.name.clone()) else {
            return;
        };
        if !self.expanded.remove(&name) {
            self.expanded.insert(name);
        }
    }

    pub(crate) fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(crate) fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(self.models.len().saturating_sub(1));
    }

    pub(crate) fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            is_error: false,
            until: Instant::now() + TOAST_DURATION,
        });
    }

    pub(crate) fn show_error(&mut self, error: &StoreError) {
        log::error!("{}", error);
        self.toast = Some(Toast {
            message: error.to_string(),
            is_error: true,
            until: Instant::now() + TOAST_DURATION,
        });
    }

    /// True while a popup owns the keyboard.
    pub(crate) fn has_popup(&self) -> bool {
        self.form.is_some() || self.confirm_delete.is_some()
    }
}
