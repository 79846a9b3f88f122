use std::sync::Arc;

use ratatui::widgets::{ListState, TableState};
use tokio::sync::mpsc::UnboundedReceiver;

use chainwatch_store::{DashboardSnapshot, DashboardStore, StoreEvent};

/// Which panel currently owns the selection keys.
#[derive(PartialEq, Clone, Copy)]
pub enum ActivePanel {
    Transactions,
    Alerts,
}

/// UI-side application state.
///
/// The app never owns domain data: it renders the latest store snapshot
/// and routes every action (selection, alert resolution, sidebar toggle)
/// back through the store's action surface.
pub struct App {
    pub should_quit: bool,
    pub active_panel: ActivePanel,
    pub store: Arc<DashboardStore>,
    pub snapshot: DashboardSnapshot,
    pub transaction_state: TableState,
    pub alert_state: ListState,
    event_receiver: UnboundedReceiver<StoreEvent>,
}

impl App {
    pub fn new(store: Arc<DashboardStore>) -> Self {
        let event_receiver = store.subscribe();
        let snapshot = store.snapshot();

        let mut transaction_state = TableState::default();
        if !snapshot.transactions.is_empty() {
            transaction_state.select(Some(0));
        }
        let mut alert_state = ListState::default();
        if !snapshot.alerts.is_empty() {
            alert_state.select(Some(0));
        }

        Self {
            should_quit: false,
            active_panel: ActivePanel::Transactions,
            store,
            snapshot,
            transaction_state,
            alert_state,
            event_receiver,
        }
    }

    /// Drain pending store notifications and refresh the rendered
    /// snapshot when anything arrived.
    pub fn refresh(&mut self) {
        let mut dirty = false;
        while self.event_receiver.try_recv().is_ok() {
            dirty = true;
        }
        if dirty {
            self.snapshot = self.store.snapshot();
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        let tx_len = self.snapshot.transactions.len();
        if let Some(selected) = self.transaction_state.selected() {
            if tx_len == 0 {
                self.transaction_state.select(None);
            } else if selected >= tx_len {
                self.transaction_state.select(Some(tx_len - 1));
            }
        } else if tx_len > 0 {
            self.transaction_state.select(Some(0));
        }

        let alert_len = self.snapshot.alerts.len();
        if let Some(selected) = self.alert_state.selected() {
            if alert_len == 0 {
                self.alert_state.select(None);
            } else if selected >= alert_len {
                self.alert_state.select(Some(alert_len - 1));
            }
        } else if alert_len > 0 {
            self.alert_state.select(Some(0));
        }
    }

    pub fn on_tab(&mut self) {
        self.active_panel = match self.active_panel {
            ActivePanel::Transactions => ActivePanel::Alerts,
            ActivePanel::Alerts => ActivePanel::Transactions,
        };
    }

    pub fn on_up(&mut self) {
        self.move_selection(-1);
    }

    pub fn on_down(&mut self) {
        self.move_selection(1);
    }

    fn move_selection(&mut self, delta: isize) {
        match self.active_panel {
            ActivePanel::Transactions => {
                let len = self.snapshot.transactions.len();
                let next = step(self.transaction_state.selected(), delta, len);
                self.transaction_state.select(next);
                let id = next.map(|i| self.snapshot.transactions[i].id.clone());
                self.store.set_selected_transaction(id);
            }
            ActivePanel::Alerts => {
                let len = self.snapshot.alerts.len();
                let next = step(self.alert_state.selected(), delta, len);
                self.alert_state.select(next);
            }
        }
    }

    /// Resolve the selected alert through the store. A no-op when the
    /// alert panel has no selection or the alert is already resolved.
    pub fn on_resolve(&mut self) {
        if self.active_panel != ActivePanel::Alerts {
            return;
        }
        if let Some(index) = self.alert_state.selected() {
            if let Some(alert) = self.snapshot.alerts.get(index) {
                self.store.resolve_alert(&alert.id);
            }
        }
    }

    pub fn on_toggle_sidebar(&mut self) {
        let open = self.snapshot.sidebar_open;
        self.store.set_sidebar_open(!open);
    }
}

fn step(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    Some(next as usize)
}
