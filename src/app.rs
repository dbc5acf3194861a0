// src/app.rs
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::widgets::TableState;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::client::ShareClient;
use crate::listing::{FileRow, ListingTable, SortKey};
use crate::ui::TableLayout;

#[derive(Debug)]
pub enum AppMessage {
    DeleteFinished { path: String, ok: bool },
}

/// Page-lifetime state: the listing table, the HTTP client, and the
/// wiring between input events and the two operations (sort, delete).
pub struct App {
    pub client: ShareClient,
    pub table: ListingTable,
    pub table_state: TableState,
    /// Hit zones recorded by the last draw. Mouse dispatch goes through
    /// these, so a column that was not rendered cannot be clicked.
    pub layout: TableLayout,
    pub status: String,
    pub should_quit: bool,
    tx: mpsc::UnboundedSender<AppMessage>,
    rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl App {
    pub fn new(client: ShareClient, rows: Vec<FileRow>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let status = format!("{} files", rows.len());
        let mut table = ListingTable::new();
        table.replace_rows(rows);
        let mut table_state = TableState::default();
        if !table.is_empty() {
            table_state.select(Some(0));
        }
        App {
            client,
            table,
            table_state,
            layout: TableLayout::default(),
            status,
            should_quit: false,
            tx,
            rx,
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('n') => self.table.sort_by(SortKey::Name),
            KeyCode::Char('m') => self.table.sort_by(SortKey::Modified),
            KeyCode::Char('s') => self.table.sort_by(SortKey::Size),
            KeyCode::Char('r') => self.reload().await,
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(key) = self.layout.header_hit(mouse.column, mouse.row) {
            self.table.sort_by(key);
            return;
        }
        if let Some(visible) = self.layout.delete_hit(mouse.column, mouse.row) {
            let index = self.table_state.offset() + visible;
            if let Some(row) = self.table.row(index) {
                let path = row.url.clone();
                self.table_state.select(Some(index));
                self.request_delete(path);
            }
        } else if let Some(visible) = self.layout.row_hit(mouse.column, mouse.row) {
            let index = self.table_state.offset() + visible;
            if index < self.table.len() {
                self.table_state.select(Some(index));
            }
        }
    }

    pub async fn reload(&mut self) {
        match self.client.fetch_listing().await {
            Ok(rows) => {
                self.status = format!("{} files", rows.len());
                self.table.replace_rows(rows);
                let selected = match self.table.len() {
                    0 => None,
                    n => Some(self.table_state.selected().unwrap_or(0).min(n - 1)),
                };
                self.table_state.select(selected);
            }
            Err(err) => {
                warn!(error = %err, "listing reload failed");
                self.status = format!("reload failed: {}", err);
            }
        }
    }

    /// Fire-and-forget DELETE for one resource. The control stays live
    /// while the request is in flight, so a second click can race a
    /// duplicate DELETE for the same path.
    fn request_delete(&mut self, path: String) {
        info!(%path, "delete requested");
        self.status = format!("deleting {}...", path);
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let ok = match client.delete(&path).await {
                Ok(ok) => ok,
                Err(err) => {
                    warn!(error = %err, %path, "delete request failed");
                    false
                }
            };
            let _ = tx.send(AppMessage::DeleteFinished { path, ok });
        });
    }

    pub async fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::DeleteFinished { path, ok: true } => {
                info!(%path, "deleted");
                self.reload().await;
            }
            AppMessage::DeleteFinished { path, ok: false } => {
                // No retry; the row stays until the next manual reload.
                self.status = format!("delete failed: {}", path);
            }
        }
    }

    pub fn try_recv_message(&mut self) -> Option<AppMessage> {
        self.rx.try_recv().ok()
    }

    pub async fn recv_message(&mut self) -> Option<AppMessage> {
        self.rx.recv().await
    }

    fn delete_selected(&mut self) {
        let path = self
            .table_state
            .selected()
            .and_then(|i| self.table.row(i))
            .map(|row| row.url.clone());
        if let Some(path) = path {
            self.request_delete(path);
        }
    }

    fn select_next(&mut self) {
        if self.table.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < self.table.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.table.is_empty() {
            return;
        }
        let prev = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(prev));
    }
}
