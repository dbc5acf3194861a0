// src/ui/mod.rs
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table};

use crate::app::App;
use crate::listing::SortKey;
use crate::utils::formatter;

/// Screen regions recorded during draw so mouse dispatch agrees with
/// what is actually on screen. Columns dropped for lack of width have no
/// zone, which makes clicks on them impossible rather than erroneous.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableLayout {
    pub header_y: u16,
    pub body: Rect,
    pub name: Option<Rect>,
    pub modified: Option<Rect>,
    pub size: Option<Rect>,
    pub delete: Option<Rect>,
}

impl TableLayout {
    pub fn header_hit(&self, x: u16, y: u16) -> Option<SortKey> {
        if contains(self.name, x, y) {
            return Some(SortKey::Name);
        }
        if contains(self.modified, x, y) {
            return Some(SortKey::Modified);
        }
        if contains(self.size, x, y) {
            return Some(SortKey::Size);
        }
        None
    }

    /// Visible row offset under the cursor, before scroll adjustment.
    pub fn row_hit(&self, _x: u16, y: u16) -> Option<usize> {
        let body = self.body;
        if body.height == 0 || y < body.y || y >= body.y + body.height {
            return None;
        }
        Some((y - body.y) as usize)
    }

    pub fn delete_hit(&self, x: u16, y: u16) -> Option<usize> {
        let column = self.delete?;
        if x < column.x || x >= column.x + column.width {
            return None;
        }
        self.row_hit(x, y)
    }
}

fn contains(rect: Option<Rect>, x: u16, y: u16) -> bool {
    rect.map_or(false, |r| {
        x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
    })
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.size());

    let title = Paragraph::new(app.client.base().as_str())
        .block(Block::default().borders(Borders::ALL).title("sharetab"));
    f.render_widget(title, chunks[0]);

    draw_table(f, app, chunks[1]);

    let status = Paragraph::new(app.status.as_str()).style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, chunks[2]);
}

fn draw_table(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("n/m/s sort  d delete  r reload  q quit");
    let inner = block.inner(area);

    // Narrow terminals lose the modified column first, then size.
    let show_modified = inner.width >= 64;
    let show_size = inner.width >= 40;

    let mut constraints = vec![Constraint::Min(20)];
    if show_modified {
        constraints.push(Constraint::Length(28));
    }
    if show_size {
        constraints.push(Constraint::Length(12));
    }
    constraints.push(Constraint::Length(4));

    // The widget and the hit zones must come from the same layout, with
    // spacing folded into the constraints, or clicks drift off-column.
    let header_area = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width,
        height: 1,
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints.clone())
        .split(header_area);

    let mut layout = TableLayout {
        header_y: inner.y,
        body: Rect {
            x: inner.x,
            y: inner.y.saturating_add(1),
            width: inner.width,
            height: inner.height.saturating_sub(1),
        },
        ..Default::default()
    };
    let mut col = 0;
    layout.name = Some(columns[col]);
    col += 1;
    if show_modified {
        layout.modified = Some(columns[col]);
        col += 1;
    }
    if show_size {
        layout.size = Some(columns[col]);
        col += 1;
    }
    layout.delete = Some(columns[col]);
    app.layout = layout;

    let active = app.table.state().active_key();
    let header_cell = |label: &str, key: SortKey| {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if active == Some(key) {
            style = style.fg(Color::Yellow);
        }
        Cell::from(label.to_string()).style(style)
    };

    let mut header_cells = vec![header_cell("Name", SortKey::Name)];
    if show_modified {
        header_cells.push(header_cell("Modified", SortKey::Modified));
    }
    if show_size {
        header_cells.push(header_cell("Size", SortKey::Size));
    }
    header_cells.push(Cell::from(""));
    let header = Row::new(header_cells);

    let rows = app.table.rows().iter().map(|entry| {
        let mut cells = vec![Cell::from(entry.name.clone())];
        if show_modified {
            cells.push(Cell::from(formatter::format_modified(entry.modified)));
        }
        if show_size {
            cells.push(Cell::from(formatter::format_size(entry.size)));
        }
        cells.push(Cell::from("[x]").style(Style::default().fg(Color::Red)));
        Row::new(cells)
    });

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(0)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_spacing(HighlightSpacing::Never);

    f.render_stateful_widget(table, area, &mut app.table_state);
}
