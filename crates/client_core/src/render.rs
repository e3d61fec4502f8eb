//! Render model shared by the terminal and GUI front ends.

use shared::domain::{KeyKind, Record, RecordId, SortField, SortSpec};

use crate::view::ViewState;

pub const LOADING_LABEL: &str = "Loading...";
pub const RETRY_LABEL: &str = "Retry";
pub const SEARCH_PLACEHOLDER: &str = "Search by name or email...";
pub const SORT_BY_LABEL: &str = "Sort by:";
pub const TOGGLE_ORDER_LABEL: &str = "Toggle order";
pub const SHUFFLE_LABEL: &str = "Shuffle";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Stable rendering key.
    pub key: RecordId,
    pub cells: [String; 5],
}

impl RowView {
    pub fn from_record(record: &Record) -> Self {
        Self {
            key: record.id,
            cells: SortField::ALL.map(|field| record.text(field)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderView {
    Loading {
        label: &'static str,
    },
    Error {
        message: String,
        retry_label: &'static str,
    },
    Table {
        query: String,
        sort: SortSpec,
        sort_options: [SortField; 5],
        rows: Vec<RowView>,
    },
}

pub fn render(state: &ViewState) -> RenderView {
    match state {
        ViewState::Loading => RenderView::Loading {
            label: LOADING_LABEL,
        },
        ViewState::Error(message) => RenderView::Error {
            message: message.clone(),
            retry_label: RETRY_LABEL,
        },
        ViewState::Ready(table) => RenderView::Table {
            query: table.query().to_string(),
            sort: table.sort(),
            sort_options: SortField::ALL,
            rows: table.displayed().iter().map(RowView::from_record).collect(),
        },
    }
}

/// Plain-text table with a header row. Numeric columns are right-aligned.
pub fn format_table(rows: &[RowView]) -> String {
    let mut widths = SortField::ALL.map(|field| field.label().chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = SortField::ALL.map(|field| field.label().to_string());
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(&header, &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| format_line(&row.cells, &widths)));
    lines.join("\n")
}

fn format_line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    SortField::ALL
        .iter()
        .zip(cells)
        .zip(widths)
        .map(|((field, cell), width)| match field.key_kind() {
            KeyKind::Numeric => format!("{cell:>width$}"),
            KeyKind::Text => format!("{cell:<width$}"),
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use shared::{domain::SortDirection, error::LOAD_FAILURE_MESSAGE};

    use super::*;
    use crate::{store::RecordStore, view::TableState};

    fn record(id: i64, name: &str) -> Record {
        Record {
            id: RecordId(id),
            name: name.to_string(),
            username: name.to_ascii_lowercase(),
            email: format!("{}@x.com", name.to_ascii_lowercase()),
            phone: "1-770-736-8031".to_string(),
        }
    }

    #[test]
    fn loading_and_error_views() {
        assert_eq!(
            render(&ViewState::Loading),
            RenderView::Loading {
                label: LOADING_LABEL
            }
        );
        assert_eq!(
            render(&ViewState::Error(LOAD_FAILURE_MESSAGE.to_string())),
            RenderView::Error {
                message: LOAD_FAILURE_MESSAGE.to_string(),
                retry_label: RETRY_LABEL,
            }
        );
    }

    #[test]
    fn table_view_carries_rows_in_display_order() {
        let table = TableState::loaded(RecordStore::from_records(vec![
            record(2, "Bob"),
            record(1, "Ann"),
        ]))
        .with_toggled_order()
        .with_query("x.com");

        let RenderView::Table {
            query,
            sort,
            sort_options,
            rows,
        } = render(&ViewState::Ready(table))
        else {
            panic!("expected table view");
        };

        assert_eq!(query, "x.com");
        assert_eq!(sort.direction, SortDirection::Descending);
        assert_eq!(sort_options, SortField::ALL);
        let keys: Vec<_> = rows.iter().map(|row| row.key).collect();
        assert_eq!(keys, vec![RecordId(2), RecordId(1)]);
        assert_eq!(
            rows[1].cells,
            [
                "1".to_string(),
                "Ann".to_string(),
                "ann".to_string(),
                "ann@x.com".to_string(),
                "1-770-736-8031".to_string(),
            ]
        );
    }

    #[test]
    fn formats_aligned_plain_text_table() {
        let rows = vec![
            RowView::from_record(&record(10, "Bob")),
            RowView::from_record(&record(2, "Annabel")),
        ];
        let text = format_table(&rows);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  Name     Username  Email"));
        assert!(lines[2].starts_with("10  Bob      bob       bob@x.com"));
        assert!(lines[3].starts_with(" 2  Annabel  annabel   annabel@x.com"));
    }

    #[test]
    fn empty_table_still_has_header() {
        let text = format_table(&[]);
        assert_eq!(text.lines().count(), 2);
        assert_eq!(text.lines().next(), Some("ID  Name  Username  Email  Phone"));
    }
}
