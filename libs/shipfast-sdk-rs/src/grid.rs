//! Sortable, searchable table state.

use std::cmp::Ordering;
use std::fmt;

use shipfast_types::Purchase;

pub const SEARCH_PLACEHOLDER: &str = "Buscar...";
pub const EMPTY_MESSAGE: &str = "No se encontraron datos";

/// Raw value of one cell, used for sorting and searching.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Ordering between two values of the same kind. Values of different
    /// kinds (or NaN) are incomparable and keep their relative order.
    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, Self::from)
    }
}

/// A row the grid can display.
pub trait GridRow {
    /// Raw value for `key`; unknown keys are `Empty`.
    fn cell(&self, key: &str) -> CellValue;

    /// Text rendered in the cell. Defaults to the raw value.
    fn display(&self, key: &str) -> String {
        self.cell(key).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
}

impl Column {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

/// Grid state: the columns, the active sort and the search term.
#[derive(Debug, Clone)]
pub struct DataGrid {
    columns: Vec<Column>,
    sort: Option<SortConfig>,
    search: String,
}

impl DataGrid {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            sort: None,
            search: String::new(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Header click: ascending first, descending when the same column is
    /// already ascending.
    pub fn handle_sort(&mut self, key: &str) {
        let direction = match &self.sort {
            Some(sort) if sort.key == key && sort.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };
        self.sort = Some(SortConfig {
            key: key.to_string(),
            direction,
        });
    }

    /// Arrow shown next to the header of the sorted column.
    pub fn sort_indicator(&self, key: &str) -> Option<&'static str> {
        self.sort
            .as_ref()
            .filter(|sort| sort.key == key)
            .map(|sort| sort.direction.indicator())
    }

    /// Sort, then filter, the given rows.
    pub fn view<'r, R: GridRow>(&self, rows: &'r [R]) -> GridView<'r, R> {
        let mut visible: Vec<&R> = rows.iter().collect();

        if let Some(sort) = &self.sort {
            // `sort_by` is stable: equal and incomparable rows keep source order.
            visible.sort_by(|a, b| {
                let ord = a
                    .cell(&sort.key)
                    .compare(&b.cell(&sort.key))
                    .unwrap_or(Ordering::Equal);
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        let needle = self.search.to_lowercase();
        visible.retain(|row| {
            self.columns.iter().any(|column| {
                row.cell(&column.key)
                    .to_string()
                    .to_lowercase()
                    .contains(&needle)
            })
        });

        GridView {
            rows: visible,
            total: rows.len(),
        }
    }
}

/// Rows currently displayed by a grid.
#[derive(Debug)]
pub struct GridView<'r, R> {
    rows: Vec<&'r R>,
    total: usize,
}

impl<'r, R> GridView<'r, R> {
    pub fn rows(&self) -> &[&'r R] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Mostrando {} de {} registros", self.rows.len(), self.total)
    }
}

/// Columns of the dashboard purchase table.
pub fn purchase_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("fecha", "Fecha"),
        Column::new("monto", "Monto"),
        Column::new("tipo", "Tipo"),
        Column::new("estado", "Estado"),
        Column::new("enlace", "Comprobante"),
    ]
}

impl GridRow for Purchase {
    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::from(self.id.as_str()),
            "fecha" => CellValue::Text(self.date.format("%Y-%m-%d").to_string()),
            "monto" => CellValue::Number(self.amount),
            "moneda" => CellValue::from(self.currency.as_str()),
            "estado" => CellValue::from(self.status.as_str()),
            "tipo" => CellValue::from(self.kind.label()),
            "enlace" => CellValue::from(self.link.as_deref()),
            _ => CellValue::Empty,
        }
    }

    fn display(&self, key: &str) -> String {
        match key {
            "monto" => format!("${:.2} {}", self.amount, self.currency),
            "enlace" => match self.link {
                Some(_) => "Ver".to_string(),
                None => "—".to_string(),
            },
            _ => self.cell(key).to_string(),
        }
    }
}
