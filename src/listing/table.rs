use std::fmt;

use chrono::FixedOffset;

use crate::domain::Order;
use crate::format::{escape_html, format_short_date, or_dash};

pub const COLUMNS: [&str; 9] = [
    "No",
    "Telegram ID",
    "Menu",
    "Minum",
    "Level",
    "Total",
    "Status",
    "Payment",
    "Dibuat",
];

const EMPTY_TEXT: &str = "Tidak ada pesanan hari ini.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Order([String; 9]),
    /// Single row spanning every column, shown when there are no orders.
    Placeholder,
}

/// Body of the daily orders table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBody {
    rows: Vec<TableRow>,
}

fn total_cell(total: Option<f64>) -> String {
    match total {
        Some(total) if total != 0.0 => format!("Rp. {}", total),
        _ => "Rp. 0".to_string(),
    }
}

impl TableBody {
    pub fn render(orders: &[Order], offset: FixedOffset) -> Self {
        if orders.is_empty() {
            return Self {
                rows: vec![TableRow::Placeholder],
            };
        }
        let rows = orders
            .iter()
            .enumerate()
            .map(|(index, order)| {
                TableRow::Order([
                    (index + 1).to_string(),
                    or_dash(order.chat_id.as_deref()).to_string(),
                    or_dash(order.menu.as_deref()).to_string(),
                    or_dash(order.drink.as_deref()).to_string(),
                    or_dash(order.level.as_deref()).to_string(),
                    total_cell(order.total),
                    or_dash(Some(order.status.as_str())).to_string(),
                    or_dash(order.payment.as_deref()).to_string(),
                    format_short_date(&order.created_at, offset),
                ])
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn to_markup(&self) -> String {
        self.rows
            .iter()
            .map(|row| match row {
                TableRow::Placeholder => format!(
                    "<tr><td colspan=\"{}\" class=\"no-data\">{}</td></tr>",
                    COLUMNS.len(),
                    EMPTY_TEXT
                ),
                TableRow::Order(cells) => {
                    let cells: String = cells
                        .iter()
                        .map(|cell| format!("<td>{}</td>", escape_html(cell)))
                        .collect();
                    format!("<tr>{}</tr>", cells)
                }
            })
            .collect()
    }
}

impl fmt::Display for TableBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", COLUMNS.join(" | "))?;
        for row in &self.rows {
            match row {
                TableRow::Placeholder => writeln!(f, "{}", EMPTY_TEXT)?,
                TableRow::Order(cells) => writeln!(f, "{}", cells.join(" | "))?,
            }
        }
        Ok(())
    }
}
