use super::format::{format_currency, format_field_label, value_text};
use crate::model::display::{OtherFeesRow, OtherFeesTable};
use crate::model::other_fee::OtherFee;
use serde_json::Value;

const EMPTY_CELL: &str = "-";

/// Lays the other fees out as a table whose columns are the keys of the
/// first row. Later rows missing a column get an empty cell; columns only
/// later rows have are not shown.
pub fn build_other_fees_table(fees: &[OtherFee]) -> Option<OtherFeesTable> {
    let first = fees.first()?;
    let columns: Vec<String> = first.columns.keys().cloned().collect();
    let headers = columns.iter().map(|column| format_field_label(column)).collect();
    let rows = fees
        .iter()
        .map(|fee| OtherFeesRow {
            fee_type: fee.fee_type.clone(),
            cells: columns
                .iter()
                .map(|column| cell_text(fee.columns.get(column)))
                .collect(),
        })
        .collect();

    Some(OtherFeesTable {
        columns,
        headers,
        rows,
    })
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => EMPTY_CELL.to_string(),
        Some(number @ Value::Number(_)) => format_currency(number),
        Some(other) => value_text(other),
    }
}
