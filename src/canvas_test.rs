use super::*;
use crate::entry::HexColor;
use time::macros::datetime;
use uuid::Uuid;

fn entry_at(x: i64, y: i64, color: &str) -> Entry {
    Entry {
        id: Uuid::new_v4(),
        name: "guest".into(),
        message: "hi".into(),
        color: color.parse::<HexColor>().unwrap(),
        position_x: x,
        position_y: y,
        created_at: datetime!(2024-01-01 00:00 UTC),
    }
}

// --- from_rows ---

#[test]
fn from_rows_accepts_rectangular_grid() {
    let canvas = Canvas::from_rows(vec![vec![Vec::new(); 3]; 2]).unwrap();
    assert_eq!(canvas.row_count(), 2);
    assert_eq!(canvas.column_count(), 3);
    assert!(!canvas.is_empty());
}

#[test]
fn from_rows_rejects_ragged_grid() {
    let rows = vec![vec![Vec::new(); 3], vec![Vec::new(); 2]];
    let err = Canvas::from_rows(rows).unwrap_err();
    assert_eq!(err, CanvasError::Ragged { row: 1, expected: 3, found: 2 });
}

#[test]
fn from_rows_empty_is_valid_and_empty() {
    let canvas = Canvas::from_rows(Vec::new()).unwrap();
    assert!(canvas.is_empty());
    assert_eq!(canvas.row_count(), 0);
    assert_eq!(canvas.column_count(), 0);
}

#[test]
fn blank_has_requested_shape_and_no_entries() {
    let canvas = Canvas::blank(4, 5);
    assert_eq!(canvas.row_count(), 4);
    assert_eq!(canvas.column_count(), 5);
    assert_eq!(canvas.entries().count(), 0);
    assert_eq!(canvas.cell(3, 4), Some(&[][..]));
    assert_eq!(canvas.cell(4, 0), None);
    assert_eq!(canvas.cell(0, 5), None);
}

// --- arrange ---

#[test]
fn arrange_row_is_y_puts_y_on_rows() {
    let e = entry_at(2, 1, "ff0000");
    let arranged = Canvas::arrange(3, 4, vec![e.clone()], AxisOrder::RowIsY);
    assert!(arranged.skipped.is_empty());
    assert_eq!(arranged.canvas.cell(1, 2), Some(std::slice::from_ref(&e)));
}

#[test]
fn arrange_row_is_x_puts_x_on_rows() {
    let e = entry_at(2, 1, "ff0000");
    let arranged = Canvas::arrange(3, 4, vec![e.clone()], AxisOrder::RowIsX);
    assert_eq!(arranged.canvas.cell(2, 1), Some(std::slice::from_ref(&e)));
}

#[test]
fn arrange_keeps_stacking_order() {
    let a = entry_at(0, 0, "111111");
    let b = entry_at(0, 0, "222222");
    let arranged = Canvas::arrange(1, 1, vec![a.clone(), b.clone()], AxisOrder::RowIsY);
    let cell = arranged.canvas.cell(0, 0).unwrap();
    assert_eq!(cell.len(), 2);
    assert_eq!(cell[0].id, a.id);
    assert_eq!(cell[1].id, b.id);
}

#[test]
fn arrange_skips_out_of_bounds_entries() {
    let inside = entry_at(1, 1, "111111");
    let negative = entry_at(-1, 0, "222222");
    let beyond = entry_at(0, 9, "333333");
    let arranged = Canvas::arrange(2, 2, vec![inside, negative.clone(), beyond.clone()], AxisOrder::RowIsY);
    assert_eq!(arranged.canvas.entries().count(), 1);
    let skipped: Vec<Uuid> = arranged.skipped.iter().map(|e| e.id).collect();
    assert_eq!(skipped, vec![negative.id, beyond.id]);
}

#[test]
fn arrange_on_zero_sized_grid_skips_everything() {
    let arranged = Canvas::arrange(0, 0, vec![entry_at(0, 0, "111111")], AxisOrder::RowIsY);
    assert!(arranged.canvas.is_empty());
    assert_eq!(arranged.skipped.len(), 1);
}

#[test]
fn entries_iterates_row_major() {
    let first = entry_at(1, 0, "111111");
    let second = entry_at(0, 1, "222222");
    let arranged = Canvas::arrange(2, 2, vec![second.clone(), first.clone()], AxisOrder::RowIsY);
    let ids: Vec<Uuid> = arranged.canvas.entries().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

// --- AxisOrder ---

#[test]
fn axis_order_parses_known_names() {
    assert_eq!("row_is_y".parse::<AxisOrder>().unwrap(), AxisOrder::RowIsY);
    assert_eq!(" row_is_x ".parse::<AxisOrder>().unwrap(), AxisOrder::RowIsX);
}

#[test]
fn axis_order_rejects_unknown_name() {
    let err = "diagonal".parse::<AxisOrder>().unwrap_err();
    assert_eq!(err, CanvasError::UnknownAxisOrder("diagonal".into()));
}

#[test]
fn axis_order_default_is_row_is_y() {
    assert_eq!(AxisOrder::default(), AxisOrder::RowIsY);
    assert_eq!(AxisOrder::default().as_str(), "row_is_y");
}
