//! Workbook export read back through calamine.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};

use verdict::export::ExportBundle;
use verdict::{Category, Cell, Session, Table, to_workbook, with_count_diff};

fn read_back(bytes: Vec<u8>) -> Xlsx<Cursor<Vec<u8>>> {
    open_workbook_from_rs(Cursor::new(bytes)).expect("Failed to open workbook")
}

#[test]
fn test_session_bundle_sheet_order() {
    let mut session = Session::new();
    session
        .ingest(Category::Ok, "ok.csv", b"Dataset ID,Status\nDS-1,OK\n")
        .unwrap();
    session
        .ingest(Category::PartialOk, "partial.csv", b"Dataset ID,Status flag\n")
        .unwrap();
    session
        .ingest(Category::NotOk, "not_ok.csv", b"Dataset ID,old count\nDS-3,12\n")
        .unwrap();

    let workbook = read_back(to_workbook(&session.export_bundle()).unwrap());

    assert_eq!(workbook.sheet_names(), vec!["OK Datasets", "Not OK"]);
}

#[test]
fn test_cells_keep_their_kind() {
    let table = Table::from_raw(
        ["Dataset ID", "old count", "new count", "Sanity reason"],
        vec![vec!["DS-1", "10", "4", ""], vec!["DS-2", "n/a", "3", "Case 4"]],
    );
    let schema = verdict::CanonicalSchema::resolve(&table, &verdict::AliasTable::default());
    let derived = with_count_diff(&table, &schema);
    assert_eq!(derived.get(0, 4), Some(&Cell::Number(6.0)));

    let bytes = to_workbook(&ExportBundle::new().with_sheet("Not OK", Some(&derived))).unwrap();
    let mut workbook = read_back(bytes);
    let range = workbook.worksheet_range("Not OK").unwrap();

    assert_eq!(range.get_value((0, 4)), Some(&Data::String("Count Diff".to_string())));
    assert_eq!(range.get_value((1, 0)), Some(&Data::String("DS-1".to_string())));
    assert_eq!(range.get_value((1, 1)), Some(&Data::Float(10.0)));
    assert_eq!(range.get_value((2, 1)), Some(&Data::Empty));
    assert_eq!(range.get_value((2, 2)), Some(&Data::Float(3.0)));
    assert_eq!(range.get_value((1, 4)), Some(&Data::Float(6.0)));
    assert_eq!(range.get_value((1, 3)), Some(&Data::Empty));
    assert_eq!(range.get_value((2, 4)), Some(&Data::Empty));
    assert_eq!(range.get_value((2, 3)), Some(&Data::String("Case 4".to_string())));
}

#[test]
fn test_long_sheet_names_are_truncated() {
    let table = Table::from_raw(["a"], vec![vec!["1"]]);
    let name = "Datasets that failed the sanity validation run";
    let bundle = ExportBundle::new().with_sheet(name, Some(&table));

    let workbook = read_back(to_workbook(&bundle).unwrap());
    let names = workbook.sheet_names();

    assert_eq!(names.len(), 1);
    assert_eq!(names[0].chars().count(), 31);
    assert!(name.starts_with(names[0].as_str()));
}

#[test]
fn test_configured_sheet_limit() {
    let table = Table::from_raw(["a"], vec![vec!["1"]]);
    let bundle = ExportBundle::with_name_limit(6).with_sheet("Partial OK", Some(&table));

    let workbook = read_back(to_workbook(&bundle).unwrap());
    assert_eq!(workbook.sheet_names(), vec!["Partia"]);
}

#[test]
fn test_summary_percentages_export_as_numbers() {
    let mut session = Session::new();
    session
        .ingest(
            Category::Summary,
            "summary.csv",
            b"Dataset ID,% data match\nDS-1,40\nTotal,N/A\n",
        )
        .unwrap();

    let mut workbook = read_back(to_workbook(&session.export_bundle()).unwrap());
    let range = workbook.worksheet_range("Summary").unwrap();

    assert_eq!(range.get_value((1, 0)), Some(&Data::String("DS-1".to_string())));
    assert_eq!(range.get_value((1, 1)), Some(&Data::Float(40.0)));
    assert_eq!(range.get_value((2, 1)), Some(&Data::Empty));
}
