use bipsql_core::table::{Paginator, Table, PAGE_SIZE};

/// A table with `rows` total rows: one header line plus `rows - 1` data
/// lines.
fn table_with_rows(rows: usize) -> Table {
    let mut lines = vec!["id,name".to_string()];
    for i in 1..rows {
        lines.push(format!("{i},row{i}"));
    }
    Table::parse(&lines.join("\n"))
}

#[test]
fn cursor_clamps_at_both_ends() {
    // 25 rows at a page size of 10 reach page 2 and no further.
    let table = table_with_rows(25);
    assert_eq!(PAGE_SIZE, 10);
    let mut pager = Paginator::for_table(&table);
    assert_eq!(pager.max_page(), 2);

    pager.next();
    pager.next();
    pager.next();
    assert_eq!(pager.page_index(), 2);
    pager.next();
    assert_eq!(pager.page_index(), 2, "next past the last page stays put");

    let mut pager = Paginator::for_table(&table);
    pager.prev();
    assert_eq!(pager.page_index(), 0, "prev before the first page stays put");
}

#[test]
fn view_slices_by_page() {
    let table = table_with_rows(25);
    let mut pager = Paginator::for_table(&table);

    let first = pager.view(&table);
    assert_eq!(first.len(), 10);
    assert_eq!(first[0], vec!["id".to_string(), "name".to_string()]);
    assert_eq!(first[9], vec!["9".to_string(), "row9".to_string()]);

    pager.next();
    let second = pager.view(&table);
    assert_eq!(second.len(), 10);
    assert_eq!(second[0], vec!["10".to_string(), "row10".to_string()]);

    pager.next();
    let third = pager.view(&table);
    assert_eq!(third.len(), 5);
    assert_eq!(third[4], vec!["24".to_string(), "row24".to_string()]);
}

#[test]
fn reset_returns_to_the_first_page() {
    let table = table_with_rows(25);
    let mut pager = Paginator::for_table(&table);
    pager.next();
    pager.next();
    pager.reset();
    assert_eq!(pager.page_index(), 0);
}

#[test]
fn row_count_divisible_by_page_size_ends_on_an_empty_page() {
    // 20 total rows: the bound counts the header row, so page 2 is
    // reachable and shows nothing.
    let table = table_with_rows(20);
    let mut pager = Paginator::for_table(&table);
    assert_eq!(pager.max_page(), 2);

    pager.next();
    pager.next();
    assert_eq!(pager.page_index(), 2);
    assert!(pager.view(&table).is_empty());
}

#[test]
fn empty_table_pins_the_cursor_to_page_zero() {
    let table = Table::parse("");
    let mut pager = Paginator::for_table(&table);
    assert_eq!(pager.max_page(), 0);
    pager.next();
    assert_eq!(pager.page_index(), 0);
    assert!(pager.view(&table).is_empty());
}

#[test]
fn small_page_sizes_walk_the_same_way() {
    let table = table_with_rows(7);
    let mut pager = Paginator::with_page_size(table.row_count(), 3);
    assert_eq!(pager.max_page(), 2);

    pager.next();
    assert_eq!(pager.view(&table)[0], vec!["3".to_string(), "row3".to_string()]);
    pager.next();
    assert_eq!(pager.view(&table).len(), 1);
}
