use super::*;

fn book(id: &str, quantity: i64) -> Book {
    Book { id: id.to_owned(), title: format!("Title {id}"), isbn: format!("isbn-{id}"), quantity }
}

#[test]
fn begin_fetch_marks_loading() {
    let mut state = BooksState::default();
    let generation = state.begin_fetch();
    assert!(state.loading);
    assert!(state.is_current(generation));
}

#[test]
fn latest_fetch_replaces_items() {
    let mut state = BooksState::default();
    let generation = state.begin_fetch();
    assert!(state.finish_fetch(generation, Ok(vec![book("a", 1)])));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn stale_fetch_is_discarded() {
    let mut state = BooksState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();

    assert!(state.finish_fetch(second, Ok(vec![book("new", 1)])));
    assert!(!state.finish_fetch(first, Ok(vec![book("old", 1), book("older", 2)])));

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "new");
}

#[test]
fn failed_fetch_keeps_previous_items() {
    let mut state = BooksState::default();
    let g = state.begin_fetch();
    state.finish_fetch(g, Ok(vec![book("a", 1)]));
    let g = state.begin_fetch();
    state.finish_fetch(g, Err("Network error: Unable to connect to server".to_owned()));

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Network error: Unable to connect to server"));
}

#[test]
fn remove_drops_matching_book() {
    let mut state = BooksState::default();
    let g = state.begin_fetch();
    state.finish_fetch(g, Ok(vec![book("a", 1), book("b", 0)]));
    state.remove("a");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "b");
}

#[test]
fn availability_label_reflects_quantity() {
    assert_eq!(availability_label(&book("a", 3)), "✓ Available (3)");
    assert_eq!(availability_label(&book("b", 0)), "Out of Stock");
}
