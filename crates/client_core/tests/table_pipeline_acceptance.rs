use client_core::{
    compare, filter, reduce, render, shuffle, RenderView, ViewEvent, ViewState,
};
use rand::{rngs::StdRng, SeedableRng};
use shared::{
    domain::{Record, RecordId, SortDirection, SortField, SortSpec},
    error::LoadError,
    protocol::decode_records,
};

fn record(id: i64, name: &str, email: &str) -> Record {
    Record {
        id: RecordId(id),
        name: name.to_string(),
        username: name.to_ascii_lowercase(),
        email: email.to_string(),
        phone: String::new(),
    }
}

fn scenario_records() -> Vec<Record> {
    vec![record(2, "Bob", "b@x.com"), record(1, "Ann", "a@x.com")]
}

fn run(events: Vec<ViewEvent>) -> ViewState {
    let mut rng = StdRng::seed_from_u64(1);
    events
        .into_iter()
        .fold(ViewState::Loading, |state, event| reduce(state, event, &mut rng))
}

fn row_keys(state: &ViewState) -> Vec<i64> {
    match render(state) {
        RenderView::Table { rows, .. } => rows.iter().map(|row| row.key.0).collect(),
        other => panic!("expected table view, got {other:?}"),
    }
}

#[test]
fn sort_by_id_then_toggle_order() {
    let state = run(vec![
        ViewEvent::LoadFinished(Ok(scenario_records())),
        ViewEvent::SortFieldChanged(SortField::Id),
    ]);
    assert_eq!(row_keys(&state), vec![1, 2]);

    let state = reduce(state, ViewEvent::SortOrderToggled, &mut StdRng::seed_from_u64(1));
    assert_eq!(row_keys(&state), vec![2, 1]);
}

#[test]
fn query_selects_matching_record() {
    let state = run(vec![
        ViewEvent::LoadFinished(Ok(scenario_records())),
        ViewEvent::SearchInput("ann".to_string()),
    ]);
    assert_eq!(row_keys(&state), vec![1]);
}

#[test]
fn failed_fetch_then_successful_retry() {
    let state = run(vec![ViewEvent::LoadFinished(Err(LoadError::Network(
        "connection reset".to_string(),
    )))]);
    assert!(matches!(render(&state), RenderView::Error { .. }));

    let state = run(vec![
        ViewEvent::LoadFinished(Err(LoadError::Network("connection reset".to_string()))),
        ViewEvent::Retry,
        ViewEvent::LoadFinished(Ok(scenario_records())),
    ]);
    assert_eq!(state.error_message(), None);
    assert_eq!(row_keys(&state), vec![2, 1]);
}

#[test]
fn numeric_string_ids_sort_as_numbers() {
    let body = br#"[
        {"id":"10","name":"Ten","username":"ten","email":"ten@x.com","phone":"1"},
        {"id":"2","name":"Two","username":"two","email":"two@x.com","phone":"2"}
    ]"#;
    let records = decode_records(body).expect("decode");

    let sorted = compare::sorted(
        records,
        SortSpec::new(SortField::Id, SortDirection::Ascending),
    );
    let ids: Vec<_> = sorted.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ids, vec!["2", "10"]);
}

#[test]
fn pipeline_stages_compose() {
    let records = vec![
        record(3, "Cleo", "cleo@x.com"),
        record(1, "Ann", "ann@y.com"),
        record(2, "Bea", "bea@x.com"),
    ];
    let filtered = filter::filter(&records, "X.COM");
    let shuffled = shuffle::shuffled(filtered.clone(), &mut StdRng::seed_from_u64(9));
    let sorted = compare::sorted(
        shuffled,
        SortSpec::new(SortField::Name, SortDirection::Descending),
    );
    let ids: Vec<_> = sorted.iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![3, 2]);
    assert_eq!(filtered.len(), 2);
}
