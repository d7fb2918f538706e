//! CLI command implementations
//!
//! Both commands load configuration first (falling back to defaults), then
//! load the input records into a `RecordStore`. Nothing is written back to
//! the input file.

use std::path::Path;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::RosterConfig;
use crate::observability::{log_event_at, log_event_with_fields, Event, Logger, Severity};
use crate::query::{PageSize, SortSpec};
use crate::record::{RecordDraft, RecordId};
use crate::store::RecordStore;
use crate::table::{TableState, TableView};

use super::args::{Command, OrderArg};
use super::errors::{CliError, CliResult};
use super::io::{read_records, read_requests, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Query {
            input,
            config,
            filter,
            order_by,
            order,
            page,
            page_size,
        } => {
            let config = load_config(config.as_deref())?;
            let options = QueryOptions {
                filter,
                order_by,
                order,
                page,
                page_size,
            };
            query(&input, &config, &options)
        }
        Command::Apply { input, config } => {
            load_config(config.as_deref())?;
            apply(&input)
        }
    }
}

/// Query overrides from the command line
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub filter: String,
    pub order_by: Option<String>,
    pub order: Option<OrderArg>,
    pub page: usize,
    pub page_size: Option<PageSize>,
}

/// Loads configuration (or defaults) and applies its log level
pub fn load_config(path: Option<&Path>) -> CliResult<RosterConfig> {
    let config = match path {
        Some(path) => RosterConfig::load(path)?,
        None => RosterConfig::default(),
    };

    Logger::set_min_severity(config.severity()?);

    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(Event::ConfigLoaded, &[("source", source.as_str())]);

    Ok(config)
}

/// Prints one page of the table
pub fn query(input: &Path, config: &RosterConfig, options: &QueryOptions) -> CliResult<()> {
    let store = load_store(input)?;
    let view_json = run_query(&store, config, options)?;
    write_response(view_json)
}

/// Builds the table view for `options` as JSON
pub fn run_query(
    store: &RecordStore,
    config: &RosterConfig,
    options: &QueryOptions,
) -> CliResult<Value> {
    let base = config.sort_spec();
    let sort = SortSpec::new(
        options.order_by.clone().unwrap_or(base.field),
        options.order.map(Into::into).unwrap_or(base.direction),
    );

    let mut state = TableState::from_config(config).with_sort(sort);
    if let Some(size) = options.page_size {
        state.on_change_rows_per_page(size);
    }
    state.set_filter(options.filter.clone());
    state.on_change_page(options.page);

    let view = TableView::build(store.records(), &state);

    let filtered = view.filtered_count.to_string();
    let page = view.page.to_string();
    let rows = view.rows.len().to_string();
    let total = view.total_count.to_string();
    log_event_with_fields(
        Event::QueryComplete,
        &[
            ("filtered", filtered.as_str()),
            ("page", page.as_str()),
            ("rows", rows.as_str()),
            ("total", total.as_str()),
        ],
    );

    Ok(serde_json::to_value(&view)?)
}

/// A single mutation request read from stdin
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum MutationRequest {
    Add {
        #[serde(default)]
        fields: RecordDraft,
    },
    Update {
        id: RecordId,
        #[serde(default)]
        fields: RecordDraft,
    },
    Remove {
        id: RecordId,
    },
}

impl MutationRequest {
    fn op(&self) -> &'static str {
        match self {
            MutationRequest::Add { .. } => "add",
            MutationRequest::Update { .. } => "update",
            MutationRequest::Remove { .. } => "remove",
        }
    }
}

/// Applies stdin requests to the loaded records and prints the result.
///
/// A rejected request yields an error line; processing continues.
pub fn apply(input: &Path) -> CliResult<()> {
    let mut store = load_store(input)?;

    for request in read_requests() {
        let outcome = request.and_then(|value| apply_request(&mut store, value));
        match outcome {
            Ok(data) => write_response(data)?,
            Err(e) => {
                log_event_at(
                    Severity::Warn,
                    Event::RequestRejected,
                    &[("code", e.code_str()), ("message", e.message())],
                );
                write_error(e.code_str(), e.message())?;
            }
        }
    }

    write_response(json!({
        "records": store.records(),
        "version": store.version(),
    }))
}

/// Applies one JSON request to the store
pub fn apply_request(store: &mut RecordStore, request: Value) -> CliResult<Value> {
    let request: MutationRequest = serde_json::from_value(request)
        .map_err(|e| CliError::request_error(format!("Invalid request: {}", e)))?;
    let op = request.op();

    let id = match request {
        MutationRequest::Add { fields } => store.add(fields),
        MutationRequest::Update { id, fields } => store.update(&id, fields).map(|r| r.id.clone()),
        MutationRequest::Remove { id } => store.remove(&id).map(|r| r.id),
    }
    .map_err(CliError::rejected)?;

    Ok(json!({ "op": op, "id": id }))
}

fn load_store(input: &Path) -> CliResult<RecordStore> {
    let records = read_records(input)?;
    let store = RecordStore::from_records(records)?;

    let path = input.display().to_string();
    let count = store.len().to_string();
    log_event_with_fields(
        Event::InputLoaded,
        &[("path", path.as_str()), ("records", count.as_str())],
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            Record::new("1").with_field("name", "Zoe"),
            Record::new("2").with_field("name", "amy"),
            Record::new("3").with_field("name", "Bob"),
        ])
        .unwrap()
    }

    #[test]
    fn test_run_query_filters() {
        let options = QueryOptions {
            filter: "a".to_string(),
            ..QueryOptions::default()
        };
        let view = run_query(&store(), &RosterConfig::default(), &options).unwrap();

        assert_eq!(view["filtered_count"], 1);
        assert_eq!(view["rows"][0]["id"], "2");
        assert_eq!(view["total_count"], 3);
    }

    #[test]
    fn test_run_query_order_override() {
        let options = QueryOptions {
            order: Some(OrderArg::Desc),
            ..QueryOptions::default()
        };
        let view = run_query(&store(), &RosterConfig::default(), &options).unwrap();

        // byte order: "Bob" < "Zoe" < "amy"
        assert_eq!(view["rows"][0]["name"], "amy");
        assert_eq!(view["rows"][2]["name"], "Bob");
        assert_eq!(view["sort"]["direction"], "desc");
    }

    #[test]
    fn test_run_query_page_after_filter() {
        let options = QueryOptions {
            page: 1,
            page_size: Some(PageSize::Five),
            ..QueryOptions::default()
        };
        let view = run_query(&store(), &RosterConfig::default(), &options).unwrap();

        assert_eq!(view["page"], 1);
        assert_eq!(view["rows"].as_array().unwrap().len(), 0);
        assert_eq!(view["empty_rows"], 0);
    }

    #[test]
    fn test_apply_add_update_remove() {
        let mut store = store();

        let added = apply_request(
            &mut store,
            json!({"op": "add", "fields": {"name": "Dan", "isVerified": false}}),
        )
        .unwrap();
        assert_eq!(added["op"], "add");
        assert_eq!(store.len(), 4);

        apply_request(
            &mut store,
            json!({"op": "update", "id": 1, "fields": {"status": "banned"}}),
        )
        .unwrap();
        let zoe = store.get(&RecordId::new("1")).unwrap();
        assert_eq!(zoe.get("status").unwrap(), &crate::record::FieldValue::text("banned"));

        apply_request(&mut store, json!({"op": "remove", "id": "3"})).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.version(), 3);
    }

    #[test]
    fn test_apply_rejects() {
        let mut store = store();

        let err = apply_request(&mut store, json!({"op": "remove", "id": "404"})).unwrap_err();
        assert_eq!(err.code_str(), "ROSTER_RECORD_NOT_FOUND");

        let err = apply_request(&mut store, json!({"op": "truncate"})).unwrap_err();
        assert_eq!(err.code_str(), "ROSTER_CLI_REQUEST_ERROR");

        let err = apply_request(
            &mut store,
            json!({"op": "update", "id": "1", "fields": {"id": "9"}}),
        )
        .unwrap_err();
        assert_eq!(err.code_str(), "ROSTER_IDENTITY_IMMUTABLE");
        assert!(err.message().contains("identity"));

        let err =
            apply_request(&mut store, json!({"op": "add", "fields": {"id": "9"}})).unwrap_err();
        assert_eq!(err.code_str(), "ROSTER_IDENTITY_IMMUTABLE");

        assert_eq!(store.len(), 3);
    }
}
