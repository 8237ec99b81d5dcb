//! Command execution against a data source.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use timenow_application::{DataSource, MetadataRequest, ReadRequest};
use timenow_domain::{AttributeValue, Schema, State};
use timenow_infrastructure::{Query, encode_result, parse_query, to_json_stable};
use tracing::{debug, info};

use crate::cli::Cmd;

#[derive(Debug, Serialize)]
struct SchemaDocument {
    type_name: String,
    schema: Schema,
}

pub fn run<D: DataSource>(
    cmd: Cmd,
    source: &D,
    provider: &str,
    mut input: impl Read,
    mut output: impl Write,
) -> Result<()> {
    let type_name = source
        .metadata(&MetadataRequest {
            provider_type_name: provider.to_string(),
        })
        .type_name;

    let rendered = match cmd {
        Cmd::Read => {
            let mut raw = String::new();
            input
                .read_to_string(&mut raw)
                .context("failed to read query from stdin")?;
            let query = parse_query(&raw)?;
            debug!(%type_name, keys = query.len(), "answering external query");
            encode_result(&read_state(source, query_config(query))?)?
        }
        Cmd::State => to_json_stable(&read_state(source, State::new())?)?,
        Cmd::Schema => to_json_stable(&SchemaDocument {
            type_name: type_name.clone(),
            schema: source.schema(),
        })?,
    };

    output
        .write_all(rendered.as_bytes())
        .context("failed to write output")?;
    output.flush().context("failed to flush output")?;

    info!(%type_name, command = ?cmd, "done");
    Ok(())
}

fn query_config(query: Query) -> State {
    query
        .into_iter()
        .map(|(name, value)| (name, AttributeValue::String(value)))
        .collect()
}

fn read_state<D: DataSource>(source: &D, config: State) -> Result<State> {
    let response = source.read(&ReadRequest { config });
    for diagnostic in &response.diagnostics {
        tracing::warn!(%diagnostic, "data source diagnostic");
    }
    Ok(response.into_result()?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use timenow_application::TimeNowDataSource;
    use timenow_infrastructure::FixedClock;

    use super::*;

    fn run_to_string(cmd: Cmd, input: &str) -> Result<String> {
        let source = TimeNowDataSource::new(FixedClock::from_unix(1_710_513_045).expect("in range"));
        let mut out = Vec::new();
        run(cmd, &source, "time", input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_read_answers_with_strings() {
        let out = run_to_string(Cmd::Read, r#"{"trigger":"1"}"#).expect("read works");
        let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");

        assert_eq!(json["rfc3339"], "2024-03-15T14:30:45Z");
        assert_eq!(json["unix"], "1710513045");
        assert_eq!(json["year"], "2024");
        assert!(json.as_object().is_some_and(|o| o.values().all(serde_json::Value::is_string)));
    }

    #[test]
    fn test_query_becomes_read_config() {
        let query = parse_query(r#"{"trigger":"1"}"#).expect("valid query");
        let config = query_config(query);

        assert_eq!(
            config.get("trigger"),
            Some(&AttributeValue::String("1".to_string()))
        );
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_query_keys_do_not_leak_into_output() {
        let out = run_to_string(Cmd::Read, r#"{"trigger":"1"}"#).expect("read works");
        let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");

        assert!(json.get("trigger").is_none());
        assert_eq!(json.as_object().map(serde_json::Map::len), Some(8));
    }

    #[test]
    fn test_read_rejects_bad_query() {
        assert!(run_to_string(Cmd::Read, "not json").is_err());
    }

    #[test]
    fn test_state_keeps_integers() {
        let out = run_to_string(Cmd::State, "").expect("state works");
        let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");

        assert_eq!(json["unix"], 1_710_513_045);
        assert_eq!(json["month"], 3);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_schema_document() {
        let out = run_to_string(Cmd::Schema, "").expect("schema works");
        let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");

        assert_eq!(json["type_name"], "time_now");
        assert_eq!(json["schema"]["version"], 0);
        assert_eq!(json["schema"]["attributes"]["unix"]["type"], "int64");
        assert_eq!(json["schema"]["attributes"]["rfc3339"]["type"], "string");
        assert_eq!(json["schema"]["attributes"]["day"]["computed"], true);
    }
}
