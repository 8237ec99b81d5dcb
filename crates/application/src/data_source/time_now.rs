//! The `<provider>_now` data source.

use timenow_domain::snapshot::{DAY, HOUR, MINUTE, MONTH, RFC3339, SECOND, UNIX, YEAR};
use timenow_domain::{Attribute, AttributeType, Schema, now_type_name};
use tracing::{debug, instrument};

use super::{
    DataSource, Diagnostic, MetadataRequest, MetadataResponse, ReadRequest, ReadResponse,
};
use crate::ports::Clock;
use crate::use_cases::TakeSnapshot;

const DESCRIPTION: &str = "Load and return the time at plan time.";

const RFC3339_DESCRIPTION: &str = "Base timestamp in \
    [RFC3339](https://datatracker.ietf.org/doc/html/rfc3339#section-5.8) format \
    (see [RFC3339 time string](https://tools.ietf.org/html/rfc3339#section-5.8) e.g., \
    `YYYY-MM-DDTHH:MM:SSZ`). Defaults to the current time.";

/// Builds the schema of the `now` data source.
#[must_use]
pub fn time_now_schema() -> Schema {
    let int = |description: &str| Attribute::computed(AttributeType::Int64, description);

    Schema::new(DESCRIPTION)
        .with_attribute(DAY, int("Number day of timestamp."))
        .with_attribute(HOUR, int("Number hour of timestamp."))
        .with_attribute(MINUTE, int("Number minute of timestamp."))
        .with_attribute(MONTH, int("Number month of timestamp."))
        .with_attribute(
            RFC3339,
            Attribute::computed(AttributeType::String, RFC3339_DESCRIPTION),
        )
        .with_attribute(SECOND, int("Number second of timestamp."))
        .with_attribute(
            UNIX,
            int("Number of seconds since epoch time, e.g. `1581489373`."),
        )
        .with_attribute(YEAR, int("Number year of timestamp."))
}

/// Data source reporting the current UTC time.
#[derive(Debug, Clone)]
pub struct TimeNowDataSource<C: Clock> {
    snapshot: TakeSnapshot<C>,
    schema: Schema,
}

impl<C: Clock> TimeNowDataSource<C> {
    /// Creates the data source reading from `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            snapshot: TakeSnapshot::new(clock),
            schema: time_now_schema(),
        }
    }
}

impl<C: Clock> DataSource for TimeNowDataSource<C> {
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse {
        MetadataResponse {
            type_name: now_type_name(&request.provider_type_name),
        }
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    #[instrument(level = "debug", skip_all)]
    fn read(&self, request: &ReadRequest) -> ReadResponse {
        let mut response = ReadResponse::default();
        for (name, _) in request.config.iter() {
            let detail = if self.schema.attribute(name).is_some() {
                format!("{name} is computed and cannot be configured; the value is ignored.")
            } else {
                format!("{name} is not an argument of this data source; the value is ignored.")
            };
            response
                .diagnostics
                .push(Diagnostic::warning("Ignored Configuration", detail).with_attribute(name));
        }

        let snapshot = self.snapshot.execute();
        response.set_state(&self.schema, snapshot.into_state());
        debug!(diagnostics = response.diagnostics.len(), "read complete");
        response
    }
}
