use crate::pipeline::resolver::{names, ttl};
use crate::pipeline::{decode_record, resolve_line, Aggregator, LineOutcome, Sanitizer};
use tracing::{info, instrument, warn};
use zoneparse_domain::{ParseOptions, ParsedZone, ZoneError, ZoneState};

/// Parses zone file text into typed records.
///
/// Lines are streamed through the sanitizer, resolved against the running
/// zone state, decoded and aggregated in a single pass.
pub struct ParseZoneUseCase {
    options: ParseOptions,
}

impl ParseZoneUseCase {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Records whose rdata does not decode are collected in
    /// [`ParsedZone::errors`], or returned as the error in strict mode.
    #[instrument(skip_all, fields(bytes = input.len(), flatten = self.options.flatten, strict = self.options.strict))]
    pub fn execute(&self, input: &str) -> Result<ParsedZone, ZoneError> {
        let mut state = ZoneState::new();
        let mut aggregator = Aggregator::new(self.options.flatten);
        let mut errors = Vec::new();

        for line in Sanitizer::new(input) {
            let (next, outcome) = resolve_line(state, &line, &self.options);
            state = next;

            let LineOutcome::Record(record) = outcome else {
                continue;
            };

            let record = names::for_output(record, self.options.keep_trailing_dot);
            match decode_record(record) {
                Ok(typed) => aggregator.push(typed),
                Err(e) if self.options.strict => {
                    warn!(error = %e, "Aborting parse on undecodable record");
                    return Err(ZoneError::Decode(e));
                }
                Err(e) => {
                    warn!(error = %e, "Skipping undecodable record");
                    errors.push(e);
                }
            }
        }

        info!(
            records = aggregator.len(),
            errors = errors.len(),
            origin = state.origin.as_deref().unwrap_or("-"),
            "Zone parsed"
        );

        Ok(ParsedZone {
            ttl: ttl::zone_ttl(&state),
            origin: state.origin,
            records: aggregator.finish(),
            errors,
        })
    }
}
