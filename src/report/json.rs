use serde::Serialize;

use crate::report::ReportError;

/// Chart documents are small; pretty output keeps them diffable.
pub fn render_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(value)?)
}
