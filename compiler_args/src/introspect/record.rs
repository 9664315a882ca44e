//! Rendering of argument records into value tokens.

use super::path::WalkPath;
use crate::error::{ArgsError, ArgsResult};
use crate::schema::ArgumentRecord;

/// Reads every sub-field named by the record's order and flattens the
/// values into tokens. Absent sub-fields contribute nothing.
pub(super) fn tokens(
    record: &dyn ArgumentRecord,
    path: &WalkPath,
    index: usize,
) -> ArgsResult<Vec<String>> {
    let mut tokens = Vec::new();
    for name in record.order() {
        let fragment = record.field(name).map_err(|err| {
            ArgsError::from_access(path.render_field(index, name), record.type_name(), err)
        })?;
        fragment.append_to(&mut tokens);
    }
    Ok(tokens)
}
