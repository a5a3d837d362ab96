use crate::core::schema::Column;
use crate::dsl::handlers::tokenize;
use crate::dsl::{DslError, DslOutput};
use crate::engine::{observed_values, selection_options, CatalogueStore};

/// Handle OPTIONS and VALUES commands
/// Syntax: OPTIONS column   (choices offered when adding or updating, with the "Other" sentinel)
///         VALUES column    (values currently in the catalogue, as offered by RECOMMEND)
pub fn handle_options(
    store: &CatalogueStore,
    rest: &str,
    line_no: usize,
    observed_only: bool,
) -> Result<DslOutput, DslError> {
    let tokens = tokenize(rest, line_no)?;
    let [name] = tokens.as_slice() else {
        return Err(DslError::parse(line_no, "Expected a single column name"));
    };
    let column = Column::lookup(name)
        .ok_or_else(|| DslError::parse(line_no, format!("Unknown column '{}'", name)))?;

    let values = if observed_only {
        observed_values(store.catalogue(), column)
    } else {
        selection_options(store.catalogue(), column)
    };
    Ok(DslOutput::Options { column, values })
}
