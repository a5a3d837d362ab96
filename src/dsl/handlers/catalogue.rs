use crate::core::dish::Dish;
use crate::dsl::handlers::{apply_assignments, single_name, tokenize};
use crate::dsl::{DslError, DslOutput};
use crate::engine::{CatalogueError, CatalogueStore};

/// Handle LIST command
/// Syntax: LIST
pub fn handle_list(
    store: &CatalogueStore,
    rest: &str,
    line_no: usize,
) -> Result<DslOutput, DslError> {
    if !rest.trim().is_empty() {
        return Err(DslError::parse(line_no, "LIST takes no arguments"));
    }
    Ok(DslOutput::Dishes(store.dishes().to_vec()))
}

/// Handle SHOW command
/// Syntax: SHOW "dish name"
pub fn handle_show(
    store: &CatalogueStore,
    rest: &str,
    line_no: usize,
) -> Result<DslOutput, DslError> {
    let name = single_name(rest, "SHOW", line_no)?;
    store
        .get(&name)
        .cloned()
        .map(DslOutput::Dish)
        .ok_or_else(|| DslError::catalogue(line_no, CatalogueError::NotFound(name)))
}

/// Handle ADD command
/// Syntax: ADD name="..." cuisine="..." meal="..." [field=value ...]
///
/// Fields left out take their defaults: empty text, False, Mild, Quick, Veg.
pub fn handle_add(
    store: &mut CatalogueStore,
    rest: &str,
    line_no: usize,
) -> Result<DslOutput, DslError> {
    let tokens = tokenize(rest, line_no)?;
    if tokens.is_empty() {
        return Err(DslError::parse(
            line_no,
            "Expected: ADD name=\"...\" [field=value ...]",
        ));
    }

    let mut dish = Dish::default();
    apply_assignments(&mut dish, &tokens, line_no)?;
    let name = dish.name.clone();

    store
        .insert(dish)
        .map_err(|e| DslError::catalogue(line_no, e))?;
    Ok(DslOutput::Message(format!(
        "Dish '{}' added successfully.",
        name
    )))
}

/// Handle UPDATE command
/// Syntax: UPDATE "dish name" SET field=value [field=value ...]
///
/// The replacement row starts from the first dish with that name.
pub fn handle_update(
    store: &mut CatalogueStore,
    rest: &str,
    line_no: usize,
) -> Result<DslOutput, DslError> {
    let tokens = tokenize(rest, line_no)?;
    let usage = || DslError::parse(line_no, "Expected: UPDATE \"dish name\" SET field=value ...");

    let (name, set_kw, assignments) = match tokens.as_slice() {
        [name, set_kw, assignments @ ..] if !assignments.is_empty() => (name, set_kw, assignments),
        _ => return Err(usage()),
    };
    if !set_kw.eq_ignore_ascii_case("SET") {
        return Err(usage());
    }

    let mut dish = store
        .get(name)
        .cloned()
        .ok_or_else(|| DslError::catalogue(line_no, CatalogueError::NotFound(name.clone())))?;
    apply_assignments(&mut dish, assignments, line_no)?;

    let replaced = store
        .update(name, dish)
        .map_err(|e| DslError::catalogue(line_no, e))?;
    let msg = if replaced > 1 {
        format!("Dish '{}' updated successfully ({} rows).", name, replaced)
    } else {
        format!("Dish '{}' updated successfully.", name)
    };
    Ok(DslOutput::Message(msg))
}

/// Handle DELETE command
/// Syntax: DELETE "dish name"
pub fn handle_delete(
    store: &mut CatalogueStore,
    rest: &str,
    line_no: usize,
) -> Result<DslOutput, DslError> {
    let name = single_name(rest, "DELETE", line_no)?;
    let removed = store
        .delete(&name)
        .map_err(|e| DslError::catalogue(line_no, e))?;

    let msg = match removed {
        0 => format!("No dish named '{}'; nothing deleted.", name),
        1 => format!("Deleted '{}' successfully.", name),
        n => format!("Deleted '{}' successfully ({} rows).", name, n),
    };
    Ok(DslOutput::Message(msg))
}
