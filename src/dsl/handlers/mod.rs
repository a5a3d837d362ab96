pub mod catalogue;
pub mod options;
pub mod recommend;

use crate::core::dish::Dish;
use crate::core::schema::Column;
use crate::dsl::DslError;

/// Split a command tail into words. Single or double quotes group words and are stripped.
pub fn tokenize(input: &str, line_no: usize) -> Result<Vec<String>, DslError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(DslError::parse(line_no, format!("Unterminated {} quote", q)));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parse a `field=value` word
pub fn parse_assignment(token: &str, line_no: usize) -> Result<(Column, String), DslError> {
    let (key, value) = token.split_once('=').ok_or_else(|| {
        DslError::parse(line_no, format!("Expected field=value, found '{}'", token))
    })?;
    let column = Column::lookup(key).ok_or_else(|| {
        let keys: Vec<&str> = Column::ALL.iter().map(|c| c.key()).collect();
        DslError::parse(
            line_no,
            format!("Unknown field '{}' (expected one of {})", key, keys.join(", ")),
        )
    })?;
    Ok((column, value.to_string()))
}

/// Apply `field=value` words to `dish`
pub fn apply_assignments(dish: &mut Dish, tokens: &[String], line_no: usize) -> Result<(), DslError> {
    for token in tokens {
        let (column, value) = parse_assignment(token, line_no)?;
        dish.set_value(column, &value)
            .map_err(|msg| DslError::parse(line_no, format!("{}: {}", column.header(), msg)))?;
    }
    Ok(())
}

/// Expect exactly one word naming a dish
pub fn single_name(rest: &str, command: &str, line_no: usize) -> Result<String, DslError> {
    let mut tokens = tokenize(rest, line_no)?;
    if tokens.len() != 1 {
        return Err(DslError::parse(
            line_no,
            format!("Expected: {} \"dish name\"", command),
        ));
    }
    Ok(tokens.remove(0))
}
