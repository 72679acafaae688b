use crate::board::{SearchParams, Strategy};

use super::ProtocolError;

/// Split `name <words...> value <words...>` into its name and value.
fn split_name_value(parts: &[String]) -> Result<(String, Option<String>), ProtocolError> {
    let name_at = parts
        .iter()
        .position(|p| p == "name")
        .ok_or(ProtocolError::MissingParts("setoption"))?;
    let value_at = parts.iter().position(|p| p == "value");

    let name_end = value_at.unwrap_or(parts.len());
    if name_end <= name_at + 1 {
        return Err(ProtocolError::MissingParts("setoption"));
    }
    let name = parts[name_at + 1..name_end].join(" ");
    let value = value_at.map(|at| parts[at + 1..].join(" "));
    Ok((name, value))
}

/// Apply a `setoption` command to `params`.
pub fn apply_setoption(params: &mut SearchParams, parts: &[String]) -> Result<(), ProtocolError> {
    let (name, value) = split_name_value(parts)?;
    let invalid = |value: &str| ProtocolError::InvalidValue {
        name: name.clone(),
        value: value.to_string(),
    };

    match name.trim().to_ascii_lowercase().as_str() {
        "depth" => {
            let raw = value.unwrap_or_default();
            let depth = raw.trim().parse::<u32>().map_err(|_| invalid(&raw))?;
            *params = params.clone().with_depth(depth);
        }
        "strategy" => {
            let raw = value.unwrap_or_default();
            let strategy = raw.parse::<Strategy>().map_err(|_| invalid(&raw))?;
            *params = params.clone().with_strategy(strategy);
        }
        _ => return Err(ProtocolError::UnknownOption(name)),
    }

    #[cfg(feature = "logging")]
    log::debug!("search params now depth {} strategy {}", params.depth, params.strategy);

    Ok(())
}
