use crate::error::CompileError;
use crate::recipe::{OrderedMap, Recipe, SizeClass};
use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;

static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());
static FLOWER_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());

/// Compiles one design such as `AS10a10b25` into a [`Recipe`].
///
/// The design is an uppercase id, a size class, `<quantity><type>` pairs and a
/// trailing total. The display code is the design with the first occurrence of
/// the total's numeral removed from everything after the header (`AS10a10b`).
/// When that numeral also appears earlier, as in `AS5a5`, the code keeps the
/// total and loses the first matching quantity instead (`ASa5`).
pub fn compile_recipe(description: &str) -> Result<Recipe, CompileError> {
    let mut chars = description.chars();
    let (Some(id), Some(size_code)) = (chars.next(), chars.next()) else {
        return Err(CompileError::MissingHeader(description.to_string()));
    };
    if !id.is_ascii_uppercase() {
        return Err(CompileError::InvalidIdentifier {
            description: description.to_string(),
            found: id,
        });
    }
    let size = SizeClass::from_code(size_code).ok_or_else(|| CompileError::InvalidSizeClass {
        description: description.to_string(),
        found: size_code,
    })?;

    let remainder = chars.as_str();
    let mut quantities: Vec<&str> = QUANTITY_RE.find_iter(remainder).map(|m| m.as_str()).collect();
    let flower_types: Vec<char> = FLOWER_TYPE_RE
        .find_iter(remainder)
        .filter_map(|m| m.as_str().chars().next())
        .collect();

    let quantity_count = quantities.len();
    let total_literal = match quantities.pop() {
        Some(total) if quantities.len() == flower_types.len() => total,
        _ => {
            return Err(CompileError::ArityMismatch {
                description: description.to_string(),
                quantities: quantity_count,
                flower_types: flower_types.len(),
            });
        }
    };
    let total_flowers = parse_quantity(description, total_literal)?;

    let mut required = OrderedMap::default();
    for (literal, &kind) in quantities.iter().zip_eq(&flower_types) {
        let quantity = parse_quantity(description, literal)?;
        if required.insert(kind, quantity).is_some() {
            return Err(CompileError::DuplicateFlowerType {
                description: description.to_string(),
                flower: kind,
            });
        }
    }

    let required_sum: u64 = required.values().map(|&q| u64::from(q)).sum();
    if required_sum > u64::from(total_flowers) {
        return Err(CompileError::TotalBelowRequired {
            description: description.to_string(),
            total: total_flowers,
            required: u32::try_from(required_sum).unwrap_or(u32::MAX),
        });
    }

    Ok(Recipe {
        id,
        size,
        required,
        total_flowers,
        display_code: format!("{}{}{}", id, size_code, remainder.replacen(total_literal, "", 1)),
    })
}

fn parse_quantity(description: &str, literal: &str) -> Result<u32, CompileError> {
    literal
        .parse()
        .map_err(|_| CompileError::QuantityOverflow {
            description: description.to_string(),
            literal: literal.to_string(),
        })
}
