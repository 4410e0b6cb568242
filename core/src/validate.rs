//! Descriptor table validation.
//!
//! Validates structural invariants of a [`CommandSchema`] before a parser is
//! built from it: alias formats, alias and field uniqueness (including the
//! aliases of active built-in flags), and positional ordering.
//!
//! # Examples
//!
//! ```
//! use tssh_args::*;
//!
//! let schema = CommandSchema::new("tssh")
//!     .with_flag(FlagSchema::boolean("debug", Some("-v"), Some("--debug")));
//! assert!(validate_schema(&schema, &[]).is_empty());
//!
//! // Invalid: `-v` is already the built-in version flag
//! let builtins = ParserConfig::default().builtin_flags();
//! assert_eq!(
//!     validate_schema(&schema, &builtins),
//!     vec![SchemaError::BuiltinCollision("-v".to_string())]
//! );
//! ```

use std::collections::HashSet;

use crate::{ArgSchema, CommandSchema, FlagSchema, SchemaError};

/// Validates a descriptor table against the active built-in flags.
///
/// Stops at the first problem found; an empty result means the schema is
/// valid.
pub fn validate_schema(schema: &CommandSchema, builtins: &[FlagSchema]) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    if schema.command.trim().is_empty() {
        errors.push(SchemaError::EmptyCommandName);
        return errors;
    }

    let mut reserved = HashSet::new();
    let mut fields = HashSet::new();
    errors.extend(validate_flags(builtins, &HashSet::new(), &mut reserved, &mut fields));
    if !errors.is_empty() {
        return errors;
    }

    let mut seen = HashSet::new();
    errors.extend(validate_flags(&schema.flags, &reserved, &mut seen, &mut fields));
    if !errors.is_empty() {
        return errors;
    }

    errors.extend(validate_positionals(&schema.positional, &mut fields));
    errors
}

fn validate_flags<'a>(
    flags: &'a [FlagSchema],
    reserved: &HashSet<&'a str>,
    seen: &mut HashSet<&'a str>,
    fields: &mut HashSet<&'a str>,
) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    for flag in flags {
        if let Some(err) = check_field_name(&flag.field, fields) {
            errors.push(err);
            return errors;
        }

        if flag.short.is_none() && flag.long.is_none() {
            errors.push(SchemaError::MissingFlagName(flag.field.clone()));
            return errors;
        }

        if let Some(short) = flag.short.as_deref() {
            let mut chars = short.chars();
            let valid = chars.next() == Some('-')
                && chars.next().is_some_and(|c| c != '-' && is_alias_char(c))
                && chars.next().is_none();
            if !valid {
                errors.push(SchemaError::InvalidShortFlag(short.to_string()));
                return errors;
            }
        }

        if let Some(long) = flag.long.as_deref() {
            let valid = long.strip_prefix("--").is_some_and(|name| {
                name.chars().next().is_some_and(|c| c != '-')
                    && name.chars().all(is_alias_char)
            });
            if !valid {
                errors.push(SchemaError::InvalidLongFlag(long.to_string()));
                return errors;
            }
        }

        for alias in flag.aliases() {
            if reserved.contains(alias) {
                errors.push(SchemaError::BuiltinCollision(alias.to_string()));
                return errors;
            }
            if !seen.insert(alias) {
                errors.push(SchemaError::DuplicateFlag(alias.to_string()));
                return errors;
            }
        }
    }

    errors
}

fn validate_positionals<'a>(
    positional: &'a [ArgSchema],
    fields: &mut HashSet<&'a str>,
) -> Vec<SchemaError> {
    let mut errors = Vec::new();
    let mut variadic_seen = false;
    let mut optional_seen = false;

    for arg in positional {
        if let Some(err) = check_field_name(&arg.name, fields) {
            errors.push(err);
            return errors;
        }
        if variadic_seen {
            errors.push(SchemaError::PositionalAfterVariadic(arg.name.clone()));
            return errors;
        }
        if arg.required && optional_seen {
            errors.push(SchemaError::RequiredAfterOptional(arg.name.clone()));
            return errors;
        }
        variadic_seen |= arg.multiple;
        optional_seen |= !arg.required;
    }

    errors
}

/// Characters allowed in an alias name; `=` would split a token into flag and value.
fn is_alias_char(c: char) -> bool {
    c != '=' && !c.is_whitespace() && !c.is_control()
}

fn check_field_name<'a>(name: &'a str, fields: &mut HashSet<&'a str>) -> Option<SchemaError> {
    if name.trim().is_empty() {
        return Some(SchemaError::EmptyFieldName);
    }
    if !fields.insert(name) {
        return Some(SchemaError::DuplicateField(name.to_string()));
    }
    None
}
