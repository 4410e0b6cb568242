//! Descriptor types for schema-driven argument parsing.
//!
//! A [`CommandSchema`] is an explicit, hand-written table describing which
//! destination fields a command line fills: named fields ([`FlagSchema`]) with
//! short/long aliases, and positional fields ([`ArgSchema`]) filled left to
//! right. The adapter in [`crate::ArgParser`] turns the table into a `clap`
//! command; targets receive parsed values through [`Bind`].

/// Value type for flags and positional arguments.
///
/// # Examples
///
/// ```
/// use tssh_args::ValueType;
///
/// assert_eq!(ValueType::default(), ValueType::String);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    /// Boolean (a flag with no value, or an explicit `true`/`false` value).
    Bool,
    /// Free-form string (the default).
    #[default]
    String,
    /// Signed integer.
    Number,
}

/// Schema for a named field.
///
/// A named field has an optional short alias (e.g., `-v`) and/or long alias
/// (e.g., `--debug`), and names the destination field it fills.
///
/// # Examples
///
/// ```
/// use tssh_args::{FlagSchema, ValueType};
///
/// let debug = FlagSchema::boolean("debug", Some("-v"), Some("--debug"))
///     .with_description("verbose mode for debugging");
/// assert_eq!(debug.canonical_name(), "--debug");
/// assert!(!debug.takes_value);
///
/// let port = FlagSchema::with_value("port", Some("-p"), Some("--port"), ValueType::Number);
/// assert!(port.takes_value);
/// assert_eq!(port.value_name(), "PORT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSchema {
    /// Destination field filled by this flag
    pub field: String,
    /// Short form (e.g., "-v")
    pub short: Option<String>,
    /// Long form (e.g., "--debug")
    pub long: Option<String>,
    /// Type of value this flag accepts
    pub value_type: ValueType,
    /// Whether a value is required
    pub takes_value: bool,
    /// Help text, rendered verbatim
    pub description: Option<String>,
}

impl FlagSchema {
    /// Creates a boolean flag (no value).
    pub fn boolean(field: &str, short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            field: field.to_string(),
            short: short.map(String::from),
            long: long.map(String::from),
            value_type: ValueType::Bool,
            takes_value: false,
            description: None,
        }
    }

    /// Creates a flag that takes a value.
    pub fn with_value(
        field: &str,
        short: Option<&str>,
        long: Option<&str>,
        value_type: ValueType,
    ) -> Self {
        Self {
            field: field.to_string(),
            short: short.map(String::from),
            long: long.map(String::from),
            value_type,
            takes_value: true,
            description: None,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Returns the canonical name (long form preferred, falls back to short).
    ///
    /// # Examples
    ///
    /// ```
    /// use tssh_args::FlagSchema;
    ///
    /// let flag = FlagSchema::boolean("debug", Some("-v"), Some("--debug"));
    /// assert_eq!(flag.canonical_name(), "--debug");
    ///
    /// let short_only = FlagSchema::boolean("debug", Some("-v"), None);
    /// assert_eq!(short_only.canonical_name(), "-v");
    /// ```
    pub fn canonical_name(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .unwrap_or("unknown")
    }

    /// Iterates over the aliases this flag binds, short first.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.short.as_deref().into_iter().chain(self.long.as_deref())
    }

    /// Placeholder shown for the flag's value in usage and help text.
    pub fn value_name(&self) -> String {
        self.field.to_uppercase()
    }

    pub(crate) fn short_char(&self) -> Option<char> {
        self.short.as_deref().and_then(|s| s.strip_prefix('-'))?.chars().next()
    }

    pub(crate) fn long_name(&self) -> Option<&str> {
        self.long.as_deref().and_then(|l| l.strip_prefix("--"))
    }
}

/// Schema for a positional field.
///
/// Positional fields are filled left to right. The last one may be variadic
/// and then absorbs every remaining token.
///
/// # Examples
///
/// ```
/// use tssh_args::{ArgSchema, ValueType};
///
/// let host = ArgSchema::required("host", ValueType::String);
/// assert!(host.required);
///
/// let rest = ArgSchema::optional("arguments", ValueType::String).allow_multiple();
/// assert!(!rest.required);
/// assert!(rest.multiple);
/// assert_eq!(rest.value_name(), "ARGUMENTS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSchema {
    /// Name of the destination field (e.g., "destination")
    pub name: String,
    /// Type of value expected
    pub value_type: ValueType,
    /// Is this argument required?
    pub required: bool,
    /// Does this argument absorb all remaining tokens?
    pub multiple: bool,
    /// Help text, rendered verbatim
    pub description: Option<String>,
}

impl ArgSchema {
    /// Creates a required positional argument.
    pub fn required(name: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            required: true,
            multiple: false,
            description: None,
        }
    }

    /// Creates an optional positional argument.
    pub fn optional(name: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            required: false,
            multiple: false,
            description: None,
        }
    }

    /// Marks as variadic.
    pub fn allow_multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Placeholder shown for the argument in usage and help text.
    pub fn value_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Usage synopsis fragment: `NAME`, `[NAME]`, `NAME ...` or `[NAME ...]`.
    pub fn synopsis(&self) -> String {
        let name = self.value_name();
        match (self.required, self.multiple) {
            (true, false) => name,
            (true, true) => format!("{name} ..."),
            (false, false) => format!("[{name}]"),
            (false, true) => format!("[{name} ...]"),
        }
    }
}

/// Complete descriptor table for a command line.
///
/// # Examples
///
/// ```
/// use tssh_args::*;
///
/// let schema = CommandSchema::new("tssh")
///     .with_description("Simple ssh client")
///     .with_flag(FlagSchema::boolean("debug", Some("-v"), Some("--debug")))
///     .with_arg(ArgSchema::optional("destination", ValueType::String));
///
/// assert_eq!(schema.flags.len(), 1);
/// assert_eq!(schema.positional[0].synopsis(), "[DESTINATION]");
/// assert!(validate_schema(&schema, &[]).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSchema {
    /// The program name shown in usage (e.g., "tssh")
    pub command: String,
    /// Short description, shown above usage in help
    pub description: Option<String>,
    /// Named fields
    pub flags: Vec<FlagSchema>,
    /// Positional fields, in order
    pub positional: Vec<ArgSchema>,
}

impl CommandSchema {
    /// Creates an empty schema for the given program name.
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            ..Default::default()
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds a named field.
    pub fn with_flag(mut self, flag: FlagSchema) -> Self {
        self.flags.push(flag);
        self
    }

    /// Adds a positional field after the existing ones.
    pub fn with_arg(mut self, arg: ArgSchema) -> Self {
        self.positional.push(arg);
        self
    }
}

/// A parsed value delivered to a [`Bind`] target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    Number(i64),
    List(Vec<String>),
}

/// Destination of a parse.
///
/// Implementors describe their fields with [`Bind::schema`] and receive each
/// matched field through [`Bind::bind`]. Fields absent from the command line
/// are never bound, so the target keeps its initial value for them.
pub trait Bind {
    /// The descriptor table for this target.
    fn schema() -> CommandSchema;

    /// Assigns a parsed value to the named field.
    fn bind(&mut self, field: &str, value: FieldValue);
}
