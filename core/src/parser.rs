//! The `clap`-backed parser built from a descriptor table.
//!
//! [`ArgParser`] validates a [`CommandSchema`], translates it into a
//! `clap::Command` and fills a [`Bind`] target from a token list. Usage text
//! is a compact synopsis computed from the table rather than `clap`'s
//! `[OPTIONS]` form, so every flag is listed explicitly.

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use tracing::debug;

use crate::{
    ArgSchema, Bind, CommandSchema, FieldValue, FlagSchema, HELP_FIELD, ParserConfig,
    SchemaError, SyntaxError, ValueType, validate_schema,
};

/// Result of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// Every matched field was bound on the target.
    Complete,
    /// The built-in help flag was given; nothing was bound.
    HelpRequested,
}

/// A parser bound to one descriptor table.
///
/// # Examples
///
/// ```
/// use tssh_args::*;
///
/// #[derive(Default)]
/// struct Args {
///     host: String,
///     quiet: bool,
/// }
///
/// impl Bind for Args {
///     fn schema() -> CommandSchema {
///         CommandSchema::new("demo")
///             .with_flag(FlagSchema::boolean("quiet", Some("-q"), Some("--quiet")))
///             .with_arg(ArgSchema::required("host", ValueType::String))
///     }
///
///     fn bind(&mut self, field: &str, value: FieldValue) {
///         match (field, value) {
///             ("host", FieldValue::Text(v)) => self.host = v,
///             ("quiet", FieldValue::Flag(v)) => self.quiet = v,
///             _ => {}
///         }
///     }
/// }
///
/// let parser = ArgParser::for_target::<Args>(ParserConfig::default()).unwrap();
/// let mut args = Args::default();
/// let tokens = vec!["-q".to_string(), "example.com".to_string()];
/// assert_eq!(parser.parse(&tokens, &mut args).unwrap(), ParseStatus::Complete);
/// assert_eq!(args.host, "example.com");
/// assert!(args.quiet);
///
/// assert!(parser.render_usage().starts_with("Usage: demo [--quiet] [-v] HOST"));
/// ```
#[derive(Debug, Clone)]
pub struct ArgParser {
    config: ParserConfig,
    schema: CommandSchema,
    command: Command,
}

impl ArgParser {
    /// Validates `schema` against the active built-ins and builds the parser.
    pub fn new(config: ParserConfig, schema: CommandSchema) -> Result<Self, SchemaError> {
        if let Some(err) = validate_schema(&schema, &config.builtin_flags())
            .into_iter()
            .next()
        {
            return Err(err);
        }

        let mut command = build_command(&config, &schema);
        command.build();
        debug!(
            command = %schema.command,
            flags = schema.flags.len(),
            positional = schema.positional.len(),
            version_flag = ?config.version_flag().map(FlagSchema::canonical_name),
            "Built argument parser"
        );

        Ok(Self {
            config,
            schema,
            command,
        })
    }

    /// Builds the parser for a target type's own descriptor table.
    pub fn for_target<T: Bind>(config: ParserConfig) -> Result<Self, SchemaError> {
        Self::new(config, T::schema())
    }

    /// Parses `tokens` (without the program name) into `target`.
    ///
    /// Positional tokens fill positional fields left to right; a trailing
    /// variadic field absorbs the rest, hyphen-prefixed tokens included.
    pub fn parse<T: Bind>(
        &self,
        tokens: &[String],
        target: &mut T,
    ) -> Result<ParseStatus, SyntaxError> {
        let matches = self
            .command
            .clone()
            .try_get_matches_from(tokens)
            .map_err(SyntaxError::from)?;

        if matches.get_flag(HELP_FIELD) {
            debug!(command = %self.schema.command, "Help flag given");
            return Ok(ParseStatus::HelpRequested);
        }

        let mut bound = 0usize;
        for flag in self.schema.flags.iter().chain(self.config.version_flag()) {
            if let Some(value) = flag_value(&matches, flag) {
                target.bind(&flag.field, value);
                bound += 1;
            }
        }
        for arg in &self.schema.positional {
            if let Some(value) = positional_value(&matches, arg) {
                target.bind(&arg.name, value);
                bound += 1;
            }
        }

        debug!(command = %self.schema.command, tokens = tokens.len(), bound, "Parsed arguments");
        Ok(ParseStatus::Complete)
    }

    /// Full help text: description, usage, positionals and flags.
    pub fn render_help(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// Single usage line, e.g. `Usage: tssh [--debug] [-V] [DESTINATION]`.
    pub fn render_usage(&self) -> String {
        self.command.clone().render_usage().to_string()
    }
}

fn build_command(config: &ParserConfig, schema: &CommandSchema) -> Command {
    let mut command = Command::new(schema.command.clone())
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .override_usage(usage_synopsis(config, schema));
    if let Some(about) = &schema.description {
        command = command.about(about.clone());
    }

    let mut order = 0usize;
    for arg in &schema.positional {
        command = command.arg(positional_arg(arg, order));
        order += 1;
    }
    for flag in &schema.flags {
        command = command.arg(flag_arg(flag, order));
        order += 1;
    }
    if let Some(version) = config.version_flag() {
        command = command.arg(flag_arg(version, order));
        order += 1;
    }
    command.arg(flag_arg(&config.help_flag(), order))
}

fn usage_synopsis(config: &ParserConfig, schema: &CommandSchema) -> String {
    let mut parts = vec![schema.command.clone()];
    for flag in &schema.flags {
        if flag.takes_value {
            parts.push(format!("[{} {}]", flag.canonical_name(), flag.value_name()));
        } else {
            parts.push(format!("[{}]", flag.canonical_name()));
        }
    }
    // built-ins are summarized by their short alias
    if let Some(version) = config.version_flag() {
        let alias = version.short.as_deref().unwrap_or(version.canonical_name());
        parts.push(format!("[{alias}]"));
    }
    parts.extend(schema.positional.iter().map(ArgSchema::synopsis));
    parts.join(" ")
}

fn flag_arg(flag: &FlagSchema, order: usize) -> Arg {
    let mut arg = Arg::new(flag.field.clone()).display_order(order);
    if let Some(short) = flag.short_char() {
        arg = arg.short(short);
    }
    if let Some(long) = flag.long_name() {
        arg = arg.long(long.to_string());
    }
    if let Some(desc) = &flag.description {
        arg = arg.help(desc.clone());
    }
    if flag.takes_value {
        with_value_parser(arg.action(ArgAction::Set), flag.value_type).value_name(flag.value_name())
    } else {
        arg.action(ArgAction::SetTrue)
    }
}

fn positional_arg(schema: &ArgSchema, order: usize) -> Arg {
    let mut arg = Arg::new(schema.name.clone())
        .value_name(schema.value_name())
        .required(schema.required)
        .display_order(order);
    if let Some(desc) = &schema.description {
        arg = arg.help(desc.clone());
    }
    arg = with_value_parser(arg, schema.value_type);
    if schema.multiple {
        arg.action(ArgAction::Append)
            .num_args(1..)
            .trailing_var_arg(true)
            .allow_hyphen_values(true)
    } else {
        arg.action(ArgAction::Set)
    }
}

fn with_value_parser(arg: Arg, value_type: ValueType) -> Arg {
    match value_type {
        ValueType::Bool => arg.value_parser(value_parser!(bool)),
        ValueType::String => arg.value_parser(value_parser!(String)),
        ValueType::Number => arg.value_parser(value_parser!(i64)),
    }
}

fn flag_value(matches: &ArgMatches, flag: &FlagSchema) -> Option<FieldValue> {
    if !flag.takes_value {
        return matches
            .get_flag(&flag.field)
            .then_some(FieldValue::Flag(true));
    }
    single_value(matches, &flag.field, flag.value_type)
}

fn positional_value(matches: &ArgMatches, arg: &ArgSchema) -> Option<FieldValue> {
    if !arg.multiple {
        return single_value(matches, &arg.name, arg.value_type);
    }
    let values: Vec<String> = match arg.value_type {
        ValueType::Bool => matches
            .get_many::<bool>(&arg.name)?
            .map(ToString::to_string)
            .collect(),
        ValueType::String => matches.get_many::<String>(&arg.name)?.cloned().collect(),
        ValueType::Number => matches
            .get_many::<i64>(&arg.name)?
            .map(ToString::to_string)
            .collect(),
    };
    Some(FieldValue::List(values))
}

fn single_value(matches: &ArgMatches, id: &str, value_type: ValueType) -> Option<FieldValue> {
    match value_type {
        ValueType::Bool => matches.get_one::<bool>(id).copied().map(FieldValue::Flag),
        ValueType::String => matches.get_one::<String>(id).cloned().map(FieldValue::Text),
        ValueType::Number => matches.get_one::<i64>(id).copied().map(FieldValue::Number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyntaxErrorKind;

    #[derive(Debug, Default)]
    struct Target {
        values: Vec<(String, FieldValue)>,
    }

    impl Target {
        fn get(&self, field: &str) -> Option<&FieldValue> {
            self.values.iter().find(|(f, _)| f == field).map(|(_, v)| v)
        }
    }

    impl Bind for Target {
        fn schema() -> CommandSchema {
            CommandSchema::new("demo")
                .with_description("Demo program.")
                .with_flag(
                    FlagSchema::boolean("quiet", Some("-q"), Some("--quiet"))
                        .with_description("suppress output"),
                )
                .with_flag(
                    FlagSchema::with_value("port", Some("-p"), Some("--port"), ValueType::Number)
                        .with_description("port to connect to"),
                )
                .with_arg(
                    ArgSchema::required("host", ValueType::String).with_description("remote host"),
                )
                .with_arg(
                    ArgSchema::optional("rest", ValueType::String)
                        .allow_multiple()
                        .with_description("everything else"),
                )
        }

        fn bind(&mut self, field: &str, value: FieldValue) {
            self.values.push((field.to_string(), value));
        }
    }

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn parser() -> ArgParser {
        ArgParser::for_target::<Target>(ParserConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_fills_positionals_and_flags() {
        let mut target = Target::default();
        let status = parser()
            .parse(&tokens(&["-q", "--port", "2222", "example.com"]), &mut target)
            .unwrap();

        assert_eq!(status, ParseStatus::Complete);
        assert_eq!(target.get("quiet"), Some(&FieldValue::Flag(true)));
        assert_eq!(target.get("port"), Some(&FieldValue::Number(2222)));
        assert_eq!(
            target.get("host"),
            Some(&FieldValue::Text("example.com".to_string()))
        );
        assert_eq!(target.get("rest"), None);
        assert_eq!(target.get("version"), None);
    }

    #[test]
    fn test_variadic_positional_absorbs_hyphen_tokens() {
        let mut target = Target::default();
        parser()
            .parse(&tokens(&["example.com", "ls", "-la", "--color"]), &mut target)
            .unwrap();

        assert_eq!(
            target.get("rest"),
            Some(&FieldValue::List(tokens(&["ls", "-la", "--color"])))
        );
    }

    #[test]
    fn test_builtin_version_flag_binds_its_field() {
        let mut target = Target::default();
        parser()
            .parse(&tokens(&["-v", "example.com"]), &mut target)
            .unwrap();
        assert_eq!(target.get("version"), Some(&FieldValue::Flag(true)));
    }

    #[test]
    fn test_help_flag_reports_help_requested() {
        let mut target = Target::default();
        let status = parser()
            .parse(&tokens(&["example.com", "-h"]), &mut target)
            .unwrap();
        assert_eq!(status, ParseStatus::HelpRequested);
        assert!(target.values.is_empty());
    }

    #[test]
    fn test_unknown_flag_is_syntax_error() {
        let mut target = Target::default();
        let err = parser()
            .parse(&tokens(&["--bogus-flag"]), &mut target)
            .unwrap_err();
        assert_eq!(err.kind(), SyntaxErrorKind::UnknownFlag);
        assert!(err.message().contains("--bogus-flag"));
        assert!(!err.message().contains("Usage:"));
    }

    #[test]
    fn test_missing_required_positional_is_syntax_error() {
        let mut target = Target::default();
        let err = parser().parse(&tokens(&["-q"]), &mut target).unwrap_err();
        assert_eq!(err.kind(), SyntaxErrorKind::MissingArgument);
        assert!(err.message().contains("HOST"));
    }

    #[test]
    fn test_wrong_value_type_is_syntax_error() {
        let mut target = Target::default();
        let err = parser()
            .parse(&tokens(&["--port", "ssh", "example.com"]), &mut target)
            .unwrap_err();
        assert_eq!(err.kind(), SyntaxErrorKind::InvalidValue);
        assert!(err.message().contains("ssh"));
    }

    #[test]
    fn test_render_usage_lists_every_flag() {
        assert_eq!(
            parser().render_usage().trim_end(),
            "Usage: demo [--quiet] [--port PORT] [-v] HOST [REST ...]"
        );

        let rebound = ArgParser::for_target::<Target>(
            ParserConfig::default().with_version_flag("show_version", Some("-V"), Some("--version")),
        )
        .unwrap();
        assert!(rebound.render_usage().contains(" [-V] "));
        assert!(!rebound.render_usage().contains(" [-v]"));
    }

    #[test]
    fn test_render_help_includes_descriptions() {
        let help = parser().render_help();
        for text in [
            "Demo program.",
            "suppress output",
            "port to connect to",
            "remote host",
            "everything else",
            "show program's version number and exit",
            "display this help and exit",
        ] {
            assert!(help.contains(text), "help is missing {text:?}:\n{help}");
        }
        assert_eq!(help, parser().render_help());
    }

    #[test]
    fn test_new_rejects_malformed_long_alias() {
        for long in ["---x", "--a=b"] {
            let schema =
                CommandSchema::new("demo").with_flag(FlagSchema::boolean("x", None, Some(long)));
            let err = ArgParser::new(ParserConfig::default(), schema).unwrap_err();
            assert_eq!(err, SchemaError::InvalidLongFlag(long.to_string()));
        }
    }

    #[test]
    fn test_new_rejects_builtin_collision() {
        let schema = CommandSchema::new("demo")
            .with_flag(FlagSchema::boolean("debug", Some("-v"), Some("--debug")));
        let err = ArgParser::new(ParserConfig::default(), schema).unwrap_err();
        assert_eq!(err, SchemaError::BuiltinCollision("-v".to_string()));
    }
}
