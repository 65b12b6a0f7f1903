use crate::error::{Error, Result};

pub const TITLE_FLAG: &str = "--title";
pub const BODY_FLAG: &str = "--body";
pub const DEFAULT_TITLE: &str = "No title";
pub const DEFAULT_BODY: &str = "No body";

/// Options resolved from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub title: String,
    pub body: String,
}

/// Parse command line arguments into [`Options`]
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// Each flag is resolved on its own: the last occurrence wins and the
/// argument right after it is taken verbatim as the value, even if it looks
/// like another flag. Arguments that are neither a flag nor a flag value are
/// ignored.
///
/// # Returns
/// * `Ok(Options)` - Flags resolved, defaults substituted for absent ones
/// * `Err(Error::MissingFlagValue)` - A flag was the last argument
pub fn parse_args(args: &[String]) -> Result<Options> {
    let args = args.get(1..).unwrap_or_default();

    Ok(Options {
        title: flag_value(args, TITLE_FLAG)?.unwrap_or(DEFAULT_TITLE).to_string(),
        body: flag_value(args, BODY_FLAG)?.unwrap_or(DEFAULT_BODY).to_string(),
    })
}

fn flag_value<'a>(args: &'a [String], flag: &'static str) -> Result<Option<&'a str>> {
    match args.iter().rposition(|arg| arg == flag) {
        Some(index) => args
            .get(index + 1)
            .map(|value| Some(value.as_str()))
            .ok_or(Error::MissingFlagValue { flag }),
        None => Ok(None),
    }
}
