use std::io::{self, Write};

/// Writes `message` to stdout and, if given, to `writer` as well.
///
/// A failed stdout write is logged and otherwise ignored; a failed write to
/// `writer` is returned.
pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Err(e) = writeln!(io::stdout(), "{message}") {
        tracing::warn!(error = %e, "failed to write to stdout");
    }

    if let Some(w) = writer {
        writeln!(w, "{message}")?;
    }

    Ok(())
}
