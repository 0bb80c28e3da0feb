//! CLI command: lay out a value

use crate::cli::Options;
use crate::error::Result;
use crate::input;
use crate::layout::Layout;
use crate::types::TypeSpec;
use std::io::Write;
use tracing::{debug, trace};

/// Resolve the type and value named by `opts` and write their layout.
///
/// In strict mode, every check happens before anything is written, so a
/// failed invocation produces no partial output.
pub fn show<W: Write>(opts: &Options, out: &mut W) -> Result<()> {
    let spec = if opts.strict {
        TypeSpec::resolve(&opts.type_name)?
    } else {
        TypeSpec::lookup(&opts.type_name)
    };

    if spec.is_known() {
        debug!(type_name = spec.name(), width = spec.width(), "resolved type");
    } else {
        debug!(type_name = spec.name(), "unrecognized type, laying out zero bytes");
    }

    let value = if opts.strict {
        input::parse_value_strict(&opts.value)?
    } else {
        let scanned = input::scan_value(&opts.value);

        if !scanned.matched {
            debug!(text = %opts.value, "no digits in value, using 0");
        } else if !scanned.rest.is_empty() {
            debug!(value = scanned.value, ignored = scanned.rest, "ignored trailing input");
        }

        scanned.value
    };

    let layout = Layout::new(spec, value);
    trace!(value = layout.value(), bytes = ?layout.as_bytes(), "laid out value");

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &layout.report())?;
        writeln!(out)?;
    } else {
        layout.write_text(out)?;
    }

    Ok(())
}
