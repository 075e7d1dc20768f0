//! Post-processing and persistence of rendered artifacts.
//!
//! Rendered text passes through three fixed steps before it is written:
//! stray-import pruning (decorator artifacts only), end-of-line conversion and
//! formatting. A formatting failure is never fatal; the unformatted text is
//! kept and a warning is recorded.

mod eol;
mod format;
mod imports;
mod writer;

pub use eol::convert_eol;
pub use format::{CommandFormatter, FormatError, FormatProfile, Formatter};
pub use imports::{mask_literals, prune_imports, template_lines, unterminated};
pub use writer::{OutputWriter, Processed, Target};
