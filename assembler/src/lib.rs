//! Two-pass assembler: collects `LABEL:` declarations, then encodes each
//! instruction line into a 48-bit word and applies `.word` directives to a
//! 4096-word data image.

mod encode;
mod error;
mod immediate;
mod labels;
mod registers;

pub use encode::Assembled;
pub use error::{AssembleError, ErrorKind};

pub fn assemble(source: &str) -> Result<Assembled, AssembleError> {
    let labels = labels::collect(source)?;
    encode::run(source, &labels)
}
