mod draft_note;
mod options;

pub use draft_note::*;
pub use options::*;
