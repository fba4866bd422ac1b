//! Bridge to the external interactive chooser.
//!
//! Candidates go in as `relative<TAB>absolute` records, the chooser reports
//! the key that ended the session on its first output line and the picked
//! record on the second.

pub mod chooser;
pub mod selection;

pub use chooser::{Chooser, ChooserReply, FzfChooser};
pub use selection::{AUGMENTED_KEY, CONFIRM_KEY, Selection};
