//! Natural-language front-end for parking commands.
//!
//! Maps free-form text onto a closed set of intents, extracts the optional
//! slot-id parameter, renders the equivalent SQL for display, and produces
//! the spoken confirmation phrase. Pure text processing, no I/O.

mod intent;
mod resolver;
mod speech;
mod sql;

pub use intent::{suggestions, Intent, IntentKind};
pub use resolver::{IntentResolver, ResolveError};
pub use speech::confirmation;
pub use sql::render_sql;
