mod bind;
mod record;
mod statement_event;

#[cfg(test)]
mod tests;

pub use bind::{BindParam, BindValue, Binds};
pub use record::StatementRecord;
pub use statement_event::StatementEvent;
