// Portfolio publishing: records which template a user picked and where the
// public page lives. Rendering the page itself happens elsewhere.

pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod selection;
pub mod store;
