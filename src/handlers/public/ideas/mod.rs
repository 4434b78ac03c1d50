// Read-only idea endpoints, open to anyone.
pub mod idea_get; // GET /api/ideas/:id - show single idea
pub mod idea_list; // GET /api/ideas - list ideas, newest first

pub use idea_get::idea_get;
pub use idea_list::idea_list;
