// Mutating idea endpoints; every handler takes an AuthUser and the
// update/delete pair runs the ownership guard after the existence check.
pub mod idea_delete; // DELETE /api/ideas/:id - remove an owned idea
pub mod idea_post; // POST /api/ideas - create an idea owned by the caller
pub mod idea_put; // PUT /api/ideas/:id - replace an owned idea's fields
mod utils;

pub use idea_delete::idea_delete;
pub use idea_post::idea_post;
pub use idea_put::idea_put;
