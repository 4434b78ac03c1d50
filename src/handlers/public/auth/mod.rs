// Account endpoints that do not require authentication.
pub mod login; // POST /api/auth/login - authenticate and get a bearer token
pub mod register; // POST /api/auth/register - create a new account

pub use login::login;
pub use register::register;
