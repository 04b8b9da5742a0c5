pub mod api;
pub mod context;
pub mod guard;
pub mod session;

pub use context::{provide_auth, use_auth, AuthContext, AuthStatus};
pub use guard::{RequireAuth, SignInPage};
