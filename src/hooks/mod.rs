pub mod session_context;
pub mod use_route;

pub use session_context::{
    use_sessions_context_checked, use_sessions_context, SessionsContext, SessionsProvider,
    SessionsProviderProps,
};
pub use use_route::use_route;
