//! Client session capability: credential operations plus a
//! change-subscription lifecycle, behind an explicit gateway handle.

mod gateway;
mod router;

pub use gateway::{
    ClientSession, Credentials, InMemorySessionGateway, SessionError, SessionGateway,
    SessionListener, SessionSubscription, MIN_PASSWORD_LENGTH,
};
pub use router::session_router;
