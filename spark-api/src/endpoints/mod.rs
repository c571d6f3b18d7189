//! Resource endpoint modules.
//!
//! Each module provides a borrowed handle (e.g. [`rooms::Rooms`]) that
//! validates and reshapes parameters before delegating to the generic CRUD
//! helpers on [`SparkClient`](crate::SparkClient).

pub mod rooms;
pub mod messages;
pub mod memberships;
pub mod team_memberships;
pub mod teams;
pub mod webhooks;
