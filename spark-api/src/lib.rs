//! Spark API - HTTP client for the Spark messaging REST API.
//!
//! Covers rooms, messages, memberships, team memberships, teams and
//! webhooks. Each resource validates its required parameters locally and
//! then delegates to the shared [`SparkClient`] request helper, which
//! attaches authentication, builds the URL and decodes the response.

pub mod client;
pub mod endpoints;
pub mod models;
pub mod response;
pub mod transport;

// Re-export key types
pub use client::{Resource, SparkClient};
pub use endpoints::memberships::{
    MembershipCreateParams, MembershipListParams, MembershipUpdateParams, Memberships,
};
pub use endpoints::messages::{
    MessageCreateParams, MessageDirectParams, MessageListParams, Messages,
};
pub use endpoints::rooms::{RoomCreateParams, RoomListParams, RoomUpdateParams, Rooms};
pub use endpoints::team_memberships::{
    TeamMembershipCreateParams, TeamMembershipListParams, TeamMembershipUpdateParams,
    TeamMemberships,
};
pub use endpoints::teams::{TeamCreateParams, TeamListParams, TeamUpdateParams, Teams};
pub use endpoints::webhooks::{
    WebhookCreateParams, WebhookListParams, WebhookUpdateParams, Webhooks,
};
pub use models::{Membership, Message, Room, Team, TeamMembership, Webhook};
pub use response::{ErrorBody, ListResponse};
pub use transport::{RawResponse, ReqwestTransport, SparkRequest, Transport};
