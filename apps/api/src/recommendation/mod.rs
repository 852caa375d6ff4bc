// Skill-to-career recommendation.
// Implements: keyword resolver, query persistence, HTTP handlers.
// Handlers only talk to storage through the QueryStore trait.

pub mod handlers;
pub mod resolver;
pub mod store;
