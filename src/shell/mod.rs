// Composition root for the fleet service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the fleet store and wire it into use case handlers.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
