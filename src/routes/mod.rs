/// Router Module Index
///
/// Organizes the application's routing logic into security-segregated modules.
/// Access control is applied explicitly at the module level (via an Axum
/// route layer), preventing accidental exposure of protected endpoints.

/// Routes accessible to all clients: public reads plus the credential
/// endpoints (login, registration) and the health probe.
pub mod public;

/// Routes protected by the token verification gate. Every write operation on
/// the publishable entities lives here, alongside the profile lookup.
pub mod protected;
