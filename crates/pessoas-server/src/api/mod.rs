// ABOUTME: API module organizing the JSON handlers for the pessoas server.
// ABOUTME: Re-exports the people submodule for route registration.

pub mod people;
