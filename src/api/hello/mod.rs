/*
* Hello endpoint: forwards a fixed greeting to the echo service and
* relays whatever the echo service answers.
*/

pub mod handler;
pub mod routes;

pub use routes::hello_routes;
