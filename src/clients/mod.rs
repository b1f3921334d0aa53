/*
* Client wrappers for external collaborators.
*/

pub mod echo_client;

pub use echo_client::EchoClient;
