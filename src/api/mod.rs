/*
* API feature modules; each submodule pairs a handler with its routes.
*/

pub mod hello;
