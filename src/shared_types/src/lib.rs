//! Generated TypeScript bindings for the wifi-connector core live in
//! `generated/`, written by this crate's build script.
