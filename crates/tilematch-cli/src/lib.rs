//! Terminal driver for the tilematch engine.
//!
//! The `tilematch` binary builds a [`BoardEngine`](tilematch_engine::BoardEngine)
//! from command-line options and either reads swaps from standard input
//! ([`play`]) or plays a number of random productive swaps on its own
//! ([`autoplay`]). The modules here are split out of the binary so the sessions
//! can be driven from tests with in-memory readers and writers.

pub use self::{
    args::{Args, BoardArgs, Command},
    error::CliError,
    events::EventLog,
    input::{InputError, MoveReader, Request},
    render::render,
    session::{autoplay, play},
};

mod args;
mod error;
mod events;
mod input;
mod render;
mod session;
