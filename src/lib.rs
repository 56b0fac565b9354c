//! # Tactical Connect Four
//!
//! A Connect Four arena built around a rule-ordered tactical agent: take an
//! immediate win, block the opponent's, avoid handing one over, then extend
//! chains toward the center. The arena pits agents against each other over
//! many games and reports win rates.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Agent trait, mover-relative percepts, tactical and random agents
//! - [`arena`] — Match runner: plays games between agents, aggregates results
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
