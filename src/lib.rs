// TruthFort: claim verification against retrieved news coverage
//
// This is the library root. Each module corresponds to a major subsystem:
// the verification engine, the evidence providers it pulls from, and the
// account storage and HTTP surface that sit around it.

pub mod config;
pub mod db;
pub mod evidence;
pub mod output;
pub mod verify;

#[cfg(feature = "web")]
pub mod web;
