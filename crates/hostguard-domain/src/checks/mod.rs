//! One module per policy domain. Every checker is a pure function over
//! (observed facts, resolved policy); a failing sub-check is a value in the
//! returned report, never an error.

pub mod endpoint;
pub mod files;
pub mod firewall;
pub mod logging;
pub mod network;
pub mod password;
pub mod patch;
pub mod services;
pub mod users;

mod ports;
