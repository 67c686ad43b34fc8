//! Core Kernel - Foundational types shared by the lending and application crates
//!
//! - Money with precise decimal arithmetic and display formatting
//! - Rates for fee calculations
//! - Typed identifiers for sessions, applications and quotes

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{FormSessionId, ApplicationId, QuoteId};
