//! # View Module
//!
//! In-memory representation of what the front end displays, and the pure
//! transitions that move it forward.
//!
//! ## Control Flow
//!
//! ```text
//! user action ──► reduce(state, event) ──► (state', Option<Effect>)
//!                                                     │
//!                         execute(client, request) ◄──┘
//!                                  │
//!         settle(state', ticket, completion event) ──► state''
//! ```
//!
//! [`reduce`] never performs I/O. An event that needs the remote API returns
//! an [`Effect`] with a [`Ticket`]; the caller runs it with [`execute`] and
//! hands the completion to [`settle`], which drops it if a newer request of
//! the same [`RequestClass`] was issued in the meantime.
//!
//! ## Mutation Policy
//!
//! The song collection is only changed by confirmed completions. A failed
//! create, update or delete leaves the collection as it was and sets the
//! error message, so there is nothing to roll back. A confirmed mutation is
//! never dropped: when a newer mutation was issued in the meantime, only its
//! selection and panel changes are skipped.

mod controller;
mod effect;
mod event;
mod reducer;
mod state;
mod ticket;

pub use controller::Controller;
pub use effect::execute;
pub use event::{Effect, Event, Request};
pub use reducer::{reduce, settle};
pub use state::{DetailsPanel, NOT_FOUND_MESSAGE, ViewState};
pub use ticket::{RequestClass, Ticket, TicketLedger};
