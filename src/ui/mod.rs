//! Client-side interaction state, modeled as plain state machines so the
//! server can render every state and tests can drive the transitions.

pub mod contact_form;
pub mod counter;

pub use contact_form::{ContactFields, ContactForm, FormStatus};
pub use counter::{AnimatedCounter, CounterPhase};
