//! Data model: flows, characterisation factors, and uncertainty payloads.

pub mod characterisation_factor;
pub mod flow;
pub mod uncertainty;

pub use characterisation_factor::{CharacterisationFactor, PossibleValue};
pub use flow::{Directionality, FlowKey, FlowRecord, RawCfValue};
pub use uncertainty::{CfPayload, UncertaintyParams};
