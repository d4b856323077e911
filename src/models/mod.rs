pub mod message;

pub use message::{
    Attachment, Color, DeliveryResult, Field, InvocationResponse, OutboundEnvelope,
    SHORT_FIELD_LIMIT,
};
