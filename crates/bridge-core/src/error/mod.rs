//! Domain errors - the transformation and delivery taxonomy

mod transform_error;

pub use transform_error::{DeliveryError, EvalError, TransformError};
