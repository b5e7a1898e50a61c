//! Image Source Port
//!
//! Supplies candidate image names when the operator did not name one.

use crate::error::TransportError;

pub trait ImageSource {
    /// Image names available for deployment, in server order.
    fn list_images(&self) -> Result<Vec<String>, TransportError>;
}
