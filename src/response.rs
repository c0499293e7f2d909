//! Response bodies shared by handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"message": "..."}` body returned by `/` and by delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(text: impl Into<String>) -> MessageBody {
    MessageBody { message: text.into() }
}
