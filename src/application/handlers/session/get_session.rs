//! GetSessionHandler - Query handler for retrieving session details.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::{SessionReader, SessionView};

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving session details, including the owner's name.
pub struct GetSessionHandler {
    reader: Arc<dyn SessionReader>,
}

impl GetSessionHandler {
    pub fn new(reader: Arc<dyn SessionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionView, SessionError> {
        self.reader
            .get_view(query.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id))
    }
}
