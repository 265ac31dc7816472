#[cfg(test)]
pub mod test_helpers {
    use crate::http::CmciClient;
    use crate::session::{CmciSession, Protocol};

    /// Creates a client pointed at an unroutable local port. Tests that
    /// exercise validation must fail before any request is attempted; tests
    /// that get past validation observe a transport error instead.
    pub fn offline_client() -> CmciClient {
        let session =
            CmciSession::new("127.0.0.1", 1, "testuser", "testpass").protocol(Protocol::Http);
        CmciClient::new(session).expect("client construction should not fail")
    }
}
