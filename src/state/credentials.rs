//! VPN account credentials.

/// Username and password handed to `openvpn --auth-user-pass`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Parse the two-line on-disk format. Missing lines read as empty strings.
    #[must_use]
    pub fn from_file_contents(content: &str) -> Self {
        let mut lines = content.lines();
        let username = lines.next().unwrap_or_default().to_string();
        let password = lines.next().unwrap_or_default().to_string();
        Self { username, password }
    }

    /// Render the two newline-terminated lines `openvpn` expects.
    #[must_use]
    pub fn to_file_contents(&self) -> String {
        format!("{}\n{}\n", self.username, self.password)
    }
}

// Keep the password out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
