use serde::{Deserialize, Serialize};

/// Details about the program utilizing these libraries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramInfo<S: AsRef<str> = String> {
    pub name: S,
    pub version: Option<S>,
    /// Contact information for placement in the User-Agent for requests.
    /// - <https://wiki.musicbrainz.org/MusicBrainz_API/Rate_Limiting#Provide_meaningful_User-Agent_strings>
    pub contact: S,
}

impl<S: AsRef<str>> ProgramInfo<S> {
    pub fn to_user_agent(&self) -> String {
        let capacity = self.name.as_ref().len()
            + self.version.as_ref().map(|v| v.as_ref().len() + "/".len()).unwrap_or(0)
            + " (".len() + self.contact.as_ref().len() + ")".len();
        let mut out = String::with_capacity(capacity);
        out += self.name.as_ref();
        if let Some(version) = &self.version {
            out += "/";
            out += version.as_ref();
        }
        out += " (";
        out += self.contact.as_ref();
        out += ")";
        out
    }

    /// Build the network client shared by every provider.
    pub fn build_client(&self, timeout: core::time::Duration) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::ClientBuilder::new()
            .user_agent(self.to_user_agent())
            .timeout(timeout)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_with_version() {
        let info = ProgramInfo { name: "art-finder", version: Some("0.1.0"), contact: "me@example.com" };
        assert_eq!(info.to_user_agent(), "art-finder/0.1.0 (me@example.com)");
    }

    #[test]
    fn user_agent_without_version() {
        let info = ProgramInfo { name: "art-finder", version: None, contact: "https://example.com" };
        assert_eq!(info.to_user_agent(), "art-finder (https://example.com)");
    }
}
