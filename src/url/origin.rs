use crate::url::normalize;
use crate::ConfigError;
use ::url::Url;

/// Protocol and domain of the seed URL
///
/// Every root-relative link is resolved against this origin, and robots.txt
/// is fetched from it. The domain keeps an explicit port so that
/// `http://127.0.0.1:8080/` resolves links back to the same server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub protocol: String,
    pub domain: String,
}

impl Origin {
    /// Extracts the origin from a seed URL
    ///
    /// # Returns
    ///
    /// * `Ok(Origin)` - The seed's protocol and domain
    /// * `Err(ConfigError::UnparsableSeed)` - No protocol or domain could be found
    /// * `Err(ConfigError::Validation)` - The protocol is not HTTP(S)
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_crawler::url::Origin;
    ///
    /// let origin = Origin::from_seed("http://example.com/a").unwrap();
    /// assert_eq!(origin.protocol, "http");
    /// assert_eq!(origin.domain, "example.com");
    /// assert_eq!(origin.robots_url(), "http://example.com/robots.txt");
    /// ```
    pub fn from_seed(seed_url: &str) -> Result<Self, ConfigError> {
        let url =
            Url::parse(seed_url).map_err(|_| ConfigError::UnparsableSeed(seed_url.to_string()))?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ConfigError::UnparsableSeed(seed_url.to_string()))?;

        let protocol = url.scheme();
        if protocol != "http" && protocol != "https" {
            return Err(ConfigError::Validation(format!(
                "Only HTTP and HTTPS seed URLs are supported, got: {}",
                protocol
            )));
        }

        let domain = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Ok(Self {
            protocol: protocol.to_string(),
            domain,
        })
    }

    /// `protocol://domain`, without a trailing slash
    pub fn base(&self) -> String {
        format!("{}://{}", self.protocol, self.domain)
    }

    /// Location of the site's exclusion document
    pub fn robots_url(&self) -> String {
        format!("{}/robots.txt", self.base())
    }

    /// Normalizes a link reference discovered on this origin
    pub fn normalize(&self, reference: &str) -> String {
        normalize(reference, &self.protocol, &self.domain)
    }
}
