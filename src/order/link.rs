//! Order Links

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left unescaped in a URI component: ASCII alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `text` as a URI component.
///
/// Spaces, line breaks and non-ASCII characters are escaped from their UTF-8 bytes.
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// A messaging deep link carrying an order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderLink {
    url: String,
}

impl OrderLink {
    /// The full URL.
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for OrderLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Builds order links for a fixed recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderLinkBuilder {
    base_url: String,
    recipient: String,
}

impl OrderLinkBuilder {
    /// Links of the form `<base_url><recipient>?text=<message>`.
    pub fn new(base_url: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            recipient: recipient.into(),
        }
    }

    /// Link carrying `message` as its text.
    pub fn link(&self, message: &str) -> OrderLink {
        OrderLink {
            url: format!(
                "{}{}?text={}",
                self.base_url,
                self.recipient,
                encode_uri_component(message)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_uri_component() {
        assert_eq!(
            encode_uri_component("Total: R$ 97.98\nObrigado!"),
            "Total%3A%20R%24%2097.98%0AObrigado!"
        );
    }

    #[test]
    fn leaves_unreserved_marks() {
        assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn escapes_reserved_and_unicode() {
        assert_eq!(encode_uri_component("Endereço"), "Endere%C3%A7o");
        assert_eq!(encode_uri_component("a&b=c/d?e#f+g"), "a%26b%3Dc%2Fd%3Fe%23f%2Bg");
    }

    #[test]
    fn builds_link() {
        let builder = OrderLinkBuilder::new("https://wa.me/", "5511992596860");

        let link = builder.link("Pedido: 1x COCA");

        assert_eq!(
            link.as_str(),
            "https://wa.me/5511992596860?text=Pedido%3A%201x%20COCA"
        );
    }
}
