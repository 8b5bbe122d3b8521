//! Parser for the proXPN `locations-v2.xml` server list.
//!
//! ```xml
//! <locations>
//!   <location>
//!     <name>Amsterdam</name>
//!     <openvpn ip="1.2.3.4"/>
//!     <openvpn-udp ip="1.2.3.5"/>
//!   </location>
//! </locations>
//! ```

use roxmltree::{Document, Node};

use crate::error::{Error, Result};
use crate::state::ServerEntry;

const TAG_LOCATION: &str = "location";
const TAG_NAME: &str = "name";
const TAG_TCP: &str = "openvpn";
const TAG_UDP: &str = "openvpn-udp";
const ATTR_IP: &str = "ip";

/// Parse every `<location>` record in `text`, in document order.
///
/// # Errors
///
/// [`Error::Parse`] if the document is not well-formed or a location has no
/// non-empty `<name>`.
pub fn parse_locations(text: &str) -> Result<Vec<ServerEntry>> {
    let doc = Document::parse(text).map_err(|e| Error::Parse(e.to_string()))?;

    // descendants() yields the root itself first; only nested records count.
    let entries = doc
        .root_element()
        .descendants()
        .skip(1)
        .filter(|n| n.has_tag_name(TAG_LOCATION))
        .map(parse_location)
        .collect::<Result<Vec<_>>>()?;

    log::debug!("parsed {} locations", entries.len());
    Ok(entries)
}

fn parse_location(location: Node<'_, '_>) -> Result<ServerEntry> {
    let line = location.document().text_pos_at(location.range().start).row;

    let name = child(location, TAG_NAME)
        .and_then(|n| n.text())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Parse(format!("location on line {line} has no <name>")))?;

    Ok(ServerEntry {
        name: name.to_string(),
        tcp_address: endpoint_ip(location, TAG_TCP),
        udp_address: endpoint_ip(location, TAG_UDP),
    })
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.has_tag_name(tag))
}

fn endpoint_ip(location: Node<'_, '_>, tag: &str) -> Option<String> {
    child(location, tag)
        .and_then(|n| n.attribute(ATTR_IP))
        .map(ToString::to_string)
}
