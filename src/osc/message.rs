//! OSC 1.0 packet encoding for macro execution requests.
//!
//! Only the subset needed here is implemented: messages with Nil arguments
//! wrapped in a bundle. All strings are NUL-terminated and padded to a
//! multiple of four bytes; integers are big-endian.

/// Address prefix for macro execution requests; the macro index is appended.
pub const EXEC_ADDRESS_PREFIX: &str = "/macros/exec";

/// Bundle time tag meaning "execute immediately".
pub const TIME_TAG_IMMEDIATE: u64 = 1;

const BUNDLE_TAG: &str = "#bundle";

/// A single OSC argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscArg {
    /// The `N` type: no payload bytes.
    Nil,
}

impl OscArg {
    fn type_tag(self) -> char {
        match self {
            OscArg::Nil => 'N',
        }
    }
}

/// An OSC message: address pattern plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OscMessage {
    /// Address pattern, starting with `/`.
    pub address: String,
    /// Arguments in order.
    pub args: Vec<OscArg>,
}

impl OscMessage {
    /// Encodes the message to its wire form.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        write_padded_str(&mut buf, &self.address);
        let tags: String = std::iter::once(',')
            .chain(self.args.iter().map(|arg| arg.type_tag()))
            .collect();
        write_padded_str(&mut buf, &tags);
        // Nil arguments carry no data.
        buf
    }
}

/// An OSC bundle of messages sharing one time tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OscBundle {
    /// NTP-format time tag.
    pub time_tag: u64,
    /// Bundle elements.
    pub messages: Vec<OscMessage>,
}

impl OscBundle {
    /// Encodes the bundle to its wire form.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        write_padded_str(&mut buf, BUNDLE_TAG);
        buf.extend_from_slice(&self.time_tag.to_be_bytes());
        for message in &self.messages {
            let element = message.encode();
            // Elements are always far below i32::MAX bytes.
            buf.extend_from_slice(&(element.len() as i32).to_be_bytes());
            buf.extend_from_slice(&element);
        }
        buf
    }
}

/// Builds the request that asks the receiver to run `macro_index`.
pub fn exec_request(macro_index: u32) -> OscBundle {
    OscBundle {
        time_tag: TIME_TAG_IMMEDIATE,
        messages: vec![OscMessage {
            address: format!("{EXEC_ADDRESS_PREFIX}/{macro_index}"),
            args: vec![OscArg::Nil],
        }],
    }
}

fn write_padded_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
    while buf.len() % 4 != 0 {
        buf.push(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_pads_address_and_type_tags() {
        let message = OscMessage {
            address: "/macros/exec/3".to_string(),
            args: vec![OscArg::Nil],
        };
        let bytes = message.encode();
        let mut expected = b"/macros/exec/3\0\0".to_vec();
        expected.extend_from_slice(b",N\0\0");
        assert_eq!(bytes, expected);
    }

    #[test]
    fn address_already_aligned_gets_four_nul_bytes() {
        let message = OscMessage {
            address: "/abc".to_string(),
            args: vec![],
        };
        assert_eq!(message.encode(), b"/abc\0\0\0\0,\0\0\0".to_vec());
    }

    #[test]
    fn exec_request_bundle_layout() {
        let bytes = exec_request(3).encode();
        let mut expected = b"#bundle\0".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);
        expected.extend_from_slice(&20i32.to_be_bytes());
        expected.extend_from_slice(b"/macros/exec/3\0\0,N\0\0");
        assert_eq!(bytes, expected);
        assert_eq!(bytes.len(), 40);
    }

    #[test]
    fn exec_request_address_uses_macro_index() {
        let bundle = exec_request(1234);
        assert_eq!(bundle.messages.len(), 1);
        assert_eq!(bundle.messages[0].address, "/macros/exec/1234");
        assert_eq!(bundle.messages[0].args, vec![OscArg::Nil]);
        assert_eq!(bundle.time_tag, TIME_TAG_IMMEDIATE);
    }

    #[test]
    fn encoded_lengths_are_word_aligned() {
        for index in [0, 7, 42, 999, 65_536, u32::MAX] {
            assert_eq!(exec_request(index).encode().len() % 4, 0, "index {index}");
        }
    }
}
