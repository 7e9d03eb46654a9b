//! FIX tag=value message parsing.
//!
//! A message body is a run of ASCII `tag=value` fields separated by
//! SOH (0x01), one message after another, each terminated by the
//! `10=<checksum>` trailer. Tags are numeric; values are opaque text.
//! Only the fields this tool consumes get named accessors: MsgType
//! (35) and OrderQty (38).

use thiserror::Error;

/// Field separator.
pub const SOH: char = '\u{1}';

/// MsgType tag.
pub const MSG_TYPE: u32 = 35;

/// OrderQty tag.
pub const ORDER_QTY: u32 = 38;

/// MsgType value marking an execution report.
pub const EXECUTION_REPORT: &str = "8";

/// SOH followed by the checksum tag; everything up to and including
/// the checksum value and its SOH belongs to the current message.
const TRAILER: &str = "\u{1}10=";
const CHECKSUM_LENGTH: usize = 3;

/// Malformed FIX content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FixError {
    /// A field had no `=` or a non-numeric tag.
    #[error("not a numeric FIX tag: {text:?}")]
    BadTag { text: String },

    /// An execution report's OrderQty was missing or not an integer.
    #[error("order quantity is not an integer: {text:?}")]
    BadQuantity { text: String },
}

/// One parsed message; field values borrow from the body buffer.
#[derive(Debug)]
pub struct Message<'a> {
    fields: Vec<(u32, &'a str)>,
}

impl<'a> Message<'a> {
    /// Parses one message's `tag=value` fields.
    pub fn parse(raw: &'a str) -> Result<Self, FixError> {
        let mut fields = Vec::new();

        for pair in raw.split(SOH).filter(|p| !p.is_empty()) {
            let (tag, value) = pair.split_once('=').ok_or_else(|| FixError::BadTag {
                text: pair.to_string(),
            })?;
            let tag = tag.parse::<u32>().map_err(|_| FixError::BadTag {
                text: tag.to_string(),
            })?;
            fields.push((tag, value));
        }

        Ok(Self { fields })
    }

    /// First value for `tag`, if present.
    pub fn find(&self, tag: u32) -> Option<&'a str> {
        self.fields
            .iter()
            .find(|&&(t, _)| t == tag)
            .map(|&(_, v)| v)
    }

    /// Whether MsgType marks this as an execution report.
    pub fn is_execution_report(&self) -> bool {
        self.find(MSG_TYPE) == Some(EXECUTION_REPORT)
    }

    /// OrderQty as an integer; an error when missing or malformed.
    pub fn order_qty(&self) -> Result<i64, FixError> {
        let text = self.find(ORDER_QTY).unwrap_or("");
        text.parse::<i64>().map_err(|_| FixError::BadQuantity {
            text: text.to_string(),
        })
    }
}

/// Iterator over the raw messages of a body buffer.
///
/// Each item spans one message including its checksum trailer. A tail
/// with no trailer (truncated capture) is silently dropped.
#[derive(Debug)]
pub struct Messages<'a> {
    data: &'a str,
    index: usize,
}

/// Splits a body buffer into raw messages.
pub const fn messages(data: &str) -> Messages<'_> {
    Messages { data, index: 0 }
}

impl<'a> Iterator for Messages<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let at = self.data[self.index..].find(TRAILER)?;
        let end = self.data.len().min(
            self.index + at + TRAILER.len() + CHECKSUM_LENGTH + SOH.len_utf8(),
        );

        let raw = &self.data[self.index..end];
        self.index = end;
        Some(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EXEC_REPORT: &str = "8=FIX.4.2\u{1}35=8\u{1}38=100\u{1}10=123\u{1}";
    const HEARTBEAT: &str = "8=FIX.4.2\u{1}35=0\u{1}10=045\u{1}";

    #[test]
    fn parse_finds_fields_by_tag() {
        let message = Message::parse(EXEC_REPORT).unwrap();
        assert_eq!(message.find(8), Some("FIX.4.2"));
        assert_eq!(message.find(MSG_TYPE), Some("8"));
        assert_eq!(message.find(ORDER_QTY), Some("100"));
        assert_eq!(message.find(9999), None);
    }

    #[test]
    fn execution_report_detection() {
        assert!(Message::parse(EXEC_REPORT).unwrap().is_execution_report());
        assert!(!Message::parse(HEARTBEAT).unwrap().is_execution_report());
    }

    #[test]
    fn order_qty_parses_as_integer() {
        let message = Message::parse(EXEC_REPORT).unwrap();
        assert_eq!(message.order_qty().unwrap(), 100);
    }

    #[test]
    fn missing_order_qty_is_an_error() {
        let message = Message::parse(HEARTBEAT).unwrap();
        assert_eq!(
            message.order_qty().unwrap_err(),
            FixError::BadQuantity {
                text: String::new()
            }
        );
    }

    #[test]
    fn non_numeric_tag_is_rejected() {
        let err = Message::parse("abc=1\u{1}").unwrap_err();
        assert!(matches!(err, FixError::BadTag { .. }));
    }

    #[test]
    fn field_without_equals_is_rejected() {
        let err = Message::parse("35\u{1}").unwrap_err();
        assert!(matches!(err, FixError::BadTag { .. }));
    }

    #[test]
    fn messages_are_framed_by_checksum_trailer() {
        let body = format!("{EXEC_REPORT}{HEARTBEAT}");
        let raw: Vec<&str> = messages(&body).collect();
        assert_eq!(raw, [EXEC_REPORT, HEARTBEAT]);
    }

    #[test]
    fn truncated_tail_is_dropped() {
        let body = format!("{EXEC_REPORT}8=FIX.4.2\u{1}35=");
        let raw: Vec<&str> = messages(&body).collect();
        assert_eq!(raw, [EXEC_REPORT]);
    }

    #[test]
    fn empty_body_yields_no_messages() {
        assert_eq!(messages("").count(), 0);
    }
}
