//! Result filtering.
//!
//! Turns the heterogeneous items of a results reader into plain records.
//! Messages are logged at debug level and dropped; anything else is dropped
//! silently. The filter is lazy and never reads ahead of the consumer.

use tracing::debug;

use crate::reader::{Record, ResultItem};

/// Yield only the record items of `items`, in order.
pub fn filter_records<I>(items: I) -> impl Iterator<Item = Record>
where
    I: IntoIterator<Item = ResultItem>,
{
    items.into_iter().filter_map(|item| match item {
        ResultItem::Record(record) => Some(record),
        ResultItem::Message(message) => {
            debug!("{}: {}", message.message_type, message.text);
            None
        }
        ResultItem::Other(_) => None,
    })
}
