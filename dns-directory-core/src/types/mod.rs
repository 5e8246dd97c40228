//! Type definitions module

mod record;

pub use record::{
    CreateRecordRequest, DnsRecord, RecordKey, RecordType, UpdateRecordRequest, MAX_NAME_LENGTH,
};
