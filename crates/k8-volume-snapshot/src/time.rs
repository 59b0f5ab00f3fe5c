//!
//! # Time
//!
//! UTC timestamp carried by snapshot status and errors.
//! On the wire it is an RFC3339 string with second precision.
//!
use std::fmt;
use std::io::Error as IoError;
use std::io::ErrorKind;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

use fluvio_protocol::bytes::{Buf, BufMut};
use fluvio_protocol::{Decoder, Encoder, Version};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(DateTime<Utc>);

impl Time {
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// convert from nanoseconds since Unix epoch, sub-second part is dropped
    pub fn from_unix_nanos(nanos: i64) -> Self {
        Self::from(Utc.timestamp_nanos(nanos))
    }

    /// nanoseconds since Unix epoch, `None` if out of i64 range
    pub fn unix_nanos(&self) -> Option<i64> {
        self.0.timestamp_nanos_opt()
    }

    pub fn inner(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::from_unix_nanos(0)
    }
}

/// sub-second precision is dropped, matching the wire format
impl From<DateTime<Utc>> for Time {
    fn from(time: DateTime<Utc>) -> Self {
        Self(Utc.timestamp_opt(time.timestamp(), 0).single().unwrap_or(time))
    }
}

impl From<Time> for DateTime<Utc> {
    fn from(time: Time) -> Self {
        time.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}

impl FromStr for Time {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = DateTime::parse_from_rfc3339(s)?;
        Ok(Self::from(time.with_timezone(&Utc)))
    }
}

impl Encoder for Time {
    fn write_size(&self, version: Version) -> usize {
        self.to_rfc3339().write_size(version)
    }

    fn encode<T>(&self, dest: &mut T, version: Version) -> Result<(), IoError>
    where
        T: BufMut,
    {
        self.to_rfc3339().encode(dest, version)
    }
}

impl Decoder for Time {
    fn decode<T>(&mut self, src: &mut T, version: Version) -> Result<(), IoError>
    where
        T: Buf,
    {
        let mut raw = String::new();
        raw.decode(src, version)?;
        *self = raw.parse().map_err(|err| {
            IoError::new(
                ErrorKind::InvalidData,
                format!("invalid timestamp: {raw}, {err}"),
            )
        })?;
        Ok(())
    }
}

#[cfg(feature = "use_serde")]
mod serde_impl {

    use std::borrow::Cow;

    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Time;

    impl Serialize for Time {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_rfc3339())
        }
    }

    impl<'de> Deserialize<'de> for Time {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = String::deserialize(deserializer)?;
            raw.parse().map_err(D::Error::custom)
        }
    }

    impl schemars::JsonSchema for Time {
        fn schema_name() -> Cow<'static, str> {
            "Time".into()
        }

        fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
            schemars::json_schema!({
                "type": "string",
                "format": "date-time"
            })
        }
    }
}
