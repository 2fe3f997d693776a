//! iEPG document rendering

use chrono::{DateTime, Datelike, FixedOffset, Offset, TimeDelta, Utc};
use encoding_rs::SHIFT_JIS;
use tracing::{debug, warn};

use crate::errors::ExportError;
use crate::models::{Program, Service};
use crate::sanitizer::DisplaySanitizer;

/// MIME type of the encoded document
pub const IEPG_CONTENT_TYPE: &str = "application/x-tv-program-digital-info; charset=shift_jis";

const UNKNOWN_STATION_ID: &str = "0000";
const UNKNOWN_CHANNEL_TYPE: &str = "unknown";
const UNKNOWN_CHANNEL_NUMBER: &str = "0";

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IepgOptions {
  /// Time zone for the date and time fields
  pub utc_offset: FixedOffset,
  /// Station name used when the service is not in the directory
  pub unknown_station_name: String,
}

impl IepgOptions {
  /// Options for a whole-hour UTC offset. Returns `None` when out of range.
  pub fn with_offset_hours(hours: i32, unknown_station_name: impl Into<String>) -> Option<Self> {
    let utc_offset = FixedOffset::east_opt(hours.checked_mul(3600)?)?;
    Some(Self {
      utc_offset,
      unknown_station_name: unknown_station_name.into(),
    })
  }
}

impl Default for IepgOptions {
  /// JST (+09:00), "未知の放送局"
  fn default() -> Self {
    Self {
      utc_offset: FixedOffset::east_opt(9 * 3600).unwrap_or_else(|| Utc.fix()),
      unknown_station_name: "未知の放送局".to_string(),
    }
  }
}

/// Rendered iEPG document, already restricted to Shift_JIS-encodable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IepgDocument {
  program_id: i64,
  text: String,
}

impl IepgDocument {
  /// Program the document describes
  pub fn program_id(&self) -> i64 {
    self.program_id
  }

  /// Document text (CRLF line endings)
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Encodes the document to Shift_JIS.
  ///
  /// # Errors
  /// [`ExportError::Unencodable`] if a character slipped past the sanitizer.
  pub fn to_shift_jis(&self) -> Result<Vec<u8>, ExportError> {
    let (bytes, _, had_unmappable) = SHIFT_JIS.encode(&self.text);
    if had_unmappable {
      warn!(program_id = self.program_id, "Sanitized iEPG document is not Shift_JIS-encodable");
      return Err(ExportError::Unencodable { program_id: self.program_id });
    }
    Ok(bytes.into_owned())
  }
}

/// Renders the iEPG document for `program`.
///
/// `service` is the program's entry in the channel directory, if any.
/// Title and synopsis pass through [`DisplaySanitizer::normalize_special`];
/// the finished document passes through [`DisplaySanitizer::sanitize_for_encoding`].
///
/// # Errors
/// [`ExportError::InvalidStartTime`] when the start or end time is out of range.
pub fn render(
  program: &Program,
  service: Option<&Service>,
  options: &IepgOptions,
  sanitizer: &DisplaySanitizer,
) -> Result<IepgDocument, ExportError> {
  let invalid_time = || ExportError::InvalidStartTime {
    program_id: program.id,
    start_at: program.start_at,
  };

  let start = DateTime::from_timestamp_millis(program.start_at)
    .ok_or_else(invalid_time)?
    .with_timezone(&options.utc_offset);
  let end = TimeDelta::try_milliseconds(program.duration)
    .and_then(|duration| start.checked_add_signed(duration))
    .ok_or_else(invalid_time)?;

  let (station, station_id, service_id, channel, channel_type) = match service {
    Some(service) => (
      service.name.as_str(),
      service.station_id(),
      service.service_id,
      service.channel_number.as_str(),
      service.channel_type.as_str(),
    ),
    None => {
      debug!(service_id = program.service_id, "Service unknown; using placeholder station");
      (
        options.unknown_station_name.as_str(),
        UNKNOWN_STATION_ID.to_string(),
        program.service_id,
        UNKNOWN_CHANNEL_NUMBER,
        UNKNOWN_CHANNEL_TYPE,
      )
    }
  };

  let title = sanitizer.normalize_special(&program.name);
  let description = sanitizer.normalize_special(&program.description);

  let mut text = format!(
    "Content-type: {IEPG_CONTENT_TYPE}\r\n\
     version: 2\r\n\
     station: {station}\r\n\
     station-id: {station_id}\r\n\
     service-id: {service_id}\r\n\
     channel: {channel}\r\n\
     type: {channel_type}\r\n\
     year: {year}\r\n\
     month: {month:02}\r\n\
     date: {day:02}\r\n\
     start: {start}\r\n\
     end: {end}\r\n\
     program-title: {title}\r\n\
     program-id: {id}\r\n",
    year = start.year(),
    month = start.month(),
    day = start.day(),
    start = start.format("%H:%M"),
    end = end.format("%H:%M"),
    id = program.id,
  );
  if !description.is_empty() {
    text.push_str("\r\n");
    text.push_str(&description);
    text.push_str("\r\n");
  }

  let text = sanitizer.sanitize_for_encoding(&text);

  debug!(program_id = program.id, bytes = text.len(), "iEPG document rendered");

  Ok(IepgDocument {
    program_id: program.id,
    text,
  })
}
